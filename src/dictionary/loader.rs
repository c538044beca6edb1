//! Word list loading utilities
//!
//! Reads raw corpora from disk or chooses the embedded list.

use super::{Dictionary, WORDS};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a newline-separated corpus from a file
///
/// Lines are returned trimmed; blank lines and `#` comments are skipped.
/// Filtering by length and letters happens in [`Dictionary::build`].
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use boggle_solver::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Build a dictionary from a `--wordlist` selector
///
/// `"embedded"` (or an empty string) uses the compiled-in list; anything else
/// is treated as a path.
///
/// # Errors
///
/// Returns an error if a path is given and cannot be read.
pub fn dictionary_from_selector(selector: &str) -> Result<Dictionary> {
    match selector {
        "" | "embedded" | "default" => Ok(Dictionary::build(WORDS)),
        path => {
            let words = load_from_file(path)?;
            Ok(Dictionary::build(words))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file_skips_blank_and_comments() {
        let path = std::env::temp_dir().join(format!("boggle-words-{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "# comment").unwrap();
            writeln!(file, "dens").unwrap();
            writeln!(file).unwrap();
            writeln!(file, "  node  ").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["dens".to_string(), "node".to_string()]);
    }

    #[test]
    fn load_missing_file_errors() {
        let result = load_from_file("/definitely/not/here/words.txt");
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("failed to read word list"));
    }

    #[test]
    fn selector_embedded() {
        let dict = dictionary_from_selector("embedded").unwrap();
        assert!(dict.contains_word("node"));
    }

    #[test]
    fn selector_bad_path_errors() {
        assert!(dictionary_from_selector("/definitely/not/here.txt").is_err());
    }
}
