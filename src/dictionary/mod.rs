//! Dictionary for Boggle solving
//!
//! Holds the filtered word list used by the candidate-filter solver and a
//! prefix tree over the same words for the traversal solver. Built once, then
//! shared read-only.

mod embedded;
pub mod loader;
pub mod trie;

pub use embedded::{WORDS, WORDS_COUNT};
pub use trie::{NodeId, Trie, WordId};

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use log::info;
use rustc_hash::FxHashSet;

/// Counts recorded while building a dictionary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictionaryStats {
    /// Non-empty tokens in the raw corpus
    pub raw: usize,
    /// Dropped for being shorter than 3 or longer than 16 letters
    pub wrong_size: usize,
    /// Dropped for containing a `q` not followed by `u`
    pub q_only: usize,
    /// Dropped for containing characters other than ASCII letters
    pub invalid: usize,
    /// Dropped as repeats of an earlier token
    pub duplicates: usize,
    /// Words kept
    pub kept: usize,
}

/// Immutable word list plus prefix tree
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    trie: Trie,
    stats: DictionaryStats,
}

impl Dictionary {
    /// Build a dictionary from a raw corpus
    ///
    /// Tokens are trimmed and lower-cased. Tokens that could never be spelled
    /// on a board are dropped rather than reported as errors:
    /// - shorter than 3 or longer than 16 letters
    /// - containing a `q` not immediately followed by `u` (the board only has a
    ///   `qu` tile)
    /// - containing anything but ASCII letters
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::build(["dens", "qat", "ox", "Quit"]);
    /// assert!(dict.contains_word("dens"));
    /// assert!(dict.contains_word("quit"));
    /// assert!(!dict.contains_word("qat"));
    /// assert!(!dict.contains_word("ox"));
    /// ```
    pub fn build<I, S>(corpus: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stats = DictionaryStats::default();
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut words = Vec::new();

        for token in corpus {
            let token = token.as_ref().trim();
            if token.is_empty() {
                continue;
            }
            stats.raw += 1;

            let word = token.to_ascii_lowercase();
            if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word.len()) {
                stats.wrong_size += 1;
            } else if !word.bytes().all(|b| b.is_ascii_lowercase()) {
                stats.invalid += 1;
            } else if has_bare_q(&word) {
                stats.q_only += 1;
            } else if seen.insert(word.clone()) {
                words.push(word);
            } else {
                stats.duplicates += 1;
            }
        }

        words.sort_unstable();
        stats.kept = words.len();

        let mut trie = Trie::new();
        for (i, word) in words.iter().enumerate() {
            let id = WordId(u32::try_from(i).unwrap_or(u32::MAX));
            trie.insert(word, id);
        }

        info!("Raw word list: {} words.", stats.raw);
        info!(
            "Excluded {} words bigger than {MAX_WORD_LENGTH} or smaller than {MIN_WORD_LENGTH} letters.",
            stats.wrong_size
        );
        info!("Excluded {} Q-only words.", stats.q_only);
        info!(
            "Excluded {} non-alphabetic and {} duplicate words.",
            stats.invalid, stats.duplicates
        );
        info!(
            "Total processed dictionary size: {} ({} trie nodes)",
            stats.kept,
            trie.node_count()
        );

        Self { words, trie, stats }
    }

    /// Build from the word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::build(WORDS)
    }

    /// All kept words, sorted ascending
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of kept words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if no words were kept
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Build statistics
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &DictionaryStats {
        &self.stats
    }

    /// The prefix tree
    #[inline]
    #[must_use]
    pub const fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Text of a word by id
    ///
    /// # Panics
    /// Panics if the id did not come from this dictionary.
    #[inline]
    #[must_use]
    pub fn word(&self, id: WordId) -> &str {
        &self.words[id.index()]
    }

    /// Exact match against complete words
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.trie
            .node_at(&word.to_ascii_lowercase())
            .and_then(|node| self.trie.terminal(node))
            .is_some()
    }

    /// Extend a trie position by one letter
    ///
    /// With no current node the lookup starts at the root. No `qu` handling
    /// is done here; the traversal solver steps over the implicit `u` itself.
    #[inline]
    #[must_use]
    pub fn step(&self, letter: u8, from: Option<NodeId>) -> Option<NodeId> {
        self.trie
            .child(from.unwrap_or_else(|| self.trie.root()), letter)
    }

    /// Boundary form of [`step`](Self::step) taking a string token
    ///
    /// # Panics
    /// Panics if `token` is not exactly one character. Stepping with an empty
    /// or multi-letter token is a caller bug, not a search dead end.
    #[must_use]
    pub fn step_token(&self, token: &str, from: Option<NodeId>) -> Option<NodeId> {
        let mut chars = token.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            panic!("step expected a single character, received {token:?}");
        };
        u8::try_from(letter.to_ascii_lowercase())
            .ok()
            .and_then(|b| self.step(b, from))
    }

    /// The complete word at a trie position, if any
    #[inline]
    #[must_use]
    pub fn word_at(&self, node: NodeId) -> Option<&str> {
        self.trie.terminal(node).map(|id| self.word(id))
    }
}

/// Check for a `q` that is not immediately followed by `u`
fn has_bare_q(word: &str) -> bool {
    let bytes = word.as_bytes();
    bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'q' && bytes.get(i + 1) != Some(&b'u'))
}
