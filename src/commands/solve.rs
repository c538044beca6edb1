//! Board solving command
//!
//! Turns the raw letters from the command line into a solve request and runs
//! it through the solver.

use crate::core::{MIN_WORD_LENGTH, split_tokens};
use crate::solver::{SolveError, SolveRequest, SolveResponse, Solver, Strategy};

/// Configuration for solving a board
pub struct SolveConfig {
    pub letters: String,
    pub min_word_length: usize,
    pub include_paths: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(letters: String) -> Self {
        Self {
            letters,
            min_word_length: MIN_WORD_LENGTH,
            include_paths: false,
        }
    }

    /// The request this configuration describes
    #[must_use]
    pub fn request(&self) -> SolveRequest {
        SolveRequest::new(split_tokens(&self.letters))
            .with_min_word_length(self.min_word_length)
            .with_paths(self.include_paths)
    }
}

/// Solve the configured board with the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The letters do not make up exactly 16 tiles
/// - Any tile is not a letter
/// - No dictionary word can be traced on the board
pub fn solve_board<S: Strategy>(
    config: &SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResponse, SolveError> {
    solver.solve(&config.request())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::solver::{StandardSolver, TrieSolver};

    fn setup_dictionary() -> Dictionary {
        Dictionary::build(["dens", "ends", "node", "nodes", "send", "quit"])
    }

    #[test]
    fn solve_board_finds_words() {
        let dictionary = setup_dictionary();
        let solver = Solver::new(TrieSolver::default(), &dictionary);
        let config = SolveConfig::new("denswodexkvjzyfm".to_string());

        let response = solve_board(&config, &solver).unwrap();
        assert_eq!(response.word_count(), 5);
        assert_eq!(response.board.total_score, 6);
        assert!(response.board.path_trace.is_empty());
    }

    #[test]
    fn solve_accepts_separated_letters() {
        let dictionary = setup_dictionary();
        let solver = Solver::new(StandardSolver, &dictionary);
        let config = SolveConfig::new("qu,i,t,x,a,a,a,a,a,a,a,a,a,a,a,a".to_string());

        let response = solve_board(&config, &solver).unwrap();
        assert_eq!(response.words[0].word, "quit");
    }

    #[test]
    fn solve_with_paths_and_min_length() {
        let dictionary = setup_dictionary();
        let solver = Solver::new(TrieSolver::sequential(), &dictionary);
        let mut config = SolveConfig::new("d e n s w o d e x k v j z y f m".to_string());
        config.include_paths = true;
        config.min_word_length = 5;

        let response = solve_board(&config, &solver).unwrap();
        assert_eq!(response.word_count(), 1);
        assert_eq!(response.words[0].word, "nodes");
        assert!(!response.board.path_trace.is_empty());
    }

    #[test]
    fn solve_short_board_keeps_letters_in_error() {
        let dictionary = setup_dictionary();
        let solver = Solver::new(TrieSolver::default(), &dictionary);
        let config = SolveConfig::new("abc".to_string());

        let err = solve_board(&config, &solver).unwrap_err();
        assert_eq!(
            err,
            SolveError::IncompleteBoard(vec!["a".into(), "b".into(), "c".into()])
        );
        assert!(err.to_string().ends_with("a,b,c"));
    }

    #[test]
    fn solve_rejects_digits() {
        let dictionary = setup_dictionary();
        let solver = Solver::new(TrieSolver::default(), &dictionary);
        let config = SolveConfig::new("denswodexkvjzyf1".to_string());

        assert_eq!(
            solve_board(&config, &solver).unwrap_err(),
            SolveError::InvalidCharacters
        );
    }
}
