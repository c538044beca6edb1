//! Main Boggle solver interface
//!
//! Validates the submitted letters, runs the chosen strategy and shapes the
//! result for presentation.

use super::strategy::{SearchContext, Strategy};
use super::trace::{PathNode, SolveResult, WordResult};
use crate::core::{AdjacencyTable, Board, BoardError, MIN_WORD_LENGTH};
use crate::dictionary::Dictionary;
use serde::Serialize;
use std::fmt;

/// Error type for solve requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Letter count is not 16; carries the letters as submitted
    IncompleteBoard(Vec<String>),
    /// A token is not a single alphabetic character
    InvalidCharacters,
    /// The board is valid but no dictionary word can be traced on it
    NoWordsFound,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteBoard(letters) => {
                write!(f, "{}", BoardError::Incomplete(letters.clone()))
            }
            Self::InvalidCharacters => write!(f, "{}", BoardError::InvalidCharacters),
            Self::NoWordsFound => write!(f, "No words could be made with this board."),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<BoardError> for SolveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::Incomplete(letters) => Self::IncompleteBoard(letters),
            BoardError::InvalidCharacters => Self::InvalidCharacters,
        }
    }
}

/// A solve request as it arrives from the presentation layer
#[derive(Debug, Clone)]
pub struct SolveRequest {
    pub letters: Vec<String>,
    pub min_word_length: usize,
    pub include_paths: bool,
}

impl SolveRequest {
    /// Request with the default minimum length and no path trace
    #[must_use]
    pub fn new<I, S>(letters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            letters: letters.into_iter().map(Into::into).collect(),
            min_word_length: MIN_WORD_LENGTH,
            include_paths: false,
        }
    }

    /// Request for an already-validated board
    #[must_use]
    pub fn for_board(board: &Board) -> Self {
        Self::new(board.letter_strings())
    }

    #[must_use]
    pub const fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    #[must_use]
    pub const fn with_paths(mut self, include_paths: bool) -> Self {
        self.include_paths = include_paths;
        self
    }
}

/// Board half of a solve response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub letters: Vec<String>,
    pub total_score: u32,
    pub path_trace: Vec<PathNode>,
}

/// A successful solve, shaped for presentation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    pub strategy: String,
    pub min_word_length: usize,
    pub words: Vec<WordResult>,
    pub board: BoardSummary,
    pub solve_time_ms: f64,
}

impl SolveResponse {
    /// Number of words found
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Main Boggle solver
///
/// Borrows a prebuilt dictionary and owns the adjacency table; both stay
/// read-only, so one solver can serve any number of boards.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    dictionary: &'a Dictionary,
    adjacency: AdjacencyTable,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and dictionary
    #[must_use]
    pub fn new(strategy: S, dictionary: &'a Dictionary) -> Self {
        Self {
            strategy,
            dictionary,
            adjacency: AdjacencyTable::new(),
        }
    }

    /// The strategy in use
    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// The dictionary in use
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// The adjacency table in use
    #[must_use]
    pub const fn adjacency(&self) -> &AdjacencyTable {
        &self.adjacency
    }

    /// Run the strategy on a validated board
    ///
    /// Minimum lengths below 3 are raised to 3.
    pub fn search(&self, board: &Board, min_word_length: usize) -> SolveResult {
        let ctx = SearchContext {
            dictionary: self.dictionary,
            adjacency: &self.adjacency,
            min_word_length: min_word_length.max(MIN_WORD_LENGTH),
        };
        self.strategy.search(board, &ctx)
    }

    /// Validate the letters, solve, and shape the response
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request does not hold exactly 16 letters (`IncompleteBoard`)
    /// - Any letter is not alphabetic (`InvalidCharacters`)
    /// - The board yields no dictionary words (`NoWordsFound`)
    ///
    /// # Examples
    /// ```
    /// use boggle_solver::dictionary::Dictionary;
    /// use boggle_solver::solver::{SolveError, SolveRequest, Solver, StrategyType};
    ///
    /// let dictionary = Dictionary::build(["dens", "node"]);
    /// let solver = Solver::new(StrategyType::from_name("trie"), &dictionary);
    ///
    /// let request = SolveRequest::new("denswodexkvjzyfm".chars().map(String::from));
    /// let response = solver.solve(&request).unwrap();
    /// assert_eq!(response.words.len(), 2);
    /// assert_eq!(response.board.total_score, 2);
    ///
    /// let short = SolveRequest::new(["d", "e", "n"]);
    /// assert!(matches!(solver.solve(&short), Err(SolveError::IncompleteBoard(_))));
    /// ```
    pub fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, SolveError> {
        let board = Board::new(&request.letters)?;
        let min_word_length = request.min_word_length.max(MIN_WORD_LENGTH);
        let result = self.search(&board, min_word_length);

        if result.words.is_empty() {
            return Err(SolveError::NoWordsFound);
        }

        let total_score = result.total_score();
        let path_trace = if request.include_paths {
            result.trace.into_inner()
        } else {
            Vec::new()
        };

        Ok(SolveResponse {
            strategy: self.strategy.name().to_string(),
            min_word_length,
            words: result.words,
            board: BoardSummary {
                letters: board.letter_strings(),
                total_score,
                path_trace,
            },
            solve_time_ms: result.elapsed.as_secs_f64() * 1000.0,
        })
    }
}
