//! Search strategies
//!
//! Defines the Strategy trait and the runtime-selectable wrapper.

use super::standard::StandardSolver;
use super::trace::SolveResult;
use super::trie::TrieSolver;
use crate::core::{AdjacencyTable, Board};
use crate::dictionary::Dictionary;

/// Shared read-only inputs for one search
#[derive(Debug, Clone, Copy)]
pub struct SearchContext<'a> {
    pub dictionary: &'a Dictionary,
    pub adjacency: &'a AdjacencyTable,
    pub min_word_length: usize,
}

/// A strategy for finding every dictionary word on a board
pub trait Strategy {
    /// Short name used in logs and output
    fn name(&self) -> &'static str;

    /// Find all words of at least `ctx.min_word_length` letters
    ///
    /// Words come back deduplicated and sorted, each scored by length.
    fn search(&self, board: &Board, ctx: &SearchContext<'_>) -> SolveResult;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Candidate filter: check each plausible dictionary word against the board
    Standard(StandardSolver),
    /// Board traversal guided by the dictionary trie (default)
    Trie(TrieSolver),
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Standard(s) => s.name(),
            Self::Trie(s) => s.name(),
        }
    }

    fn search(&self, board: &Board, ctx: &SearchContext<'_>) -> SolveResult {
        match self {
            Self::Standard(s) => s.search(board, ctx),
            Self::Trie(s) => s.search(board, ctx),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "std", "standard", "trie"
    /// Defaults to trie if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "std" | "standard" => Self::Standard(StandardSolver),
            _ => Self::Trie(TrieSolver::default()),
        }
    }

    /// The other strategy, for comparisons and the TUI toggle
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Standard(_) => Self::Trie(TrieSolver::default()),
            Self::Trie(_) => Self::Standard(StandardSolver),
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Trie(TrieSolver::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_standard_aliases() {
        assert_eq!(StrategyType::from_name("std").name(), "Standard");
        assert_eq!(StrategyType::from_name("Standard").name(), "Standard");
    }

    #[test]
    fn from_name_defaults_to_trie() {
        assert_eq!(StrategyType::from_name("trie").name(), "Trie");
        assert_eq!(StrategyType::from_name("whatever").name(), "Trie");
        assert_eq!(StrategyType::default().name(), "Trie");
    }

    #[test]
    fn toggled_flips_strategy() {
        let strategy = StrategyType::from_name("std");
        assert_eq!(strategy.toggled().name(), "Trie");
        assert_eq!(strategy.toggled().toggled().name(), "Standard");
    }
}
