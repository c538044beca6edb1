//! Boggle Solver
//!
//! Finds every dictionary word on a 4×4 Boggle board with two interchangeable
//! strategies: a candidate filter over the dictionary and a trie-guided walk
//! of the board.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle_solver::dictionary::Dictionary;
//! use boggle_solver::solver::{SolveRequest, Solver, StrategyType};
//!
//! let dictionary = Dictionary::build(["dens", "ends", "node", "nodes"]);
//! let solver = Solver::new(StrategyType::from_name("trie"), &dictionary);
//!
//! let request = SolveRequest::new("denswodexkvjzyfm".chars().map(String::from));
//! let response = solver.solve(&request).unwrap();
//! for word in &response.words {
//!     println!("{} ({})", word.word, word.score);
//! }
//! assert_eq!(response.board.total_score, 5);
//! ```

// Core domain types
pub mod core;

// Word list and prefix trie
pub mod dictionary;

// Solving algorithms
pub mod solver;

// Random boards from the standard dice
pub mod generator;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
