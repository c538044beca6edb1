//! Core domain types for Boggle
//!
//! The board, its adjacency graph and the scoring table. Everything here is
//! pure and shared read-only by the solvers.

mod adjacency;
mod board;
mod scoring;

pub use adjacency::AdjacencyTable;
pub use board::{BOARD_SIDE, Board, BoardError, CELL_COUNT, Cell, cells, split_tokens};
pub use scoring::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, ScoringTable};
