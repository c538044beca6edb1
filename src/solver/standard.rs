//! Candidate-filter strategy
//!
//! Walks the whole dictionary, keeps the words whose letters all appear on the
//! board, spells each survivor out as every repeat-free sequence of matching
//! cells, and accepts the word if any of those sequences is a connected path.

use super::strategy::{SearchContext, Strategy};
use super::trace::{PathNode, PathTrace, SolveResult, WordResult};
use crate::core::{AdjacencyTable, Board, Cell, ScoringTable};
use log::info;
use rustc_hash::FxHashMap;
use std::time::Instant;

/// Exhaustive candidate-filter solver
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardSolver;

impl Strategy for StandardSolver {
    fn name(&self) -> &'static str {
        "Standard"
    }

    fn search(&self, board: &Board, ctx: &SearchContext<'_>) -> SolveResult {
        let start = Instant::now();
        let positions = board.positions();
        let mut words = Vec::new();
        let mut trace = PathTrace::new();

        let candidates = ctx
            .dictionary
            .words()
            .iter()
            .filter(|word| word.len() >= ctx.min_word_length)
            .filter(|word| tile_letters(word).all(|letter| board.contains(letter)));

        for word in candidates {
            let tiles: Vec<u8> = tile_letters(word).collect();
            let mut accepted = false;

            for path in candidate_paths(&tiles, &positions) {
                let connected = ctx.adjacency.is_connected(&path);
                accepted |= connected;
                trace.push(PathNode::new(path, connected));
            }

            if accepted {
                words.push(WordResult {
                    word: word.clone(),
                    score: ScoringTable::score_word(word),
                });
            }
        }

        words.sort();
        let elapsed = start.elapsed();
        info!(
            "Solved standard: {}ms - {} words - {}",
            elapsed.as_millis(),
            words.len(),
            board.as_string()
        );

        SolveResult {
            words,
            trace,
            elapsed,
        }
    }
}

/// The board tiles a word needs, in order
///
/// A `u` right after a `q` rides along on the `qu` tile and needs no cell of
/// its own.
fn tile_letters(word: &str) -> impl Iterator<Item = u8> + '_ {
    let bytes = word.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(move |&(i, &b)| !(b == b'u' && i > 0 && bytes[i - 1] == b'q'))
        .map(|(_, &b)| b)
}

/// Every sequence of distinct cells whose letters spell `tiles` in order
///
/// Adjacency is not checked; a cell is never used twice.
fn candidate_paths(tiles: &[u8], positions: &FxHashMap<u8, Vec<Cell>>) -> Vec<Vec<Cell>> {
    let mut paths = Vec::new();
    let mut current = Vec::with_capacity(tiles.len());
    extend_paths(tiles, positions, &mut current, &mut paths);
    paths
}

fn extend_paths(
    tiles: &[u8],
    positions: &FxHashMap<u8, Vec<Cell>>,
    current: &mut Vec<Cell>,
    paths: &mut Vec<Vec<Cell>>,
) {
    let Some(letter) = tiles.get(current.len()) else {
        paths.push(current.clone());
        return;
    };
    let Some(cells) = positions.get(letter) else {
        return;
    };

    for &cell in cells {
        if !current.contains(&cell) {
            current.push(cell);
            extend_paths(tiles, positions, current, paths);
            current.pop();
        }
    }
}

/// First connected, repeat-free path spelling `word` on the board
///
/// Used to highlight a found word. Returns `None` if the word cannot be traced.
///
/// # Examples
/// ```
/// use boggle_solver::core::{AdjacencyTable, Board};
/// use boggle_solver::solver::word_path;
///
/// let board: Board = "denswodexkvjzyfm".parse().unwrap();
/// let adjacency = AdjacencyTable::new();
/// assert_eq!(word_path(&board, &adjacency, "dens"), Some(vec![1, 2, 3, 4]));
/// assert_eq!(word_path(&board, &adjacency, "sow"), None);
/// ```
#[must_use]
pub fn word_path(board: &Board, adjacency: &AdjacencyTable, word: &str) -> Option<Vec<Cell>> {
    let word = word.to_ascii_lowercase();
    let tiles: Vec<u8> = tile_letters(&word).collect();
    candidate_paths(&tiles, &board.positions())
        .into_iter()
        .find(|path| adjacency.is_connected(path))
}
