//! Trie-guided traversal strategy
//!
//! Depth-first walk of the board from each of the 16 cells, stepping the
//! dictionary trie one tile at a time and abandoning a branch as soon as no
//! word starts with the letters gathered so far.

use super::strategy::{SearchContext, Strategy};
use super::trace::{PathNode, PathTrace, SolveResult, WordResult};
use crate::core::{AdjacencyTable, Board, CELL_COUNT, Cell, ScoringTable, cells};
use crate::dictionary::{Dictionary, NodeId, WordId};
use log::info;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::Instant;

/// Board traversal pruned by dictionary prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrieSolver {
    parallel: bool,
}

impl TrieSolver {
    /// Create a solver, optionally running one rayon task per start cell
    #[must_use]
    pub const fn new(parallel: bool) -> Self {
        Self { parallel }
    }

    /// Single-threaded solver
    #[must_use]
    pub const fn sequential() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }
}

impl Default for TrieSolver {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Strategy for TrieSolver {
    fn name(&self) -> &'static str {
        "Trie"
    }

    fn search(&self, board: &Board, ctx: &SearchContext<'_>) -> SolveResult {
        let start = Instant::now();

        // Walks are merged in start-cell order, so the trace matches the
        // sequential run exactly.
        let walks: Vec<Walk<'_>> = if self.parallel {
            (1..=CELL_COUNT)
                .into_par_iter()
                .map(|cell| Walk::from_cell(board, ctx, cell))
                .collect()
        } else {
            let mut walk = Walk::new(board, ctx);
            for cell in cells() {
                walk.visit(cell, &mut Vec::with_capacity(CELL_COUNT), None);
            }
            vec![walk]
        };

        let mut found: FxHashSet<WordId> = FxHashSet::default();
        let mut trace = PathTrace::new();
        for walk in walks {
            found.extend(walk.found);
            trace.extend(walk.trace);
        }

        let mut words: Vec<WordResult> = found
            .into_iter()
            .map(|id| {
                let word = ctx.dictionary.word(id);
                WordResult {
                    word: word.to_string(),
                    score: ScoringTable::score_word(word),
                }
            })
            .collect();
        words.sort();

        let elapsed = start.elapsed();
        info!(
            "Solved with trie: {}ms - {} words - {}",
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

/// State for one depth-first search
struct Walk<'a> {
    board: &'a Board,
    dictionary: &'a Dictionary,
    adjacency: &'a AdjacencyTable,
    min_word_length: usize,
    found: FxHashSet<WordId>,
    trace: PathTrace,
}

impl<'a> Walk<'a> {
    fn new(board: &'a Board, ctx: &SearchContext<'a>) -> Self {
        Self {
            board,
            dictionary: ctx.dictionary,
            adjacency: ctx.adjacency,
            min_word_length: ctx.min_word_length,
            found: FxHashSet::default(),
            trace: PathTrace::new(),
        }
    }

    fn from_cell(board: &'a Board, ctx: &SearchContext<'a>, cell: Cell) -> Self {
        let mut walk = Self::new(board, ctx);
        walk.visit(cell, &mut Vec::with_capacity(CELL_COUNT), None);
        walk
    }

    /// Enter `cell` with `path` already visited and the trie at `node`
    ///
    /// `path` is restored before returning. A branch's trace entry is pushed
    /// after all of its extensions.
    fn visit(&mut self, cell: Cell, path: &mut Vec<Cell>, node: Option<NodeId>) {
        let letter = self.board.letter(cell);
        let mut next = self.dictionary.step(letter, node);

        // The q tile also consumes the u that follows it
        if letter == b'q' {
            next = next.and_then(|n| self.dictionary.step(b'u', Some(n)));
        }

        path.push(cell);

        let Some(next) = next else {
            self.trace.push(PathNode::new(path.clone(), false));
            path.pop();
            return;
        };

        let mut found_word = false;
        if let Some(id) = self.dictionary.trie().terminal(next)
            && self.dictionary.word(id).len() >= self.min_word_length
        {
            found_word = true;
            self.found.insert(id);
        }

        let adjacency = self.adjacency;
        for &neighbor in adjacency.neighbors(cell) {
            if !path.contains(&neighbor) {
                self.visit(neighbor, path, Some(next));
            }
        }

        self.trace.push(PathNode::new(path.clone(), found_word));
        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::standard::StandardSolver;

    const BOARD: &str = "denswodexkvjzyfm";

    fn search_with(
        solver: impl Strategy,
        board: &str,
        words: &[&str],
        min_word_length: usize,
    ) -> SolveResult {
        let board: Board = board.parse().unwrap();
        let dictionary = Dictionary::build(words);
        let adjacency = AdjacencyTable::new();
        let ctx = SearchContext {
            dictionary: &dictionary,
            adjacency: &adjacency,
            min_word_length,
        };
        solver.search(&board, &ctx)
    }

    fn found(result: &SolveResult) -> Vec<&str> {
        result.words.iter().map(|w| w.word.as_str()).collect()
    }

    #[test]
    fn finds_words_with_connected_paths() {
        let result = search_with(
            TrieSolver::sequential(),
            BOARD,
            &["dens", "ends", "node", "nodes", "send", "owed", "sow", "zoo", "cat"],
            3,
        );
        assert_eq!(found(&result), vec!["dens", "ends", "node", "nodes", "owed", "send"]);
        assert_eq!(result.total_score(), 7);
    }

    #[test]
    fn words_registered_once() {
        // "ode" can be traced three ways but is reported once
        let result = search_with(TrieSolver::sequential(), BOARD, &["ode"], 3);
        assert_eq!(found(&result), vec!["ode"]);
        assert_eq!(result.trace.found_count(), 3);
    }

    #[test]
    fn trace_paths_are_connected_and_repeat_free() {
        let adjacency = AdjacencyTable::new();
        let result = search_with(
            TrieSolver::sequential(),
            BOARD,
            &["dens", "node", "nodes", "owed", "done"],
            3,
        );

        assert!(!result.trace.is_empty());
        for node in &result.trace {
            assert!(adjacency.is_connected(&node.visited));
            let unique: FxHashSet<_> = node.visited.iter().collect();
            assert_eq!(unique.len(), node.visited.len());
        }
        assert!(
            result
                .trace
                .iter()
                .any(|n| n.found_word && n.visited == vec![1, 2, 3, 4])
        );
    }

    #[test]
    fn dead_ends_record_the_failing_cell() {
        let result = search_with(TrieSolver::sequential(), BOARD, &["dens"], 3);
        // Starting on w (cell 5) fails immediately
        assert!(
            result
                .trace
                .iter()
                .any(|n| n.visited == vec![5] && !n.found_word)
        );
        // Every start cell leaves at least one entry
        for cell in cells() {
            assert!(result.trace.iter().any(|n| n.visited[0] == cell));
        }
    }

    #[test]
    fn branch_entry_follows_its_extensions() {
        let result = search_with(TrieSolver::sequential(), BOARD, &["dens"], 3);
        let position = |path: &[Cell]| {
            result
                .trace
                .iter()
                .position(|n| n.visited == path)
                .unwrap()
        };
        assert!(position(&[1, 2, 3, 4]) < position(&[1, 2, 3]));
        assert!(position(&[1, 2, 3]) < position(&[1, 2]));
        assert!(position(&[1, 2]) < position(&[1]));
    }

    #[test]
    fn min_word_length_filters() {
        let result = search_with(
            TrieSolver::sequential(),
            BOARD,
            &["den", "end", "dens", "nodes"],
            4,
        );
        assert_eq!(found(&result), vec!["dens", "nodes"]);
    }

    #[test]
    fn qu_tile_consumes_implicit_u() {
        let result = search_with(
            TrieSolver::sequential(),
            "qitxaaaaaaaaaaaa",
            &["quit", "aqua", "quiz", "qat", "qit"],
            3,
        );
        assert_eq!(found(&result), vec!["aqua", "quit"]);
    }

    #[test]
    fn parallel_matches_sequential_exactly() {
        let words = ["dens", "ends", "node", "nodes", "send", "owed", "done", "ode"];
        let sequential = search_with(TrieSolver::sequential(), BOARD, &words, 3);
        let parallel = search_with(TrieSolver::new(true), BOARD, &words, 3);

        assert_eq!(sequential.words, parallel.words);
        assert_eq!(sequential.trace, parallel.trace);
    }

    #[test]
    fn agrees_with_standard_solver() {
        let words = [
            "dens", "ends", "node", "nodes", "send", "owed", "sow", "zoo", "ode", "den", "done",
            "dew", "wed", "woe",
        ];
        for min in 3..=5 {
            let trie = search_with(TrieSolver::default(), BOARD, &words, min);
            let standard = search_with(StandardSolver, BOARD, &words, min);
            assert_eq!(trie.words, standard.words, "min length {min}");
        }
    }
}
