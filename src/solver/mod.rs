//! Boggle solving algorithms
//!
//! Two interchangeable strategies that must agree on every board: a
//! candidate filter over the dictionary and a trie-guided board traversal.

mod engine;
pub mod standard;
pub mod strategy;
pub mod trace;
pub mod trie;

pub use engine::{BoardSummary, SolveError, SolveRequest, SolveResponse, Solver};
pub use standard::{StandardSolver, word_path};
pub use strategy::{SearchContext, Strategy, StrategyType};
pub use trace::{PathNode, PathTrace, SolveResult, WordResult};
pub use trie::TrieSolver;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AdjacencyTable, ScoringTable};
    use crate::dictionary::Dictionary;
    use crate::generator::{BoardGenerator, BoardType};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn strategies_agree_on_random_boards() {
        let dictionary = Dictionary::embedded();
        let adjacency = AdjacencyTable::new();
        let mut rng = StdRng::seed_from_u64(0xB066_1E);

        for board_type in [BoardType::New, BoardType::Old] {
            let generator = BoardGenerator::new(board_type);
            for _ in 0..25 {
                let board = generator.generate(&mut rng);
                for min_word_length in [3, 5] {
                    let ctx = SearchContext {
                        dictionary: &dictionary,
                        adjacency: &adjacency,
                        min_word_length,
                    };
                    let standard = StandardSolver.search(&board, &ctx);
                    let trie = TrieSolver::default().search(&board, &ctx);

                    assert_eq!(
                        standard.words, trie.words,
                        "strategies disagree on {board} (min {min_word_length})"
                    );
                    for result in &trie.words {
                        assert_eq!(result.score, ScoringTable::score_word(&result.word));
                        assert!(result.word.len() >= min_word_length);
                        assert!(word_path(&board, &adjacency, &result.word).is_some());
                    }
                }
            }
        }
    }

    #[test]
    fn strategies_agree_on_qu_board() {
        let dictionary = Dictionary::embedded();
        let board = "qitenaslodrweckb".parse().unwrap();
        let standard = Solver::new(StandardSolver, &dictionary).search(&board, 3);
        let trie = Solver::new(TrieSolver::sequential(), &dictionary).search(&board, 3);

        assert_eq!(standard.words, trie.words);
        assert!(trie.words.iter().any(|w| w.word == "quit"));
    }

    #[test]
    fn scenario_board_reports_dens_and_node() {
        let dictionary = Dictionary::embedded();
        let request = SolveRequest::new("denswodexkvjzyfm".chars().map(String::from));

        for strategy in [StrategyType::from_name("std"), StrategyType::from_name("trie")] {
            let solver = Solver::new(strategy, &dictionary);
            let response = solver.solve(&request).unwrap();

            for expected in ["dens", "ends", "node"] {
                let found = response
                    .words
                    .iter()
                    .find(|w| w.word == expected)
                    .unwrap_or_else(|| panic!("{expected} missing from {}", solver.strategy().name()));
                assert_eq!(found.score, 1);
            }
        }
    }
}
