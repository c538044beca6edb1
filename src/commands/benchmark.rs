//! Benchmark command
//!
//! Solves a batch of random boards with both strategies, timing each and
//! checking that they report the same words.

use crate::core::{AdjacencyTable, Board};
use crate::dictionary::Dictionary;
use crate::generator::{BoardGenerator, BoardType};
use crate::solver::{SearchContext, StandardSolver, Strategy, TrieSolver, WordResult};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub count: usize,
    pub board_type: BoardType,
    pub seed: Option<u64>,
    pub min_word_length: usize,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self {
            count,
            board_type: BoardType::New,
            seed: None,
            min_word_length: crate::core::MIN_WORD_LENGTH,
            show_progress: true,
        }
    }
}

/// Accumulated timings for one strategy
#[derive(Debug, Clone, Default)]
pub struct StrategyTiming {
    pub name: &'static str,
    pub total: Duration,
    pub fastest: Option<Duration>,
    pub slowest: Duration,
    pub words_found: usize,
}

impl StrategyTiming {
    fn named(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    fn record(&mut self, elapsed: Duration, words: usize) {
        self.total += elapsed;
        self.fastest = Some(self.fastest.map_or(elapsed, |f| f.min(elapsed)));
        self.slowest = self.slowest.max(elapsed);
        self.words_found += words;
    }

    /// Mean solve time per board in milliseconds
    #[must_use]
    pub fn average_ms(&self, boards: usize) -> f64 {
        if boards == 0 {
            return 0.0;
        }
        self.total.as_secs_f64() * 1000.0 / boards as f64
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub boards: usize,
    pub standard: StrategyTiming,
    pub trie: StrategyTiming,
    /// Boards on which the two strategies disagreed
    pub mismatches: Vec<Board>,
    pub duration: Duration,
}

impl BenchmarkResult {
    /// How many times faster the trie walk was overall
    #[must_use]
    pub fn speedup(&self) -> f64 {
        let trie = self.trie.total.as_secs_f64();
        if trie == 0.0 {
            return 0.0;
        }
        self.standard.total.as_secs_f64() / trie
    }
}

struct BoardRun {
    board: Board,
    standard: (Duration, Vec<WordResult>),
    trie: (Duration, Vec<WordResult>),
}

/// Run both strategies over `config.count` random boards
///
/// Boards are solved in parallel; each strategy runs single-threaded on its
/// board so the timings compare like with like.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_benchmark(dictionary: &Dictionary, config: &BenchmarkConfig) -> BenchmarkResult {
    let mut rng = config
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    let generator = BoardGenerator::new(config.board_type);
    let boards: Vec<Board> = (0..config.count)
        .map(|_| generator.generate(&mut rng))
        .collect();

    let pb = if config.show_progress {
        ProgressBar::new(boards.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );
    pb.set_message(format!("{} boards", config.board_type.name()));

    let adjacency = AdjacencyTable::new();
    let ctx = SearchContext {
        dictionary,
        adjacency: &adjacency,
        min_word_length: config.min_word_length,
    };

    let start = Instant::now();
    let runs: Vec<BoardRun> = boards
        .par_iter()
        .map(|board| {
            let standard = StandardSolver.search(board, &ctx);
            let trie = TrieSolver::sequential().search(board, &ctx);
            pb.inc(1);
            BoardRun {
                board: *board,
                standard: (standard.elapsed, standard.words),
                trie: (trie.elapsed, trie.words),
            }
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let mut standard = StrategyTiming::named(StandardSolver.name());
    let mut trie = StrategyTiming::named(TrieSolver::sequential().name());
    let mut mismatches = Vec::new();

    for run in runs {
        standard.record(run.standard.0, run.standard.1.len());
        trie.record(run.trie.0, run.trie.1.len());
        if run.standard.1 != run.trie.1 {
            warn!("Strategies disagree on board {}", run.board.as_string());
            mismatches.push(run.board);
        }
    }

    BenchmarkResult {
        boards: boards.len(),
        standard,
        trie,
        mismatches,
        duration,
    }
}
