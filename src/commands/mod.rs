//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, StrategyTiming, run_benchmark};
pub use generate::{GeneratedBoard, generate_board};
pub use solve::{SolveConfig, solve_board};
