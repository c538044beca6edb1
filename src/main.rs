//! Boggle Solver - CLI
//!
//! Boggle solver with TUI and CLI modes using a trie-guided board walk or a
//! dictionary candidate filter.

use anyhow::Result;
use boggle_solver::{
    commands::{BenchmarkConfig, SolveConfig, generate_board, run_benchmark, solve_board},
    dictionary::{Dictionary, loader::dictionary_from_selector},
    generator::BoardType,
    output::{
        print_benchmark_result, print_generated_board, print_solve_json, print_solve_response,
    },
    solver::{SolveRequest, Solver, Strategy, StrategyType},
};
use clap::{Parser, Subcommand};
use log::debug;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "boggle",
    about = "Boggle solver: finds every dictionary word on a 4x4 board",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: trie (default) or std
    #[arg(short, long, global = true, default_value = "trie")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Minimum word length (values below 3 count as 3)
    #[arg(short, long, global = true, default_value = "3")]
    min: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Solve a board given as 16 letters
    Solve {
        /// Letters in row order: "abcd...", "a,b,c,..." or "a b c ..."
        letters: String,

        /// Include the explored path trace
        #[arg(short, long)]
        paths: bool,

        /// Print the response as JSON
        #[arg(short, long)]
        json: bool,

        /// Draw each word's path on the board
        #[arg(short, long)]
        verbose: bool,
    },

    /// Roll a random board
    Generate {
        /// Dice set: new (default) or old
        #[arg(short, long, default_value = "new")]
        board: String,

        /// Solve the generated board too
        #[arg(long)]
        solve: bool,
    },

    /// Compare both strategies on random boards
    Benchmark {
        /// Number of random boards to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Dice set: new (default) or old
        #[arg(short, long, default_value = "new")]
        board: String,

        /// Seed for reproducible boards
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!(
        "strategy={} wordlist={} min={}",
        cli.strategy, cli.wordlist, cli.min
    );

    let dictionary = dictionary_from_selector(&cli.wordlist)?;
    let strategy = StrategyType::from_name(&cli.strategy);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, strategy, cli.min),
        Commands::Solve {
            letters,
            paths,
            json,
            verbose,
        } => {
            let config = SolveConfig {
                letters,
                min_word_length: cli.min,
                include_paths: paths,
            };
            run_solve_command(&config, json, verbose, &Solver::new(strategy, &dictionary))
        }
        Commands::Generate { board, solve } => {
            let solver = Solver::new(strategy, &dictionary);
            run_generate_command(&board, solve, &solver, cli.min);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Benchmark { count, board, seed } => {
            let config = BenchmarkConfig {
                board_type: BoardType::from_name(&board),
                seed,
                min_word_length: cli.min,
                ..BenchmarkConfig::new(count)
            };
            run_benchmark_command(&dictionary, &config);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_solve_command<S: Strategy>(
    config: &SolveConfig,
    json: bool,
    verbose: bool,
    solver: &Solver<S>,
) -> Result<ExitCode> {
    match solve_board(config, solver) {
        Ok(response) => {
            if json {
                print_solve_json(&response)?;
            } else {
                print_solve_response(&response, verbose);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_generate_command<S: Strategy>(
    board_name: &str,
    solve: bool,
    solver: &Solver<S>,
    min_word_length: usize,
) {
    let generated = generate_board(BoardType::from_name(board_name), &mut rand::rng());
    print_generated_board(&generated);

    if solve {
        let request =
            SolveRequest::for_board(&generated.board).with_min_word_length(min_word_length);
        match solver.solve(&request) {
            Ok(response) => print_solve_response(&response, false),
            Err(err) => println!("\n{err}"),
        }
    }
}

fn run_benchmark_command(dictionary: &Dictionary, config: &BenchmarkConfig) {
    println!(
        "Running benchmark on {} random {} boards...",
        config.count,
        config.board_type.name()
    );
    let result = run_benchmark(dictionary, config);
    print_benchmark_result(&result);
}

fn run_play_command(
    dictionary: &Dictionary,
    strategy: StrategyType,
    min: usize,
) -> Result<ExitCode> {
    use boggle_solver::interactive::{App, run_tui};

    let app = App::new(dictionary, strategy, min);
    run_tui(app)?;
    Ok(ExitCode::SUCCESS)
}
