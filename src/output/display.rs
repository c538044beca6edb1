//! Display functions for command results

use super::formatters::{board_rows, create_progress_bar, word_columns};
use crate::commands::{BenchmarkResult, GeneratedBoard};
use crate::core::{AdjacencyTable, Board};
use crate::solver::{SolveResponse, word_path};
use anyhow::Result;
use colored::Colorize;

fn print_board(board: &Board, path: &[usize]) {
    for row in board_rows(board, path) {
        println!("   {}", row.bright_yellow().bold());
    }
}

/// Print a solved board with its words and scores
///
/// With `verbose`, each word's path is drawn on the board and the trace size
/// is reported.
pub fn print_solve_response(response: &SolveResponse, verbose: bool) {
    let board = Board::new(&response.board.letters);

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        " {} {} ",
        "BOARD".bright_cyan().bold(),
        response.board.letters.concat().to_uppercase().bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());

    if let Ok(board) = &board {
        println!();
        print_board(board, &[]);
    }

    println!(
        "\n📖 {} ({} words, {} points)",
        "Words:".bright_cyan().bold(),
        response.word_count(),
        response.board.total_score
    );
    for line in word_columns(&response.words, 4) {
        println!("   {line}");
    }

    if verbose && let Ok(board) = &board {
        let adjacency = AdjacencyTable::new();
        for result in &response.words {
            if let Some(path) = word_path(board, &adjacency, &result.word) {
                println!(
                    "\n   {} {:?}",
                    result.word.to_uppercase().green().bold(),
                    path
                );
                print_board(board, &path);
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "✅ Total score: {} | Strategy: {} | Time: {:.3}ms",
            response.board.total_score, response.strategy, response.solve_time_ms
        )
        .green()
        .bold()
    );

    if !response.board.path_trace.is_empty() {
        let found = response
            .board
            .path_trace
            .iter()
            .filter(|n| n.found_word)
            .count();
        println!(
            "   Paths explored: {} ({} spelled a word)",
            response.board.path_trace.len(),
            found
        );
    }
}

/// Print the response as pretty JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_solve_json(response: &SolveResponse) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

/// Print a generated board and the dice that made it
pub fn print_generated_board(generated: &GeneratedBoard) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GENERATED BOARD:".bright_cyan().bold(),
        generated.board_type.name().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();
    print_board(&generated.board, &[]);
    println!("\n   Letters: {}", generated.board.as_string());

    let dice: Vec<String> = generated
        .rolls
        .iter()
        .map(|roll| format!("{}:{}", roll.die, roll.face))
        .collect();
    println!("   {}", format!("Dice: {}", dice.join(" ")).bright_black());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards solved:    {}", result.boards);
    println!("   Wall time:        {:.2}s", result.duration.as_secs_f64());

    let slowest = result
        .standard
        .average_ms(result.boards)
        .max(result.trie.average_ms(result.boards));

    for timing in [&result.standard, &result.trie] {
        let average = timing.average_ms(result.boards);
        println!("\n   {}", timing.name.bright_yellow().bold());
        println!(
            "     Average:   {} {}",
            create_progress_bar(average, slowest, 30).green(),
            format!("{average:.3}ms").bright_yellow()
        );
        if let Some(fastest) = timing.fastest {
            println!(
                "     Range:     {:.3}ms - {:.3}ms",
                fastest.as_secs_f64() * 1000.0,
                timing.slowest.as_secs_f64() * 1000.0
            );
        }
        println!("     Words:     {}", timing.words_found);
    }

    println!("\n   Speedup:          {:.1}x", result.speedup());

    println!("\n📈 {}", "Agreement:".bright_cyan().bold());
    if result.mismatches.is_empty() {
        println!("   {}", "✅ Strategies agreed on every board".green().bold());
    } else {
        println!(
            "   {}",
            format!("❌ {} boards disagreed", result.mismatches.len())
                .red()
                .bold()
        );
        for board in &result.mismatches {
            println!("     {}", board.as_string());
        }
    }
}
