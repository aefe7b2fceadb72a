//! Display functions for command results

use super::formatters::{create_progress_bar, letter_tiles, word_columns};
use crate::commands::{BenchmarkResult, Leaderboard, SolveResult, SubmitResult};
use crate::core::PuzzleSession;
use crate::game::FinishSummary;
use colored::Colorize;

/// Print a freshly started session
pub fn print_session_started(session: &PuzzleSession) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} #{} for {}",
        "NEW GAME".bright_cyan().bold(),
        session.id(),
        session.player().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("\n   {}", letter_tiles(session.puzzle()).bright_white().bold());
    println!(
        "\n   Submit words with: {}",
        format!("wordpool submit {} <WORD>", session.id()).green()
    );
}

/// Print the outcome of one submission
pub fn print_submit_result(result: &SubmitResult) {
    match &result.outcome {
        Ok(accepted) => {
            println!(
                "{} {} {}",
                "✅".green(),
                accepted.word.to_uppercase().bright_yellow().bold(),
                format!("+{} points", accepted.points).green()
            );
            println!("   Total score: {}", accepted.total_score.to_string().bold());
        }
        Err(rejection) => {
            println!(
                "{} {} {}",
                "❌".red(),
                result.word.to_uppercase().bold(),
                rejection.to_string().red()
            );
        }
    }
    println!("   Remaining:   {}", letter_tiles(&result.remaining).cyan());
}

/// Print the end-of-game summary
pub fn print_finish_summary(summary: &FinishSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} #{} ",
        "GAME OVER".bright_cyan().bold(),
        summary.session
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Final score:  {}",
        summary.final_score.to_string().bright_yellow().bold()
    );
    if summary.remaining.is_empty() {
        println!("   {}", "Every letter used!".green().bold());
        return;
    }
    println!("   Left over:    {}", letter_tiles(&summary.remaining).cyan());

    if summary.possible_words.is_empty() {
        println!("   No words could be made from the leftover letters.");
    } else {
        println!(
            "\n📖 {} ({}):",
            "You could still have played".bright_cyan().bold(),
            summary.possible_words.len()
        );
        for row in word_columns(&summary.possible_words, 8) {
            println!("   {row}");
        }
    }
}

/// Print the word or player leaderboard
pub fn print_leaderboard(board: &Leaderboard) {
    println!("\n{}", "═".repeat(60).cyan());
    match board {
        Leaderboard::Words(entries) => {
            println!(" {} ", "TOP WORDS".bright_cyan().bold());
            println!("{}", "═".repeat(60).cyan());
            if entries.is_empty() {
                println!("\n   No words submitted yet.");
            }
            for (rank, entry) in entries.iter().enumerate() {
                println!(
                    "   {:>2}. {} {}",
                    rank + 1,
                    format!("{:<16}", entry.word.to_uppercase()).bright_yellow(),
                    entry.score.to_string().bold()
                );
            }
        }
        Leaderboard::Players(entries) => {
            println!(" {} ", "TOP PLAYERS".bright_cyan().bold());
            println!("{}", "═".repeat(60).cyan());
            if entries.is_empty() {
                println!("\n   No games played yet.");
            }
            for (rank, entry) in entries.iter().enumerate() {
                let status = if entry.completed {
                    "finished".green()
                } else {
                    "in play".yellow()
                };
                println!(
                    "   {:>2}. {} {}  #{} {}",
                    rank + 1,
                    format!("{:<20}", entry.player).bright_yellow(),
                    format!("{:>4}", entry.score).bold(),
                    entry.session,
                    status
                );
            }
        }
    }
}

/// Print every word formable from a set of letters
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Letters: {}", letter_tiles(&result.letters).bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No dictionary words can be formed.".red());
        return;
    }

    println!(
        "\n{} words, longest scores {} points",
        result.words.len().to_string().bold(),
        result.best_score().to_string().green().bold()
    );
    for row in word_columns(&result.words, 8) {
        println!("   {row}");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Puzzles:          {} × {} letters",
        result.puzzles, result.puzzle_length
    );
    println!("   Words found:      {}", result.total_words);
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Fewest:           {}",
        result.min_words.to_string().yellow()
    );
    println!(
        "   Most:             {}",
        result.max_words.to_string().green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if let Some((letters, found)) = &result.richest_puzzle {
        println!(
            "   Richest puzzle:   {} ({found} words)",
            letters.to_uppercase().bright_yellow()
        );
    }

    if result.longest_word_distribution.is_empty() {
        return;
    }
    println!("\n📈 {}", "Longest Word Length:".bright_cyan().bold());
    let max_count = result
        .longest_word_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(0);
    for (&len, &count) in &result.longest_word_distribution {
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        let label = if len == 0 {
            "none".to_string()
        } else {
            format!("{len:>2} letters")
        };
        println!("   {label:<10} [{}] {count}", bar.green());
    }
}
