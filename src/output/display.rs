//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, tree_path};
use crate::commands::BenchmarkResult;
use crate::core::Dictionary;
use crate::solver::{DecisionTree, Game};
use colored::Colorize;

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print a finished game round by round
pub fn print_game(dictionary: &Dictionary, game: &Game) {
    let boards = game.session().boards().len();
    print_header(if boards == 1 { "GAME" } else { "SIMUL GAME" });

    for round in 1..=game.rounds() {
        let mut rows = game.scoreboard().round(round).peekable();
        let Some(first) = rows.peek() else {
            continue;
        };
        println!(
            "\nRound {round}: {}",
            dictionary.word(first.guess).text().bright_yellow().bold()
        );
        for row in rows {
            let answer = row
                .answer
                .map_or_else(|| "?".to_string(), |id| dictionary.word(id).to_string());
            println!(
                "  board {} ({answer}): {} {} → {} left",
                row.board + 1,
                colored_guess(dictionary.word(row.guess), row.pattern),
                row.pattern.to_emoji(),
                row.remaining
            );
        }
    }

    println!();
    if game.session().is_solved() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", game.rounds()).green().bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Unsolved after {} guesses", game.rounds()).red().bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(dictionary: &Dictionary, result: &BenchmarkResult) {
    print_header("BENCHMARK RESULTS");

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    if !result.opening.is_empty() {
        let opening: Vec<&str> = result
            .opening
            .iter()
            .map(|&id| dictionary.word(id).text())
            .collect();
        println!("   Opening:          {}", opening.join(", "));
    }
    println!("   Games solved:     {}/{}", result.games, result.played());
    println!("   Total guesses:    {}", result.total_guesses);
    println!(
        "   Average guesses:  {}",
        format!("{:.4}", result.mean).bright_yellow().bold()
    );
    println!("   Std deviation:    {:.4}", result.std_dev);
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second());

    if result.games > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (&rounds, &count) in &result.distribution {
            let pct = (count as f64 / result.games as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {rounds:2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!("\n⚠️  {}", "Failures:".red().bold());
        for failure in &result.failures {
            let answers: Vec<&str> = failure
                .answers
                .iter()
                .map(|&id| dictionary.word(id).text())
                .collect();
            println!("   {}: {}", answers.join(","), failure.error);
        }
    }
}

/// Print a decision tree summary and, optionally, every path
pub fn print_tree(dictionary: &Dictionary, tree: &DecisionTree, show_paths: bool) {
    print_header("DECISION TREE");

    let root = tree.node(tree.root());
    let answers = tree.answers();
    println!(
        "\n🌳 Opening {} over {} answers",
        dictionary.word(root.guess).text().bright_yellow().bold(),
        root.pool_size
    );
    println!("   Total guesses:    {}", tree.total_guesses());
    if answers > 0 {
        println!(
            "   Average guesses:  {}",
            format!("{:.4}", tree.total_guesses() as f64 / answers as f64)
                .bright_yellow()
                .bold()
        );
    }
    println!("   Worst case:       {}", tree.max_depth());
    for (depth, count) in tree.histogram() {
        println!("   {depth:2}: {count}");
    }

    if show_paths {
        println!();
        for path in tree.paths() {
            println!("{}", tree_path(dictionary, &path));
        }
    }
}
