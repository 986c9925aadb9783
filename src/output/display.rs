//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Breaking: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.guess,
            feedback_to_pegs(step.feedback)
        );

        if verbose {
            println!(
                "  Feedback:   {} exact, {} misplaced",
                step.feedback.exact(),
                step.feedback.misplaced()
            );
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!("  Reduction:  {reduction:.1}x");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Cracked in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to crack in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of code analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "CODE ANALYSIS:".bright_cyan().bold(),
        result.code.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n🔢 Digit profile:");
    for (digit, count) in &result.digit_profile {
        println!(
            "   {} appears {} time{}",
            digit,
            count,
            if *count == 1 { "" } else { "s" }
        );
    }

    println!("\n📊 Engine rounds:");
    println!(
        "   Discovery:   {}",
        result.discovery_rounds.to_string().bright_yellow()
    );
    println!(
        "   Placement:   {}",
        result.placement_rounds.to_string().bright_yellow()
    );
    println!(
        "   Total:       {}",
        result.total_rounds.to_string().bright_yellow().bold()
    );

    if !result.solved {
        println!("\n{}", "❌ Engine did not converge".red().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in result.min_guesses..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_codes as f64) * 100.0;
            let bar = create_progress_bar(count as f64, result.total_codes as f64, 40);
            println!("   {guess_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
