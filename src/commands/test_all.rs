//! Test all codes - comprehensive solver evaluation
//!
//! Runs the solver against every code in the 10,000-code space and generates
//! statistics. The sweep is embarrassingly parallel, so it fans out over
//! rayon's thread pool.

use crate::core::{CODE_SPACE, Code};
use crate::solver::{Solver, StrategyType};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from testing a single code
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub code: String,
    pub num_guesses: usize,
    pub success: bool,
}

/// Statistics from testing all codes
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub best_code: Option<(String, usize)>,
    pub worst_codes: Vec<(String, usize)>,
}

/// Run the solver on every code (or a limited prefix of the space)
#[must_use]
pub fn run_test_all(strategy_name: &str, limit: Option<usize>) -> TestAllStatistics {
    let codes: Vec<Code> = Code::all().take(limit.unwrap_or(CODE_SPACE)).collect();

    println!("🎯 Testing {} codes...", codes.len());

    let pb = ProgressBar::new(codes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<CodeTestResult> = codes
        .par_iter()
        .map(|secret| {
            let solver = Solver::new(StrategyType::from_name(strategy_name));
            let result = solver.run(secret);

            pb.inc(1);
            CodeTestResult {
                code: secret.text().to_string(),
                num_guesses: result.num_guesses(),
                success: result.solved,
            }
        })
        .collect();

    pb.finish();

    let total_time = total_start.elapsed();

    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in results.iter().filter(|r| r.success) {
        *guess_distribution.entry(result.num_guesses).or_insert(0) += 1;
    }

    let solved_count = results.iter().filter(|r| r.success).count();
    let failed_count = results.len() - solved_count;

    let total_guesses: usize = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_guesses)
        .sum();
    let average_guesses = if solved_count > 0 {
        total_guesses as f64 / solved_count as f64
    } else {
        0.0
    };

    let max_guesses = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_guesses)
        .max()
        .unwrap_or(0);

    let min_guesses = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_guesses)
        .min()
        .unwrap_or(0);

    let best_code = results
        .iter()
        .filter(|r| r.success)
        .min_by_key(|r| r.num_guesses)
        .map(|r| (r.code.clone(), r.num_guesses));

    let mut worst_codes: Vec<(String, usize)> = results
        .iter()
        .filter(|r| r.success)
        .filter(|r| r.num_guesses >= max_guesses.saturating_sub(1))
        .map(|r| (r.code.clone(), r.num_guesses))
        .collect();
    worst_codes.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_codes.truncate(10);

    TestAllStatistics {
        total_codes: results.len(),
        solved: solved_count,
        failed: failed_count,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        best_code,
        worst_codes,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_codes as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_codes as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    for guesses in stats.min_guesses..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).unwrap_or(&0);
        if stats.solved > 0 {
            let percentage = *count as f64 / stats.solved as f64 * 100.0;
            let bar_len = if max_count > 0 {
                (*count * 40 / max_count).max(usize::from(*count > 0))
            } else {
                0
            };
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {guesses:2} guesses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if let Some((code, guesses)) = &stats.best_code {
        println!("\n✨ {}", "Best Performance".green().bold());
        println!(
            "  {} solved in {} guess{}",
            code.bright_green(),
            guesses,
            if *guesses == 1 { "" } else { "es" }
        );
    }

    if !stats.worst_codes.is_empty() {
        println!("\n😰 {}", "Hardest Codes".yellow().bold());
        for (code, guesses) in stats.worst_codes.iter().take(5) {
            println!("  {} ({} guesses)", code.yellow(), guesses);
        }
    }

    println!("\n📐 {}", "Bound Check".bright_cyan().bold());
    println!(
        "  Worst observed:      {} guesses",
        stats.max_guesses.to_string().bright_yellow().bold()
    );
    println!("  Engine bound:        16 guesses (9 discovery + 6 placement + final)");
}
