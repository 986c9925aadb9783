//! Mastermind Solver - CLI
//!
//! Console Mastermind code-breaking AI. Guesses a 4-digit secret (digits 0-9,
//! repeats allowed) from exact/misplaced match feedback, bounded at 16 rounds
//! with the default probe strategy.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, analyze_code, print_test_all_statistics, run_benchmark, run_demo,
        run_interactive, run_test_all, solve_code,
    },
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind code-breaking AI using sequential digit elimination",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: probe (default), elimination, random
    #[arg(short, long, global = true, default_value = "probe")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random secret and break it (default)
    Demo,

    /// Break a specific secret code
    Solve {
        /// The 4-digit secret to break
        code: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how the probe engine dissects a specific code
    Analyze {
        /// The 4-digit code to analyze
        code: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible secret generation
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Test solver on ALL 10,000 possible codes
    TestAll {
        /// Limit number of codes to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Interactive mode: you hold the secret, the solver guesses it
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Demo mode if no command given
    let command = cli.command.unwrap_or(Commands::Demo);

    match command {
        Commands::Demo => run_demo(StrategyType::from_name(&cli.strategy))
            .map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { code, verbose } => {
            let config = SolveConfig::new(code);
            let result = solve_code(config, StrategyType::from_name(&cli.strategy))
                .map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { code } => {
            let result = analyze_code(&code).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            if let Some(seed) = seed {
                println!("Running benchmark on {count} random codes (seed {seed})...");
            } else {
                println!("Running benchmark on {count} random codes...");
            }
            let result = run_benchmark(&cli.strategy, count, seed);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Mastermind Solver Test ");
            println!("{}", "═".repeat(70));
            println!("\nStrategy: {}", cli.strategy);
            println!();

            let stats = run_test_all(&cli.strategy, limit);
            print_test_all_statistics(&stats);
            Ok(())
        }
        Commands::Interactive => run_interactive(StrategyType::from_name(&cli.strategy))
            .map_err(|e| anyhow::anyhow!(e)),
    }
}
