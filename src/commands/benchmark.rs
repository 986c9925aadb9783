//! Benchmark command
//!
//! Tests solver performance across randomly generated secrets.

use crate::core::Code;
use crate::solver::{Solver, StrategyType};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Run the benchmark on `count` random secrets
///
/// A fixed `seed` makes the generated secrets reproducible across runs.
#[must_use]
pub fn run_benchmark(strategy_name: &str, count: usize, seed: Option<u64>) -> BenchmarkResult {
    let mut rng: StdRng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let secrets: Vec<Code> = (0..count).map(|_| Code::random(&mut rng)).collect();
    run_benchmark_on(strategy_name, &secrets)
}

/// Run the benchmark on a fixed set of secrets
#[must_use]
pub fn run_benchmark_on(strategy_name: &str, secrets: &[Code]) -> BenchmarkResult {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for secret in secrets {
        // Strategies are stateful; each secret gets a fresh one.
        let solver = Solver::new(StrategyType::from_name(strategy_name));
        let result = solver.run(secret);

        let guesses = result.num_guesses();
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
        if result.solved {
            solved += 1;
        }
    }

    let duration = start.elapsed();
    let total_codes = secrets.len();

    BenchmarkResult {
        total_codes,
        solved,
        total_guesses,
        average_guesses: if total_codes > 0 {
            total_guesses as f64 / total_codes as f64
        } else {
            0.0
        },
        min_guesses: if total_codes > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64(),
    }
}
