//! Code solving command
//!
//! Breaks a specific secret code and returns the round-by-round trace.

use crate::core::{Code, Feedback};
use crate::solver::{Solver, StrategyType, count_consistent};

/// Configuration for solving a code
pub struct SolveConfig {
    pub target: String,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_rounds: crate::solver::DEFAULT_MAX_ROUNDS,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Break a secret code with the given strategy
///
/// # Errors
///
/// Returns an error if the target code is invalid (not 4 digits).
pub fn solve_code(config: SolveConfig, strategy: StrategyType) -> Result<SolveResult, String> {
    let target = Code::new(&config.target).map_err(|e| format!("Invalid target code: {e}"))?;

    let result = Solver::new(strategy)
        .with_max_rounds(config.max_rounds)
        .run(&target);

    // Replay the rounds to annotate each step with candidate counts.
    let mut steps = Vec::with_capacity(result.rounds.len());
    let mut history: Vec<(Code, Feedback)> = Vec::new();

    for (guess, feedback) in result.rounds {
        let candidates_before = count_consistent(&history);
        history.push((guess.clone(), feedback));
        let candidates_after = count_consistent(&history);

        steps.push(GuessStep {
            guess: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after,
        });
    }

    Ok(SolveResult {
        success: result.solved,
        steps,
        target: config.target,
    })
}
