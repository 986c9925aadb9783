//! Solving session driver

use super::strategy::Strategy;
use crate::core::{Code, Feedback};

/// Default round cap for a session
///
/// The probe engine is bounded by 16 rounds; the elimination and random
/// baselines occasionally need more headroom.
pub const DEFAULT_MAX_ROUNDS: usize = 25;

/// Runs one strategy against one secret to completion
pub struct Solver<S: Strategy> {
    strategy: S,
    max_rounds: usize,
}

/// Outcome of a solving session
pub struct SessionResult {
    /// Whether the secret was recovered within the round cap
    pub solved: bool,
    /// Every round played, in order
    pub rounds: Vec<(Code, Feedback)>,
}

impl SessionResult {
    /// Number of guesses made
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.rounds.len()
    }

    /// The final guess, if any round was played
    #[must_use]
    pub fn final_guess(&self) -> Option<&Code> {
        self.rounds.last().map(|(guess, _)| guess)
    }
}

impl<S: Strategy> Solver<S> {
    /// Create a solver with the default round cap
    pub const fn new(strategy: S) -> Self {
        Self {
            strategy,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Override the round cap
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Run the session: guess, score, feed back, repeat until solved
    pub fn run(mut self, secret: &Code) -> SessionResult {
        let mut rounds: Vec<(Code, Feedback)> = Vec::new();

        for _ in 0..self.max_rounds {
            let Some(guess) = self.strategy.next_guess(&rounds) else {
                break;
            };
            let feedback = Feedback::score(secret, &guess);
            rounds.push((guess, feedback));

            if feedback.is_solved() {
                return SessionResult {
                    solved: true,
                    rounds,
                };
            }
        }

        SessionResult {
            solved: false,
            rounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{EliminationStrategy, ProbeStrategy, StrategyType};

    #[test]
    fn probe_session_recovers_secret() {
        let secret = Code::new("3815").unwrap();
        let result = Solver::new(ProbeStrategy::new()).run(&secret);

        assert!(result.solved);
        assert_eq!(result.final_guess().unwrap(), &secret);
        assert!(result.num_guesses() <= 19);
    }

    #[test]
    fn elimination_session_recovers_secret() {
        let secret = Code::new("9042").unwrap();
        let result = Solver::new(EliminationStrategy).run(&secret);

        assert!(result.solved);
        assert_eq!(result.final_guess().unwrap(), &secret);
    }

    #[test]
    fn session_respects_round_cap() {
        let secret = Code::new("9999").unwrap();
        let result = Solver::new(ProbeStrategy::new())
            .with_max_rounds(3)
            .run(&secret);

        assert!(!result.solved);
        assert_eq!(result.num_guesses(), 3);
    }

    #[test]
    fn session_rounds_end_with_solved_feedback() {
        let secret = Code::new("1234").unwrap();
        let result = Solver::new(StrategyType::from_name("probe")).run(&secret);

        let (_, last_feedback) = result.rounds.last().unwrap();
        assert!(last_feedback.is_solved());

        // No round after the solving one.
        for (_, feedback) in &result.rounds[..result.rounds.len() - 1] {
            assert!(!feedback.is_solved());
        }
    }
}
