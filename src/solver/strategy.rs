//! Guess generation strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::inference::InferenceEngine;
use crate::core::{Code, Feedback};

/// A strategy for producing the next guess in a solving session
///
/// Implementations may keep internal state; construct a fresh strategy for
/// each session. The driver appends exactly one `(guess, feedback)` entry to
/// the history per round.
pub trait Strategy {
    /// Produce the next guess given the round history
    ///
    /// Returns `None` if no consistent guess exists (contradictory feedback).
    fn next_guess(&mut self, history: &[(Code, Feedback)]) -> Option<Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Sequential digit-elimination engine (default)
    Probe(ProbeStrategy),
    /// First code consistent with all observed feedback
    Elimination(EliminationStrategy),
    /// Random code consistent with all observed feedback
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn next_guess(&mut self, history: &[(Code, Feedback)]) -> Option<Code> {
        match self {
            Self::Probe(s) => s.next_guess(history),
            Self::Elimination(s) => s.next_guess(history),
            Self::Random(s) => s.next_guess(history),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "probe", "elimination", "random".
    /// Defaults to probe if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "elimination" => Self::Elimination(EliminationStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Probe(ProbeStrategy::new()),
        }
    }
}

/// Digit-elimination strategy
///
/// Wraps the [`InferenceEngine`] state machine: discovery probes establish
/// the digit multiset, placement probes pin down positions.
pub struct ProbeStrategy {
    engine: InferenceEngine,
}

impl ProbeStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: InferenceEngine::new(),
        }
    }
}

impl Default for ProbeStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for ProbeStrategy {
    fn next_guess(&mut self, history: &[(Code, Feedback)]) -> Option<Code> {
        let last = history.last().map(|(_, feedback)| *feedback);
        Some(self.engine.next_guess(last))
    }
}

/// Consistency-filtering strategy
///
/// Scans the full 10,000-code space and guesses the first code that would
/// have produced every observed feedback. The classic Mastermind baseline.
pub struct EliminationStrategy;

impl Strategy for EliminationStrategy {
    fn next_guess(&mut self, history: &[(Code, Feedback)]) -> Option<Code> {
        Code::all().find(|candidate| consistent_with(candidate, history))
    }
}

/// Random strategy
///
/// Picks uniformly among the codes still consistent with the observed
/// feedback. Useful as a benchmark baseline.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn next_guess(&mut self, history: &[(Code, Feedback)]) -> Option<Code> {
        use rand::prelude::IndexedRandom;

        let survivors: Vec<Code> = Code::all()
            .filter(|candidate| consistent_with(candidate, history))
            .collect();

        survivors.choose(&mut rand::rng()).cloned()
    }
}

/// Check whether `candidate` could be the secret given the round history
///
/// True when scoring every past guess against the candidate reproduces the
/// observed feedback exactly.
#[must_use]
pub fn consistent_with(candidate: &Code, history: &[(Code, Feedback)]) -> bool {
    history
        .iter()
        .all(|(guess, observed)| Feedback::score(candidate, guess) == *observed)
}

/// Count the codes still consistent with the round history
#[must_use]
pub fn count_consistent(history: &[(Code, Feedback)]) -> usize {
    Code::all()
        .filter(|candidate| consistent_with(candidate, history))
        .count()
}
