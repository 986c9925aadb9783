//! Mastermind solving algorithms
//!
//! This module contains the inference engine and the strategies built on it.

mod engine;
pub mod inference;
pub mod strategy;

pub use engine::{DEFAULT_MAX_ROUNDS, SessionResult, Solver};
pub use inference::{InferenceEngine, Phase};
pub use strategy::{
    EliminationStrategy, ProbeStrategy, RandomStrategy, Strategy, StrategyType, consistent_with,
    count_consistent,
};
