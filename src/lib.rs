//! Mastermind Solver
//!
//! A Mastermind code-breaking AI using sequential digit elimination: discovery
//! probes establish the secret's digit multiset, placement probes pin down
//! positions. Bounded at 16 guesses for any 4-digit secret.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, Feedback};
//! use mastermind_solver::solver::InferenceEngine;
//!
//! let secret = Code::new("3815").unwrap();
//! let mut engine = InferenceEngine::new();
//!
//! let mut last = None;
//! loop {
//!     let guess = engine.next_guess(last);
//!     let feedback = Feedback::score(&secret, &guess);
//!     if feedback.is_solved() {
//!         assert_eq!(guess, secret);
//!         break;
//!     }
//!     last = Some(feedback);
//! }
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
