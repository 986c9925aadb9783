//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod feedback;

pub use code::{CODE_LEN, CODE_SPACE, Code, CodeError, DIGIT_VALUES};
pub use feedback::Feedback;
