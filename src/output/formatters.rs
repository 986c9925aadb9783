//! Formatting utilities for terminal output

use crate::core::{CODE_LEN, Feedback};

/// Format feedback as a peg string
///
/// `●` per exact match, `○` per misplaced match, `·` for the rest.
#[must_use]
pub fn feedback_to_pegs(feedback: Feedback) -> String {
    let exact = feedback.exact() as usize;
    let misplaced = feedback.misplaced() as usize;
    let empty = CODE_LEN - exact - misplaced;

    let mut result = String::with_capacity(CODE_LEN * 3);
    for _ in 0..exact {
        result.push('●');
    }
    for _ in 0..misplaced {
        result.push('○');
    }
    for _ in 0..empty {
        result.push('·');
    }

    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
