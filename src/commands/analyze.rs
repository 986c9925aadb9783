//! Code analysis command
//!
//! Reports how the probe engine dissects a specific secret: digit
//! multiplicity profile, discovery rounds, and placement rounds.

use crate::core::{Code, Feedback};
use crate::solver::{DEFAULT_MAX_ROUNDS, InferenceEngine, Phase};

/// Result of analyzing a code
pub struct AnalysisResult {
    pub code: String,
    /// Digit values present in the code with their multiplicities, ascending
    pub digit_profile: Vec<(u8, u8)>,
    pub discovery_rounds: usize,
    pub placement_rounds: usize,
    pub total_rounds: usize,
    pub solved: bool,
}

/// Analyze how the probe engine breaks a code
///
/// # Errors
///
/// Returns an error if the code is invalid (not 4 digits).
pub fn analyze_code(code: &str) -> Result<AnalysisResult, String> {
    let secret = Code::new(code).map_err(|e| format!("Invalid code: {e}"))?;

    let mut digit_profile: Vec<(u8, u8)> = secret.digit_counts().into_iter().collect();
    digit_profile.sort_unstable();

    let mut engine = InferenceEngine::new();
    let mut last = None;
    let mut discovery_rounds = 0;
    let mut placement_rounds = 0;
    let mut total_rounds = 0;
    let mut solved = false;

    while total_rounds < DEFAULT_MAX_ROUNDS {
        let guess = engine.next_guess(last);
        match engine.phase() {
            Phase::Discovery => discovery_rounds += 1,
            // The terminal assembled guess counts as placement work.
            Phase::Placement | Phase::Done => placement_rounds += 1,
        }
        total_rounds += 1;

        let feedback = Feedback::score(&secret, &guess);
        if feedback.is_solved() {
            solved = true;
            break;
        }
        last = Some(feedback);
    }

    Ok(AnalysisResult {
        code: code.to_string(),
        digit_profile,
        discovery_rounds,
        placement_rounds,
        total_rounds,
        solved,
    })
}
