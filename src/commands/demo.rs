//! Demo command
//!
//! Generates a random secret internally and breaks it, printing each guess
//! and the final guess count. This is the classic single-run flow: no user
//! input, exit 0 once the code is recovered.

use crate::core::{Code, Feedback};
use crate::solver::{DEFAULT_MAX_ROUNDS, Strategy, StrategyType};
use colored::Colorize;

/// Run a single demo game against a freshly generated secret
///
/// # Errors
///
/// Returns an error if the strategy fails to produce a guess before the
/// round cap (contradictory state; cannot happen with the probe engine).
pub fn run_demo(mut strategy: StrategyType) -> Result<(), String> {
    let secret = Code::random(&mut rand::rng());
    println!("The code is: {}", secret.text().bright_yellow().bold());

    let mut rounds: Vec<(Code, Feedback)> = Vec::new();

    loop {
        let guess = strategy
            .next_guess(&rounds)
            .ok_or("No consistent guess available")?;
        let feedback = Feedback::score(&secret, &guess);
        rounds.push((guess.clone(), feedback));

        println!(
            "Guess {} guessing: {}  (exact: {}, misplaced: {})",
            rounds.len(),
            guess.text(),
            feedback.exact(),
            feedback.misplaced()
        );

        if feedback.is_solved() {
            break;
        }
        if rounds.len() >= DEFAULT_MAX_ROUNDS {
            return Err(format!(
                "Failed to recover the code within {DEFAULT_MAX_ROUNDS} rounds"
            ));
        }
    }

    println!(
        "\nNumber of guesses = {}",
        rounds.len().to_string().bright_cyan().bold()
    );
    println!("{}={}", secret.text(), rounds.last().map_or("", |(g, _)| g.text()));

    Ok(())
}
