//! Interactive CLI mode
//!
//! The user holds a secret code; the solver guesses it from feedback typed
//! in at each round.

use crate::core::{Code, Feedback};
use crate::solver::{DEFAULT_MAX_ROUNDS, Strategy, StrategyType};
use std::io::{self, Write};

/// Run the interactive mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// solver runs out of consistent guesses.
pub fn run_interactive(mut strategy: StrategyType) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Mastermind Solver - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a 4-digit code (digits 0-9, repeats allowed).");
    println!("After each guess, enter the feedback as two numbers:\n");
    println!("  - exact:     right digit in the right position");
    println!("  - misplaced: right digit in the wrong position");
    println!("  - example:   '1 2' means 1 exact, 2 misplaced");
    println!("  - or type 'win' if the guess is your code!\n");
    println!("Commands: 'quit' to exit, 'new' for new game\n");

    let mut rounds: Vec<(Code, Feedback)> = Vec::new();
    let mut turn = 1;

    loop {
        let Some(guess) = strategy.next_guess(&rounds) else {
            println!("\n❌ No code is consistent with that feedback.");
            println!("One of the earlier answers must be off. Starting over.\n");
            strategy = fresh(&strategy);
            rounds.clear();
            turn = 1;
            continue;
        };

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: my guess is {}", guess.text());
        println!("────────────────────────────────────────────────────────────");

        let feedback = loop {
            let input = get_user_input("Enter feedback (exact misplaced, 'win', or command)")?
                .to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    strategy = fresh(&strategy);
                    rounds.clear();
                    turn = 1;
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                _ => {
                    if let Some(feedback) = Feedback::from_str(&input) {
                        break Some(feedback);
                    }
                    println!("❌ Invalid feedback! Use two numbers summing to at most 4.\n");
                }
            }
        };

        if let Some(feedback) = feedback {
            rounds.push((guess.clone(), feedback));

            if feedback.is_solved() {
                use colored::Colorize;

                println!(
                    "\n{}",
                    format!("🎉 Cracked it in {turn} guesses: {}", guess.text())
                        .bright_green()
                        .bold()
                );

                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => {
                        strategy = fresh(&strategy);
                        rounds.clear();
                        turn = 0;
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            } else if turn >= DEFAULT_MAX_ROUNDS {
                println!("\n❌ Round cap reached; the feedback may be inconsistent.\n");
                return Ok(());
            }

            turn += 1;
        }
    }
}

/// A fresh copy of the running strategy (stateful strategies must be reset
/// between games)
fn fresh(strategy: &StrategyType) -> StrategyType {
    match strategy {
        StrategyType::Probe(_) => StrategyType::from_name("probe"),
        StrategyType::Elimination(_) => StrategyType::from_name("elimination"),
        StrategyType::Random(_) => StrategyType::from_name("random"),
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
