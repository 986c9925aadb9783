//! Mastermind feedback calculation and representation
//!
//! Feedback for a guess is a pair of counts:
//! - exact: right digit in the right position
//! - misplaced: right digit in the wrong position
//!
//! The misplaced count uses a first-match, left-to-right consumption scan.
//! With duplicate digits this is order-dependent and can differ from an
//! exchange-optimal multiset intersection. That scan order is the observable
//! contract of the evaluator and must be preserved exactly.

use super::{CODE_LEN, Code};

/// Feedback for a Mastermind guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: u8,
    misplaced: u8,
}

impl Feedback {
    /// All four digits in the right position (code solved)
    pub const SOLVED: Self = Self {
        exact: CODE_LEN as u8,
        misplaced: 0,
    };

    /// Create feedback from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if `exact + misplaced > 4`
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, misplaced: u8) -> Self {
        debug_assert!(exact + misplaced <= CODE_LEN as u8);
        Self { exact, misplaced }
    }

    /// Number of exact-position matches
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of wrong-position matches
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> u8 {
        self.misplaced
    }

    /// Check if the guess matched the secret exactly
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.exact == CODE_LEN as u8
    }

    /// Score a guess against a secret
    ///
    /// # Algorithm
    /// 1. First pass: count exact-position matches and mark both the secret
    ///    position and the guess position as consumed.
    /// 2. Second pass: for each unconsumed guess position, scan unconsumed
    ///    secret positions left to right; the first equal digit counts as
    ///    misplaced and is consumed (first-match wins).
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback};
    ///
    /// let secret = Code::new("3815").unwrap();
    /// let guess = Code::new("5831").unwrap();
    /// let feedback = Feedback::score(&secret, &guess);
    ///
    /// assert_eq!(feedback.exact(), 1);
    /// assert_eq!(feedback.misplaced(), 3);
    /// ```
    #[must_use]
    pub fn score(secret: &Code, guess: &Code) -> Self {
        let mut secret_used = [false; CODE_LEN];
        let mut guess_used = [false; CODE_LEN];
        let mut exact = 0u8;
        let mut misplaced = 0u8;

        for i in 0..CODE_LEN {
            if secret.digit_at(i) == guess.digit_at(i) {
                exact += 1;
                secret_used[i] = true;
                guess_used[i] = true;
            }
        }

        for j in 0..CODE_LEN {
            if guess_used[j] {
                continue;
            }
            for i in 0..CODE_LEN {
                if i != j && !secret_used[i] && secret.digit_at(i) == guess.digit_at(j) {
                    misplaced += 1;
                    secret_used[i] = true;
                    break;
                }
            }
        }

        Self { exact, misplaced }
    }

    /// Parse feedback from a string like "1 2", "1,2", or "1-2"
    ///
    /// Also accepts "win" as a shortcut for a solved code.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// let fb = Feedback::from_str("1 2").unwrap();
    /// assert_eq!(fb.exact(), 1);
    /// assert_eq!(fb.misplaced(), 2);
    ///
    /// assert!(Feedback::from_str("3 2").is_none()); // sum exceeds 4
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();

        if s.eq_ignore_ascii_case("win") {
            return Some(Self::SOLVED);
        }

        let mut parts = s.split(|c: char| c == ' ' || c == ',' || c == '-');
        let exact: u8 = parts.next()?.trim().parse().ok()?;
        let misplaced: u8 = parts.next()?.trim().parse().ok()?;

        if parts.next().is_some() {
            return None;
        }

        let sum = exact.checked_add(misplaced)?;
        if sum > CODE_LEN as u8 {
            return None;
        }

        Some(Self { exact, misplaced })
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
