//! Mastermind code representation
//!
//! A Code stores an ordered sequence of 4 digits (0-9, repeats allowed).

use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of digit positions in a code
pub const CODE_LEN: usize = 4;

/// Number of possible digit values (0-9)
pub const DIGIT_VALUES: u8 = 10;

/// Total number of distinct codes (10^4)
pub const CODE_SPACE: usize = 10_000;

/// A 4-digit Mastermind code
///
/// Stores the digits as values 0-9 alongside the text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    text: String,
    digits: [u8; CODE_LEN],
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    NonDigit,
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly 4 digits, got {len}")
            }
            Self::NonDigit => write!(f, "Code must contain only digits 0-9"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a new Code from a string
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - Length is not exactly 4
    /// - Any character is not an ASCII digit
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Code;
    ///
    /// let code = Code::new("3815").unwrap();
    /// assert_eq!(code.text(), "3815");
    ///
    /// assert!(Code::new("381").is_err());
    /// assert!(Code::new("38x5").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, CodeError> {
        let text: String = text.into();

        if text.len() != CODE_LEN {
            return Err(CodeError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodeError::NonDigit);
        }

        let mut digits = [0u8; CODE_LEN];
        for (i, b) in text.bytes().enumerate() {
            digits[i] = b - b'0';
        }

        Ok(Self { text, digits })
    }

    /// Create a Code directly from digit values (each 0-9)
    #[must_use]
    pub fn from_digits(digits: [u8; CODE_LEN]) -> Self {
        debug_assert!(digits.iter().all(|&d| d < DIGIT_VALUES));

        let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        Self { text, digits }
    }

    /// Create the probe code `dddd` holding one digit in every position
    #[must_use]
    pub fn repeated(digit: u8) -> Self {
        Self::from_digits([digit; CODE_LEN])
    }

    /// Generate a random code with independently uniform digits 0-9
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [0u8; CODE_LEN];
        for d in &mut digits {
            *d = rng.random_range(0..DIGIT_VALUES);
        }
        Self::from_digits(digits)
    }

    /// Decode an index in `0..CODE_SPACE` into a code
    ///
    /// The index is read as a base-10 number, most significant digit first,
    /// so index 3815 is the code "3815".
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < CODE_SPACE);

        let mut digits = [0u8; CODE_LEN];
        let mut rest = index;
        for d in digits.iter_mut().rev() {
            *d = (rest % 10) as u8;
            rest /= 10;
        }
        Self::from_digits(digits)
    }

    /// Iterate over every code in the search space, "0000" through "9999"
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CODE_SPACE).map(Self::from_index)
    }

    /// Get the code as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the digit values
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LEN] {
        &self.digits
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.digits[position]
    }

    /// Check whether the code contains a digit value anywhere
    #[inline]
    #[must_use]
    pub fn has_digit(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }

    /// Get the multiplicity of each digit value in the code
    #[must_use]
    pub fn digit_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &d in &self.digits {
            *counts.entry(d).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_creation_valid() {
        let code = Code::new("3815").unwrap();
        assert_eq!(code.text(), "3815");
        assert_eq!(code.digits(), &[3, 8, 1, 5]);
    }

    #[test]
    fn code_creation_invalid_length() {
        assert!(matches!(
            Code::new("38155"),
            Err(CodeError::InvalidLength(5))
        ));
        assert!(matches!(Code::new("381"), Err(CodeError::InvalidLength(3))));
        assert!(matches!(Code::new(""), Err(CodeError::InvalidLength(0))));
    }

    #[test]
    fn code_creation_invalid_characters() {
        assert!(Code::new("38a5").is_err());
        assert!(Code::new("38 5").is_err());
        assert!(Code::new("-815").is_err());
    }

    #[test]
    fn code_from_digits_round_trips() {
        let code = Code::from_digits([0, 9, 4, 7]);
        assert_eq!(code.text(), "0947");
        assert_eq!(code, Code::new("0947").unwrap());
    }

    #[test]
    fn code_repeated_probe() {
        assert_eq!(Code::repeated(0).text(), "0000");
        assert_eq!(Code::repeated(7).text(), "7777");
    }

    #[test]
    fn code_digit_at() {
        let code = Code::new("3815").unwrap();
        assert_eq!(code.digit_at(0), 3);
        assert_eq!(code.digit_at(1), 8);
        assert_eq!(code.digit_at(2), 1);
        assert_eq!(code.digit_at(3), 5);
    }

    #[test]
    fn code_has_digit() {
        let code = Code::new("3815").unwrap();
        assert!(code.has_digit(3));
        assert!(code.has_digit(5));
        assert!(!code.has_digit(0));
        assert!(!code.has_digit(9));
    }

    #[test]
    fn code_digit_counts() {
        let code = Code::new("1122").unwrap();
        let counts = code.digit_counts();
        assert_eq!(counts.get(&1), Some(&2));
        assert_eq!(counts.get(&2), Some(&2));
        assert_eq!(counts.get(&3), None);
    }

    #[test]
    fn code_digit_counts_all_same() {
        let code = Code::new("7777").unwrap();
        let counts = code.digit_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&7), Some(&4));
    }

    #[test]
    fn code_from_index() {
        assert_eq!(Code::from_index(0).text(), "0000");
        assert_eq!(Code::from_index(3815).text(), "3815");
        assert_eq!(Code::from_index(9999).text(), "9999");
    }

    #[test]
    fn code_all_covers_space() {
        let mut count = 0usize;
        let mut last = None;
        for code in Code::all() {
            count += 1;
            last = Some(code);
        }
        assert_eq!(count, CODE_SPACE);
        assert_eq!(last.unwrap().text(), "9999");
    }

    #[test]
    fn code_display() {
        let code = Code::new("0042").unwrap();
        assert_eq!(format!("{code}"), "0042");
    }

    #[test]
    fn code_random_is_well_formed() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let code = Code::random(&mut rng);
            assert_eq!(code.text().len(), CODE_LEN);
            assert!(code.digits().iter().all(|&d| d < DIGIT_VALUES));
        }
    }

    #[test]
    fn code_random_digit_slots_roughly_uniform() {
        // Chi-square test per slot: 10 bins, 9 degrees of freedom.
        // Critical value at p = 0.001 is 27.88; use a generous margin so the
        // test stays stable across rng versions.
        const SAMPLES: usize = 20_000;

        let mut rng = rand::rng();
        let mut counts = [[0usize; 10]; CODE_LEN];

        for _ in 0..SAMPLES {
            let code = Code::random(&mut rng);
            for (slot, &d) in code.digits().iter().enumerate() {
                counts[slot][d as usize] += 1;
            }
        }

        let expected = SAMPLES as f64 / 10.0;
        for slot in counts {
            let chi_square: f64 = slot
                .iter()
                .map(|&observed| {
                    let diff = observed as f64 - expected;
                    diff * diff / expected
                })
                .sum();
            assert!(
                chi_square < 40.0,
                "digit slot distribution is suspiciously non-uniform: chi^2 = {chi_square:.2}"
            );
        }
    }
}
