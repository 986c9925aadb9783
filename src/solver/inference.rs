//! Code inference engine
//!
//! A sequential digit-elimination state machine that recovers a secret code
//! from exact-match feedback alone, in a bounded number of rounds.
//!
//! # Phases
//! - **Discovery**: probe `0000`, `1111`, ... and read the exact-match count
//!   of each probe as the multiplicity of that digit in the secret. Discovery
//!   stops once four digit values are known. Probing `9999` is unnecessary:
//!   if the multiplicities found through `8888` sum below four, the missing
//!   digits can only be 9s.
//! - **Placement**: place each discovered value in turn by probing it at one
//!   unlocked position while every other position holds a filler digit known
//!   to be absent from the secret. A probe with an exact hit locks the trial
//!   position; a miss rules it out. When a single candidate position remains
//!   for a value, it is locked without probing.
//!
//! Worst case: 9 discovery probes + 3 + 2 + 1 placement probes + the final
//! assembled guess = 16 rounds.

use crate::core::{CODE_LEN, Code, DIGIT_VALUES, Feedback};

/// Current phase of the inference engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Probing digit multiplicities with `dddd` guesses
    Discovery,
    /// Resolving positions for the discovered digit values
    Placement,
    /// All four positions locked; emitting the assembled code
    Done,
}

/// Stateful guess generator for one solving session
///
/// Construct one engine per secret; feed each round's feedback into the next
/// [`next_guess`](Self::next_guess) call. Reset by constructing a new engine.
#[derive(Debug)]
pub struct InferenceEngine {
    phase: Phase,
    /// Digit value the pending or upcoming discovery probe tests
    probe_digit: u8,
    /// Discovered digit multiset, in discovery order
    values: Vec<u8>,
    /// Confirmed digit per position; never cleared once set
    locked: [Option<u8>; CODE_LEN],
    /// Index into `values` of the digit currently being placed
    placing: usize,
    /// Positions ruled out for the digit currently being placed
    tried: [bool; CODE_LEN],
    /// Position tested by the last emitted placement probe
    trial_pos: Option<usize>,
    /// Digit absent from the secret, used to pad placement probes
    filler: u8,
}

impl InferenceEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Discovery,
            probe_digit: 0,
            values: Vec::with_capacity(CODE_LEN),
            locked: [None; CODE_LEN],
            placing: 0,
            tried: [false; CODE_LEN],
            trial_pos: None,
            filler: 0,
        }
    }

    /// Produce the next guess, given the feedback for the previous one
    ///
    /// Pass `None` on the first round only. Once the engine reaches
    /// [`Phase::Done`] it emits the fully assembled code on every call.
    pub fn next_guess(&mut self, last: Option<Feedback>) -> Code {
        if let Some(feedback) = last {
            self.absorb(feedback);
        }

        match self.phase {
            Phase::Discovery => Code::repeated(self.probe_digit),
            Phase::Placement => self.placement_guess(),
            Phase::Done => self.assembled(),
        }
    }

    /// Current engine phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of positions whose digit has been confirmed
    #[must_use]
    pub fn locked_positions(&self) -> usize {
        self.locked.iter().filter(|slot| slot.is_some()).count()
    }

    /// Fold the previous round's feedback into the engine state
    fn absorb(&mut self, feedback: Feedback) {
        match self.phase {
            Phase::Discovery => {
                // The probe was all one digit, so the exact count is that
                // digit's multiplicity in the secret.
                for _ in 0..feedback.exact() {
                    if self.values.len() < CODE_LEN {
                        self.values.push(self.probe_digit);
                    }
                }
                self.probe_digit += 1;

                if self.values.len() == CODE_LEN {
                    self.begin_placement();
                } else if self.probe_digit == DIGIT_VALUES - 1 {
                    // Multiplicities over 0-8 sum below four, so the
                    // remaining slots must all be 9s.
                    while self.values.len() < CODE_LEN {
                        self.values.push(DIGIT_VALUES - 1);
                    }
                    self.begin_placement();
                }
            }
            Phase::Placement => {
                if let Some(pos) = self.trial_pos.take() {
                    // Filler digits never match the secret, so any exact hit
                    // belongs to the trial position.
                    if feedback.exact() > 0 {
                        self.lock(pos);
                    } else {
                        self.tried[pos] = true;
                    }
                }
            }
            Phase::Done => {}
        }
    }

    fn begin_placement(&mut self) {
        self.filler = (0..DIGIT_VALUES)
            .find(|d| !self.values.contains(d))
            .unwrap_or(0);
        self.phase = Phase::Placement;
    }

    /// Lock the current digit into `pos` and advance to the next digit
    fn lock(&mut self, pos: usize) {
        self.locked[pos] = Some(self.values[self.placing]);
        self.placing += 1;
        self.tried = [false; CODE_LEN];
    }

    fn placement_guess(&mut self) -> Code {
        loop {
            if self.placing == CODE_LEN {
                self.phase = Phase::Done;
                return self.assembled();
            }

            let open: Vec<usize> = (0..CODE_LEN)
                .filter(|&p| self.locked[p].is_none() && !self.tried[p])
                .collect();
            debug_assert!(!open.is_empty(), "a discovered digit must fit somewhere");

            // One candidate position left: no probe needed.
            if open.len() == 1 {
                self.lock(open[0]);
                continue;
            }

            let pos = open[0];
            self.trial_pos = Some(pos);

            let mut digits = [self.filler; CODE_LEN];
            digits[pos] = self.values[self.placing];
            return Code::from_digits(digits);
        }
    }

    /// Assemble the code from locked positions; an unresolved slot falls
    /// back to the filler
    fn assembled(&self) -> Code {
        let mut digits = [self.filler; CODE_LEN];
        for (pos, slot) in self.locked.iter().enumerate() {
            if let Some(digit) = slot {
                digits[pos] = *digit;
            }
        }
        Code::from_digits(digits)
    }
}

impl Default for InferenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive the engine against a fixed secret, returning every guess made
    fn run_engine(secret: &str, max_rounds: usize) -> Vec<Code> {
        let secret = Code::new(secret).unwrap();
        let mut engine = InferenceEngine::new();
        let mut last = None;
        let mut guesses = Vec::new();

        for _ in 0..max_rounds {
            let guess = engine.next_guess(last);
            let feedback = Feedback::score(&secret, &guess);
            guesses.push(guess);
            if feedback.is_solved() {
                return guesses;
            }
            last = Some(feedback);
        }
        guesses
    }

    #[test]
    fn engine_starts_with_zero_probe() {
        let mut engine = InferenceEngine::new();
        assert_eq!(engine.next_guess(None).text(), "0000");
        assert_eq!(engine.phase(), Phase::Discovery);
    }

    #[test]
    fn discovery_probes_ascend() {
        // A secret with no digit below 5 keeps the engine probing upward.
        let guesses = run_engine("5678", 25);
        assert_eq!(guesses[0].text(), "0000");
        assert_eq!(guesses[1].text(), "1111");
        assert_eq!(guesses[2].text(), "2222");
        assert_eq!(guesses[3].text(), "3333");
        assert_eq!(guesses[4].text(), "4444");
    }

    #[test]
    fn solves_reference_secret_3815() {
        let guesses = run_engine("3815", 25);
        assert_eq!(guesses.last().unwrap().text(), "3815");
        assert!(guesses.len() <= 19);
    }

    #[test]
    fn reference_secret_3815_discovery_order() {
        // Discovery runs 0000 through 8888; values 1, 3, 5, 8 each report a
        // single exact hit on their probe round.
        let secret = Code::new("3815").unwrap();
        let mut engine = InferenceEngine::new();
        let mut last = None;

        for expected in ["0000", "1111", "2222", "3333", "4444", "5555", "6666", "7777", "8888"] {
            let guess = engine.next_guess(last);
            assert_eq!(guess.text(), expected);
            last = Some(Feedback::score(&secret, &guess));
        }
        // 8888 completed the multiset; the engine moves to placement.
        let guess = engine.next_guess(last);
        assert_eq!(engine.phase(), Phase::Placement);
        assert_ne!(guess.text(), "9999");
    }

    #[test]
    fn triple_digit_discovered_in_one_probe() {
        // Secret "7977" answers the 7777 probe with exact == 3, filling three
        // discovery slots at once.
        let secret = Code::new("7977").unwrap();
        let probe = Code::repeated(7);
        assert_eq!(Feedback::score(&secret, &probe).exact(), 3);

        let guesses = run_engine("7977", 25);
        assert_eq!(guesses.last().unwrap().text(), "7977");
    }

    #[test]
    fn repeated_digit_probe_solves_outright() {
        // The discovery probe for the secret's own digit is the secret.
        let guesses = run_engine("4444", 25);
        assert_eq!(guesses.last().unwrap().text(), "4444");
        assert_eq!(guesses.len(), 5); // 0000 through 4444
    }

    #[test]
    fn all_nines_uses_fallback() {
        // No probe through 8888 hits, so discovery falls back to 9s.
        let guesses = run_engine("9999", 25);
        assert_eq!(guesses.last().unwrap().text(), "9999");
        assert!(guesses.len() <= 16);
    }

    #[test]
    fn placement_probes_use_absent_filler() {
        // Filler positions never match the secret, so a placement probe can
        // score at most one hit in total: the trial digit, exact or misplaced.
        let secret = Code::new("2134").unwrap();
        let mut engine = InferenceEngine::new();
        let mut last = None;

        loop {
            let guess = engine.next_guess(last);
            let feedback = Feedback::score(&secret, &guess);
            if engine.phase() == Phase::Placement {
                assert!(feedback.exact() + feedback.misplaced() <= 1);
            }
            if feedback.is_solved() {
                break;
            }
            last = Some(feedback);
        }
    }

    #[test]
    fn locked_positions_monotonic() {
        let secret = Code::new("2750").unwrap();
        let mut engine = InferenceEngine::new();
        let mut last = None;
        let mut previous = 0;

        for _ in 0..25 {
            let guess = engine.next_guess(last);
            let locked = engine.locked_positions();
            assert!(locked >= previous, "locked count must never decrease");
            previous = locked;

            let feedback = Feedback::score(&secret, &guess);
            if feedback.is_solved() {
                break;
            }
            last = Some(feedback);
        }
        assert_eq!(previous, CODE_LEN);
    }

    #[test]
    fn terminal_engine_repeats_assembled_code() {
        let secret = Code::new("6103").unwrap();
        let mut engine = InferenceEngine::new();
        let mut last = None;

        let mut final_guess = None;
        for _ in 0..25 {
            let guess = engine.next_guess(last);
            let feedback = Feedback::score(&secret, &guess);
            if feedback.is_solved() {
                final_guess = Some(guess);
                break;
            }
            last = Some(feedback);
        }
        let final_guess = final_guess.expect("engine must solve within 25 rounds");
        assert_eq!(final_guess.text(), "6103");

        // Further calls keep emitting the solved code.
        assert_eq!(engine.phase(), Phase::Done);
        assert_eq!(engine.next_guess(Some(Feedback::SOLVED)).text(), "6103");
    }

    #[test]
    fn solves_every_duplicate_pattern_shape() {
        // One representative per digit-multiplicity shape: 1+1+1+1, 2+1+1,
        // 2+2, 3+1, 4.
        for secret in ["0123", "0012", "0011", "0001", "0000", "9901", "5599"] {
            let guesses = run_engine(secret, 25);
            assert_eq!(
                guesses.last().unwrap().text(),
                secret,
                "failed to recover {secret}"
            );
            assert!(guesses.len() <= 19, "{secret} took {} rounds", guesses.len());
        }
    }

    #[test]
    fn worst_case_bound_holds_across_sample() {
        // Every 123rd code, plus the extremes.
        for index in (0..10_000).step_by(123).chain([0, 9_999]) {
            let secret = Code::from_index(index);
            let guesses = run_engine(secret.text(), 25);
            assert_eq!(guesses.last().unwrap(), &secret);
            assert!(
                guesses.len() <= 16,
                "secret {secret} took {} rounds",
                guesses.len()
            );
        }
    }
}
