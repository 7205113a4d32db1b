use crate::domain::model::{HintPrompt, HintRange, Profile};

pub const START_SCORE: u32 = 20;
pub const HINT_COST: u32 = 1;
const HINT_SPREAD: i32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess,
    Won,
    Lost,
}

/// Result of feeding one line of player input to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// No round is accepting input (loading or failed). Only the engine
    /// produces this value.
    NotReady,
    /// The round already ended; replay first.
    RoundOver,
    /// Empty, non-numeric or non-positive input. Costs nothing.
    Invalid,
    Correct { score: u32 },
    TooOld { score: u32 },
    TooYoung { score: u32 },
    /// Wrong guess that spent the last point. The round is lost.
    Exhausted,
}

/// One play cycle against a single target profile. Pure state, no IO:
/// the engine owns persistence and the frontend owns rendering.
#[derive(Debug, Clone)]
pub struct Round {
    target: Profile,
    score: u32,
    won: bool,
    lost: bool,
    hint_used: bool,
}

impl Round {
    pub fn new(target: Profile) -> Self {
        Self {
            target,
            score: START_SCORE,
            won: false,
            lost: false,
            hint_used: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> RoundState {
        if self.won {
            RoundState::Won
        } else if self.lost {
            RoundState::Lost
        } else {
            RoundState::AwaitingGuess
        }
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    pub fn target_age(&self) -> u32 {
        self.target.age
    }

    pub fn target_name(&self) -> Option<&str> {
        self.target.name.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.target.image_url.as_deref()
    }

    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        if self.won || self.lost {
            return GuessOutcome::RoundOver;
        }

        let Some(guess) = parse_guess(raw) else {
            return GuessOutcome::Invalid;
        };

        let target = i64::from(self.target.age);
        if guess == target {
            self.won = true;
            GuessOutcome::Correct { score: self.score }
        } else if self.score > 1 {
            self.score -= 1;
            if guess > target {
                GuessOutcome::TooOld { score: self.score }
            } else {
                GuessOutcome::TooYoung { score: self.score }
            }
        } else {
            // 分數見底，這局輸了
            self.score = 0;
            self.lost = true;
            GuessOutcome::Exhausted
        }
    }

    /// First half of the hint flow: returns the confirmation descriptor,
    /// or `None` once the score is gone, the round is over, or the one
    /// hint of this round was already taken.
    pub fn request_hint(&self) -> Option<HintPrompt> {
        if self.won || self.lost || self.score == 0 || self.hint_used {
            return None;
        }
        Some(HintPrompt { cost: HINT_COST })
    }

    /// Second half: deducts the cost and reveals the target's decade
    /// widened by 12 on each side.
    pub fn confirm_hint(&mut self) -> Option<HintRange> {
        self.request_hint()?;
        self.hint_used = true;
        self.score -= HINT_COST;

        let decade = (self.target.age - self.target.age % 10) as i32;
        Some(HintRange {
            low: decade - HINT_SPREAD,
            high: decade + HINT_SPREAD,
        })
    }
}

/// Parses a guess. Zero and negative values are invalid, never a scoring
/// attempt; anything positive is compared against the target as-is.
fn parse_guess(raw: &str) -> Option<i64> {
    let value: i64 = raw.trim().parse().ok()?;
    if value <= 0 {
        return None;
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_with_age(age: u32) -> Round {
        Round::new(Profile {
            name: Some("Test Person".to_string()),
            age,
            image_url: None,
        })
    }

    #[test]
    fn test_correct_guess_wins() {
        let mut round = round_with_age(34);
        let outcome = round.submit_guess("34");
        assert_eq!(outcome, GuessOutcome::Correct { score: 20 });
        assert_eq!(round.state(), RoundState::Won);
        assert_eq!(round.score(), 20);
    }

    #[test]
    fn test_wrong_guess_decrements_by_one() {
        let mut round = round_with_age(34);
        assert_eq!(round.submit_guess("50"), GuessOutcome::TooOld { score: 19 });
        assert_eq!(round.submit_guess("10"), GuessOutcome::TooYoung { score: 18 });
        assert_eq!(round.state(), RoundState::AwaitingGuess);
    }

    #[test]
    fn test_invalid_inputs_cost_nothing() {
        let mut round = round_with_age(34);
        for raw in ["", "  ", "abc", "0", "-3", "12.5", "34 years"] {
            assert_eq!(round.submit_guess(raw), GuessOutcome::Invalid, "input {:?}", raw);
        }
        assert_eq!(round.score(), 20);
        assert_eq!(round.state(), RoundState::AwaitingGuess);
    }

    #[test]
    fn test_whitespace_around_guess_is_accepted() {
        let mut round = round_with_age(34);
        assert_eq!(round.submit_guess(" 34 "), GuessOutcome::Correct { score: 20 });
    }

    #[test]
    fn test_last_point_wrong_guess_loses() {
        let mut round = round_with_age(34);
        for _ in 0..19 {
            round.submit_guess("1");
        }
        assert_eq!(round.score(), 1);
        assert_eq!(round.submit_guess("1"), GuessOutcome::Exhausted);
        assert_eq!(round.score(), 0);
        assert_eq!(round.state(), RoundState::Lost);
    }

    #[test]
    fn test_guesses_rejected_after_round_over() {
        let mut round = round_with_age(34);
        round.submit_guess("34");
        assert_eq!(round.submit_guess("34"), GuessOutcome::RoundOver);
        assert_eq!(round.submit_guess("50"), GuessOutcome::RoundOver);
        assert_eq!(round.score(), 20);
    }

    #[test]
    fn test_hint_range_is_widened_decade() {
        let mut round = round_with_age(34);
        let range = round.confirm_hint().unwrap();
        assert_eq!(range, HintRange { low: 18, high: 42 });
        assert_eq!(round.score(), 19);
    }

    #[test]
    fn test_hint_range_for_low_ages_goes_negative() {
        let mut round = round_with_age(5);
        let range = round.confirm_hint().unwrap();
        assert_eq!(range, HintRange { low: -12, high: 12 });
    }

    #[test]
    fn test_hint_only_once_per_round() {
        let mut round = round_with_age(34);
        assert!(round.request_hint().is_some());
        assert!(!round.hint_used());
        assert!(round.confirm_hint().is_some());
        assert!(round.hint_used());
        assert!(round.request_hint().is_none());
        assert!(round.confirm_hint().is_none());
        assert_eq!(round.score(), 19);
    }

    #[test]
    fn test_hint_unavailable_after_win() {
        let mut round = round_with_age(34);
        round.submit_guess("34");
        assert!(round.request_hint().is_none());
    }

    #[test]
    fn test_hint_can_spend_last_point_without_losing() {
        let mut round = round_with_age(34);
        for _ in 0..19 {
            round.submit_guess("1");
        }
        assert_eq!(round.score(), 1);
        assert!(round.confirm_hint().is_some());
        assert_eq!(round.score(), 0);
        // 提示歸零不算輸，還能再猜一次
        assert_eq!(round.state(), RoundState::AwaitingGuess);
        assert_eq!(round.submit_guess("34"), GuessOutcome::Correct { score: 0 });
    }

    #[test]
    fn test_wrong_guess_at_zero_score_loses() {
        let mut round = round_with_age(34);
        for _ in 0..19 {
            round.submit_guess("1");
        }
        round.confirm_hint();
        assert_eq!(round.score(), 0);
        assert_eq!(round.submit_guess("1"), GuessOutcome::Exhausted);
        assert_eq!(round.state(), RoundState::Lost);
    }

    #[test]
    fn test_huge_guess_is_a_scoring_attempt() {
        let mut round = round_with_age(34);
        assert_eq!(
            round.submit_guess("99999999999"),
            GuessOutcome::TooOld { score: 19 }
        );
    }
}
