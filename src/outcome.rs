use std::{cmp::Ordering, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    TooLow,
    TooHigh,
    Correct,
}

impl Outcome {
    pub fn classify(guess: i64, target: i64) -> Self {
        match guess.cmp(&target) {
            Ordering::Less => Outcome::TooLow,
            Ordering::Greater => Outcome::TooHigh,
            Ordering::Equal => Outcome::Correct,
        }
    }

    pub fn is_correct(self) -> bool {
        self == Outcome::Correct
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Outcome::TooLow => "too low",
            Outcome::TooHigh => "too high",
            Outcome::Correct => "correct",
        };
        write!(f, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_matches_ordering() {
        for target in -3..=3 {
            for guess in -5..=5 {
                let expected = if guess < target {
                    Outcome::TooLow
                } else if guess > target {
                    Outcome::TooHigh
                } else {
                    Outcome::Correct
                };
                assert_eq!(Outcome::classify(guess, target), expected);
            }
        }
    }

    #[test]
    fn classify_extremes() {
        assert_eq!(Outcome::classify(i64::MIN, i64::MAX), Outcome::TooLow);
        assert_eq!(Outcome::classify(i64::MAX, i64::MIN), Outcome::TooHigh);
        assert!(Outcome::classify(i64::MAX, i64::MAX).is_correct());
    }

    #[test]
    fn display_text() {
        assert_eq!(Outcome::TooLow.to_string(), "too low");
        assert_eq!(Outcome::TooHigh.to_string(), "too high");
        assert_eq!(Outcome::Correct.to_string(), "correct");
    }
}
