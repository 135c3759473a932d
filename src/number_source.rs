use std::ops::RangeInclusive;

use rand::{Rng, rngs::ThreadRng};

/// Draws integers uniformly from a closed range.
#[derive(Debug)]
pub struct NumberSource {
    range: RangeInclusive<i64>,
    rng: ThreadRng,
}

impl NumberSource {
    /// `range` must not be empty, `GameConfig::range` checks that.
    pub fn new(range: RangeInclusive<i64>) -> Self {
        Self {
            range,
            rng: rand::rng(),
        }
    }

    pub fn range(&self) -> &RangeInclusive<i64> {
        &self.range
    }

    pub fn generate(&mut self) -> i64 {
        self.rng.random_range(self.range.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_within_default_range() {
        let mut source = NumberSource::new(1..=100);
        for _ in 0..10_000 {
            let n = source.generate();
            assert!((1..=100).contains(&n), "{n} out of range");
        }
    }

    #[test]
    fn reaches_both_ends() {
        let mut source = NumberSource::new(1..=3);
        let mut seen = [false; 3];
        for _ in 0..1_000 {
            seen[(source.generate() - 1) as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn single_value_range() {
        let mut source = NumberSource::new(-7..=-7);
        assert_eq!(source.generate(), -7);
        assert_eq!(source.range(), &(-7..=-7));
    }
}
