use std::fmt;

use anchor_lang::prelude::*;

use crate::constants::{MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_TICKET};
use crate::error::LottoError;
use crate::random::RandomSource;

/// Six distinct numbers in `MIN_NUMBER..=MAX_NUMBER`, kept in ascending order.
///
/// Both tickets and the winning draw are built on this type. The only ways to
/// obtain one are [`NumberSet::new`] and [`NumberSet::random`], and both go
/// through the same validation.
#[derive(AnchorSerialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NumberSet {
    numbers: [u8; NUMBERS_PER_TICKET],
}

impl NumberSet {
    /// Validates `values` and returns them as a sorted set.
    ///
    /// Fails with `TooManyNumbers` / `TooFewNumbers` on a wrong length,
    /// `OutOfRange` for a value outside the pool and `DuplicateNumber` when a
    /// value repeats, checked in that order.
    pub fn new(values: &[i32]) -> Result<Self> {
        require!(
            values.len() <= NUMBERS_PER_TICKET,
            LottoError::TooManyNumbers
        );
        require!(
            values.len() >= NUMBERS_PER_TICKET,
            LottoError::TooFewNumbers
        );

        let mut numbers = [0u8; NUMBERS_PER_TICKET];
        for (slot, &value) in numbers.iter_mut().zip(values) {
            *slot = checked_number(value)?;
        }
        numbers.sort_unstable();

        require!(
            numbers.windows(2).all(|pair| pair[0] != pair[1]),
            LottoError::DuplicateNumber
        );

        Ok(Self { numbers })
    }

    /// Draws six numbers without replacement from the full pool.
    ///
    /// A partial Fisher-Yates pass shuffles the first six slots of the pool,
    /// so every 6-subset is equally likely when `rng` is uniform.
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut pool: Vec<i32> = (MIN_NUMBER..=MAX_NUMBER).map(i32::from).collect();
        for i in 0..NUMBERS_PER_TICKET {
            let j = i + rng.next_index(pool.len() - i);
            pool.swap(i, j);
        }
        pool.truncate(NUMBERS_PER_TICKET);

        Self::new(&pool)
    }

    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn contains(&self, value: u8) -> bool {
        self.numbers.binary_search(&value).is_ok()
    }

    /// Number of values shared with `other`.
    pub fn match_count(&self, other: &NumberSet) -> usize {
        self.numbers
            .iter()
            .filter(|&&number| other.contains(number))
            .count()
    }
}

/// Converts a raw value into a pool number, rejecting anything outside
/// `MIN_NUMBER..=MAX_NUMBER`.
pub(crate) fn checked_number(value: i32) -> Result<u8> {
    u8::try_from(value)
        .ok()
        .filter(|number| (MIN_NUMBER..=MAX_NUMBER).contains(number))
        .ok_or_else(|| error!(LottoError::OutOfRange))
}

impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, number) in self.numbers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", number)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{KeccakRandom, ScriptedRandom};

    #[test]
    fn test_valid_numbers_are_sorted() {
        let set = NumberSet::new(&[45, 3, 17, 1, 29, 8]).unwrap();
        assert_eq!(set.numbers(), &[1, 3, 8, 17, 29, 45]);
    }

    #[test]
    fn test_match_count_against_itself_is_six() {
        let samples: [[i32; 6]; 3] = [
            [1, 2, 3, 4, 5, 6],
            [40, 41, 42, 43, 44, 45],
            [7, 14, 21, 28, 35, 42],
        ];
        for values in samples {
            let set = NumberSet::new(&values).unwrap();
            assert_eq!(set.match_count(&set), 6);
        }
    }

    #[test]
    fn test_match_count_ignores_order() {
        let a = NumberSet::new(&[1, 2, 3, 4, 5, 6]).unwrap();
        let b = NumberSet::new(&[6, 5, 40, 3, 41, 1]).unwrap();
        assert_eq!(a.match_count(&b), 4);
        assert_eq!(b.match_count(&a), 4);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        assert_eq!(
            NumberSet::new(&[1, 2, 3, 4, 5, 6, 7]).unwrap_err(),
            LottoError::TooManyNumbers.into()
        );
        assert_eq!(
            NumberSet::new(&[1, 2, 3, 4, 5]).unwrap_err(),
            LottoError::TooFewNumbers.into()
        );
        assert_eq!(
            NumberSet::new(&[]).unwrap_err(),
            LottoError::TooFewNumbers.into()
        );
    }

    #[test]
    fn test_duplicate_is_rejected() {
        assert_eq!(
            NumberSet::new(&[1, 2, 3, 4, 5, 5]).unwrap_err(),
            LottoError::DuplicateNumber.into()
        );
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        for values in [[-1, 2, 3, 4, 5, 6], [0, 2, 3, 4, 5, 6], [1, 2, 3, 4, 5, 46]] {
            assert_eq!(
                NumberSet::new(&values).unwrap_err(),
                LottoError::OutOfRange.into()
            );
        }
    }

    #[test]
    fn test_contains() {
        let set = NumberSet::new(&[1, 2, 3, 4, 5, 6]).unwrap();
        assert!(set.contains(6));
        assert!(!set.contains(7));
    }

    #[test]
    fn test_display() {
        let set = NumberSet::new(&[8, 21, 23, 41, 42, 43]).unwrap();
        assert_eq!(set.to_string(), "[8, 21, 23, 41, 42, 43]");
    }

    #[test]
    fn test_random_with_scripted_source() {
        let mut rng = ScriptedRandom::new(vec![0]);
        let set = NumberSet::random(&mut rng).unwrap();
        assert_eq!(set.numbers(), &[1, 2, 3, 4, 5, 6]);

        // Each step swaps slot i with slot i + 5.
        let mut rng = ScriptedRandom::new(vec![5]);
        let set = NumberSet::random(&mut rng).unwrap();
        assert_eq!(set.numbers(), &[6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_random_sets_are_valid() {
        let mut rng = KeccakRandom::new([9u8; 32]);
        for _ in 0..200 {
            let set = NumberSet::random(&mut rng).unwrap();
            let numbers = set.numbers();
            assert_eq!(numbers.len(), NUMBERS_PER_TICKET);
            assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(numbers
                .iter()
                .all(|n| (MIN_NUMBER..=MAX_NUMBER).contains(n)));
        }
    }
}
