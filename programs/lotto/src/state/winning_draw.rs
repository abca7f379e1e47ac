use anchor_lang::prelude::*;

use crate::error::LottoError;
use crate::state::number_set::checked_number;
use crate::state::{NumberSet, Rank, Ticket};

/// The official winning numbers plus the bonus number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningDraw {
    numbers: NumberSet,
    bonus: u8,
}

impl WinningDraw {
    pub fn new(numbers: &[i32], bonus: i32) -> Result<Self> {
        let numbers = NumberSet::new(numbers)?;
        let bonus = checked_number(bonus)?;
        require!(!numbers.contains(bonus), LottoError::DuplicateBonusNumber);

        Ok(Self { numbers, bonus })
    }

    pub fn numbers(&self) -> &NumberSet {
        &self.numbers
    }

    pub fn bonus(&self) -> u8 {
        self.bonus
    }

    pub fn rank_of(&self, ticket: &Ticket) -> Rank {
        let numbers = ticket.numbers();
        Rank::resolve(numbers.match_count(&self.numbers), numbers.contains(self.bonus))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(values: &[i32]) -> Ticket {
        Ticket::new(NumberSet::new(values).unwrap())
    }

    #[test]
    fn test_rank_of_each_tier() {
        let draw = WinningDraw::new(&[1, 2, 3, 4, 5, 6], 7).unwrap();

        assert_eq!(draw.rank_of(&ticket(&[1, 2, 3, 4, 5, 6])), Rank::First);
        assert_eq!(draw.rank_of(&ticket(&[1, 2, 3, 4, 5, 7])), Rank::Second);
        assert_eq!(draw.rank_of(&ticket(&[1, 2, 3, 4, 5, 40])), Rank::Third);
        assert_eq!(draw.rank_of(&ticket(&[1, 2, 3, 4, 20, 40])), Rank::Fourth);
        assert_eq!(draw.rank_of(&ticket(&[1, 2, 3, 12, 20, 40])), Rank::Fifth);
        assert_eq!(draw.rank_of(&ticket(&[1, 2, 9, 12, 20, 40])), Rank::NotMatch);
    }

    #[test]
    fn test_bonus_alone_does_not_lift_rank() {
        let draw = WinningDraw::new(&[1, 2, 3, 4, 5, 6], 7).unwrap();
        assert_eq!(draw.rank_of(&ticket(&[1, 2, 7, 12, 20, 40])), Rank::NotMatch);
        assert_eq!(draw.rank_of(&ticket(&[1, 2, 3, 4, 7, 40])), Rank::Fourth);
    }

    #[test]
    fn test_bonus_in_winning_numbers_is_rejected() {
        assert_eq!(
            WinningDraw::new(&[1, 2, 3, 4, 5, 6], 6).unwrap_err(),
            LottoError::DuplicateBonusNumber.into()
        );
    }

    #[test]
    fn test_bonus_out_of_range_is_rejected() {
        for bonus in [0, 46, -3] {
            assert_eq!(
                WinningDraw::new(&[1, 2, 3, 4, 5, 6], bonus).unwrap_err(),
                LottoError::OutOfRange.into()
            );
        }
    }

    #[test]
    fn test_number_errors_propagate() {
        assert_eq!(
            WinningDraw::new(&[1, 2, 3, 4, 5], 7).unwrap_err(),
            LottoError::TooFewNumbers.into()
        );
        assert_eq!(
            WinningDraw::new(&[1, 1, 3, 4, 5, 6], 7).unwrap_err(),
            LottoError::DuplicateNumber.into()
        );
    }

    #[test]
    fn test_accessors() {
        let draw = WinningDraw::new(&[6, 5, 4, 3, 2, 1], 45).unwrap();
        assert_eq!(draw.numbers().numbers(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(draw.bonus(), 45);
    }
}
