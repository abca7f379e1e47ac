use anchor_lang::prelude::*;

use crate::constants::{MAX_TICKETS_PER_PURCHASE, TICKET_PRICE};
use crate::error::LottoError;
use crate::state::RankTally;

/// Purchase arithmetic for one transaction: spend to ticket count, and a
/// rank tally back to payout and profit rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PurchaseAccount {
    unit_price: u64,
}

impl Default for PurchaseAccount {
    fn default() -> Self {
        Self {
            unit_price: TICKET_PRICE,
        }
    }
}

impl PurchaseAccount {
    pub fn with_unit_price(unit_price: u64) -> Result<Self> {
        require!(unit_price > 0, LottoError::InvalidTicketPrice);
        Ok(Self { unit_price })
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Tickets bought by `amount`. The amount must divide evenly by the unit
    /// price; zero buys zero tickets.
    pub fn ticket_count_for(&self, amount: u64) -> Result<u64> {
        require!(
            amount % self.unit_price == 0,
            LottoError::InvalidPurchaseAmount
        );
        Ok(amount / self.unit_price)
    }

    /// Like [`Self::ticket_count_for`], but fails with `TooManyTickets` when
    /// the count exceeds `max_tickets`.
    pub fn capped_ticket_count(&self, amount: u64, max_tickets: u64) -> Result<u64> {
        let count = self.ticket_count_for(amount)?;
        require!(count <= max_tickets, LottoError::TooManyTickets);
        Ok(count)
    }

    pub fn total_payout(&self, tally: &RankTally) -> Result<u64> {
        tally.iter().try_fold(0u64, |total, (rank, count)| {
            rank.payout()
                .checked_mul(count)
                .and_then(|payout| total.checked_add(payout))
                .ok_or_else(|| error!(LottoError::ArithmeticOverflow))
        })
    }

    /// Total payout divided by `amount`; `1.0` means break-even.
    pub fn profit_rate(&self, tally: &RankTally, amount: u64) -> Result<f64> {
        let payout = self.total_payout(tally)?;
        self.payout_rate(payout, amount)
    }

    /// Profit rate for an already computed total payout.
    pub fn payout_rate(&self, payout: u64, amount: u64) -> Result<f64> {
        require!(amount > 0, LottoError::InvalidPurchaseAmount);
        Ok(payout as f64 / amount as f64)
    }
}
