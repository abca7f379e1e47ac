use anchor_lang::prelude::*;

use crate::error::LottoError;
use crate::state::{
    BonusRule, NumberSet, PurchaseAccount, Rank, RankTally, Ticket, TicketBook, WinningDraw,
};

/// Accounts required to settle a ticket book against a winning draw.
#[derive(Accounts)]
pub struct SettleTickets<'info> {
    /// The ticket holder asking for settlement.
    pub payer: Signer<'info>,
}

/// Outcome of settling one book.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq)]
pub struct Settlement {
    pub tally: RankTally,
    pub total_payout: u64,
    pub profit_rate: f64,
}

impl Settlement {
    /// Classifies `book` against `draw` and prices the result for `amount`.
    pub fn compute(
        account: &PurchaseAccount,
        book: &TicketBook,
        draw: &WinningDraw,
        amount: u64,
    ) -> Result<Self> {
        let expected = account.ticket_count_for(amount)?;
        require!(
            book.len() as u64 == expected,
            LottoError::TicketCountMismatch
        );

        let tally = book.classify(draw);
        let total_payout = account.total_payout(&tally)?;
        let profit_rate = account.payout_rate(total_payout, amount)?;

        Ok(Self {
            tally,
            total_payout,
            profit_rate,
        })
    }
}

/// Settles a client-held ticket book.
///
/// Every ticket is rebuilt through `NumberSet` validation, so a tampered
/// book fails the same way user input would.
///
/// # Arguments
/// * `ctx` - Context containing `SettleTickets` accounts
/// * `amount` - Amount originally spent on the book
/// * `tickets` - Numbers of every ticket, in purchase order
/// * `winning_numbers` - The six winning numbers
/// * `bonus_number` - The bonus number
pub fn process_settle_tickets(
    ctx: Context<SettleTickets>,
    amount: u64,
    tickets: Vec<Vec<u8>>,
    winning_numbers: Vec<u8>,
    bonus_number: u8,
) -> Result<Settlement> {
    let book = TicketBook::from_tickets(
        tickets
            .iter()
            .map(|numbers| numbers_from_bytes(numbers).map(Ticket::from))
            .collect::<Result<Vec<_>>>()?,
    );
    let winning_numbers: Vec<i32> = winning_numbers.into_iter().map(i32::from).collect();
    let draw = WinningDraw::new(&winning_numbers, i32::from(bonus_number))?;

    msg!("Settling {} tickets for {}", book.len(), ctx.accounts.payer.key());
    let settlement = Settlement::compute(&PurchaseAccount::default(), &book, &draw, amount)?;

    for (rank, count) in settlement.tally.iter() {
        msg!("{}", statistics_line(rank, count));
    }
    msg!("Total payout: {}", settlement.total_payout);
    msg!("Profit rate: {:.2}", settlement.profit_rate);

    Ok(settlement)
}

/// One line of the per-rank statistics, e.g. `5 matches + bonus (30000000) - 1 tickets`.
fn statistics_line(rank: Rank, count: u64) -> String {
    let matches = match (rank, rank.bonus_rule()) {
        (Rank::NotMatch, _) => "Fewer than 3 matches".to_string(),
        (_, BonusRule::Required) => format!("{} matches + bonus", rank.match_count()),
        _ => format!("{} matches", rank.match_count()),
    };
    format!("{} ({}) - {} tickets", matches, rank.payout(), count)
}

fn numbers_from_bytes(numbers: &[u8]) -> Result<NumberSet> {
    let values: Vec<i32> = numbers.iter().copied().map(i32::from).collect();
    NumberSet::new(&values)
}
