use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::MAX_TICKETS_PER_PURCHASE;
use crate::error::LottoError;
use crate::random::KeccakRandom;
use crate::state::{PurchaseAccount, TicketBook};

/// Accounts required to purchase a book of tickets.
///
/// Nothing is written on-chain: the drawn book is logged and handed back as
/// return data for the client to keep until settlement.
#[derive(Accounts)]
pub struct PurchaseTickets<'info> {
    /// The buyer.
    pub payer: Signer<'info>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Issues `amount / TICKET_PRICE` randomly drawn tickets.
///
/// Steps:
/// 1. Convert the amount into a ticket count.
/// 2. Read the revealed randomness and mix in the payer key.
/// 3. Draw the book and log every ticket.
pub fn process_purchase_tickets(
    ctx: Context<PurchaseTickets>,
    amount: u64,
) -> Result<TicketBook> {
    let clock = Clock::get()?;

    let count =
        PurchaseAccount::default().capped_ticket_count(amount, MAX_TICKETS_PER_PURCHASE)?;

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| LottoError::RandomnessNotResolved)?;
    let revealed_random_value = randomness_data
        .get_value(&clock)
        .map_err(|_| LottoError::RandomnessNotResolved)?;

    let payer = ctx.accounts.payer.key();
    let mut rng = KeccakRandom::from_parts(&[&revealed_random_value, payer.as_ref()]);
    let book = TicketBook::generate(count, &mut rng)?;

    msg!("Purchased {} tickets", book.len());
    for ticket in book.iter() {
        msg!("{}", ticket);
    }

    Ok(book)
}
