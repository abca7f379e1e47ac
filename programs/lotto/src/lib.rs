#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;
use state::TicketBook;

/// Program-wide constants: ticket price, number pool bounds and purchase
/// limits.
pub mod constants;

/// Custom error types returned through the Anchor framework.
pub mod error;

/// Instruction handlers for purchasing and settling tickets.
pub mod instructions;

/// Randomness sources used to draw ticket numbers.
pub mod random;

/// Lotto domain types: number sets, tickets, the winning draw, ranks and
/// purchase arithmetic.
pub mod state;

declare_id!("7C1pwVqmGs7eTXSgfz2G9onY5FdgH7iDyxQzMGELu2A5");

#[program]
pub mod lotto {
    use super::*;

    pub fn purchase_tickets(ctx: Context<PurchaseTickets>, amount: u64) -> Result<TicketBook> {
        process_purchase_tickets(ctx, amount)
    }

    pub fn settle_tickets(
        ctx: Context<SettleTickets>,
        amount: u64,
        tickets: Vec<Vec<u8>>,
        winning_numbers: Vec<u8>,
        bonus_number: u8,
    ) -> Result<Settlement> {
        process_settle_tickets(ctx, amount, tickets, winning_numbers, bonus_number)
    }
}
