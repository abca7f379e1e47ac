use anchor_lang::prelude::*;

/// Price of a single ticket, in the smallest currency unit.
#[constant]
pub const TICKET_PRICE: u64 = 1_000;

/// Lowest number that may appear on a ticket.
#[constant]
pub const MIN_NUMBER: u8 = 1;

/// Highest number that may appear on a ticket.
#[constant]
pub const MAX_NUMBER: u8 = 45;

/// How many numbers make up one ticket or one winning draw.
pub const NUMBERS_PER_TICKET: usize = 6;

/// Upper bound on tickets issued by one `purchase_tickets` call, keeping the
/// instruction inside the compute budget and the return data limit.
#[constant]
pub const MAX_TICKETS_PER_PURCHASE: u64 = 50;
