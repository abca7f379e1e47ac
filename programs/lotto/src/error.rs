use anchor_lang::prelude::*;

#[error_code]
pub enum LottoError {
    #[msg("More than six numbers were supplied")]
    TooManyNumbers,
    #[msg("Fewer than six numbers were supplied")]
    TooFewNumbers,
    #[msg("Numbers must be between 1 and 45")]
    OutOfRange,
    #[msg("Numbers must not repeat")]
    DuplicateNumber,
    #[msg("Bonus number must not be one of the winning numbers")]
    DuplicateBonusNumber,
    #[msg("Purchase amount must be an exact multiple of the ticket price")]
    InvalidPurchaseAmount,
    #[msg("Ticket price must be greater than 0")]
    InvalidTicketPrice,
    #[msg("Payout calculation overflowed")]
    ArithmeticOverflow,
    #[msg("Too many tickets requested in one purchase")]
    TooManyTickets,
    #[msg("Ticket count does not match the purchase amount")]
    TicketCountMismatch,
    #[msg("Randomness not resolved")]
    RandomnessNotResolved,
}
