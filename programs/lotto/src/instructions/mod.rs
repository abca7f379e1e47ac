pub mod purchase_tickets;
pub mod settle_tickets;

pub use purchase_tickets::*;
pub use settle_tickets::*;
