mod number_set;
mod purchase;
mod rank;
mod ticket;
mod winning_draw;

pub use number_set::*;
pub use purchase::*;
pub use rank::*;
pub use ticket::*;
pub use winning_draw::*;
