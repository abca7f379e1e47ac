use std::fmt;

use anchor_lang::prelude::*;

use crate::random::RandomSource;
use crate::state::{NumberSet, RankTally, WinningDraw};

/// One purchased entry.
#[derive(AnchorSerialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    numbers: NumberSet,
}

impl Ticket {
    pub fn new(numbers: NumberSet) -> Self {
        Self { numbers }
    }

    pub fn numbers(&self) -> &NumberSet {
        &self.numbers
    }
}

impl From<NumberSet> for Ticket {
    fn from(numbers: NumberSet) -> Self {
        Self::new(numbers)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.numbers, f)
    }
}

/// Tickets issued by one purchase, in the order they were drawn.
#[derive(AnchorSerialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketBook {
    tickets: Vec<Ticket>,
}

impl TicketBook {
    /// Draws `count` independent tickets. Duplicate tickets are allowed and
    /// a count of zero gives an empty book.
    pub fn generate<R: RandomSource + ?Sized>(count: u64, rng: &mut R) -> Result<Self> {
        let tickets = (0..count)
            .map(|_| NumberSet::random(rng).map(Ticket::from))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tickets })
    }

    pub fn from_tickets(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter()
    }

    /// Ranks every ticket against `draw`.
    pub fn classify(&self, draw: &WinningDraw) -> RankTally {
        self.tickets.iter().map(|ticket| draw.rank_of(ticket)).collect()
    }
}
