use anchor_lang::prelude::*;

/// Prize tier of a ticket.
///
/// Variants are declared lowest to highest so the derived ordering reads
/// naturally: `Rank::First > Rank::Second > ... > Rank::NotMatch`.
#[derive(
    AnchorSerialize,
    AnchorDeserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
pub enum Rank {
    NotMatch,
    Fifth,
    Fourth,
    Third,
    Second,
    First,
}

/// How the bonus number takes part in deciding a rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BonusRule {
    Required,
    Excluded,
    Ignored,
}

impl Rank {
    /// Every rank in report order, highest first.
    pub const ALL: [Rank; 6] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::NotMatch,
    ];

    pub fn resolve(match_count: usize, bonus_hit: bool) -> Self {
        match (match_count, bonus_hit) {
            (6, _) => Rank::First,
            (5, true) => Rank::Second,
            (5, false) => Rank::Third,
            (4, _) => Rank::Fourth,
            (3, _) => Rank::Fifth,
            _ => Rank::NotMatch,
        }
    }

    pub const fn payout(self) -> u64 {
        match self {
            Rank::First => 2_000_000_000,
            Rank::Second => 30_000_000,
            Rank::Third => 1_500_000,
            Rank::Fourth => 50_000,
            Rank::Fifth => 5_000,
            Rank::NotMatch => 0,
        }
    }

    /// Matches needed for this rank. `NotMatch` covers everything below 3.
    pub const fn match_count(self) -> usize {
        match self {
            Rank::First => 6,
            Rank::Second | Rank::Third => 5,
            Rank::Fourth => 4,
            Rank::Fifth => 3,
            Rank::NotMatch => 0,
        }
    }

    pub const fn bonus_rule(self) -> BonusRule {
        match self {
            Rank::Second => BonusRule::Required,
            Rank::Third => BonusRule::Excluded,
            _ => BonusRule::Ignored,
        }
    }

    /// Position in report order, `0` for `First`.
    pub const fn ordinal(self) -> usize {
        match self {
            Rank::First => 0,
            Rank::Second => 1,
            Rank::Third => 2,
            Rank::Fourth => 3,
            Rank::Fifth => 4,
            Rank::NotMatch => 5,
        }
    }
}

/// Number of tickets that landed in each rank. Every rank is always present.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RankTally {
    counts: [u64; 6],
}

impl RankTally {
    pub fn record(&mut self, rank: Rank) {
        self.counts[rank.ordinal()] += 1;
    }

    pub fn count(&self, rank: Rank) -> u64 {
        self.counts[rank.ordinal()]
    }

    /// `(rank, count)` pairs, highest rank first.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u64)> + '_ {
        Rank::ALL.into_iter().map(|rank| (rank, self.count(rank)))
    }

    pub fn total_tickets(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl FromIterator<Rank> for RankTally {
    fn from_iter<I: IntoIterator<Item = Rank>>(ranks: I) -> Self {
        let mut tally = RankTally::default();
        for rank in ranks {
            tally.record(rank);
        }
        tally
    }
}
