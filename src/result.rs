//! Scoring result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::round::Seat;

/// Kind of scoring combination in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreCategory {
    /// Cards summing to fifteen.
    Fifteen,
    /// Two cards of the same rank.
    Pair,
    /// A sequence of three or more consecutive ranks.
    Run,
    /// Cards of a single suit.
    Flush,
    /// The Jack of the starter's suit.
    Nobs,
}

/// One scoring combination and the cards that make it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// The kind of combination.
    pub category: ScoreCategory,
    /// Cards taking part, starter included where it contributes.
    pub cards: Vec<Card>,
    /// Points for this combination.
    pub points: u32,
}

/// Itemised score for a hand or crib.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HandScore {
    /// Sum of all entry points.
    pub total: u32,
    /// Every scoring combination found.
    pub entries: Vec<ScoreEntry>,
}

impl HandScore {
    /// Total points in entries of the given category.
    #[must_use]
    pub fn points_for(&self, category: ScoreCategory) -> u32 {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .map(|entry| entry.points)
            .sum()
    }

    /// Number of entries of the given category.
    #[must_use]
    pub fn count_of(&self, category: ScoreCategory) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .count()
    }
}

/// Points scored by a single pegging play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PegPoints {
    /// 2 if the count reached exactly 15.
    pub fifteen: u32,
    /// 2 if the count reached exactly 31.
    pub thirty_one: u32,
    /// Points for the trailing same-rank cards.
    pub pair_points: u32,
    /// Length of the trailing same-rank streak, including the card played.
    pub same_rank_count: u32,
    /// Points for a run ending with the card played.
    pub run_points: u32,
    /// Sum of all points.
    pub total: u32,
}

/// How a pegging sub-round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundReset {
    /// The count reached exactly 31.
    ThirtyOne,
    /// Neither player could continue; the last player to play takes the go.
    Go {
        /// Who receives the go point, `None` if nobody had played.
        point_to: Option<Seat>,
    },
}

impl RoundReset {
    /// Whether the sub-round ended on 31.
    #[must_use]
    pub const fn reset_for_31(self) -> bool {
        matches!(self, Self::ThirtyOne)
    }

    /// The player awarded the go point, if any.
    #[must_use]
    pub const fn go_point_to(self) -> Option<Seat> {
        match self {
            Self::ThirtyOne => None,
            Self::Go { point_to } => point_to,
        }
    }
}

/// Result of a card played into a pegging round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The player who played the card and scores the points.
    pub player: Seat,
    /// Points scored by the play.
    pub points: PegPoints,
    /// Set when the play reached 31 and the sub-round was reset.
    pub reset: Option<RoundReset>,
}
