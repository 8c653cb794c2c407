//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards left in the deck.
    #[error("not enough cards in the deck: needed {needed}, {available} available")]
    NotEnoughCards {
        /// Cards required by the deal.
        needed: usize,
        /// Cards left in the deck.
        available: usize,
    },
}

/// Errors that can occur while parsing a card from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The input was empty.
    #[error("empty card string")]
    Empty,
    /// The rank part was not recognised.
    #[error("invalid card rank")]
    InvalidRank,
    /// The suit part was not recognised.
    #[error("invalid card suit")]
    InvalidSuit,
}
