//! A two-player cribbage engine with optional `no_std` support.
//!
//! The crate scores hands and pegging plays, runs the pegging turn and reset
//! protocol through [`PeggingRound`], and provides a heuristic computer
//! opponent in [`HeuristicOpponent`].
//!
//! # Example
//!
//! ```
//! use cribrs::{Deck, HeuristicOpponent, OpponentStrategy, deal_six_to_each};
//!
//! let deal = deal_six_to_each(Deck::shuffled_with_seed(42), true).unwrap();
//! let ai = HeuristicOpponent::default();
//! let discards = ai.choose_crib_cards(&deal.opponent_hand, false).unwrap();
//! assert!(deal.opponent_hand.contains(&discards[0]));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod ai;
pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod result;
pub mod round;
pub mod score;

// Re-export main types
pub use ai::{HeuristicOpponent, OpponentStrategy, estimated_crib_value, estimated_hand_value};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{
    Cut, Deal, Deck, create_deck, cut_for_dealer, cut_starter, deal_six_to_each, dealer_from_cut,
};
pub use error::{DealError, ParseCardError};
pub use options::OpponentOptions;
pub use result::{HandScore, PegPoints, PlayOutcome, RoundReset, ScoreCategory, ScoreEntry};
pub use round::{PeggingRound, Seat};
pub use score::{heels_points, points_for_pile, score_hand, score_hand_with_breakdown};
