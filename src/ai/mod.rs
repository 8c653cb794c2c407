//! Computer opponent decisions.
//!
//! The opponent uses the scorers as evaluators: crib discards are ranked by
//! an estimate of the kept hand plus (or minus) an estimate of the crib, and
//! pegging cards by the points they would score now plus tactical bonuses.

use crate::card::Card;
use crate::options::OpponentOptions;

mod crib;
mod pegging;

pub use crib::{estimated_crib_value, estimated_hand_value};

/// Decision interface for a cribbage opponent.
pub trait OpponentStrategy {
    /// Chooses two cards from `hand` to discard into the crib.
    ///
    /// Returns `None` only when `hand` holds fewer than two cards.
    fn choose_crib_cards(&self, hand: &[Card], is_dealer: bool) -> Option<[Card; 2]>;

    /// Chooses a card to peg, as its index in `hand` and the card itself.
    ///
    /// Cards whose indices are in `played_indices` are skipped. Returns
    /// `None` if no remaining card keeps the count at or below 31.
    fn choose_pegging_card(
        &self,
        hand: &[Card],
        played_indices: &[usize],
        current_count: u32,
        pegging_pile: &[Card],
        opponent_cards_remaining: usize,
    ) -> Option<(usize, Card)>;
}

/// Rule-based opponent driven by [`OpponentOptions`].
///
/// # Example
///
/// ```
/// use cribrs::{Card, HeuristicOpponent, OpponentStrategy, Rank, Suit};
///
/// let ai = HeuristicOpponent::default();
/// let hand = [
///     Card::new(Rank::Ten, Suit::Clubs),
///     Card::new(Rank::Five, Suit::Hearts),
/// ];
/// let choice = ai.choose_pegging_card(&hand, &[], 10, &[], 4);
/// assert_eq!(choice, Some((1, Card::new(Rank::Five, Suit::Hearts))));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeuristicOpponent {
    options: OpponentOptions,
}

impl HeuristicOpponent {
    /// Creates an opponent with the given tuning.
    #[must_use]
    pub const fn new(options: OpponentOptions) -> Self {
        Self { options }
    }

    /// Returns the tuning in use.
    #[must_use]
    pub const fn options(&self) -> &OpponentOptions {
        &self.options
    }
}

impl OpponentStrategy for HeuristicOpponent {
    fn choose_crib_cards(&self, hand: &[Card], is_dealer: bool) -> Option<[Card; 2]> {
        crib::choose_crib_cards(hand, is_dealer, &self.options)
    }

    fn choose_pegging_card(
        &self,
        hand: &[Card],
        played_indices: &[usize],
        current_count: u32,
        pegging_pile: &[Card],
        opponent_cards_remaining: usize,
    ) -> Option<(usize, Card)> {
        pegging::choose_pegging_card(
            hand,
            played_indices,
            current_count,
            pegging_pile,
            opponent_cards_remaining,
            &self.options,
        )
    }
}
