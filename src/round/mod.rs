//! Pegging round turn and reset management.

use alloc::vec::Vec;

use crate::card::Card;
use crate::result::{PlayOutcome, RoundReset};
use crate::score::pegging::{THIRTY_ONE, points_for_pile};

pub mod state;

pub use state::Seat;

/// Tracks the count, pile, and turn order within a pegging round.
///
/// The manager scores and records plays but never checks that a play is
/// legal; callers use [`PeggingRound::can_play`] before calling
/// [`PeggingRound::on_play`]. It also has no notion of hands running out,
/// which the surrounding game detects itself.
///
/// # Example
///
/// ```
/// use cribrs::{Card, PeggingRound, Rank, Seat, Suit};
///
/// let mut round = PeggingRound::new(Seat::Opponent);
/// let outcome = round.on_play(Card::new(Rank::Ten, Suit::Clubs));
/// assert_eq!(outcome.player, Seat::Opponent);
/// assert_eq!(round.count(), 10);
/// assert_eq!(round.turn(), Seat::Player);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeggingRound {
    /// Running count, always the sum of the pile's values.
    count: u32,
    /// Cards played since the last reset, in order.
    pile: Vec<Card>,
    /// Whose turn it is.
    turn: Seat,
    /// Goes called since the last card was played.
    consecutive_goes: u8,
    /// Who played the most recent card since the last reset.
    last_player_who_played: Option<Seat>,
}

impl PeggingRound {
    /// Creates a round where `starting_player` (the non-dealer) leads.
    #[must_use]
    pub const fn new(starting_player: Seat) -> Self {
        Self {
            count: 0,
            pile: Vec::new(),
            turn: starting_player,
            consecutive_goes: 0,
            last_player_who_played: None,
        }
    }

    /// Current count.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Cards played since the last reset.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Player to act.
    #[must_use]
    pub const fn turn(&self) -> Seat {
        self.turn
    }

    /// Goes called since the last card was played.
    #[must_use]
    pub const fn consecutive_goes(&self) -> u8 {
        self.consecutive_goes
    }

    /// Who played the most recent card, if any card has been played since
    /// the last reset.
    #[must_use]
    pub const fn last_player_who_played(&self) -> Option<Seat> {
        self.last_player_who_played
    }

    /// Whether `card` can be played without exceeding 31.
    #[must_use]
    pub fn can_play(&self, card: Card) -> bool {
        self.count + u32::from(card.value()) <= THIRTY_ONE
    }

    /// Plays a card for the player whose turn it is.
    ///
    /// Reaching exactly 31 scores the completed pile and starts a new
    /// sub-round led by the other player.
    pub fn on_play(&mut self, card: Card) -> PlayOutcome {
        let player = self.turn;
        self.pile.push(card);
        self.count += u32::from(card.value());
        self.last_player_who_played = Some(player);
        self.consecutive_goes = 0;

        let points = points_for_pile(&self.pile, self.count);
        tracing::trace!(?player, %card, count = self.count, points = points.total, "card played");

        if self.count == THIRTY_ONE {
            self.reset(player.other());
            tracing::debug!(?player, "count reached 31, sub-round reset");
            return PlayOutcome {
                player,
                points,
                reset: Some(RoundReset::ThirtyOne),
            };
        }

        self.turn = player.other();
        PlayOutcome {
            player,
            points,
            reset: None,
        }
    }

    /// Records a go from the player whose turn it is.
    ///
    /// If the other player can still play, the turn passes to them. Otherwise
    /// the last player to play takes the go point and a new sub-round starts,
    /// led by the player who did not play last.
    pub fn on_go(&mut self, opponent_has_legal_move: bool) -> Option<RoundReset> {
        if opponent_has_legal_move {
            self.turn = self.turn.other();
            self.consecutive_goes = (self.consecutive_goes + 1).min(2);
            tracing::trace!(turn = ?self.turn, goes = self.consecutive_goes, "go, turn passes");
            return None;
        }

        let point_to = self.last_player_who_played;
        let next_turn = point_to.map_or_else(|| self.turn.other(), Seat::other);
        self.reset(next_turn);
        tracing::debug!(?point_to, "go, sub-round reset");
        Some(RoundReset::Go { point_to })
    }

    fn reset(&mut self, next_turn: Seat) {
        self.count = 0;
        self.pile.clear();
        self.consecutive_goes = 0;
        self.last_player_who_played = None;
        self.turn = next_turn;
    }
}
