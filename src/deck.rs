//! Deck construction, dealing, and cutting.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;
use crate::round::Seat;

/// Cards each player receives in a two-player deal.
pub const HAND_SIZE: usize = 6;

/// Returns the canonical 52-card deck, suit by suit, Ace to King.
#[must_use]
pub fn create_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// An ordered card sequence consumed through a draw cursor.
///
/// The underlying cards are never reordered after construction; drawing only
/// advances the cursor, so a deck can never duplicate or drop a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// Creates an unshuffled standard deck.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_cards(create_deck())
    }

    /// Creates a standard deck shuffled with the given random source.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = create_deck();
        cards.shuffle(rng);
        Self::from_cards(cards)
    }

    /// Creates a standard deck shuffled with a seeded `ChaCha8` generator.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::Deck;
    ///
    /// let a = Deck::shuffled_with_seed(7);
    /// let b = Deck::shuffled_with_seed(7);
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Wraps an arbitrary card sequence; the first card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }

    /// Draws the next card.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(card)
    }

    /// Returns the number of cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Returns the cards not yet drawn, in draw order.
    #[must_use]
    pub fn remaining_cards(&self) -> &[Card] {
        self.cards.get(self.position..).unwrap_or(&[])
    }

    /// Consumes the deck, returning the undrawn cards.
    #[must_use]
    pub fn into_remaining(mut self) -> Vec<Card> {
        let position = self.position.min(self.cards.len());
        self.cards.split_off(position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

/// Result of dealing six cards to each player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// The human player's six cards.
    pub player_hand: Vec<Card>,
    /// The opponent's six cards.
    pub opponent_hand: Vec<Card>,
    /// The deck after dealing, starter still inside.
    pub remaining_deck: Deck,
}

/// Deals six cards to each player, alternating and starting with the
/// non-dealer.
///
/// # Errors
///
/// Returns [`DealError::NotEnoughCards`] if fewer than twelve cards remain.
/// Nothing is dealt in that case.
pub fn deal_six_to_each(mut deck: Deck, player_is_dealer: bool) -> Result<Deal, DealError> {
    let needed = HAND_SIZE * 2;
    let available = deck.remaining();
    if available < needed {
        return Err(DealError::NotEnoughCards { needed, available });
    }

    let mut player_hand = Vec::with_capacity(HAND_SIZE);
    let mut opponent_hand = Vec::with_capacity(HAND_SIZE);
    let not_enough = DealError::NotEnoughCards { needed, available };

    for _ in 0..HAND_SIZE {
        let first = deck.draw().ok_or(not_enough)?;
        let second = deck.draw().ok_or(not_enough)?;
        if player_is_dealer {
            opponent_hand.push(first);
            player_hand.push(second);
        } else {
            player_hand.push(first);
            opponent_hand.push(second);
        }
    }

    tracing::debug!(player_is_dealer, remaining = deck.remaining(), "dealt six to each");

    Ok(Deal {
        player_hand,
        opponent_hand,
        remaining_deck: deck,
    })
}

/// Decides the dealer from one cut card each.
///
/// The lower rank deals (Ace is lowest). Equal ranks, whatever the suits,
/// return `None` and the players cut again.
#[must_use]
pub fn dealer_from_cut(player_cut: Card, opponent_cut: Card) -> Option<Seat> {
    match player_cut.rank.cmp(&opponent_cut.rank) {
        core::cmp::Ordering::Less => Some(Seat::Player),
        core::cmp::Ordering::Greater => Some(Seat::Opponent),
        core::cmp::Ordering::Equal => None,
    }
}

/// A decisive cut for the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cut {
    /// Who deals first.
    pub dealer: Seat,
    /// The card cut by the player.
    pub player_card: Card,
    /// The card cut by the opponent.
    pub opponent_card: Card,
}

/// Cuts two distinct cards from a full deck until the ranks differ.
pub fn cut_for_dealer<R: Rng + ?Sized>(rng: &mut R) -> Cut {
    let deck = create_deck();
    loop {
        let picks = sample(rng, deck.len(), 2);
        let (player_card, opponent_card) = (deck[picks.index(0)], deck[picks.index(1)]);
        if let Some(dealer) = dealer_from_cut(player_card, opponent_card) {
            return Cut {
                dealer,
                player_card,
                opponent_card,
            };
        }
        tracing::trace!(%player_card, %opponent_card, "cut tied, redrawing");
    }
}

/// Reveals a random starter card from the undrawn part of the deck.
///
/// Returns `None` if the deck is exhausted.
pub fn cut_starter<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Option<Card> {
    let cards = deck.remaining_cards();
    if cards.is_empty() {
        return None;
    }
    cards.get(rng.random_range(0..cards.len())).copied()
}
