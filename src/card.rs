//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit.
///
/// Suits carry no ordering significance in cribbage; they only matter for
/// flushes and his nobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Display symbol for the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

/// Card rank, Ace low.
///
/// The ordinal (Ace = 0 .. King = 12) defines run adjacency. Ace never
/// follows King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen ranks in ordinal order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Position of the rank, Ace = 0 through King = 12.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Counting value: Ace is 1, face cards are 10.
    #[must_use]
    pub const fn value(self) -> u8 {
        let v = self.ordinal() + 1;
        if v > 10 { 10 } else { v }
    }

    /// Display symbol for the rank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Returns the rank with the given ordinal, if any.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if ordinal < 13 {
            Some(Self::ALL[ordinal as usize])
        } else {
            None
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Counting value of the card.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses cards such as `"5H"`, `"10s"`, `"TD"` or `"J♣"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or(ParseCardError::Empty)?;
        let rank_str = chars.as_str();
        if rank_str.is_empty() {
            return Err(ParseCardError::InvalidRank);
        }

        let suit = match suit_char {
            'C' | 'c' | '♣' => Suit::Clubs,
            'D' | 'd' | '♦' => Suit::Diamonds,
            'H' | 'h' | '♥' => Suit::Hearts,
            'S' | 's' | '♠' => Suit::Spades,
            _ => return Err(ParseCardError::InvalidSuit),
        };

        let rank = match rank_str {
            "A" | "a" | "1" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" | "t" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            _ => return Err(ParseCardError::InvalidRank),
        };

        Ok(Self::new(rank, suit))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
