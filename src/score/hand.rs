//! Show scoring for hands and the crib.

use alloc::vec;
use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::result::{HandScore, ScoreCategory, ScoreEntry};

use super::{FIFTEEN_POINTS, PAIR_POINTS, fifteen_combinations, longest_run_span, rank_counts};

/// Hand cards needed for a flush.
const FLUSH_MIN: usize = 4;

/// Scores a hand together with the starter card.
///
/// Equal to the `total` of [`score_hand_with_breakdown`].
///
/// # Example
///
/// ```
/// use cribrs::{Card, Rank, Suit, score_hand};
///
/// let hand = [
///     Card::new(Rank::Five, Suit::Clubs),
///     Card::new(Rank::Five, Suit::Hearts),
///     Card::new(Rank::Five, Suit::Spades),
///     Card::new(Rank::Jack, Suit::Diamonds),
/// ];
/// let starter = Card::new(Rank::Five, Suit::Diamonds);
/// assert_eq!(score_hand(&hand, starter, false), 29);
/// ```
#[must_use]
pub fn score_hand(hand: &[Card], starter: Card, is_crib: bool) -> u32 {
    score_hand_with_breakdown(hand, starter, is_crib).total
}

/// Scores a hand and lists every combination found.
///
/// Card order in `hand` does not matter. A crib only scores a flush when the
/// starter matches as well.
#[must_use]
pub fn score_hand_with_breakdown(hand: &[Card], starter: Card, is_crib: bool) -> HandScore {
    let mut all = Vec::with_capacity(hand.len() + 1);
    all.extend_from_slice(hand);
    all.push(starter);

    let mut entries = Vec::new();
    fifteens(&all, &mut entries);
    pairs(&all, &mut entries);
    runs(&all, &mut entries);
    flush(hand, starter, is_crib, &mut entries);
    nobs(hand, starter, &mut entries);

    let total = entries.iter().map(|entry| entry.points).sum();
    HandScore { total, entries }
}

/// Points for the starter itself: 2 to the dealer for a Jack.
#[must_use]
pub fn heels_points(starter: Card) -> u32 {
    if starter.rank == Rank::Jack { 2 } else { 0 }
}

fn fifteens(all: &[Card], entries: &mut Vec<ScoreEntry>) {
    for cards in fifteen_combinations(all) {
        entries.push(ScoreEntry {
            category: ScoreCategory::Fifteen,
            cards,
            points: FIFTEEN_POINTS,
        });
    }
}

fn pairs(all: &[Card], entries: &mut Vec<ScoreEntry>) {
    for (i, &a) in all.iter().enumerate() {
        for &b in &all[i + 1..] {
            if a.rank == b.rank {
                entries.push(ScoreEntry {
                    category: ScoreCategory::Pair,
                    cards: vec![a, b],
                    points: PAIR_POINTS,
                });
            }
        }
    }
}

/// One entry per distinct run; a double run of three yields two entries.
fn runs(all: &[Card], entries: &mut Vec<ScoreEntry>) {
    let counts = rank_counts(all);
    let Some((start, len)) = longest_run_span(&counts) else {
        return;
    };

    let mut runs: Vec<Vec<Card>> = vec![Vec::new()];
    for ordinal in start..start + len {
        let at_rank: Vec<Card> = all
            .iter()
            .filter(|card| card.rank.ordinal() as usize == ordinal)
            .copied()
            .collect();
        runs = runs
            .into_iter()
            .flat_map(|run| {
                at_rank.iter().map(move |&card| {
                    let mut next = run.clone();
                    next.push(card);
                    next
                })
            })
            .collect();
    }

    for cards in runs {
        entries.push(ScoreEntry {
            category: ScoreCategory::Run,
            cards,
            points: len as u32,
        });
    }
}

fn flush(hand: &[Card], starter: Card, is_crib: bool, entries: &mut Vec<ScoreEntry>) {
    let Some(first) = hand.first() else {
        return;
    };
    if hand.len() < FLUSH_MIN {
        return;
    }
    if !hand.iter().all(|card| card.suit == first.suit) {
        return;
    }

    let starter_matches = starter.suit == first.suit;
    if is_crib && !starter_matches {
        return;
    }

    let mut cards = hand.to_vec();
    if starter_matches {
        cards.push(starter);
    }
    let points = cards.len() as u32;
    entries.push(ScoreEntry {
        category: ScoreCategory::Flush,
        cards,
        points,
    });
}

fn nobs(hand: &[Card], starter: Card, entries: &mut Vec<ScoreEntry>) {
    if let Some(&jack) = hand
        .iter()
        .find(|card| card.rank == Rank::Jack && card.suit == starter.suit)
    {
        entries.push(ScoreEntry {
            category: ScoreCategory::Nobs,
            cards: vec![jack, starter],
            points: 1,
        });
    }
}
