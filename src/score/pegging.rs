//! Scoring for cards played during pegging.

use crate::card::Card;
use crate::result::PegPoints;

use super::{FIFTEEN_POINTS, MIN_RUN, PAIR_POINTS, rank_counts};

/// Count that scores for fifteen.
pub const FIFTEEN: u32 = 15;
/// Maximum count, which also scores.
pub const THIRTY_ONE: u32 = 31;

/// Scores the last card of `pile`, given the count it brought the pile to.
///
/// `pile` must hold only the cards played since the last reset, in play
/// order, ending with the card just played. The count is supplied by the
/// caller and is not recomputed from the pile.
///
/// # Example
///
/// ```
/// use cribrs::{Card, Rank, Suit, points_for_pile};
///
/// let pile = [
///     Card::new(Rank::Seven, Suit::Clubs),
///     Card::new(Rank::Eight, Suit::Hearts),
/// ];
/// let points = points_for_pile(&pile, 15);
/// assert_eq!(points.fifteen, 2);
/// assert_eq!(points.total, 2);
/// ```
#[must_use]
pub fn points_for_pile(pile: &[Card], new_count: u32) -> PegPoints {
    let fifteen = if new_count == FIFTEEN { FIFTEEN_POINTS } else { 0 };
    let thirty_one = if new_count == THIRTY_ONE { 2 } else { 0 };

    let same_rank_count = trailing_same_rank(pile);
    let pair_points = PAIR_POINTS * same_rank_count * same_rank_count.saturating_sub(1) / 2;
    let run_points = trailing_run_points(pile);

    PegPoints {
        fifteen,
        thirty_one,
        pair_points,
        same_rank_count,
        run_points,
        total: fifteen + thirty_one + pair_points + run_points,
    }
}

/// Length of the streak of cards sharing the last card's rank.
fn trailing_same_rank(pile: &[Card]) -> u32 {
    let Some(last) = pile.last() else {
        return 0;
    };
    pile.iter()
        .rev()
        .take_while(|card| card.rank == last.rank)
        .count() as u32
}

/// Run points for the longest qualifying tail of the pile.
///
/// Tails are tried from the whole pile down to three cards and the first
/// qualifying one scores. A tail qualifies when its distinct ranks form an
/// unbroken span of three or more and the card just played is the only one
/// of its rank in the tail. Repeated ranks earlier in the tail multiply the
/// run, as in show scoring.
fn trailing_run_points(pile: &[Card]) -> u32 {
    let Some(last) = pile.last() else {
        return 0;
    };

    for len in (MIN_RUN..=pile.len()).rev() {
        let window = &pile[pile.len() - len..];
        let counts = rank_counts(window);
        if counts[last.rank.ordinal() as usize] != 1 {
            continue;
        }

        let mut present = counts
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(ordinal, _)| ordinal);
        let Some(low) = present.next() else {
            continue;
        };
        let high = present.next_back().unwrap_or(low);
        let span = high - low + 1;
        let distinct = counts.iter().filter(|&&n| n > 0).count();

        if span >= MIN_RUN && span == distinct {
            let multiplier: u32 = counts[low..=high].iter().map(|&n| u32::from(n)).product();
            return span as u32 * multiplier;
        }
    }
    0
}
