//! Hand and pegging scoring.
//!
//! Both scorers are pure functions. The helpers here are shared with the
//! opponent heuristics, which evaluate partial hands the same way.

use alloc::vec::Vec;

use crate::card::Card;

pub mod hand;
pub mod pegging;

pub use hand::{heels_points, score_hand, score_hand_with_breakdown};
pub use pegging::points_for_pile;

/// Points per fifteen and per pair.
pub(crate) const FIFTEEN_POINTS: u32 = 2;
pub(crate) const PAIR_POINTS: u32 = 2;

/// Shortest sequence that scores as a run.
pub(crate) const MIN_RUN: usize = 3;

/// Counts cards per rank ordinal.
pub(crate) fn rank_counts(cards: &[Card]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for card in cards {
        counts[card.rank.ordinal() as usize] += 1;
    }
    counts
}

/// Returns every subset of two or more cards whose values sum to 15.
pub(crate) fn fifteen_combinations(cards: &[Card]) -> Vec<Vec<Card>> {
    let n = cards.len().min(16);
    let mut found = Vec::new();
    for mask in 1u32..(1 << n) {
        if mask.count_ones() < 2 {
            continue;
        }
        let sum: u32 = (0..n)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| u32::from(cards[i].value()))
            .sum();
        if sum == 15 {
            found.push(
                (0..n)
                    .filter(|i| mask & (1 << i) != 0)
                    .map(|i| cards[i])
                    .collect(),
            );
        }
    }
    found
}

/// Number of same-rank pairs among the cards.
pub(crate) fn pair_count(cards: &[Card]) -> u32 {
    rank_counts(cards)
        .iter()
        .map(|&n| u32::from(n) * u32::from(n.saturating_sub(1)) / 2)
        .sum()
}

/// Longest span of consecutive present ranks, as `(first ordinal, length)`.
///
/// Returns `None` unless the span is at least [`MIN_RUN`] long. The lowest
/// span wins a tie in length.
pub(crate) fn longest_run_span(counts: &[u8; 13]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut start = 0;
    let mut len = 0;
    for (ordinal, &count) in counts.iter().enumerate() {
        if count > 0 {
            if len == 0 {
                start = ordinal;
            }
            len += 1;
            if len >= MIN_RUN && best.is_none_or(|(_, best_len)| len > best_len) {
                best = Some((start, len));
            }
        } else {
            len = 0;
        }
    }
    best
}

/// Run points for a span: its length times the multiplicity of each rank.
pub(crate) fn span_points(counts: &[u8; 13], start: usize, len: usize) -> u32 {
    let multiplier: u32 = counts[start..start + len]
        .iter()
        .map(|&n| u32::from(n))
        .product();
    len as u32 * multiplier
}

/// Run points for an unordered set of cards.
pub(crate) fn run_points(cards: &[Card]) -> u32 {
    let counts = rank_counts(cards);
    longest_run_span(&counts).map_or(0, |(start, len)| span_points(&counts, start, len))
}
