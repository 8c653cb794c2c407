//! Pegging card selection.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::options::OpponentOptions;
use crate::score::pegging::{THIRTY_ONE, points_for_pile};

/// Counts from which the other player is unlikely to be able to play.
const HIGH_COUNTS: core::ops::RangeInclusive<u32> = 26..=30;

pub(super) fn choose_pegging_card(
    hand: &[Card],
    played_indices: &[usize],
    current_count: u32,
    pegging_pile: &[Card],
    opponent_cards_remaining: usize,
    options: &OpponentOptions,
) -> Option<(usize, Card)> {
    let endgame = opponent_cards_remaining <= options.endgame_threshold;
    let mut pile: Vec<Card> = Vec::with_capacity(pegging_pile.len() + 1);

    let mut best: Option<(usize, Card, f64)> = None;
    for (index, &card) in hand.iter().enumerate() {
        if played_indices.contains(&index) {
            continue;
        }
        let new_count = current_count + u32::from(card.value());
        if new_count > THIRTY_ONE {
            continue;
        }

        pile.clear();
        pile.extend_from_slice(pegging_pile);
        pile.push(card);
        let points = points_for_pile(&pile, new_count);

        let mut score = f64::from(points.total);
        if endgame {
            score *= options.endgame_multiplier;
        }
        if points.thirty_one > 0 {
            score += options.thirty_one_bonus;
        }
        if points.fifteen > 0 {
            score += options.fifteen_bonus;
        }
        if points.pair_points > 0 {
            score += options.pair_bonus;
        }
        if points.run_points > 0 {
            score += options.run_bonus;
        }
        if HIGH_COUNTS.contains(&new_count) {
            score += options.high_count_bonus;
        }
        if card.rank == Rank::Five && current_count <= options.low_count_limit {
            score -= options.low_five_penalty;
        }

        if best.is_none_or(|(_, _, best_score)| score > best_score) {
            best = Some((index, card, score));
        }
    }

    let (index, card, score) = best?;
    tracing::debug!(index, %card, score, current_count, endgame, "chose pegging card");
    Some((index, card))
}
