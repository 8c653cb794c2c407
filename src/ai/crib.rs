//! Crib discard selection and the value estimates behind it.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::options::OpponentOptions;
use crate::score::{
    FIFTEEN_POINTS, PAIR_POINTS, fifteen_combinations, pair_count, rank_counts, run_points,
};

/// Smallest hand that is searched; smaller hands discard their first two cards.
const FULL_HAND: usize = 6;

/// Estimates what `kept` will score once a starter is cut.
///
/// Counts the fifteens, pairs, runs, and flush already present, then adds
/// weighted credit for near-runs, suit concentration, and fives.
#[must_use]
#[expect(
    clippy::suboptimal_flops,
    reason = "mul_add needs std and the weights stay small"
)]
pub fn estimated_hand_value(kept: &[Card], options: &OpponentOptions) -> f64 {
    let runs = run_points(kept);
    let mut value = f64::from(
        FIFTEEN_POINTS * fifteen_combinations(kept).len() as u32
            + PAIR_POINTS * pair_count(kept)
            + runs,
    );

    if runs == 0 {
        let counts = rank_counts(kept);
        let adjacent = counts
            .windows(2)
            .filter(|pair| pair[0] > 0 && pair[1] > 0)
            .count() as u32;
        value += f64::from(adjacent) * options.hand_adjacent;
    }

    let mut per_suit = [0u32; 4];
    for card in kept {
        per_suit[card.suit as usize] += 1;
    }
    let most = per_suit.iter().copied().max().unwrap_or(0);
    if kept.len() >= 4 && most as usize == kept.len() {
        value += f64::from(most);
    } else {
        value += f64::from(most.saturating_sub(2)) * options.hand_suit_concentration;
    }

    let fives = kept.iter().filter(|card| card.rank == Rank::Five).count() as u32;
    value + f64::from(fives) * options.hand_five
}

/// Estimates what `discards` contribute to the crib.
///
/// Rewards pairs, fives, fifteens, near-sequences, and shared suits.
#[must_use]
pub fn estimated_crib_value(discards: &[Card], options: &OpponentOptions) -> f64 {
    let mut value = 0.0;
    for card in discards {
        if card.rank == Rank::Five {
            value += options.crib_five;
        }
    }

    for (i, a) in discards.iter().enumerate() {
        for b in &discards[i + 1..] {
            if a.rank == b.rank {
                value += options.crib_pair;
            }
            if a.value() + b.value() == 15 {
                value += options.crib_fifteen;
            }
            match a.rank.ordinal().abs_diff(b.rank.ordinal()) {
                1 => value += options.crib_adjacent,
                2 => value += options.crib_gap,
                _ => {}
            }
            if a.suit == b.suit {
                value += options.crib_suited;
            }
        }
    }
    value
}

/// Picks the discard pair maximising kept value, adding the crib estimate
/// for the dealer and subtracting it otherwise.
pub(super) fn choose_crib_cards(
    hand: &[Card],
    is_dealer: bool,
    options: &OpponentOptions,
) -> Option<[Card; 2]> {
    let (&first, &second) = (hand.first()?, hand.get(1)?);
    if hand.len() < FULL_HAND {
        return Some([first, second]);
    }

    let mut best = [first, second];
    let mut best_score = f64::NEG_INFINITY;
    for i in 0..hand.len() {
        for j in i + 1..hand.len() {
            let discards = [hand[i], hand[j]];
            let kept: Vec<Card> = hand
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != i && k != j)
                .map(|(_, &card)| card)
                .collect();

            let crib = estimated_crib_value(&discards, options);
            let score = estimated_hand_value(&kept, options) + if is_dealer { crib } else { -crib };
            if score > best_score {
                best_score = score;
                best = discards;
            }
        }
    }

    tracing::debug!(
        discard_a = %best[0],
        discard_b = %best[1],
        score = best_score,
        is_dealer,
        "chose crib discards"
    );
    Some(best)
}
