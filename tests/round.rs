//! Pegging round state machine tests.

mod common;

use common::{c, init_logging};
use cribrs::{PeggingRound, RoundReset, Seat};

fn pile_sum(round: &PeggingRound) -> u32 {
    round.pile().iter().map(|card| u32::from(card.value())).sum()
}

#[test]
fn new_round_starts_empty_with_non_dealer() {
    init_logging();
    let round = PeggingRound::new(Seat::Opponent);
    assert_eq!(round.count(), 0);
    assert!(round.pile().is_empty());
    assert_eq!(round.turn(), Seat::Opponent);
    assert_eq!(round.consecutive_goes(), 0);
    assert_eq!(round.last_player_who_played(), None);
}

#[test]
fn plays_alternate_turns() {
    let mut round = PeggingRound::new(Seat::Player);

    let outcome = round.on_play(c("10C"));
    assert_eq!(outcome.player, Seat::Player);
    assert_eq!(outcome.reset, None);
    assert_eq!(round.count(), 10);
    assert_eq!(round.turn(), Seat::Opponent);
    assert_eq!(round.last_player_who_played(), Some(Seat::Player));

    let outcome = round.on_play(c("5D"));
    assert_eq!(outcome.player, Seat::Opponent);
    assert_eq!(outcome.points.fifteen, 2);
    assert_eq!(round.count(), 15);
    assert_eq!(round.turn(), Seat::Player);
    assert_eq!(round.pile().len(), 2);
    assert_eq!(pile_sum(&round), round.count());
}

#[test]
fn thirty_one_scores_and_resets() {
    init_logging();
    let mut round = PeggingRound::new(Seat::Player);
    round.on_play(c("KC"));
    round.on_play(c("QD"));
    round.on_play(c("JH"));
    assert_eq!(round.count(), 30);

    let outcome = round.on_play(c("AS"));
    assert_eq!(outcome.player, Seat::Opponent);
    assert_eq!(outcome.points.thirty_one, 2);
    assert_eq!(outcome.reset, Some(RoundReset::ThirtyOne));
    assert!(outcome.reset.is_some_and(RoundReset::reset_for_31));
    assert_eq!(outcome.reset.and_then(RoundReset::go_point_to), None);

    assert_eq!(round.count(), 0);
    assert!(round.pile().is_empty());
    assert_eq!(round.turn(), Seat::Player);
    assert_eq!(round.last_player_who_played(), None);
    assert_eq!(round.consecutive_goes(), 0);
}

#[test]
fn go_with_reply_passes_turn() {
    let mut round = PeggingRound::new(Seat::Player);
    round.on_play(c("KC"));
    round.on_play(c("QD"));
    round.on_play(c("9H"));
    assert_eq!(round.turn(), Seat::Opponent);

    let reset = round.on_go(true);
    assert_eq!(reset, None);
    assert_eq!(round.turn(), Seat::Player);
    assert_eq!(round.consecutive_goes(), 1);
    assert_eq!(round.count(), 29);

    round.on_play(c("2S"));
    assert_eq!(round.consecutive_goes(), 0);
}

#[test]
fn two_goes_reset_and_award_last_player() {
    init_logging();
    let mut round = PeggingRound::new(Seat::Player);
    round.on_play(c("KC"));
    round.on_play(c("QD"));
    round.on_play(c("8H"));
    assert_eq!(round.count(), 28);

    // Opponent cannot play; player might.
    assert_eq!(round.on_go(true), None);
    // Player cannot play either.
    let reset = round.on_go(false);

    assert_eq!(
        reset,
        Some(RoundReset::Go {
            point_to: Some(Seat::Player)
        })
    );
    assert!(reset.is_some_and(|r| !r.reset_for_31()));
    assert_eq!(reset.and_then(RoundReset::go_point_to), Some(Seat::Player));
    assert_eq!(round.count(), 0);
    assert!(round.pile().is_empty());
    assert_eq!(round.turn(), Seat::Opponent);
    assert_eq!(round.consecutive_goes(), 0);
    assert_eq!(round.last_player_who_played(), None);
}

#[test]
fn go_before_any_play_awards_nothing() {
    let mut round = PeggingRound::new(Seat::Opponent);
    let reset = round.on_go(false);
    assert_eq!(reset, Some(RoundReset::Go { point_to: None }));
    assert_eq!(round.turn(), Seat::Player);
}

#[test]
fn consecutive_goes_saturate_at_two() {
    let mut round = PeggingRound::new(Seat::Player);
    round.on_play(c("KC"));
    round.on_go(true);
    round.on_go(true);
    round.on_go(true);
    assert_eq!(round.consecutive_goes(), 2);
}

#[test]
fn can_play_checks_thirty_one() {
    let mut round = PeggingRound::new(Seat::Player);
    round.on_play(c("KC"));
    round.on_play(c("QD"));
    round.on_play(c("5H"));
    assert_eq!(round.count(), 25);
    assert!(round.can_play(c("6S")));
    assert!(!round.can_play(c("7S")));
}

#[test]
fn play_after_reset_starts_fresh_pile() {
    let mut round = PeggingRound::new(Seat::Player);
    round.on_play(c("5C"));
    round.on_play(c("KD"));
    round.on_play(c("QH"));
    round.on_go(false);

    let outcome = round.on_play(c("5S"));
    assert_eq!(outcome.points.pair_points, 0);
    assert_eq!(round.pile(), &[c("5S")]);
    assert_eq!(round.count(), 5);
}
