//! Pegging scorer tests.

mod common;

use common::{cards, init_logging};
use cribrs::{PegPoints, points_for_pile};

fn score(pile: &str) -> PegPoints {
    let pile = cards(pile);
    let count = pile.iter().map(|card| u32::from(card.value())).sum();
    points_for_pile(&pile, count)
}

#[test]
fn fifteen_and_thirty_one() {
    init_logging();
    let points = score("7C 8H");
    assert_eq!(points.fifteen, 2);
    assert_eq!(points.thirty_one, 0);
    assert_eq!(points.total, 2);

    let points = score("KC QD 9H 2S");
    assert_eq!(points.thirty_one, 2);
    assert_eq!(points.fifteen, 0);
    assert_eq!(points.total, 2);
}

#[test]
fn count_is_taken_from_caller() {
    let pile = cards("KC QD AH");
    let points = points_for_pile(&pile, 31);
    assert_eq!(points.thirty_one, 2);
    assert_eq!(points.total, 2);
}

#[test]
fn trailing_pairs() {
    let points = score("5C 5D");
    assert_eq!(points.pair_points, 2);
    assert_eq!(points.same_rank_count, 2);

    let points = score("4C 4D 4H");
    assert_eq!(points.pair_points, 6);
    assert_eq!(points.same_rank_count, 3);

    let points = score("3C 3D 3H 3S");
    assert_eq!(points.pair_points, 12);
    assert_eq!(points.same_rank_count, 4);
    assert_eq!(points.total, 12);
}

#[test]
fn interrupted_pair_does_not_score() {
    let points = score("4C 4D 6H 4S");
    assert_eq!(points.same_rank_count, 1);
    assert_eq!(points.pair_points, 0);
}

#[test]
fn runs_in_any_play_order() {
    assert_eq!(score("3C 5D 4H").run_points, 3);
    assert_eq!(score("3C 5D 4H 6S").run_points, 4);
    assert_eq!(score("6C 2D 4H 3S 5C").run_points, 5);
}

#[test]
fn earlier_card_limits_run_length() {
    let points = score("9C 3D 4H 5S");
    assert_eq!(points.run_points, 3);
    assert_eq!(points.total, 3);
}

#[test]
fn gaps_do_not_score() {
    assert_eq!(score("2C 4D 6H").run_points, 0);
    assert_eq!(score("KC AD 2H").run_points, 0);
}

#[test]
fn repeated_last_rank_breaks_the_run() {
    let points = score("3C 4D 5H 5S");
    assert_eq!(points.run_points, 0);
    assert_eq!(points.pair_points, 2);
    assert_eq!(points.total, 2);

    let points = score("4C 3D 5H 3S");
    assert_eq!(points.run_points, 0);
    assert_eq!(points.fifteen, 2);
    assert_eq!(points.total, 2);
}

#[test]
fn repeated_earlier_rank_multiplies_the_run() {
    let points = score("3C 3D 4H 5S");
    assert_eq!(points.run_points, 6);
    assert_eq!(points.fifteen, 2);
    assert_eq!(points.total, 8);
}

#[test]
fn empty_pile_scores_nothing() {
    assert_eq!(points_for_pile(&[], 0), PegPoints::default());
}

#[test]
fn double_double_run_while_pegging() {
    let points = score("3C 3D 4S 4H 5C");
    assert_eq!(points.run_points, 12);
    assert_eq!(points.pair_points, 0);
    assert_eq!(points.total, 12);
}
