use super::*;
use crate::helpers::utils::FakeRandom;

#[test]
fn can_select_best_participant() {
    let random = FakeRandom::new(vec![2, 3], vec![]);

    assert_eq!(tournament(&[0.1, 0.5, 0.3, 0.9], 2, &random), 3);
}

#[test]
fn can_ignore_non_participants() {
    let random = FakeRandom::new(vec![0, 2], vec![]);

    assert_eq!(tournament(&[0.1, 0.5, 0.3, 0.9], 2, &random), 2);
}

#[test]
fn can_clamp_tournament_size() {
    let random = FakeRandom::new(vec![0], vec![]);

    assert_eq!(tournament(&[1.], 3, &random), 0);
}

#[test]
fn can_prefer_first_drawn_on_ties() {
    let random = FakeRandom::new(vec![1, 1], vec![]);

    assert_eq!(tournament(&[0.5, 0.5], 2, &random), 1);
}

#[test]
fn can_handle_infinite_penalty() {
    let random = FakeRandom::new(vec![0, 1], vec![]);

    assert_eq!(tournament(&[Float::NEG_INFINITY, -1E6], 2, &random), 1);
}
