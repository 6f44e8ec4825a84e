use super::*;

#[test]
fn can_repeat_sequence_with_same_seed() {
    let sample = |random: &DefaultRandom| (0..100).map(|_| random.uniform_int(0, 1000)).collect::<Vec<_>>();

    assert_eq!(sample(&DefaultRandom::new_with_seed(42)), sample(&DefaultRandom::new_with_seed(42)));
    assert_ne!(sample(&DefaultRandom::new_with_seed(42)), sample(&DefaultRandom::new_with_seed(43)));
}

#[test]
fn can_generate_values_in_range() {
    let random = DefaultRandom::new_repeatable();

    (0..1000).for_each(|_| {
        let int = random.uniform_int(-2, 3);
        let real = random.uniform_real(1., 2.);
        let index = random.uniform_index(5);

        assert!((-2..=3).contains(&int));
        assert!((1. ..2.).contains(&real));
        assert!(index < 5);
    });
}

#[test]
fn can_handle_degenerate_ranges() {
    let random = DefaultRandom::new_repeatable();

    assert_eq!(random.uniform_int(7, 7), 7);
    assert_eq!(random.uniform_real(0.5, 0.5), 0.5);
    assert!(!random.is_hit(0.));
    assert!(random.is_hit(1.));
}
