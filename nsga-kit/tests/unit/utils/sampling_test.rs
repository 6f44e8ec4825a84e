use super::*;
use crate::helpers::utils::FakeRandom;
use crate::utils::DefaultRandom;

#[test]
fn can_map_random_values_to_indices() {
    let sampler = CumulativeSampler::new(&[1., 0., 3.]).unwrap();
    let random = FakeRandom::new(vec![], vec![0., 0.99, 1., 3.99]);

    let indices = (0..4).map(|_| sampler.sample(&random)).collect::<Vec<_>>();

    assert_eq!(indices, vec![0, 0, 2, 2]);
}

#[test]
fn can_use_uniform_distribution_for_non_positive_weights() {
    let sampler = CumulativeSampler::new(&[0., -1., Float::NAN, 0.]).unwrap();

    (0..4).for_each(|idx| assert_eq!(sampler.probability(idx), 0.25));
}

#[test]
fn can_return_none_for_empty_weights() {
    assert!(CumulativeSampler::new(&[]).is_none());
}

#[test]
fn can_sample_proportionally_to_weights() {
    let weights = [100., 50., 20.];
    let sampler = CumulativeSampler::new(&weights).unwrap();
    let random = DefaultRandom::new_with_seed(7);
    let experiments = 10000_usize;
    let total = weights.iter().sum::<Float>();
    let mut counter = [0_usize; 3];

    (0..experiments).for_each(|_| counter[sampler.sample(&random)] += 1);

    weights.iter().enumerate().for_each(|(idx, weight)| {
        let actual_ratio = counter[idx] as Float / experiments as Float;

        assert!((actual_ratio - weight / total).abs() < 0.05);
        assert!((sampler.probability(idx) - weight / total).abs() < 1E-9);
    });
}
