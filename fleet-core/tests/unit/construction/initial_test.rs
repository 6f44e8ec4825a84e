use super::*;
use crate::helpers::models::*;
use crate::models::VehicleOption;
use nsga_kit::prelude::DefaultRandom;

#[test]
fn can_start_with_greedy_allocations() {
    let bucket = create_bucket(2400., &[(1000., 0.5), (800., 0.2), (800., 0.1)]);
    let random = DefaultRandom::new_with_seed(1);

    let population =
        create_initial_population(&bucket, 5, &DesirabilitySource::Score, &random, |allocation| allocation.clone());

    assert_eq!(population.len(), 5);
    assert_eq!(population[0].counts(), &[0, 0, 3]);
    assert_eq!(population[1].counts(), &[3, 0, 0]);
    assert!(population.iter().all(|allocation| bucket.is_feasible(allocation)));
}

#[test]
fn can_fill_population_when_few_distinct_allocations_exist() {
    let bucket = create_bucket(2000., &[(1000., 0.5), (500., 0.2), (800., 0.1)]);
    let random = DefaultRandom::new_with_seed(2);

    let population =
        create_initial_population(&bucket, 10, &DesirabilitySource::Score, &random, |allocation| allocation.clone());

    assert_eq!(population.len(), 10);
    assert!(population.iter().all(|allocation| allocation.counts() == [2, 0, 0]));
}

#[test]
fn can_keep_random_allocations_distinct() {
    let bucket = create_bucket(2400., &[(1000., 0.5), (800., 0.2), (800., 0.1)]);
    let random = DefaultRandom::new_with_seed(3);

    let population =
        create_initial_population(&bucket, 4, &DesirabilitySource::Rank, &random, |allocation| allocation.clone());
    let distinct = population.iter().collect::<std::collections::HashSet<_>>();

    assert_eq!(population.len(), 4);
    assert!(distinct.len() >= 2);
}

#[test]
fn can_return_empty_population_for_zero_size() {
    let bucket = create_bucket(1000., &[(1000., 0.5)]);
    let random = DefaultRandom::new_with_seed(0);

    let population = create_initial_population(&bucket, 0, &DesirabilitySource::Score, &random, |a| a.clone());

    assert!(population.is_empty());
}

#[test]
fn can_get_weights_from_desirability_source() {
    let vehicles = vec![
        VehicleOption { desirability_score: 0.9, desirability_rank: Some(3), ..test_vehicle("a", 100., 0.) },
        VehicleOption { desirability_score: 0.4, desirability_rank: Some(2), ..test_vehicle("b", 100., 0.) },
        VehicleOption { desirability_score: 0.2, desirability_rank: None, ..test_vehicle("c", 100., 0.) },
    ];
    let bucket = create_bucket_with_vehicles(100., vehicles);

    assert_eq!(DesirabilitySource::Score.weights(&bucket), vec![0.9, 0.4, 0.2]);
    assert_eq!(DesirabilitySource::Rank.weights(&bucket), vec![3., 2., 0.]);
}

#[test]
fn can_favour_higher_score_with_rank_weights() {
    let vehicles = vec![
        VehicleOption { desirability_score: 0.74, desirability_rank: Some(2), ..test_vehicle("good", 100., 0.) },
        VehicleOption { desirability_score: 0.40, desirability_rank: Some(1), ..test_vehicle("poor", 100., 0.) },
    ];
    let bucket = create_bucket_with_vehicles(100., vehicles);

    let score_weights = DesirabilitySource::Score.weights(&bucket);
    let rank_weights = DesirabilitySource::Rank.weights(&bucket);

    assert!(score_weights[0] > score_weights[1]);
    assert!(rank_weights[0] > rank_weights[1]);
}
