use super::*;
use crate::construction::create_basic_allocation;
use crate::helpers::models::*;
use crate::helpers::utils::FakeRandom;
use crate::models::BucketContext;

fn run_crossover(
    bucket: &BucketContext,
    random: FakeRandom,
    parents: (&[u32], &[u32]),
    attempts: usize,
) -> (Allocation, Allocation) {
    let basic = create_basic_allocation(bucket);
    let ctx = OperatorContext { bucket, basic: &basic, random: &random };

    crossover(&ctx, (&Allocation::from_counts(parents.0), &Allocation::from_counts(parents.1)), attempts)
}

#[test]
fn can_exchange_middle_segment_with_two_cuts() {
    let bucket = create_bucket(2000., &[(1000., 0.1), (1000., 0.2), (1000., 0.3), (1000., 0.4)]);

    let (first, second) = run_crossover(&bucket, FakeRandom::new(vec![1, 2], vec![]), (&[1, 1, 0, 0], &[0, 0, 1, 1]), 10);

    assert_eq!(first.counts(), &[1, 0, 1, 0]);
    assert_eq!(second.counts(), &[0, 1, 0, 1]);
}

#[test]
fn can_resample_cuts_until_children_are_feasible() {
    let bucket = create_bucket(2000., &[(1000., 0.1), (1000., 0.2), (1000., 0.3), (1000., 0.4)]);

    // first cuts (2, 3) swap the third type only: [1, 1, 1, 0] and [0, 0, 0, 1] are infeasible
    let random = FakeRandom::new(vec![2, 2, 1, 2], vec![]);
    let (first, second) = run_crossover(&bucket, random, (&[1, 1, 0, 0], &[0, 0, 1, 1]), 10);

    assert_eq!(first.counts(), &[1, 0, 1, 0]);
    assert_eq!(second.counts(), &[0, 1, 0, 1]);
}

#[test]
fn can_repair_children_after_attempts_are_exhausted() {
    let bucket = create_bucket(2000., &[(1000., 0.5), (1000., 0.2)]);

    let (first, second) = run_crossover(&bucket, FakeRandom::new(vec![1], vec![]), (&[1, 1], &[2, 0]), 1);

    assert_eq!(first.counts(), &[1, 1]);
    assert_eq!(second.counts(), &[1, 1]);
}

#[test]
fn can_copy_parents_with_one_vehicle_type() {
    let bucket = create_bucket(2500., &[(1000., 0.5)]);

    let (first, second) = run_crossover(&bucket, FakeRandom::new(vec![], vec![]), (&[3], &[3]), 10);

    assert_eq!(first.counts(), &[3]);
    assert_eq!(second.counts(), &[3]);
}
