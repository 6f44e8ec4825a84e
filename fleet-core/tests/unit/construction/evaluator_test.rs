use super::*;
use crate::helpers::models::*;
use crate::models::VehicleOption;

fn vehicle(id: &str, yearly_range: Float, fuel_cost_per_km: Float, emission_per_km: Float) -> VehicleOption {
    VehicleOption { fuel_cost_per_km, ..test_vehicle(id, yearly_range, emission_per_km) }
}

fn create_evaluator(demand: Float, vehicles: Vec<VehicleOption>, variant: &ObjectiveVariant) -> ObjectiveEvaluator {
    ObjectiveEvaluator::new(Arc::new(create_bucket_with_vehicles(demand, vehicles)), variant)
}

#[test]
fn can_evaluate_single_type_allocation() {
    let evaluator = create_evaluator(2500., vec![vehicle("a", 1000., 0.5, 0.2)], &ObjectiveVariant::default());

    let values = evaluator.evaluate(&Allocation::from_counts(&[3]));

    assert_eq!(values.cost, 3. * 1150. + 0.5 * 2500.);
    assert!((values.emissions - 500.).abs() < 1E-9);
    assert_eq!(values.capacity, 3000.);
    assert_eq!(values.deficit, 0.);
    assert_eq!(values.total, 3);
    assert!(values.is_feasible);
}

#[test]
fn can_attribute_demand_by_emission_first() {
    let evaluator = create_evaluator(
        2000.,
        vec![vehicle("a", 1000., 0.5, 0.5), vehicle("b", 500., 0.5, 0.2)],
        &ObjectiveVariant::EmissionMinimizing,
    );

    let shares = evaluator.breakdown(&Allocation::from_counts(&[1, 2]));

    assert_eq!(evaluator.attribution_order(), &[1, 0]);
    assert_eq!(shares.iter().map(|share| (share.index, share.assigned_distance)).collect::<Vec<_>>(), vec![
        (1, 1000.),
        (0, 1000.)
    ]);
    assert!((evaluator.evaluate(&Allocation::from_counts(&[1, 2])).emissions - 700.).abs() < 1E-9);
}

#[test]
fn can_attribute_demand_by_fuel_cost_first() {
    let evaluator = create_evaluator(
        1500.,
        vec![vehicle("a", 1000., 0.1, 0.5), vehicle("b", 500., 0.3, 0.2)],
        &ObjectiveVariant::CostMinimizing,
    );

    let values = evaluator.evaluate(&Allocation::from_counts(&[1, 2]));

    assert_eq!(evaluator.attribution_order(), &[0, 1]);
    assert!((values.cost - 3700.).abs() < 1E-9);
    assert!((values.emissions - (0.5 * 1000. + 0.2 * 500.)).abs() < 1E-9);
}

parameterized_test! {can_use_weighted_blend_in_tradeoff_order, (cost_weight, emission_weight, expected), {
    let evaluator = create_evaluator(
        1500.,
        vec![vehicle("a", 1000., 0.1, 0.5), vehicle("b", 500., 0.3, 0.2)],
        &ObjectiveVariant::Tradeoff { cost_weight, emission_weight },
    );

    assert_eq!(evaluator.attribution_order(), expected);
}}

can_use_weighted_blend_in_tradeoff_order! {
    case01_equal_weights: (0.5, 0.5, &[0, 1]),
    case02_emission_heavy: (0.1, 0.9, &[1, 0]),
    case03_cost_only: (1., 0., &[0, 1]),
}

#[test]
fn can_skip_unused_types_and_unassigned_demand() {
    let evaluator = create_evaluator(
        1000.,
        vec![vehicle("a", 1000., 0.5, 0.1), vehicle("b", 1000., 0.5, 0.2), vehicle("c", 1000., 0.5, 0.3)],
        &ObjectiveVariant::EmissionMinimizing,
    );

    let shares = evaluator.breakdown(&Allocation::from_counts(&[1, 0, 1]));

    assert_eq!(shares.len(), 2);
    assert_eq!(shares[1].index, 2);
    assert_eq!(shares[1].assigned_distance, 0.);
    assert_eq!(shares[1].cost, 1150.);
    assert_eq!(shares[1].emissions, 0.);
}

#[test]
fn can_rank_infeasible_allocation_behind_feasible() {
    let evaluator = create_evaluator(2000., vec![vehicle("a", 1000., 0.5, 0.5)], &ObjectiveVariant::default());

    let values = evaluator.evaluate(&Allocation::from_counts(&[1]));

    assert!(!values.is_feasible);
    assert_eq!(values.deficit, 1000.);
    assert_eq!(values.ranking_pair(), (Float::INFINITY, Float::INFINITY));
}
