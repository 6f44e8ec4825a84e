use super::*;
use crate::helpers::models::*;

fn create_records_for(demand: Float, vehicles: &[(Float, Float)], variant: ObjectiveVariant, counts: &[u32]) -> GenericResult<Vec<AllocationRecord>> {
    let evaluator = ObjectiveEvaluator::new(create_shared_bucket(demand, vehicles), &variant);

    create_records(&evaluator, &variant, &Allocation::from_counts(counts))
}

#[test]
fn can_create_record_for_single_vehicle_type() {
    let records = create_records_for(2500., &[(1000., 0.2)], ObjectiveVariant::default(), &[3]).expect("no records");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.vehicle, "v0");
    assert_eq!((record.count, record.max_vehicles), (3, 3));
    assert_eq!(record.assigned_distance, 2500.);
    assert_eq!(record.utilization, 83.33);
    assert_eq!(record.demand_fulfillment, 100.);
    assert_eq!(record.cost, 4700.);
    assert_eq!(record.emissions, 500.);
}

#[test]
fn can_attribute_demand_to_lower_emission_type_first() {
    let records =
        create_records_for(1800., &[(1000., 0.5), (900., 0.2)], ObjectiveVariant::default(), &[1, 1]).expect("no records");

    assert_eq!(
        records
            .iter()
            .map(|r| (r.vehicle.as_str(), r.assigned_distance, r.cost, r.emissions, r.utilization, r.demand_fulfillment))
            .collect::<Vec<_>>(),
        vec![("v0", 900., 1600., 450., 90., 50.), ("v1", 900., 1600., 180., 100., 50.)]
    );
}

#[test]
fn can_use_capacity_based_fulfillment_for_emission_variant() {
    let records = create_records_for(1800., &[(1000., 0.5), (900., 0.2)], ObjectiveVariant::EmissionMinimizing, &[1, 1])
        .expect("no records");

    assert!(records.iter().all(|record| record.demand_fulfillment == 100.));
}

#[test]
fn can_skip_unused_vehicle_types() {
    let records =
        create_records_for(1800., &[(1000., 0.5), (900., 0.2)], ObjectiveVariant::default(), &[0, 2]).expect("no records");

    assert_eq!(records.iter().map(|r| (r.vehicle.as_str(), r.count)).collect::<Vec<_>>(), vec![("v1", 2)]);
}

#[test]
fn can_reject_infeasible_allocation() {
    let result = create_records_for(1800., &[(1000., 0.5), (900., 0.2)], ObjectiveVariant::default(), &[0, 1]);

    assert!(result.is_err());
}

#[test]
fn can_serialize_record_with_output_headers() {
    let records = create_records_for(2500., &[(1000., 0.2)], ObjectiveVariant::default(), &[3]).expect("no records");

    let json = serde_json::to_string(&records[0]).expect("cannot serialize");

    assert!(json.contains("\"no_of_vehicles\":3"));
    assert!(json.contains("\"Demand_Fulfillment\":100.0"));
    assert!(json.contains("\"Max Vehicles\":3"));
}

parameterized_test! {can_get_utilization, (distance, count, range, expected), {
    assert_eq!(get_utilization(distance, count, range), expected);
}}

can_get_utilization! {
    case01_full: (2000., 2, 1000., 100.),
    case02_half: (500., 1, 1000., 50.),
    case03_no_units: (500., 0, 1000., 0.),
    case04_no_range: (500., 1, 0., 0.),
}
