use super::*;
use crate::models::BucketKey;

fn create_record(count: u32, cost: Float, emissions: Float) -> AllocationRecord {
    AllocationRecord {
        label: Some("2023".to_string()),
        size: "S1".to_string(),
        tier: "D1".to_string(),
        vehicle: "v0".to_string(),
        fuel: "Diesel".to_string(),
        count,
        max_vehicles: 10,
        demand: 1000.,
        assigned_distance: 1000.,
        yearly_range: 1000.,
        utilization: 100.,
        demand_fulfillment: 100.,
        cost,
        emissions,
        emission_per_km: 0.1,
    }
}

#[test]
fn can_aggregate_records_and_statuses() {
    let key = BucketKey::new("S1", "D1");
    let records = vec![create_record(2, 100.115, 10.), create_record(3, 200.1, 20.005)];
    let diagnostics = vec![
        BucketDiagnostic::new_empty(&key, None, BucketStatus::Solved),
        BucketDiagnostic::new_empty(&key, None, BucketStatus::Solved),
        BucketDiagnostic::new_empty(&key, None, BucketStatus::Unsatisfiable),
        BucketDiagnostic::new_empty(&key, None, BucketStatus::Invalid),
    ];

    let summary = RunSummary::new("2023", records.as_slice(), diagnostics.as_slice());

    assert_eq!(summary.label, "2023");
    assert_eq!(summary.total_vehicles, 5);
    assert!((summary.total_cost - 300.22).abs() < 0.011);
    assert!((summary.total_emissions - 30.01).abs() < 0.011);
    assert_eq!((summary.solved, summary.unsatisfiable, summary.invalid), (2, 1, 1));
}

#[test]
fn can_create_empty_summary() {
    let summary = RunSummary::new("empty", &[], &[]);

    assert_eq!(summary.total_vehicles, 0);
    assert_eq!(summary.total_cost, 0.);
    assert_eq!((summary.solved, summary.unsatisfiable, summary.invalid), (0, 0, 0));
}
