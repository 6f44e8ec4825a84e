#[cfg(test)]
#[path = "../../tests/unit/output/summary_test.rs"]
mod summary_test;

use crate::output::{AllocationRecord, BucketDiagnostic, BucketStatus};
use nsga_kit::prelude::Float;
use nsga_kit::utils::round_to;
use serde::Serialize;

/// Aggregated totals of one run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunSummary {
    /// A run label, e.g. a year of the batch.
    pub label: String,
    /// Total cost over all buckets.
    pub total_cost: Float,
    /// Total emissions over all buckets.
    pub total_emissions: Float,
    /// Total amount of units over all buckets.
    pub total_vehicles: u32,
    /// Amount of solved buckets.
    pub solved: usize,
    /// Amount of unsatisfiable buckets.
    pub unsatisfiable: usize,
    /// Amount of invalid buckets.
    pub invalid: usize,
}

impl RunSummary {
    /// Creates a new instance of `RunSummary`.
    pub fn new(label: &str, records: &[AllocationRecord], diagnostics: &[BucketDiagnostic]) -> Self {
        let count_status = |status: BucketStatus| diagnostics.iter().filter(|d| d.status == status).count();

        Self {
            label: label.to_string(),
            total_cost: round_to(records.iter().map(|r| r.cost).sum(), 2),
            total_emissions: round_to(records.iter().map(|r| r.emissions).sum(), 2),
            total_vehicles: records.iter().map(|r| r.count).sum(),
            solved: count_status(BucketStatus::Solved),
            unsatisfiable: count_status(BucketStatus::Unsatisfiable),
            invalid: count_status(BucketStatus::Invalid),
        }
    }
}
