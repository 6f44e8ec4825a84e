use crate::models::{BucketKey, InvalidBucket};
use crate::solver::TelemetryMetrics;
use nsga_kit::prelude::Float;
use serde::Serialize;

/// A status of a bucket after the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketStatus {
    /// A feasible allocation is found.
    Solved,
    /// No feasible allocation is found.
    Unsatisfiable,
    /// Bucket data is invalid.
    Invalid,
}

/// A diagnostic record of one bucket.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketDiagnostic {
    /// An allocation label.
    pub label: Option<String>,
    /// A size class.
    pub size: String,
    /// A distance tier.
    pub tier: String,
    /// A status.
    pub status: BucketStatus,
    /// A reason of non solved status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Max amount of units.
    pub max_vehicles: Option<u32>,
    /// Amount of generations.
    pub generations: usize,
    /// Duration in milliseconds.
    pub duration_ms: usize,
    /// A fitness of the best allocation.
    pub best_fitness: Option<Float>,
    /// A total cost of the best allocation.
    pub total_cost: Option<Float>,
    /// Total emissions of the best allocation.
    pub total_emissions: Option<Float>,
    /// Total amount of units of the best allocation.
    pub total_vehicles: u32,
    /// Evolution metrics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<TelemetryMetrics>,
}

impl BucketDiagnostic {
    /// Creates a diagnostic of the bucket which failed validation.
    pub fn new_invalid(invalid: &InvalidBucket) -> Self {
        Self {
            reason: Some(invalid.error.to_string()),
            ..Self::new_empty(&invalid.key, invalid.label.clone(), BucketStatus::Invalid)
        }
    }

    /// Creates a diagnostic with given status and no results.
    pub fn new_empty(key: &BucketKey, label: Option<String>, status: BucketStatus) -> Self {
        Self {
            label,
            size: key.size.clone(),
            tier: key.tier.clone(),
            status,
            reason: None,
            max_vehicles: None,
            generations: 0,
            duration_ms: 0,
            best_fitness: None,
            total_cost: None,
            total_emissions: None,
            total_vehicles: 0,
            metrics: None,
        }
    }
}
