//! The solver module contains the evolution loop and the entry point which solves all buckets.
//!
//! Each bucket is solved independently on a thread pool. A random generator of a bucket is seeded
//! from the run seed and the bucket key, so results do not depend on scheduling order.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::construction::ObjectiveEvaluator;
use crate::models::{BucketContext, VehicleRow, group_into_buckets};
use crate::output::*;
use nsga_kit::prelude::*;
use nsga_kit::utils::{parallel_into_collect, random_seed, round_to};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

mod builder;
pub use self::builder::SolverBuilder;

mod config;
pub use self::config::*;

mod evolution;
pub use self::evolution::{BucketOutcome, solve_bucket};

pub mod operators;

mod ranking;
pub use self::ranking::{FleetObjective, Individual, rank_population};

mod telemetry;
pub use self::telemetry::*;

pub use crate::construction::DesirabilitySource;

/// A result of the run over all buckets.
pub struct SolveResult {
    /// Output records of solved buckets ordered by bucket key.
    pub records: Vec<AllocationRecord>,
    /// Diagnostics of all buckets ordered by bucket key.
    pub diagnostics: Vec<BucketDiagnostic>,
}

impl SolveResult {
    /// Creates a run summary with given label.
    pub fn summary(&self, label: &str) -> RunSummary {
        RunSummary::new(label, self.records.as_slice(), self.diagnostics.as_slice())
    }
}

/// A solver which finds allocations for all buckets.
pub struct Solver {
    environment: Environment,
    config: SolverConfig,
    telemetry_mode: TelemetryMode,
}

impl Solver {
    /// Creates a new instance of `Solver`. Prefer [`SolverBuilder`] which validates configuration.
    pub fn new(environment: Environment, config: SolverConfig, telemetry_mode: TelemetryMode) -> Self {
        Self { environment, config, telemetry_mode }
    }

    /// Returns solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Groups rows into buckets and solves each of them. Invalid buckets are reported in
    /// diagnostics and do not stop the run.
    pub fn solve(&self, rows: Vec<VehicleRow>) -> GenericResult<SolveResult> {
        let seed = self.environment.seed.unwrap_or_else(|| {
            let seed = random_seed();
            self.log(format!("no seed configured, using seed={seed}").as_str());
            seed
        });

        let buckets = group_into_buckets(rows);
        let thread_count = self.environment.parallelism.thread_count();
        self.log(format!("solving {} buckets using {thread_count} threads", buckets.len()).as_str());

        let thread_pool = self.environment.parallelism.create_thread_pool()?;

        let results = thread_pool.execute(|| {
            parallel_into_collect(buckets, |bucket| match bucket {
                Ok(bucket) => self.solve_one(Arc::new(bucket), seed),
                Err(invalid) => {
                    self.log(format!("skipping bucket {}: {}", invalid.key, invalid.error).as_str());
                    (vec![], BucketDiagnostic::new_invalid(&invalid))
                }
            })
        });

        let (records, diagnostics) = results.into_iter().fold(
            (Vec::new(), Vec::new()),
            |(mut all_records, mut all_diagnostics), (records, diagnostic)| {
                all_records.extend(records);
                all_diagnostics.push(diagnostic);
                (all_records, all_diagnostics)
            },
        );

        Ok(SolveResult { records, diagnostics })
    }

    fn solve_one(&self, bucket: Arc<BucketContext>, seed: u64) -> (Vec<AllocationRecord>, BucketDiagnostic) {
        let random = DefaultRandom::new_with_seed(get_bucket_seed(seed, &bucket));
        let telemetry = Telemetry::new_with_prefix(self.telemetry_mode.clone(), bucket.key.to_string().as_str());

        let outcome = solve_bucket(bucket.clone(), &self.config, &random, telemetry);

        let mut diagnostic = BucketDiagnostic {
            max_vehicles: Some(bucket.max_vehicles),
            generations: outcome.generations,
            duration_ms: outcome.duration_ms,
            metrics: outcome.metrics,
            ..BucketDiagnostic::new_empty(&bucket.key, bucket.label.clone(), BucketStatus::Unsatisfiable)
        };

        let evaluator = ObjectiveEvaluator::new(bucket.clone(), &self.config.objective);

        let records = outcome
            .best
            .ok_or_else(|| GenericError::from("no feasible allocation found"))
            .and_then(|best| {
                let records = create_records(&evaluator, &self.config.objective, &best.allocation)?;

                diagnostic.best_fitness = Some(best.fitness);
                diagnostic.total_cost = Some(round_to(best.values.cost, 2));
                diagnostic.total_emissions = Some(round_to(best.values.emissions, 2));
                diagnostic.total_vehicles = best.values.total;

                Ok(records)
            });

        match records {
            Ok(records) => {
                diagnostic.status = BucketStatus::Solved;
                (records, diagnostic)
            }
            Err(err) => {
                self.log(format!("bucket {} is unsatisfiable: {err}", bucket.key).as_str());
                diagnostic.reason = Some(err.to_string());
                (vec![], diagnostic)
            }
        }
    }

    fn log(&self, message: &str) {
        self.environment.logger.deref()(message)
    }
}

/// Returns a seed of bucket's random generator derived from the run seed and bucket key.
pub fn get_bucket_seed(seed: u64, bucket: &BucketContext) -> u64 {
    let mut hasher = FxHasher::default();
    seed.hash(&mut hasher);
    bucket.key.hash(&mut hasher);

    hasher.finish()
}
