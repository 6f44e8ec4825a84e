#[cfg(test)]
#[path = "../../tests/unit/construction/fitness_test.rs"]
mod fitness_test;

use crate::construction::{ObjectiveEvaluator, ObjectiveValues};
use crate::models::{Allocation, BucketContext, ObjectiveVariant};
use nsga_kit::prelude::Float;

/// A weight of mean desirability in the fitness.
const DESIRABILITY_WEIGHT: Float = 0.1;

/// A base penalty of infeasible allocation.
const INFEASIBLE_PENALTY: Float = 1E6;

/// A scalar fitness used for tournament selection and best solution tracking. Higher is better.
pub struct FitnessFunction {
    cost_weight: Float,
    emission_weight: Float,
    worst_cost: Float,
    worst_emissions: Float,
    is_cost_variant: bool,
}

impl FitnessFunction {
    /// Creates a new instance of `FitnessFunction`. Worst values are estimated by allocating
    /// maximum amount of units of a single vehicle type.
    pub fn new(evaluator: &ObjectiveEvaluator, variant: &ObjectiveVariant) -> Self {
        let bucket = evaluator.bucket();
        let (cost_weight, emission_weight) = variant.weights();

        let (worst_cost, worst_emissions) = (0..bucket.size())
            .map(|idx| {
                let mut allocation = Allocation::new(bucket.size());
                allocation.set(idx, bucket.max_vehicles);

                let values = evaluator.evaluate(&allocation);
                (values.cost, values.emissions)
            })
            .fold((0., 0.), |(acc_cost, acc_emissions): (Float, Float), (cost, emissions)| {
                (acc_cost.max(cost), acc_emissions.max(emissions))
            });

        Self {
            cost_weight,
            emission_weight,
            worst_cost,
            worst_emissions,
            is_cost_variant: matches!(variant, ObjectiveVariant::CostMinimizing),
        }
    }

    /// Returns fitness of the evaluated allocation.
    pub fn fitness(&self, bucket: &BucketContext, allocation: &Allocation, values: &ObjectiveValues) -> Float {
        if !values.is_feasible {
            if self.is_cost_variant {
                return Float::NEG_INFINITY;
            }

            let excess = values.total.saturating_sub(bucket.max_vehicles) as Float;

            return -INFEASIBLE_PENALTY * (1. + values.deficit + excess);
        }

        let normalized = |value: Float, worst: Float| if worst > 0. { 1. - value / worst } else { 1. };

        self.cost_weight * normalized(values.cost, self.worst_cost)
            + self.emission_weight * normalized(values.emissions, self.worst_emissions)
            + DESIRABILITY_WEIGHT * mean_desirability(bucket, allocation)
    }
}

/// Returns mean desirability score over all units of the allocation.
fn mean_desirability(bucket: &BucketContext, allocation: &Allocation) -> Float {
    let total = allocation.total();
    if total == 0 {
        return 0.;
    }

    let score = allocation
        .counts()
        .iter()
        .zip(bucket.vehicles.iter())
        .map(|(&count, vehicle)| count as Float * vehicle.desirability_score)
        .sum::<Float>();

    score / total as Float
}
