#[cfg(test)]
#[path = "../../tests/unit/construction/evaluator_test.rs"]
mod evaluator_test;

use crate::models::{Allocation, BucketContext, ObjectiveVariant};
use nsga_kit::prelude::Float;
use std::sync::Arc;

/// Objective values of one allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectiveValues {
    /// Total yearly cost.
    pub cost: Float,
    /// Total yearly carbon emissions.
    pub emissions: Float,
    /// Total yearly capacity.
    pub capacity: Float,
    /// Uncovered demand.
    pub deficit: Float,
    /// Total amount of units.
    pub total: u32,
    /// Whether allocation satisfies count bounds and covers demand.
    pub is_feasible: bool,
}

impl ObjectiveValues {
    /// Returns (cost, emissions) used for Pareto ranking: infeasible allocations are ranked
    /// behind any feasible one.
    pub fn ranking_pair(&self) -> (Float, Float) {
        if self.is_feasible { (self.cost, self.emissions) } else { (Float::INFINITY, Float::INFINITY) }
    }
}

/// A share of demand attributed to one vehicle type of an allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleShare {
    /// A vehicle index within bucket.
    pub index: usize,
    /// Amount of units.
    pub count: u32,
    /// A distance attributed to this vehicle type.
    pub assigned_distance: Float,
    /// A cost of the vehicle type: fixed costs of all units plus fuel cost of assigned distance.
    pub cost: Float,
    /// Emissions of assigned distance.
    pub emissions: Float,
}

/// Evaluates allocations of one bucket.
///
/// Demand is attributed greedily to the used vehicle types following the attribution order
/// which depends on objective variant:
/// - emission minimizing: ascending emission factor
/// - cost minimizing: ascending fuel cost per km
/// - trade-off: ascending weighted blend of normalized fuel cost and emission factor
pub struct ObjectiveEvaluator {
    bucket: Arc<BucketContext>,
    order: Vec<usize>,
}

impl ObjectiveEvaluator {
    /// Creates a new instance of `ObjectiveEvaluator`.
    pub fn new(bucket: Arc<BucketContext>, variant: &ObjectiveVariant) -> Self {
        let order = match variant {
            ObjectiveVariant::EmissionMinimizing => bucket.sorted_indices(|v| v.emission_per_km),
            ObjectiveVariant::CostMinimizing => bucket.sorted_indices(|v| v.fuel_cost_per_km),
            ObjectiveVariant::Tradeoff { .. } => {
                let (cost_weight, emission_weight) = variant.weights();
                let max_fuel = bucket.vehicles.iter().map(|v| v.fuel_cost_per_km).fold(0., Float::max);
                let max_emission = bucket.vehicles.iter().map(|v| v.emission_per_km).fold(0., Float::max);
                let normalize = |value: Float, max: Float| if max > 0. { value / max } else { 0. };

                bucket.sorted_indices(|v| {
                    cost_weight * normalize(v.fuel_cost_per_km, max_fuel)
                        + emission_weight * normalize(v.emission_per_km, max_emission)
                })
            }
        };

        Self { bucket, order }
    }

    /// Returns bucket of the evaluator.
    pub fn bucket(&self) -> &BucketContext {
        self.bucket.as_ref()
    }

    /// Returns a shared reference to the bucket.
    pub fn shared_bucket(&self) -> Arc<BucketContext> {
        self.bucket.clone()
    }

    /// Returns vehicle indices in the order demand is attributed.
    pub fn attribution_order(&self) -> &[usize] {
        self.order.as_slice()
    }

    /// Returns per vehicle type breakdown for used vehicle types in attribution order.
    pub fn breakdown(&self, allocation: &Allocation) -> Vec<VehicleShare> {
        let mut remaining = self.bucket.demand;

        self.order
            .iter()
            .filter(|&&index| allocation.get(index) > 0)
            .map(|&index| {
                let vehicle = &self.bucket.vehicles[index];
                let count = allocation.get(index);

                let assigned_distance = (count as Float * vehicle.yearly_range).min(remaining).max(0.);
                remaining -= assigned_distance;

                VehicleShare {
                    index,
                    count,
                    assigned_distance,
                    cost: count as Float * vehicle.fixed_cost() + vehicle.fuel_cost_per_km * assigned_distance,
                    emissions: vehicle.emission_per_km * assigned_distance,
                }
            })
            .collect()
    }

    /// Evaluates the allocation.
    pub fn evaluate(&self, allocation: &Allocation) -> ObjectiveValues {
        let (cost, emissions) = self
            .breakdown(allocation)
            .iter()
            .fold((0., 0.), |(cost, emissions), share| (cost + share.cost, emissions + share.emissions));

        let capacity = self.bucket.capacity(allocation);

        ObjectiveValues {
            cost,
            emissions,
            capacity,
            deficit: (self.bucket.demand - capacity).max(0.),
            total: allocation.total(),
            is_feasible: self.bucket.is_feasible(allocation),
        }
    }
}
