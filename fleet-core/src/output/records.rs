#[cfg(test)]
#[path = "../../tests/unit/output/records_test.rs"]
mod records_test;

use crate::construction::ObjectiveEvaluator;
use crate::models::{Allocation, ObjectiveVariant};
use nsga_kit::prelude::{Float, GenericResult};
use nsga_kit::utils::round_to;
use serde::{Deserialize, Serialize};

/// An output row: allocation of one vehicle type within a bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllocationRecord {
    /// An allocation label.
    #[serde(rename = "Allocation")]
    pub label: Option<String>,
    /// A size class.
    #[serde(rename = "Size")]
    pub size: String,
    /// A distance tier.
    #[serde(rename = "Distance")]
    pub tier: String,
    /// A vehicle type identifier.
    #[serde(rename = "Vehicle")]
    pub vehicle: String,
    /// A fuel label.
    #[serde(rename = "Fuel")]
    pub fuel: String,
    /// Amount of units.
    #[serde(rename = "no_of_vehicles")]
    pub count: u32,
    /// Max amount of units in the bucket.
    #[serde(rename = "Max Vehicles")]
    pub max_vehicles: u32,
    /// Bucket demand.
    #[serde(rename = "Demand")]
    pub demand: Float,
    /// A distance attributed to the vehicle type.
    #[serde(rename = "Assigned Demand")]
    pub assigned_distance: Float,
    /// A yearly range of one unit.
    #[serde(rename = "Yearly Range")]
    pub yearly_range: Float,
    /// A percentage of unit range used by attributed distance.
    #[serde(rename = "Utilization")]
    pub utilization: Float,
    /// A demand fulfillment percentage.
    #[serde(rename = "Demand_Fulfillment")]
    pub demand_fulfillment: Float,
    /// A cost of the vehicle type.
    #[serde(rename = "Total Cost")]
    pub cost: Float,
    /// Carbon emissions of the vehicle type.
    #[serde(rename = "Carbon Emissions")]
    pub emissions: Float,
    /// Carbon emissions per km.
    #[serde(rename = "Emissions Per KM")]
    pub emission_per_km: Float,
}

/// Creates output records for the allocation, one per used vehicle type in bucket order.
/// Returns an error when allocation is not feasible.
pub fn create_records(
    evaluator: &ObjectiveEvaluator,
    variant: &ObjectiveVariant,
    allocation: &Allocation,
) -> GenericResult<Vec<AllocationRecord>> {
    let bucket = evaluator.bucket();

    if !bucket.is_feasible(allocation) {
        return Err(format!("allocation {allocation} is not feasible for bucket {}", bucket.key).into());
    }

    let capacity = bucket.capacity(allocation);
    let mut shares = evaluator.breakdown(allocation);
    shares.sort_by_key(|share| share.index);

    Ok(shares
        .into_iter()
        .map(|share| {
            let vehicle = &bucket.vehicles[share.index];

            let demand_fulfillment = match variant {
                ObjectiveVariant::EmissionMinimizing => (capacity / bucket.demand * 100.).min(100.),
                _ => share.count as Float / bucket.max_vehicles as Float * 100.,
            };

            AllocationRecord {
                label: bucket.label.clone(),
                size: bucket.key.size.clone(),
                tier: bucket.key.tier.clone(),
                vehicle: vehicle.id.clone(),
                fuel: vehicle.fuel.clone(),
                count: share.count,
                max_vehicles: bucket.max_vehicles,
                demand: round_to(bucket.demand, 2),
                assigned_distance: round_to(share.assigned_distance, 2),
                yearly_range: round_to(vehicle.yearly_range, 2),
                utilization: round_to(get_utilization(share.assigned_distance, share.count, vehicle.yearly_range), 2),
                demand_fulfillment: round_to(demand_fulfillment, 2),
                cost: round_to(share.cost, 2),
                emissions: round_to(share.emissions, 2),
                emission_per_km: vehicle.emission_per_km,
            }
        })
        .collect())
}

/// Returns a percentage of unit range used when distance is spread evenly over units.
pub fn get_utilization(distance: Float, count: u32, yearly_range: Float) -> Float {
    if count == 0 || yearly_range <= 0. {
        return 0.;
    }

    (distance / count as Float) / yearly_range * 100.
}
