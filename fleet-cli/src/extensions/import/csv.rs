//! Import of a ranked vehicle catalog from csv.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

use fleet_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A catalog row as it is stored in csv. Unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct CsvVehicle {
    #[serde(rename = "Allocation", default)]
    allocation: Option<String>,
    #[serde(rename = "Size")]
    size: String,
    #[serde(rename = "Distance_demand")]
    tier: String,
    #[serde(rename = "Demand (km)")]
    demand: Float,
    #[serde(rename = "ID", default)]
    id: Option<String>,
    #[serde(rename = "Vehicle")]
    vehicle: String,
    #[serde(rename = "Yearly range (km)")]
    yearly_range: Float,
    #[serde(rename = "Cost ($)")]
    acquisition_cost: Float,
    insurance_cost: Float,
    maintenance_cost: Float,
    #[serde(rename = "fuel_costs_per_km")]
    fuel_cost_per_km: Float,
    #[serde(rename = "carbon_emissions_per_km", alias = "carbon emissions per km")]
    emission_per_km: Float,
    #[serde(rename = "Fuel")]
    fuel: String,
    #[serde(rename = "Topsis_Score")]
    desirability_score: Float,
    #[serde(rename = "Rank", default)]
    desirability_rank: Option<Float>,
}

impl CsvVehicle {
    fn into_row(self, label: Option<&str>) -> GenericResult<VehicleRow> {
        let label = self.allocation.filter(|allocation| !allocation.trim().is_empty()).or(label.map(str::to_string));
        let id = self.id.filter(|id| !id.trim().is_empty()).unwrap_or_else(|| self.vehicle.clone());
        let desirability_rank = self.desirability_rank.map(|rank| parse_rank(rank, id.as_str())).transpose()?;

        Ok(VehicleRow {
            label,
            size: self.size,
            tier: self.tier,
            demand: self.demand,
            id,
            fuel: self.fuel,
            yearly_range: self.yearly_range,
            acquisition_cost: self.acquisition_cost,
            insurance_cost: self.insurance_cost,
            maintenance_cost: self.maintenance_cost,
            fuel_cost_per_km: self.fuel_cost_per_km,
            emission_per_km: self.emission_per_km,
            desirability_score: self.desirability_score,
            desirability_rank,
        })
    }
}

/// Ranks are written as floats by dense ranking, e.g. `2.0`.
fn parse_rank(rank: Float, id: &str) -> GenericResult<usize> {
    let rounded = rank.round();

    if rounded.is_finite() && rounded >= 1. {
        Ok(rounded as usize)
    } else {
        Err(format!("cannot read catalog row: vehicle '{id}' has invalid rank {rank}").into())
    }
}

/// Reads catalog rows from csv. A label is used for rows without own `Allocation` value.
pub fn read_catalog<R: Read>(reader: BufReader<R>, label: Option<&str>) -> GenericResult<Vec<VehicleRow>> {
    let mut reader = ::csv::ReaderBuilder::new().trim(::csv::Trim::All).from_reader(reader);

    reader
        .deserialize::<CsvVehicle>()
        .map(|entry| {
            entry
                .map_err(|err| GenericError::from(format!("cannot read catalog row: {err}")))
                .and_then(|vehicle| vehicle.into_row(label))
        })
        .collect()
}
