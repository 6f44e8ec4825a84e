use nsga_kit::prelude::Float;

/// A flat input row: one vehicle type eligible for one demand bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleRow {
    /// An optional allocation label of the bucket.
    pub label: Option<String>,
    /// A size class of the bucket.
    pub size: String,
    /// A distance tier of the bucket.
    pub tier: String,
    /// A yearly distance demand of the bucket.
    pub demand: Float,
    /// A vehicle type identifier.
    pub id: String,
    /// A fuel label.
    pub fuel: String,
    /// A distance which one unit can serve per year.
    pub yearly_range: Float,
    /// Acquisition cost per unit.
    pub acquisition_cost: Float,
    /// Insurance cost per unit.
    pub insurance_cost: Float,
    /// Maintenance cost per unit.
    pub maintenance_cost: Float,
    /// Fuel cost per km.
    pub fuel_cost_per_km: Float,
    /// Carbon emissions per km.
    pub emission_per_km: Float,
    /// Desirability score assigned by an external ranking.
    pub desirability_score: Float,
    /// Dense desirability rank assigned by an external ranking, the highest is the best.
    pub desirability_rank: Option<usize>,
}

/// A vehicle type which can be allocated within a bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleOption {
    /// A vehicle type identifier.
    pub id: String,
    /// A fuel label.
    pub fuel: String,
    /// A distance which one unit can serve per year.
    pub yearly_range: Float,
    /// Acquisition cost per unit.
    pub acquisition_cost: Float,
    /// Insurance cost per unit.
    pub insurance_cost: Float,
    /// Maintenance cost per unit.
    pub maintenance_cost: Float,
    /// Fuel cost per km.
    pub fuel_cost_per_km: Float,
    /// Carbon emissions per km.
    pub emission_per_km: Float,
    /// Desirability score.
    pub desirability_score: Float,
    /// Dense desirability rank, the highest is the best.
    pub desirability_rank: Option<usize>,
}

impl VehicleOption {
    /// Returns fixed cost of one unit per year.
    pub fn fixed_cost(&self) -> Float {
        self.acquisition_cost + self.insurance_cost + self.maintenance_cost
    }

    pub(crate) fn numeric_fields(&self) -> [(&'static str, Float); 7] {
        [
            ("yearly_range", self.yearly_range),
            ("acquisition_cost", self.acquisition_cost),
            ("insurance_cost", self.insurance_cost),
            ("maintenance_cost", self.maintenance_cost),
            ("fuel_cost_per_km", self.fuel_cost_per_km),
            ("emission_per_km", self.emission_per_km),
            ("desirability_score", self.desirability_score),
        ]
    }
}

impl From<&VehicleRow> for VehicleOption {
    fn from(row: &VehicleRow) -> Self {
        Self {
            id: row.id.clone(),
            fuel: row.fuel.clone(),
            yearly_range: row.yearly_range,
            acquisition_cost: row.acquisition_cost,
            insurance_cost: row.insurance_cost,
            maintenance_cost: row.maintenance_cost,
            fuel_cost_per_km: row.fuel_cost_per_km,
            emission_per_km: row.emission_per_km,
            desirability_score: row.desirability_score,
            desirability_rank: row.desirability_rank,
        }
    }
}
