#[cfg(test)]
#[path = "../../tests/unit/models/bucket_test.rs"]
mod bucket_test;

use crate::models::{Allocation, VehicleOption, VehicleRow};
use nsga_kit::prelude::Float;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::fmt;

/// A share of demand which capacity has to cover to be treated as fulfilled.
pub const DEMAND_TOLERANCE: Float = 0.999;

/// Identifies an independent sub-problem: a size class and a distance tier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketKey {
    /// A size class.
    pub size: String,
    /// A distance tier.
    pub tier: String,
}

impl BucketKey {
    /// Creates a new instance of `BucketKey`.
    pub fn new(size: &str, tier: &str) -> Self {
        Self { size: size.to_string(), tier: tier.to_string() }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.size, self.tier)
    }
}

/// Describes why a bucket cannot be optimized.
#[derive(Clone, Debug, PartialEq)]
pub enum DataError {
    /// A bucket has no vehicles.
    EmptyBucket,
    /// Demand is zero, negative or not a number.
    InvalidDemand(Float),
    /// Rows of the same bucket have different demand values.
    InconsistentDemand {
        /// A demand of the first row.
        expected: Float,
        /// A conflicting demand.
        actual: Float,
    },
    /// All vehicles have zero yearly range.
    ZeroCapacity,
    /// The same vehicle type is listed twice.
    DuplicateVehicle(String),
    /// A vehicle attribute is negative or not finite.
    InvalidValue {
        /// A vehicle type identifier.
        vehicle: String,
        /// A field name.
        field: &'static str,
        /// A field value.
        value: Float,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBucket => write!(f, "bucket has no vehicles"),
            Self::InvalidDemand(demand) => write!(f, "demand must be positive, got: {demand}"),
            Self::InconsistentDemand { expected, actual } => {
                write!(f, "rows have different demand values: {expected} and {actual}")
            }
            Self::ZeroCapacity => write!(f, "all vehicles have zero yearly range"),
            Self::DuplicateVehicle(id) => write!(f, "vehicle '{id}' is listed more than once"),
            Self::InvalidValue { vehicle, field, value } => {
                write!(f, "vehicle '{vehicle}' has invalid {field}: {value}")
            }
        }
    }
}

impl std::error::Error for DataError {}

/// A bucket which cannot be optimized because of data issues.
#[derive(Clone, Debug)]
pub struct InvalidBucket {
    /// A bucket key.
    pub key: BucketKey,
    /// An optional allocation label.
    pub label: Option<String>,
    /// A reason.
    pub error: DataError,
}

/// An immutable description of one bucket: its demand, eligible vehicles and vehicle count bound.
#[derive(Clone, Debug)]
pub struct BucketContext {
    /// A bucket key.
    pub key: BucketKey,
    /// An optional allocation label.
    pub label: Option<String>,
    /// A yearly distance demand.
    pub demand: Float,
    /// Eligible vehicles. Position in this list is the index used by allocations.
    pub vehicles: Vec<VehicleOption>,
    /// A maximum amount of units: enough for the longest range vehicle to cover demand alone.
    pub max_vehicles: u32,
}

impl BucketContext {
    /// Creates and validates a bucket.
    pub fn new(
        key: BucketKey,
        label: Option<String>,
        demand: Float,
        vehicles: Vec<VehicleOption>,
    ) -> Result<Self, DataError> {
        if vehicles.is_empty() {
            return Err(DataError::EmptyBucket);
        }

        if !demand.is_finite() || demand <= 0. {
            return Err(DataError::InvalidDemand(demand));
        }

        let mut ids = FxHashSet::default();
        for vehicle in vehicles.iter() {
            if !ids.insert(vehicle.id.as_str()) {
                return Err(DataError::DuplicateVehicle(vehicle.id.clone()));
            }

            if let Some((field, value)) =
                vehicle.numeric_fields().into_iter().find(|(_, value)| !value.is_finite() || *value < 0.)
            {
                return Err(DataError::InvalidValue { vehicle: vehicle.id.clone(), field, value });
            }
        }

        let max_range = vehicles.iter().map(|vehicle| vehicle.yearly_range).fold(0., Float::max);
        if max_range <= 0. {
            return Err(DataError::ZeroCapacity);
        }

        let max_vehicles = (demand / max_range).ceil().max(1.) as u32;

        Ok(Self { key, label, demand, vehicles, max_vehicles })
    }

    /// Returns amount of vehicle types.
    pub fn size(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns total yearly capacity of the allocation.
    pub fn capacity(&self, allocation: &Allocation) -> Float {
        allocation.counts().iter().zip(self.vehicles.iter()).map(|(&count, v)| count as Float * v.yearly_range).sum()
    }

    /// Returns uncovered demand.
    pub fn deficit(&self, allocation: &Allocation) -> Float {
        (self.demand - self.capacity(allocation)).max(0.)
    }

    /// Checks whether given capacity covers the demand within tolerance.
    pub fn covers_demand(&self, capacity: Float) -> bool {
        capacity >= DEMAND_TOLERANCE * self.demand
    }

    /// Checks whether allocation has from one to max vehicles units and covers demand.
    pub fn is_feasible(&self, allocation: &Allocation) -> bool {
        let total = allocation.total();

        total >= 1 && total <= self.max_vehicles && self.covers_demand(self.capacity(allocation))
    }

    /// Returns vehicle indices sorted by the key in ascending order, ties are broken by index.
    pub fn sorted_indices<F>(&self, key_fn: F) -> Vec<usize>
    where
        F: Fn(&VehicleOption) -> Float,
    {
        let mut indices = (0..self.vehicles.len()).collect::<Vec<_>>();
        indices.sort_by(|&a, &b| {
            nsga_kit::utils::compare_floats(key_fn(&self.vehicles[a]), key_fn(&self.vehicles[b])).then(a.cmp(&b))
        });

        indices
    }
}

/// Groups flat rows into buckets ordered by their key. Vehicles keep input order within a bucket.
/// A bucket which fails validation is returned as an error, so it can be reported.
pub fn group_into_buckets(rows: Vec<VehicleRow>) -> Vec<Result<BucketContext, InvalidBucket>> {
    let mut groups: BTreeMap<BucketKey, Vec<VehicleRow>> = BTreeMap::new();

    rows.into_iter().for_each(|row| {
        groups.entry(BucketKey { size: row.size.clone(), tier: row.tier.clone() }).or_default().push(row);
    });

    groups
        .into_iter()
        .map(|(key, rows)| {
            let label = rows.first().and_then(|row| row.label.clone());
            let demand = rows.first().map(|row| row.demand).unwrap_or(0.);

            let invalid = |error: DataError| InvalidBucket { key: key.clone(), label: label.clone(), error };

            if let Some(row) = rows.iter().find(|row| row.demand != demand) {
                return Err(invalid(DataError::InconsistentDemand { expected: demand, actual: row.demand }));
            }

            let vehicles = rows.iter().map(VehicleOption::from).collect();

            BucketContext::new(key.clone(), label.clone(), demand, vehicles).map_err(invalid)
        })
        .collect()
}
