//! Core crate contains the main building blocks to find a fleet mix per demand bucket: an allocation
//! of vehicle units which covers yearly distance demand while keeping both operating cost and
//! carbon emissions low.
//!
//! The search is a NSGA-II style evolution run independently for each bucket (size class and
//! distance tier). A precomputed desirability score of each vehicle biases random construction
//! and contributes a small bonus to the scalar fitness used for selection.
//!
//! # Examples
//!
//! ```
//! use fleet_core::prelude::*;
//!
//! let row = |id: &str, range: f64, emission: f64| VehicleRow {
//!     label: None,
//!     size: "S1".to_string(),
//!     tier: "D1".to_string(),
//!     demand: 2500.,
//!     id: id.to_string(),
//!     fuel: "Electricity".to_string(),
//!     yearly_range: range,
//!     acquisition_cost: 100.,
//!     insurance_cost: 10.,
//!     maintenance_cost: 5.,
//!     fuel_cost_per_km: 0.1,
//!     emission_per_km: emission,
//!     desirability_score: 0.5,
//!     desirability_rank: None,
//! };
//!
//! let solver = SolverBuilder::new(Environment::new_with_seed(42))
//!     .with_max_generations(20)
//!     .with_population_size(20)
//!     .build()
//!     .expect("cannot build solver");
//!
//! let result = solver.solve(vec![row("BEV_S1", 1000., 0.)]).expect("cannot solve");
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].count, 3);
//! ```

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
pub mod features;

pub mod construction;
pub mod models;
pub mod output;
pub mod prelude;
pub mod solver;

pub use nsga_kit;
