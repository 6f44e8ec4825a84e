//! This module reimports commonly used types.

pub use crate::models::{Allocation, BucketContext, BucketKey, DataError, ObjectiveVariant, VehicleOption, VehicleRow};

pub use crate::output::{AllocationRecord, BucketDiagnostic, BucketStatus, RunSummary};

pub use crate::solver::{
    DesirabilitySource, MutationSchedule, SolveResult, Solver, SolverBuilder, SolverConfig, TelemetryMode,
};

pub use nsga_kit::prelude::{Environment, Float, GenericError, GenericResult, InfoLogger};
pub use nsga_kit::utils::Parallelism;
