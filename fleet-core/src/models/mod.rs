//! A collection of models to represent fleet allocation problem and its solutions.

mod allocation;
pub use self::allocation::Allocation;

mod bucket;
pub use self::bucket::*;

mod variant;
pub use self::variant::ObjectiveVariant;

mod vehicle;
pub use self::vehicle::{VehicleOption, VehicleRow};
