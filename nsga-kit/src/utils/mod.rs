//! This module contains helper functionality.

mod comparison;
pub use self::comparison::*;

mod environment;
pub use self::environment::*;

mod error;
pub use self::error::*;

mod parallel;
pub use self::parallel::*;

mod random;
pub use self::random::*;

mod sampling;
pub use self::sampling::*;

mod timing;
pub use self::timing::*;

mod types;
pub use self::types::*;
