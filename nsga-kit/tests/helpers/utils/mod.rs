pub use self::random::*;
