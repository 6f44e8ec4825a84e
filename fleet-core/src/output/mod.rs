//! Contains logic to convert solved buckets into output records, diagnostics and run summary.

mod diagnostics;
pub use self::diagnostics::*;

mod records;
pub use self::records::*;

mod summary;
pub use self::summary::RunSummary;
