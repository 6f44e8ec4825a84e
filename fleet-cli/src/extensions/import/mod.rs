//! Contains logic to import vehicle catalog from csv.

mod csv;
pub use self::csv::read_catalog;
