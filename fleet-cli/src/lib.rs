//! A crate contains a command line interface and helpers to solve fleet allocation problems
//! stored in csv files.
//!
//! Input is a ranked vehicle catalog: one row per vehicle type eligible for a bucket (size class
//! and distance tier). Output is an allocation csv with one row per used vehicle type, optional
//! per bucket diagnostics in json and a run summary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub mod extensions;

pub use fleet_core;

use std::path::Path;

/// Returns a label of the input file: a trailing `_YYYY` part of the file name if present,
/// otherwise the file stem.
pub fn get_label_from_path(path: &Path) -> String {
    let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or_default();

    match stem.rsplit_once('_') {
        Some((_, suffix)) if suffix.len() == 4 && suffix.chars().all(|c| c.is_ascii_digit()) => suffix.to_string(),
        _ => stem.to_string(),
    }
}
