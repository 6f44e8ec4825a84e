//! Contains extensions: catalog import, solver configuration, output formats and allocation checks.

pub mod check;
pub mod import;
pub mod solve;
