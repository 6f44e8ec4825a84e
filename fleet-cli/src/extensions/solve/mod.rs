//! Contains solver configuration and output formats.

pub mod config;
pub mod formats;
