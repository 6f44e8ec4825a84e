//! This module contains implementations of various algorithms.

pub mod nsga2;
