//! Numerical helpers used by the scanner.

pub mod interpolate;

pub use interpolate::{extremum, zero_crossing_fraction, Extremum};
