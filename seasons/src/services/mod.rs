//! Scanning services.

pub mod marker_scanner;

pub use marker_scanner::{calculate, ScanRequest, SeasonalMarkerScanner};
