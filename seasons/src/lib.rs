//! # Seasons
//!
//! Equinox and solstice instants from a scan of the Sun's apparent declination.
//!
//! The crate walks a Julian Date range at a fixed step, samples the Sun's
//! declination and reports the four seasonal markers it finds:
//!
//! - **Northward / southward equinox**: declination changes sign, refined by
//!   linear interpolation between the two samples.
//! - **Northern / southern solstice**: declination has a local extremum,
//!   refined (time and declination) with a three-point parabola.
//!
//! ## Architecture
//!
//! - [`services`]: the [`SeasonalMarkerScanner`] and validated [`ScanRequest`]s
//! - [`ephemeris`]: the [`SolarEphemeris`] collaborator trait and the built-in
//!   [`MeeusSun`] theory, nutation and coordinate transform
//! - [`algorithms`]: interpolation helpers
//! - [`models`]: [`JulianDate`] and [`SeasonalEvent`] value types
//! - [`config`]: TOML scan configuration
//!
//! ## Example
//!
//! ```rust
//! use seasons::{SeasonalEventKind, SeasonalMarkerScanner, MeeusSun};
//!
//! // Calendar year 2024
//! let scanner = SeasonalMarkerScanner::new(MeeusSun);
//! let events = scanner.calculate(2460310.5, 2460676.5, 1.0, true);
//!
//! assert_eq!(events.len(), 4);
//! assert_eq!(events[0].kind(), SeasonalEventKind::NorthwardEquinox);
//! ```

pub mod algorithms;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod models;
pub mod services;

pub use config::{OutputFormat, ScanConfig};
pub use ephemeris::{MeeusSun, SolarEphemeris};
pub use error::{SeasonsError, SeasonsResult};
pub use models::{JulianDate, SeasonalEvent, SeasonalEventKind};
pub use services::{calculate, ScanRequest, SeasonalMarkerScanner};
