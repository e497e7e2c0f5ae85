//! Value types shared across the crate.

pub mod event;
pub mod time;

pub use event::{SeasonalEvent, SeasonalEventKind};
pub use time::JulianDate;
