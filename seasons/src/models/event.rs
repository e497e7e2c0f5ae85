use std::fmt;

use qtty::Degrees;
use serde::{Deserialize, Serialize};

use super::time::JulianDate;

/// The four seasonal markers of the tropical year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalEventKind {
    /// Declination crosses zero going north (March equinox).
    NorthwardEquinox,
    /// Declination crosses zero going south (September equinox).
    SouthwardEquinox,
    /// Declination reaches its northern maximum (June solstice).
    NorthernSolstice,
    /// Declination reaches its southern minimum (December solstice).
    SouthernSolstice,
}

impl SeasonalEventKind {
    pub fn is_equinox(self) -> bool {
        matches!(self, Self::NorthwardEquinox | Self::SouthwardEquinox)
    }

    pub fn is_solstice(self) -> bool {
        !self.is_equinox()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NorthwardEquinox => "northward_equinox",
            Self::SouthwardEquinox => "southward_equinox",
            Self::NorthernSolstice => "northern_solstice",
            Self::SouthernSolstice => "southern_solstice",
        }
    }
}

impl fmt::Display for SeasonalEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A detected equinox or solstice.
///
/// `declination` is only present for solstices, where it holds the
/// interpolated extremum of the Sun's declination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalEvent {
    kind: SeasonalEventKind,
    julian_date: JulianDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    declination: Option<Degrees>,
}

impl SeasonalEvent {
    pub(crate) fn equinox(kind: SeasonalEventKind, julian_date: f64) -> Self {
        debug_assert!(kind.is_equinox());
        Self {
            kind,
            julian_date: JulianDate::new(julian_date),
            declination: None,
        }
    }

    pub(crate) fn solstice(kind: SeasonalEventKind, julian_date: f64, declination: Degrees) -> Self {
        debug_assert!(kind.is_solstice());
        Self {
            kind,
            julian_date: JulianDate::new(julian_date),
            declination: Some(declination),
        }
    }

    pub fn kind(&self) -> SeasonalEventKind {
        self.kind
    }

    pub fn julian_date(&self) -> JulianDate {
        self.julian_date
    }

    /// Interpolated extremal declination; `None` for equinoxes.
    pub fn declination(&self) -> Option<Degrees> {
        self.declination
    }

    /// Event instant as a UTC timestamp (no ΔT correction).
    pub fn datetime(&self) -> chrono::DateTime<chrono::Utc> {
        self.julian_date.to_datetime()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert!(SeasonalEventKind::NorthwardEquinox.is_equinox());
        assert!(SeasonalEventKind::SouthwardEquinox.is_equinox());
        assert!(SeasonalEventKind::NorthernSolstice.is_solstice());
        assert!(SeasonalEventKind::SouthernSolstice.is_solstice());
    }

    #[test]
    fn test_equinox_has_no_declination() {
        let event = SeasonalEvent::equinox(SeasonalEventKind::NorthwardEquinox, 2460389.63);
        assert_eq!(event.declination(), None);
        assert_eq!(event.julian_date().value(), 2460389.63);
    }

    #[test]
    fn test_serialize_solstice() {
        let event = SeasonalEvent::solstice(
            SeasonalEventKind::NorthernSolstice,
            2460482.37,
            Degrees::new(23.44),
        );
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["kind"], "northern_solstice");
        assert_eq!(json["julian_date"], 2460482.37);
        assert_eq!(json["declination"], 23.44);
    }

    #[test]
    fn test_serialize_equinox_omits_declination() {
        let event = SeasonalEvent::equinox(SeasonalEventKind::SouthwardEquinox, 2460576.03);
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["kind"], "southward_equinox");
        assert!(json.get("declination").is_none());
    }

    #[test]
    fn test_display_kind() {
        assert_eq!(SeasonalEventKind::SouthernSolstice.to_string(), "southern_solstice");
    }
}
