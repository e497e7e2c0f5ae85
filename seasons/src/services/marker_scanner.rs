//! Equinox and solstice detection by scanning the Sun's declination.
//!
//! The scanner samples the apparent declination at a fixed step. A sign change
//! between two consecutive samples is an equinox; a middle sample above (or
//! below) both neighbours is a solstice. Each detection is refined inside the
//! step: linearly for equinoxes, with a three-point parabola for solstices.
//!
//! Sampling runs two steps past the end of the requested range so that an
//! event just before the end still gets the lookahead sample it needs. Events
//! are only accepted when their refined instant is before the end.

use log::{debug, trace, warn};
use qtty::{Days, Degrees};
use serde::{Deserialize, Serialize};

use crate::algorithms::{extremum, zero_crossing_fraction};
use crate::ephemeris::{MeeusSun, SolarEphemeris};
use crate::error::{SeasonsError, SeasonsResult};
use crate::models::{JulianDate, SeasonalEvent, SeasonalEventKind};

/// A validated scan range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanRequest {
    start: JulianDate,
    end: JulianDate,
    step: Days,
    high_precision: bool,
}

impl ScanRequest {
    /// Build a request, rejecting non-finite values, an empty or reversed
    /// range, and a non-positive step.
    pub fn new(
        start_jd: f64,
        end_jd: f64,
        step_days: f64,
        high_precision: bool,
    ) -> SeasonsResult<Self> {
        for (field, value) in [
            ("start_jd", start_jd),
            ("end_jd", end_jd),
            ("step_days", step_days),
        ] {
            if !value.is_finite() {
                return Err(SeasonsError::NonFiniteInput { field, value });
            }
        }
        if start_jd >= end_jd {
            return Err(SeasonsError::InvalidRange {
                start: start_jd,
                end: end_jd,
            });
        }
        if step_days <= 0.0 {
            return Err(SeasonsError::InvalidStep(step_days));
        }

        Ok(Self {
            start: JulianDate::new(start_jd),
            end: JulianDate::new(end_jd),
            step: Days::new(step_days),
            high_precision,
        })
    }

    pub fn start(&self) -> JulianDate {
        self.start
    }

    pub fn end(&self) -> JulianDate {
        self.end
    }

    pub fn step(&self) -> Days {
        self.step
    }

    pub fn high_precision(&self) -> bool {
        self.high_precision
    }
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    jd: f64,
    declination: f64,
}

/// The two samples preceding the current one. Empty slots mean the scan has
/// not produced them yet.
#[derive(Debug, Default)]
struct SampleWindow {
    previous: Option<Sample>,
    before_previous: Option<Sample>,
}

impl SampleWindow {
    fn push(&mut self, sample: Sample) {
        self.before_previous = self.previous.replace(sample);
    }
}

fn detect_equinox(previous: Sample, current: Sample, step: f64) -> Option<SeasonalEvent> {
    let (y0, y) = (previous.declination, current.declination);
    let kind = if y0 < 0.0 && y >= 0.0 {
        SeasonalEventKind::NorthwardEquinox
    } else if y0 > 0.0 && y <= 0.0 {
        SeasonalEventKind::SouthwardEquinox
    } else {
        return None;
    };

    let fraction = zero_crossing_fraction(y0, y);
    Some(SeasonalEvent::equinox(kind, previous.jd + fraction * step))
}

fn detect_solstice(
    before_previous: Sample,
    previous: Sample,
    current: Sample,
    step: f64,
) -> Option<SeasonalEvent> {
    let (y1, y0, y) = (
        before_previous.declination,
        previous.declination,
        current.declination,
    );
    let kind = if y0 > y && y0 > y1 {
        SeasonalEventKind::NorthernSolstice
    } else if y0 < y && y0 < y1 {
        SeasonalEventKind::SouthernSolstice
    } else {
        return None;
    };

    let peak = extremum(y1, y0, y);
    Some(SeasonalEvent::solstice(
        kind,
        current.jd - step + peak.offset * step,
        Degrees::new(peak.value),
    ))
}

/// Finds equinoxes and solstices in a Julian Date range.
#[derive(Debug, Clone, Default)]
pub struct SeasonalMarkerScanner<E = MeeusSun> {
    ephemeris: E,
}

impl<E: SolarEphemeris> SeasonalMarkerScanner<E> {
    pub fn new(ephemeris: E) -> Self {
        Self { ephemeris }
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// Scan `[start_jd, end_jd)` every `step_interval` days.
    ///
    /// Events come back in ascending time order, each with a refined instant
    /// strictly before `end_jd`. Events refined to before `start_jd` are not
    /// filtered. The range is not validated; a reversed range or a
    /// non-positive step yields no events. See [`Self::try_calculate`] for a
    /// validating entry point.
    pub fn calculate(
        &self,
        start_jd: f64,
        end_jd: f64,
        step_interval: f64,
        high_precision: bool,
    ) -> Vec<SeasonalEvent> {
        let mut events = Vec::new();
        if step_interval.is_nan() || step_interval <= 0.0 {
            warn!("Ignoring scan with non-positive step {}", step_interval);
            return events;
        }

        let scan_end = end_jd + step_interval + step_interval;
        let mut window = SampleWindow::default();
        let mut jd = start_jd;
        let mut samples = 0usize;

        while jd < scan_end {
            let current = Sample {
                jd,
                declination: self.ephemeris.declination(jd, high_precision).value(),
            };
            samples += 1;

            if let Some(previous) = window.previous {
                if let Some(event) = detect_equinox(previous, current, step_interval) {
                    accept(&mut events, event, end_jd);
                }
                if let Some(before_previous) = window.before_previous {
                    if let Some(event) =
                        detect_solstice(before_previous, previous, current, step_interval)
                    {
                        accept(&mut events, event, end_jd);
                    }
                }
            }

            window.push(current);
            let next = jd + step_interval;
            if next <= jd {
                warn!(
                    "Step {} is below the resolution of JD {}; stopping scan",
                    step_interval, jd
                );
                break;
            }
            jd = next;
        }

        debug!(
            "Scanned JD {}..{} (step {} d, high_precision={}): {} samples, {} events",
            start_jd,
            end_jd,
            step_interval,
            high_precision,
            samples,
            events.len()
        );
        events
    }

    /// Scan a validated request.
    pub fn calculate_checked(&self, request: &ScanRequest) -> Vec<SeasonalEvent> {
        self.calculate(
            request.start.value(),
            request.end.value(),
            request.step.value(),
            request.high_precision,
        )
    }

    /// Validate the raw inputs, then scan.
    pub fn try_calculate(
        &self,
        start_jd: f64,
        end_jd: f64,
        step_interval: f64,
        high_precision: bool,
    ) -> SeasonsResult<Vec<SeasonalEvent>> {
        let request = ScanRequest::new(start_jd, end_jd, step_interval, high_precision)?;
        Ok(self.calculate_checked(&request))
    }
}

fn accept(events: &mut Vec<SeasonalEvent>, event: SeasonalEvent, end_jd: f64) {
    let jd = event.julian_date().value();
    if jd < end_jd {
        trace!("{} at JD {:.6}", event.kind(), jd);
        events.push(event);
    } else {
        debug!("Dropping {} at JD {:.6}: not before end JD {}", event.kind(), jd, end_jd);
    }
}

/// Scan with the built-in [`MeeusSun`] ephemeris.
pub fn calculate(
    start_jd: f64,
    end_jd: f64,
    step_interval: f64,
    high_precision: bool,
) -> Vec<SeasonalEvent> {
    SeasonalMarkerScanner::new(MeeusSun).calculate(start_jd, end_jd, step_interval, high_precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Replays a fixed list of declinations, one per whole day from JD 0.
    struct Replay(Vec<f64>);

    impl SolarEphemeris for Replay {
        fn apparent_ecliptic_longitude(&self, _jd: f64, _high_precision: bool) -> Degrees {
            unreachable!()
        }

        fn apparent_ecliptic_latitude(&self, _jd: f64, _high_precision: bool) -> Degrees {
            unreachable!()
        }

        fn true_obliquity(&self, _jd: f64) -> Degrees {
            unreachable!()
        }

        fn declination(&self, jd: f64, _high_precision: bool) -> Degrees {
            let index = jd.round() as usize;
            Degrees::new(self.0.get(index).copied().unwrap_or(f64::NAN))
        }
    }

    fn scan(samples: Vec<f64>, end_jd: f64) -> Vec<SeasonalEvent> {
        SeasonalMarkerScanner::new(Replay(samples)).calculate(0.0, end_jd, 1.0, false)
    }

    #[test]
    fn test_sample_window_shifts() {
        let mut window = SampleWindow::default();
        assert!(window.previous.is_none() && window.before_previous.is_none());

        window.push(Sample { jd: 1.0, declination: -1.0 });
        assert_eq!(window.previous.map(|s| s.jd), Some(1.0));
        assert!(window.before_previous.is_none());

        window.push(Sample { jd: 2.0, declination: 1.0 });
        assert_eq!(window.previous.map(|s| s.jd), Some(2.0));
        assert_eq!(window.before_previous.map(|s| s.jd), Some(1.0));
    }

    #[test]
    fn test_northward_equinox_linear_refinement() {
        let events = scan(vec![-3.0, -1.0, 3.0, 7.0], 10.0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind(), SeasonalEventKind::NorthwardEquinox);
        assert_abs_diff_eq!(events[0].julian_date().value(), 1.25, epsilon = 1e-12);
        assert_eq!(events[0].declination(), None);
    }

    #[test]
    fn test_southward_equinox() {
        let events = scan(vec![4.0, 2.0, -2.0, -6.0], 10.0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind(), SeasonalEventKind::SouthwardEquinox);
        assert_abs_diff_eq!(events[0].julian_date().value(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_sample_counts_as_crossing_once() {
        // -1 -> 0 is northward; 0 -> 1 is not a second crossing
        let events = scan(vec![-1.0, 0.0, 1.0], 10.0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind(), SeasonalEventKind::NorthwardEquinox);
        assert_abs_diff_eq!(events[0].julian_date().value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_northern_solstice_uses_interpolated_peak() {
        let events = scan(vec![20.0, 22.9, 23.43, 23.2, 22.0], 10.0);
        assert_eq!(events.len(), 1);
        let event = events[0];
        assert_eq!(event.kind(), SeasonalEventKind::NorthernSolstice);

        let expected = extremum(22.9, 23.43, 23.2);
        let declination = event.declination().unwrap().value();
        assert_abs_diff_eq!(declination, expected.value, epsilon = 1e-12);
        assert!(declination > 23.43);
        assert_abs_diff_eq!(event.julian_date().value(), 2.0 + expected.offset, epsilon = 1e-12);
    }

    #[test]
    fn test_southern_solstice() {
        let events = scan(vec![-20.0, -23.0, -23.4, -23.1, -21.0], 10.0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind(), SeasonalEventKind::SouthernSolstice);
        assert!(events[0].declination().unwrap().value() < -23.4);
    }

    #[test]
    fn test_plateau_is_not_an_extremum() {
        let events = scan(vec![22.0, 23.0, 23.0, 22.0], 10.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_event_needing_lookahead_is_found() {
        // Crossing at 4.5, end at 5: the detecting sample (JD 5) lies at the end
        let events = scan(vec![-5.0, -4.0, -3.0, -2.0, -1.0, 1.0, 2.0, 3.0], 5.0);
        assert_eq!(events.len(), 1);
        assert_abs_diff_eq!(events[0].julian_date().value(), 4.5, epsilon = 1e-12);
    }

    #[test]
    fn test_event_refined_past_end_is_dropped() {
        // Crossing refines to 5.5 with end at 5.2
        let events = scan(vec![-5.0, -4.0, -3.0, -2.0, -1.0, -1.0, 1.0, 2.0, 3.0], 5.2);
        assert!(events.is_empty());
    }

    #[test]
    fn test_non_positive_step_yields_nothing() {
        let scanner = SeasonalMarkerScanner::new(MeeusSun);
        assert!(scanner.calculate(2451545.0, 2451910.0, 0.0, false).is_empty());
        assert!(scanner.calculate(2451545.0, 2451910.0, -1.0, false).is_empty());
    }

    #[test]
    fn test_reversed_range_yields_nothing() {
        let scanner = SeasonalMarkerScanner::new(MeeusSun);
        assert!(scanner.calculate(2451910.0, 2451545.0, 1.0, false).is_empty());
    }

    #[test]
    fn test_nan_samples_detect_nothing() {
        let events = scan(vec![f64::NAN; 6], 5.0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_scan_request_validation() {
        assert!(ScanRequest::new(0.0, 10.0, 1.0, true).is_ok());
        assert!(matches!(
            ScanRequest::new(10.0, 10.0, 1.0, true),
            Err(SeasonsError::InvalidRange { .. })
        ));
        assert!(matches!(
            ScanRequest::new(0.0, 10.0, 0.0, true),
            Err(SeasonsError::InvalidStep(_))
        ));
        assert!(matches!(
            ScanRequest::new(f64::NAN, 10.0, 1.0, true),
            Err(SeasonsError::NonFiniteInput { field: "start_jd", .. })
        ));
        assert!(matches!(
            ScanRequest::new(0.0, f64::INFINITY, 1.0, true),
            Err(SeasonsError::NonFiniteInput { field: "end_jd", .. })
        ));
    }

    #[test]
    fn test_try_calculate_propagates_validation() {
        let scanner = SeasonalMarkerScanner::new(Replay(vec![-1.0, 1.0]));
        assert!(scanner.try_calculate(5.0, 0.0, 1.0, false).is_err());
        let events = scanner.try_calculate(0.0, 2.0, 1.0, false).unwrap();
        assert_eq!(events.len(), 1);
    }
}
