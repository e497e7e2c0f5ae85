//! Analytical low-order solar theory (Meeus, *Astronomical Algorithms*, ch. 25).

use qtty::{Arcseconds, Degree, Degrees};

use super::nutation::{moon_ascending_node, nutation, true_obliquity};
use super::SolarEphemeris;
use crate::models::JulianDate;

/// Constant of aberration divided by the mean Earth-Sun distance.
const ABERRATION_CONSTANT: f64 = -20.4898;

/// Geometric position of the Sun referred to the mean equinox of date.
#[derive(Debug, Clone, Copy)]
struct GeometricSun {
    true_longitude: Degrees,
    /// Radius vector in astronomical units.
    radius: f64,
}

fn geometric_sun(t: f64) -> GeometricSun {
    let mean_longitude = Degrees::new(280.46646 + 36000.76983 * t + 0.0003032 * t * t);
    let mean_anomaly = Degrees::new(357.52911 + 35999.05029 * t - 0.0001537 * t * t).wrap_pos();
    let eccentricity = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;

    let centre = (1.914602 - 0.004817 * t - 0.000014 * t * t) * mean_anomaly.sin()
        + (0.019993 - 0.000101 * t) * (mean_anomaly * 2.0).sin()
        + 0.000289 * (mean_anomaly * 3.0).sin();
    let centre = Degrees::new(centre);

    let true_anomaly = mean_anomaly + centre;
    let radius = 1.000001018 * (1.0 - eccentricity * eccentricity)
        / (1.0 + eccentricity * true_anomaly.cos());

    GeometricSun {
        true_longitude: (mean_longitude + centre).wrap_pos(),
        radius,
    }
}

/// Default [`SolarEphemeris`]: equation-of-centre solar theory.
///
/// The low precision mode applies the abbreviated nutation/aberration
/// correction from the Moon's node alone. The high precision mode adds the
/// four-term nutation in longitude and the distance-dependent aberration.
/// Both modes keep the ecliptic latitude at zero (always below 1.2″).
#[derive(Debug, Clone, Copy, Default)]
pub struct MeeusSun;

impl MeeusSun {
    pub fn new() -> Self {
        Self
    }

    /// Sun's geometric (true) longitude, mean equinox of date.
    pub fn true_longitude(&self, jd: f64) -> Degrees {
        geometric_sun(JulianDate::new(jd).julian_centuries()).true_longitude
    }

    /// Earth-Sun distance in astronomical units.
    pub fn radius_vector(&self, jd: f64) -> f64 {
        geometric_sun(JulianDate::new(jd).julian_centuries()).radius
    }
}

impl SolarEphemeris for MeeusSun {
    fn apparent_ecliptic_longitude(&self, jd: f64, high_precision: bool) -> Degrees {
        let t = JulianDate::new(jd).julian_centuries();
        let sun = geometric_sun(t);

        let apparent = if high_precision {
            let aberration = Arcseconds::new(ABERRATION_CONSTANT / sun.radius);
            sun.true_longitude + nutation(jd).longitude.to::<Degree>() + aberration.to::<Degree>()
        } else {
            let omega = moon_ascending_node(t);
            sun.true_longitude - Degrees::new(0.00569) - Degrees::new(0.00478 * omega.sin())
        };
        apparent.wrap_pos()
    }

    fn apparent_ecliptic_latitude(&self, _jd: f64, _high_precision: bool) -> Degrees {
        Degrees::new(0.0)
    }

    fn true_obliquity(&self, jd: f64) -> Degrees {
        true_obliquity(jd)
    }
}
