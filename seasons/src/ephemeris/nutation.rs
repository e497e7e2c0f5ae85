//! Obliquity of the ecliptic and nutation (IAU 1980, leading terms).

use qtty::{Arcseconds, Degree, Degrees};

use crate::models::JulianDate;

/// Nutation in longitude and in obliquity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ
    pub longitude: Arcseconds,
    /// Δε
    pub obliquity: Arcseconds,
}

/// Longitude of the Moon's mean ascending node.
pub(crate) fn moon_ascending_node(t: f64) -> Degrees {
    Degrees::new(125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450_000.0).wrap_pos()
}

/// Nutation from the four largest periodic terms.
///
/// Good to 0.5″ in Δψ and 0.1″ in Δε.
pub fn nutation(jd: f64) -> Nutation {
    let t = JulianDate::new(jd).julian_centuries();
    let omega = moon_ascending_node(t);
    let sun = Degrees::new(280.4665 + 36000.7698 * t).wrap_pos();
    let moon = Degrees::new(218.3165 + 481267.8813 * t).wrap_pos();

    let two_sun = sun * 2.0;
    let two_moon = moon * 2.0;
    let two_omega = omega * 2.0;

    let longitude = -17.20 * omega.sin() - 1.32 * two_sun.sin() - 0.23 * two_moon.sin()
        + 0.21 * two_omega.sin();
    let obliquity = 9.20 * omega.cos() + 0.57 * two_sun.cos() + 0.10 * two_moon.cos()
        - 0.09 * two_omega.cos();

    Nutation {
        longitude: Arcseconds::new(longitude),
        obliquity: Arcseconds::new(obliquity),
    }
}

/// Mean obliquity of the ecliptic (IAU polynomial, valid within a few
/// millennia of J2000.0).
pub fn mean_obliquity(jd: f64) -> Degrees {
    let t = JulianDate::new(jd).julian_centuries();
    let base = Degrees::from_dms(23, 26, 21.448);
    let drift = Arcseconds::new(-46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t);
    base + drift.to::<Degree>()
}

/// Mean obliquity plus nutation in obliquity.
pub fn true_obliquity(jd: f64) -> Degrees {
    mean_obliquity(jd) + nutation(jd).obliquity.to::<Degree>()
}
