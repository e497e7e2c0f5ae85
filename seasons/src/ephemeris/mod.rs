//! Sun-position collaborators.
//!
//! The scanner only needs the Sun's apparent declination. It gets there
//! through a [`SolarEphemeris`]: apparent ecliptic longitude and latitude,
//! true obliquity, then [`ecliptic_to_equatorial`]. [`MeeusSun`] is the
//! built-in implementation; callers with a better theory plug in their own.

pub mod coordinates;
pub mod nutation;
pub mod sun;

use qtty::Degrees;

pub use coordinates::{ecliptic_to_equatorial, EquatorialCoordinate};
pub use nutation::{mean_obliquity, nutation, true_obliquity, Nutation};
pub use sun::MeeusSun;

/// Source of the Sun's apparent position at a Julian Date.
///
/// `high_precision` selects between a more complete and a faster truncated
/// series. Implementations that only have one theory may ignore it.
pub trait SolarEphemeris {
    /// Apparent geocentric ecliptic longitude, of date.
    fn apparent_ecliptic_longitude(&self, jd: f64, high_precision: bool) -> Degrees;

    /// Apparent geocentric ecliptic latitude, of date.
    fn apparent_ecliptic_latitude(&self, jd: f64, high_precision: bool) -> Degrees;

    /// Obliquity of the ecliptic including nutation.
    fn true_obliquity(&self, jd: f64) -> Degrees;

    /// Apparent equatorial position.
    fn equatorial(&self, jd: f64, high_precision: bool) -> EquatorialCoordinate {
        let lambda = self.apparent_ecliptic_longitude(jd, high_precision);
        let beta = self.apparent_ecliptic_latitude(jd, high_precision);
        let epsilon = self.true_obliquity(jd);
        ecliptic_to_equatorial(lambda, beta, epsilon)
    }

    /// Apparent declination.
    fn declination(&self, jd: f64, high_precision: bool) -> Degrees {
        self.equatorial(jd, high_precision).declination
    }
}

impl<E: SolarEphemeris + ?Sized> SolarEphemeris for &E {
    fn apparent_ecliptic_longitude(&self, jd: f64, high_precision: bool) -> Degrees {
        (**self).apparent_ecliptic_longitude(jd, high_precision)
    }

    fn apparent_ecliptic_latitude(&self, jd: f64, high_precision: bool) -> Degrees {
        (**self).apparent_ecliptic_latitude(jd, high_precision)
    }

    fn true_obliquity(&self, jd: f64) -> Degrees {
        (**self).true_obliquity(jd)
    }

    fn equatorial(&self, jd: f64, high_precision: bool) -> EquatorialCoordinate {
        (**self).equatorial(jd, high_precision)
    }

    fn declination(&self, jd: f64, high_precision: bool) -> Degrees {
        (**self).declination(jd, high_precision)
    }
}
