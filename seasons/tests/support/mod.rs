#![allow(dead_code)]

use qtty::Degrees;
use seasons::SolarEphemeris;

pub const J2000: f64 = 2451545.0;
pub const TROPICAL_YEAR: f64 = 365.25;
pub const OBLIQUITY: f64 = 23.44;

/// Declination that is an exact sine wave: zero and rising at `epoch`,
/// peaking a quarter period later.
pub struct SineDeclination {
    pub epoch: f64,
    pub period: f64,
    pub amplitude: f64,
}

impl SineDeclination {
    pub fn yearly(epoch: f64) -> Self {
        Self {
            epoch,
            period: TROPICAL_YEAR,
            amplitude: OBLIQUITY,
        }
    }

    fn phase(&self, jd: f64) -> f64 {
        std::f64::consts::TAU * (jd - self.epoch) / self.period
    }
}

impl SolarEphemeris for SineDeclination {
    fn apparent_ecliptic_longitude(&self, jd: f64, _high_precision: bool) -> Degrees {
        Degrees::new(self.phase(jd).to_degrees())
    }

    fn apparent_ecliptic_latitude(&self, _jd: f64, _high_precision: bool) -> Degrees {
        Degrees::new(0.0)
    }

    fn true_obliquity(&self, _jd: f64) -> Degrees {
        Degrees::new(self.amplitude)
    }

    fn declination(&self, jd: f64, _high_precision: bool) -> Degrees {
        Degrees::new(self.amplitude * self.phase(jd).sin())
    }
}

/// Sun moving uniformly along the ecliptic with a fixed obliquity. Uses the
/// trait's own ecliptic to equatorial path.
pub struct UniformSun {
    pub epoch: f64,
}

impl SolarEphemeris for UniformSun {
    fn apparent_ecliptic_longitude(&self, jd: f64, _high_precision: bool) -> Degrees {
        Degrees::new(360.0 * (jd - self.epoch) / TROPICAL_YEAR).wrap_pos()
    }

    fn apparent_ecliptic_latitude(&self, _jd: f64, _high_precision: bool) -> Degrees {
        Degrees::new(0.0)
    }

    fn true_obliquity(&self, _jd: f64) -> Degrees {
        Degrees::new(OBLIQUITY)
    }
}
