//! Ecliptic to equatorial coordinate transformation.

use qtty::{Degree, Degrees, Radians};
use serde::{Deserialize, Serialize};

/// Geocentric equatorial position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinate {
    /// Right ascension in `[0°, 360°)`.
    pub right_ascension: Degrees,
    pub declination: Degrees,
}

/// Rotate ecliptic `(longitude, latitude)` about the equinox line by the
/// obliquity `epsilon`.
pub fn ecliptic_to_equatorial(
    longitude: Degrees,
    latitude: Degrees,
    epsilon: Degrees,
) -> EquatorialCoordinate {
    let (sin_lambda, cos_lambda) = longitude.sin_cos();
    let (sin_beta, cos_beta) = latitude.sin_cos();
    let (sin_eps, cos_eps) = epsilon.sin_cos();

    let alpha = (sin_lambda * cos_eps - latitude.tan() * sin_eps).atan2(cos_lambda);
    let delta = (sin_beta * cos_eps + cos_beta * sin_eps * sin_lambda).asin();

    EquatorialCoordinate {
        right_ascension: Radians::new(alpha).to::<Degree>().wrap_pos(),
        declination: Radians::new(delta).to::<Degree>(),
    }
}
