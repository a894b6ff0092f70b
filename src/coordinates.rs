pub mod fov;
#[cfg(test)]
mod tests;
use nalgebra::{Rotation3, Vector3};
use serde_derive::{Deserialize, Serialize};

/// a point on the celestial sphere, both angles are in radians
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyPoint {
    /// right ascension, conventionally in [0, 2pi)
    pub ra: f64,
    /// declination, in [-pi/2, pi/2]
    pub dec: f64,
}

impl SkyPoint {
    pub fn new(ra: f64, dec: f64) -> SkyPoint {
        SkyPoint { ra, dec }
    }

    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> SkyPoint {
        SkyPoint {
            ra: ra_deg.to_radians(),
            dec: dec_deg.to_radians(),
        }
    }

    /// the radius-vector of this point in the coordinate system of `center`:
    /// the sphere is first turned around the z axis so that `center` has ra = 0, then around the
    /// y axis by the declination of `center`, so that `center` itself ends up at (1, 0, 0)
    /// the z coordinate of the result is the sine of the vertical offset from `center`
    pub fn in_frame_of(&self, center: &SkyPoint) -> Vector3<f64> {
        let d_ra = self.ra - center.ra;
        let (sin_dec, cos_dec) = self.dec.sin_cos();
        let relative = Vector3::new(cos_dec * d_ra.cos(), cos_dec * d_ra.sin(), sin_dec);
        Rotation3::from_axis_angle(&Vector3::y_axis(), center.dec) * relative
    }
}

/// acos which tolerates arguments pushed slightly outside [-1, 1] by rounding
pub(crate) fn clamped_acos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

pub(crate) fn clamped_asin(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

/// great-circle distance between two points, by the spherical law of cosines
/// the result is always in [0, pi]
pub fn angular_distance(p0: &SkyPoint, p1: &SkyPoint) -> f64 {
    let cos_d = p0.dec.sin() * p1.dec.sin() + p0.dec.cos() * p1.dec.cos() * (p1.ra - p0.ra).cos();
    clamped_acos(cos_d)
}
