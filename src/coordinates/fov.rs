use super::{angular_distance, clamped_acos, clamped_asin, SkyPoint};
use serde_derive::Serialize;

/// a rectangular field of view, aligned with the RA and DEC directions
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct FovSpec {
    pub center: SkyPoint,
    /// HALF of the horizontal field of view, in radians, in (0, pi/2]
    pub half_h: f64,
    /// HALF of the vertical field of view, in radians, in (0, pi/2]
    pub half_v: f64,
}

impl FovSpec {
    pub fn new(center: SkyPoint, half_h: f64, half_v: f64) -> FovSpec {
        FovSpec {
            center,
            half_h,
            half_v,
        }
    }

    pub fn contains(&self, object: &SkyPoint) -> bool {
        inside_fov(&self.center, object, self.half_h, self.half_v)
    }
}

/// determines if `object` lies inside the rectangular fov centered at `center` with half
/// extents `fov_h` and `fov_v`, all angles in radians
///
/// objects in the opposite hemisphere can pass this test as well, they have to be filtered out
/// separately by their distance to the center
pub fn inside_fov(center: &SkyPoint, object: &SkyPoint, fov_h: f64, fov_v: f64) -> bool {
    horizontal_offset(center, object) < fov_h && vertical_offset(center, object) < fov_v
}

/// sine and cosine magnitudes of the declination of the point on the meridian of the center
/// which is closest to the object, obtained by setting the derivative of the distance to zero
/// equal to sqrt(t^2 / (1 + t^2)) and sqrt(1 / (1 + t^2)) for t = sin_dec / along, evaluated
/// without forming t so large t does not overflow
/// returns None when `along` is 0 and the closest point is not defined
fn closest_approach(sin_dec: f64, along: f64) -> Option<(f64, f64)> {
    if along == 0.0 {
        return None;
    }
    let norm = sin_dec.hypot(along);
    Some((sin_dec.abs() / norm, along.abs() / norm))
}

/// angular distance between the object and the meridian of the center, in radians
pub fn horizontal_offset(center: &SkyPoint, object: &SkyPoint) -> f64 {
    let d_ra = object.ra - center.ra;
    let (sin_dec, cos_dec) = object.dec.sin_cos();
    let along = cos_dec * d_ra.cos();

    let (s, c) = match closest_approach(sin_dec, along) {
        Some(sc) => sc,
        None => {
            // the object is 90 degrees away in RA or at a pole, measure along its own parallel
            let on_meridian = SkyPoint::new(center.ra, object.dec);
            return angular_distance(&on_meridian, object);
        }
    };

    // the signs of s and c are lost when squaring, so all four combinations are tried
    [(s, c), (-s, c), (s, -c), (-s, -c)]
        .iter()
        .map(|&(s, c)| clamped_acos(s * sin_dec + c * along))
        .fold(f64::INFINITY, f64::min)
}

/// angular distance between the object and the great circle through the center along which RA
/// changes, always non-negative
pub fn vertical_offset(center: &SkyPoint, object: &SkyPoint) -> f64 {
    clamped_asin(object.in_frame_of(center).z).abs()
}
