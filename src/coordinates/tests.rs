use super::fov::inside_fov;
use super::*;
extern crate rand;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};

/// the law of cosines loses precision for nearly identical points, acos(1 - eps) ~ sqrt(2 eps)
const TOLERANCE: f64 = 1e-7;

fn generate_random_sky_point(rng: &mut impl Rng) -> SkyPoint {
    SkyPoint::new(
        rng.gen_range(0.0..2.0 * PI),
        rng.gen_range(-FRAC_PI_2..=FRAC_PI_2),
    )
}

#[test]
fn test_distance_to_itself_is_zero() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1000 {
        let p = generate_random_sky_point(&mut rng);
        let d = angular_distance(&p, &p);
        assert!(d >= 0.0 && d < TOLERANCE, "distance {} for {:?}", d, p);
    }
}

#[test]
fn test_distance_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..1000 {
        let p = generate_random_sky_point(&mut rng);
        let q = generate_random_sky_point(&mut rng);
        assert!((angular_distance(&p, &q) - angular_distance(&q, &p)).abs() < 1e-12);
    }
}

#[test]
fn test_triangle_inequality() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1000 {
        let p = generate_random_sky_point(&mut rng);
        let q = generate_random_sky_point(&mut rng);
        let r = generate_random_sky_point(&mut rng);
        let direct = angular_distance(&p, &r);
        let detour = angular_distance(&p, &q) + angular_distance(&q, &r);
        assert!(direct <= detour + TOLERANCE);
    }
}

#[test]
fn test_distance_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..1000 {
        // angles outside the conventional ranges are still accepted
        let p = SkyPoint::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        let q = SkyPoint::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        let d = angular_distance(&p, &q);
        assert!((0.0..=PI).contains(&d));
    }
}

#[test]
fn test_known_distances() {
    let origin = SkyPoint::new(0.0, 0.0);
    assert!((angular_distance(&origin, &SkyPoint::from_degrees(90.0, 0.0)) - FRAC_PI_2).abs() < 1e-12);
    assert!((angular_distance(&SkyPoint::from_degrees(0.0, 90.0), &origin) - FRAC_PI_2).abs() < 1e-12);
    assert!((angular_distance(&origin, &SkyPoint::from_degrees(180.0, 0.0)) - PI).abs() < 1e-12);

    let b = SkyPoint::from_degrees(1.0, 1.0);
    assert!((angular_distance(&origin, &b) - 0.02468).abs() < 1e-5);
    let c = SkyPoint::from_degrees(170.0, 0.0);
    assert!((angular_distance(&origin, &c) - 2.967).abs() < 1e-3);
}

#[test]
fn test_near_antipodes_do_not_produce_nan() {
    let p = SkyPoint::new(0.1, 0.3);
    let q = SkyPoint::new(0.1 + PI, -0.3);
    let d = angular_distance(&p, &q);
    assert!(!d.is_nan());
    assert!((d - PI).abs() < TOLERANCE);
}

#[test]
fn test_frame_of_center_puts_center_on_x_axis() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let center = generate_random_sky_point(&mut rng);
        let v = center.in_frame_of(&center);
        assert!((v.x - 1.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);
        assert!(v.z.abs() < 1e-12);
    }
}

#[test]
fn test_frame_rotation_preserves_distance() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..1000 {
        let center = generate_random_sky_point(&mut rng);
        let p = generate_random_sky_point(&mut rng);
        let v = p.in_frame_of(&center);
        assert!((v.norm() - 1.0).abs() < 1e-12);
        // the center is at (1, 0, 0), so the x coordinate is the cosine of the distance
        assert!((clamped_acos(v.x) - angular_distance(&center, &p)).abs() < TOLERANCE);
    }
}

#[test]
fn test_center_is_always_inside_fov() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..1000 {
        let center = generate_random_sky_point(&mut rng);
        let fov_h = rng.gen_range(1e-6..=FRAC_PI_2);
        let fov_v = rng.gen_range(1e-6..=FRAC_PI_2);
        assert!(inside_fov(&center, &center, fov_h, fov_v), "{:?}", center);
    }
}

#[test]
fn test_points_inside_fov_are_close_to_center() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..1000 {
        let center = generate_random_sky_point(&mut rng);
        let p = generate_random_sky_point(&mut rng);
        let (fov_h, fov_v) = (0.2, 0.1);
        if angular_distance(&center, &p) < FRAC_PI_2 && inside_fov(&center, &p, fov_h, fov_v) {
            // the distance is at most the sum of the horizontal and vertical offsets
            assert!(angular_distance(&center, &p) < fov_h + fov_v + TOLERANCE);
        }
    }
}
