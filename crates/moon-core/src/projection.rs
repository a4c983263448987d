//! Conversions between geographic coordinates and points in body space.
//!
//! Latitude is measured from the equator towards +Y (north pole at +90°).
//! Longitude is offset by 180° so that the ±180° meridian, the seam of an
//! equirectangular texture, lies on the -X axis. The body mesh in
//! [`crate::mesh::uv_sphere`] uses the same convention, so any texture authored
//! for it lines up with projected markers.

use crate::error::SceneError;
use glam::{Vec2, Vec3};

/// Map a latitude/longitude pair (degrees) onto a sphere of `radius`.
///
/// No validation is performed: out-of-range inputs still produce a point on
/// the sphere, just not a geographically meaningful one. Use
/// [`project_checked`] where bad input should be rejected.
#[inline]
pub fn lat_lon_to_vec3(latitude_deg: f32, longitude_deg: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - latitude_deg).to_radians(); // polar angle, 0 at the north pole
    let theta = (longitude_deg + 180.0).to_radians(); // azimuth
    Vec3::new(
        -(radius * phi.sin() * theta.cos()),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

#[inline]
pub fn is_valid_coordinate(latitude_deg: f32, longitude_deg: f32) -> bool {
    (-90.0..=90.0).contains(&latitude_deg) && (-180.0..=180.0).contains(&longitude_deg)
}

/// Like [`lat_lon_to_vec3`] but rejects coordinates outside
/// `[-90, 90] x [-180, 180]` and non-positive radii.
pub fn project_checked(
    latitude_deg: f32,
    longitude_deg: f32,
    radius: f32,
) -> Result<Vec3, SceneError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(SceneError::InvalidRadius(radius));
    }
    if !is_valid_coordinate(latitude_deg, longitude_deg) {
        return Err(SceneError::InvalidCoordinate {
            latitude: latitude_deg,
            longitude: longitude_deg,
        });
    }
    Ok(lat_lon_to_vec3(latitude_deg, longitude_deg, radius))
}

/// Inverse of [`lat_lon_to_vec3`]. Returns `(latitude, longitude)` in degrees,
/// longitude in `(-180, 180]`. The origin maps to `(0, 0)`.
pub fn vec3_to_lat_lon(point: Vec3) -> (f32, f32) {
    let radius = point.length();
    if radius <= f32::EPSILON {
        return (0.0, 0.0);
    }
    let phi = (point.y / radius).clamp(-1.0, 1.0).acos();
    let theta = point.z.atan2(-point.x);
    let mut longitude = theta.to_degrees() - 180.0;
    if longitude <= -180.0 {
        longitude += 360.0;
    }
    (90.0 - phi.to_degrees(), longitude)
}

/// Equirectangular texture coordinate for a geographic position.
/// `u` grows eastwards from the -180° seam, `v` grows southwards from the top row.
#[inline]
pub fn surface_uv(latitude_deg: f32, longitude_deg: f32) -> Vec2 {
    Vec2::new(
        (longitude_deg + 180.0) / 360.0,
        (90.0 - latitude_deg) / 180.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3, eps: f32) -> bool {
        (a - b).length() <= eps
    }

    #[test]
    fn equator_prime_meridian_faces_plus_x() {
        let p = lat_lon_to_vec3(0.0, 0.0, 1.0);
        assert!(approx(p, Vec3::X, 1e-5), "got {p:?}");
    }

    #[test]
    fn seam_sits_on_minus_x() {
        let p = lat_lon_to_vec3(0.0, -180.0, 2.0);
        assert!(approx(p, Vec3::new(-2.0, 0.0, 0.0), 1e-5), "got {p:?}");
    }

    #[test]
    fn quarter_meridians() {
        assert!(approx(lat_lon_to_vec3(0.0, 90.0, 1.0), Vec3::NEG_Z, 1e-5));
        assert!(approx(lat_lon_to_vec3(0.0, -90.0, 1.0), Vec3::Z, 1e-5));
    }

    #[test]
    fn points_lie_on_the_sphere() {
        let r = 10.5;
        for lat in (-90..=90).step_by(15) {
            for lon in (-180..=180).step_by(30) {
                let p = lat_lon_to_vec3(lat as f32, lon as f32, r);
                assert!(
                    (p.length() - r).abs() <= 1e-4,
                    "({lat}, {lon}) -> {p:?} has length {}",
                    p.length()
                );
            }
        }
    }

    #[test]
    fn poles_ignore_longitude() {
        let r = 10.5;
        for lon in (-180..=180).step_by(45) {
            let north = lat_lon_to_vec3(90.0, lon as f32, r);
            let south = lat_lon_to_vec3(-90.0, lon as f32, r);
            assert!(approx(north, Vec3::new(0.0, r, 0.0), 1e-4), "north at {lon}: {north:?}");
            assert!(approx(south, Vec3::new(0.0, -r, 0.0), 1e-4), "south at {lon}: {south:?}");
        }
    }

    #[test]
    fn both_sides_of_the_seam_coincide() {
        let r = 10.5;
        let west = lat_lon_to_vec3(0.0, -180.0, r);
        let east = lat_lon_to_vec3(0.0, 180.0, r);
        assert!(approx(west, east, 1e-4), "{west:?} vs {east:?}");
        assert!(approx(west, Vec3::new(-r, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn checked_rejects_out_of_range() {
        assert_eq!(
            project_checked(91.0, 0.0, 1.0),
            Err(SceneError::InvalidCoordinate {
                latitude: 91.0,
                longitude: 0.0
            })
        );
        assert!(matches!(
            project_checked(0.0, -180.5, 1.0),
            Err(SceneError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            project_checked(f32::NAN, 0.0, 1.0),
            Err(SceneError::InvalidCoordinate { .. })
        ));
        assert_eq!(
            project_checked(0.0, 0.0, 0.0),
            Err(SceneError::InvalidRadius(0.0))
        );
    }

    #[test]
    fn checked_accepts_boundaries() {
        for (lat, lon) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0)] {
            assert!(project_checked(lat, lon, 10.5).is_ok());
        }
    }

    #[test]
    fn inverse_recovers_coordinates() {
        for &(lat, lon) in &[
            (-84.0, -134.0),
            (29.0, -98.0),
            (48.0, 35.0),
            (21.0, 88.0),
            (50.0, -20.0),
            (0.0, 0.0),
            (-10.0, 179.0),
        ] {
            let (lat2, lon2) = vec3_to_lat_lon(lat_lon_to_vec3(lat, lon, 10.5));
            assert!((lat - lat2).abs() < 1e-3, "lat {lat} -> {lat2}");
            assert!((lon - lon2).abs() < 1e-3, "lon {lon} -> {lon2}");
        }
    }

    #[test]
    fn inverse_puts_seam_at_plus_180() {
        let (_, lon) = vec3_to_lat_lon(lat_lon_to_vec3(0.0, -180.0, 1.0));
        assert!((lon - 180.0).abs() < 1e-3, "got {lon}");
    }

    #[test]
    fn uv_corners() {
        assert_eq!(surface_uv(90.0, -180.0), Vec2::new(0.0, 0.0));
        assert_eq!(surface_uv(-90.0, 180.0), Vec2::new(1.0, 1.0));
        assert_eq!(surface_uv(0.0, 0.0), Vec2::new(0.5, 0.5));
    }
}
