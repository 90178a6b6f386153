extern crate nalgebra as na;

use crate::coord::{self, SphericalCoords};

use na::Vector3;

/**
 * Rectangular coordinates, in the same units as
 * the spherical radius
 **/
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CartesianCoords {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianCoords {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        CartesianCoords { x, y, z }
    }

    pub fn to_spherical(&self) -> SphericalCoords {
        let longitude = coord::quadrant_atan(self.y, self.x);
        let diagonal = f64::sqrt(self.x * self.x + self.y * self.y);
        // on the polar axis z/0 is ±inf; only the origin is 0/0
        let latitude = if diagonal == 0.0 && self.z == 0.0 {
            0.0
        } else {
            f64::atan(self.z / diagonal)
        };
        let radius = f64::sqrt(diagonal * diagonal + self.z * self.z);
        SphericalCoords::from_radians(longitude, latitude, radius)
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl From<Vector3<f64>> for CartesianCoords {
    fn from(v: Vector3<f64>) -> Self {
        CartesianCoords::new(v.x, v.y, v.z)
    }
}

impl From<CartesianCoords> for Vector3<f64> {
    fn from(c: CartesianCoords) -> Self {
        c.to_vector()
    }
}

impl From<&CartesianCoords> for SphericalCoords {
    fn from(c: &CartesianCoords) -> Self {
        c.to_spherical()
    }
}

impl SphericalCoords {
    /**
     * x towards (lon 0, lat 0), z towards the north pole
     **/
    pub fn to_cartesian(&self) -> CartesianCoords {
        let coslat = self.latitude.cos();
        CartesianCoords {
            x: self.radius * coslat * self.longitude.cos(),
            y: self.radius * coslat * self.longitude.sin(),
            z: self.radius * self.latitude.sin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HALF_PI, TWO_PI};
    use approx::assert_abs_diff_eq;
    use nalgebra::{Rotation3, Vector3};
    use std::f64::consts::PI;

    fn assert_vec_eq(actual: Vector3<f64>, expected: Vector3<f64>) {
        for i in 0..3 {
            assert_abs_diff_eq!(actual[i], expected[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_unit_x() {
        let s = CartesianCoords::new(1.0, 0.0, 0.0).to_spherical();
        assert_eq!(0.0, s.longitude.radians());
        assert_eq!(0.0, s.latitude.radians());
        assert_eq!(1.0, s.radius);
    }

    #[test]
    fn test_polar_axis_and_origin() {
        let points = [
            CartesianCoords::new(0.0, 0.0, 1.0),
            CartesianCoords::new(0.0, 0.0, -1.0),
            CartesianCoords::new(0.0, 0.0, 0.0),
            CartesianCoords::new(-0.0, -0.0, 2.0),
        ];
        for p in points {
            let s = p.to_spherical();
            let lon = s.longitude.radians();
            assert!((0.0..TWO_PI).contains(&lon), "{:?} gave {}", p, lon);
            assert!(!s.latitude.radians().is_nan());
            assert!(s.is_overlap(&s, 0.0));
            assert!(s.is_overlap(&s, PI));
        }
        let north = CartesianCoords::new(0.0, 0.0, 1.0).to_spherical();
        assert_abs_diff_eq!(north.latitude.radians(), HALF_PI, epsilon = 1e-15);
        assert!(north.is_overlap(&SphericalCoords::from_radians(0.0, HALF_PI, 1.0), 1.0));
        let south = CartesianCoords::new(0.0, 0.0, -1.0).to_spherical();
        assert_abs_diff_eq!(south.latitude.radians(), -HALF_PI, epsilon = 1e-15);
        let origin = CartesianCoords::new(0.0, 0.0, 0.0).to_spherical();
        assert_eq!(0.0, origin.latitude.radians());
        assert_eq!(0.0, origin.radius);
    }

    #[test]
    fn test_negative_zero_x() {
        let s = CartesianCoords::new(-0.0, -1.0, 0.0).to_spherical();
        assert_abs_diff_eq!(s.longitude.degrees(), 270.0, epsilon = 1e-12);
        let s = CartesianCoords::new(-0.0, 1.0, 0.0).to_spherical();
        assert_abs_diff_eq!(s.longitude.degrees(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quadrants() {
        let s = CartesianCoords::new(-1.0, 1.0, 0.0).to_spherical();
        assert_abs_diff_eq!(s.longitude.radians(), 0.75 * PI, epsilon = 1e-15);
        let s = CartesianCoords::new(-1.0, -1.0, 0.0).to_spherical();
        assert_abs_diff_eq!(s.longitude.radians(), 1.25 * PI, epsilon = 1e-15);
        let s = CartesianCoords::new(1.0, -1.0, 0.0).to_spherical();
        assert_abs_diff_eq!(s.longitude.radians(), 1.75 * PI, epsilon = 1e-15);
        assert_abs_diff_eq!(s.radius, f64::sqrt(2.0), epsilon = 1e-15);
    }

    #[test]
    fn test_latitude_and_radius() {
        let s = CartesianCoords::new(3.0, 0.0, 4.0).to_spherical();
        assert_abs_diff_eq!(s.latitude.radians(), f64::atan(4.0 / 3.0), epsilon = 1e-15);
        assert_abs_diff_eq!(s.radius, 5.0, epsilon = 1e-15);
    }

    #[test]
    fn test_spherical_to_cartesian_and_back() {
        let c = SphericalCoords::from_radians(2.3, -0.4, 12.0);
        let back = c.to_cartesian().to_spherical();
        assert_abs_diff_eq!(back.longitude.radians(), 2.3, epsilon = 1e-12);
        assert_abs_diff_eq!(back.latitude.radians(), -0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(back.radius, 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vector_conversion() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let c = CartesianCoords::from(v);
        assert_eq!(CartesianCoords::new(1.0, 2.0, 3.0), c);
        assert_eq!(v, Vector3::from(c));
    }

    #[test]
    fn test_reorient_is_rotation_about_x() {
        let offset = 0.409;
        let rot = Rotation3::from_axis_angle(&Vector3::x_axis(), -offset);
        for lon in [0.3, 1.0, 2.2, 3.5, 4.0, 5.9] {
            for lat in [-1.2, -0.3, 0.0, 0.6, 1.3] {
                let c = SphericalCoords::from_radians(lon, lat, 1.0);
                let expected = rot * c.to_cartesian().to_vector();
                let actual = c.reorient(offset).to_cartesian().to_vector();
                assert_vec_eq(actual, expected);
            }
        }
    }

    #[test]
    fn test_rotate_is_rotation_about_z() {
        let rot = Rotation3::from_axis_angle(&Vector3::z_axis(), 1.1);
        let c = SphericalCoords::from_radians(5.9, 0.7, 2.0);
        let expected = rot * c.to_cartesian().to_vector();
        let rotated = c.rotate(1.1);
        assert!(rotated.longitude.radians() < TWO_PI);
        assert!(rotated.latitude.radians() < HALF_PI);
        assert_vec_eq(rotated.to_cartesian().to_vector(), expected);
    }
}
