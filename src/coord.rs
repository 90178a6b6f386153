use crate::angle::{sexagesimal, Angle};
use crate::constants;

use std::fmt;

use constants::{DEGREE, HALF_PI, THREE_HALF_PI, TWO_PI};

// geographic        | celestial
// longitude         | right ascension
// latitude          | declination

/**
 * Spherical coordinates. Longitude lives in [0, 2pi),
 * latitude in [-pi/2, pi/2] and the radius is in AU,
 * where 0 means unknown. Every transform returns a
 * new value.
 **/
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SphericalCoords {
    pub longitude: Angle,
    pub latitude: Angle,
    pub radius: f64,
}

/**
 * Anything with a position on the sphere
 **/
pub trait Positioned {
    fn coords(&self) -> SphericalCoords;
}

impl Positioned for SphericalCoords {
    fn coords(&self) -> SphericalCoords {
        *self
    }
}

impl SphericalCoords {
    /**
     * Base constructor. Longitudes outside of [0, 2pi) are
     * brought back into range, in-range values are kept
     * untouched. Latitude is not checked.
     **/
    pub fn from_radians(longitude: f64, latitude: f64, radius: f64) -> Self {
        SphericalCoords {
            longitude: Angle::from_radians(wrap_longitude(longitude)),
            latitude: Angle::from_radians(latitude),
            radius,
        }
    }

    pub fn from_degrees(longitude: f64, latitude: f64) -> Self {
        Self::from_radians(longitude * DEGREE, latitude * DEGREE, 0.0)
    }

    /**
     * Longitude as hours, minutes and seconds of time and
     * latitude as signed degrees, minutes and seconds of arc
     **/
    pub fn from_clock(
        lon_hours: u32,
        lon_minutes: f64,
        lon_seconds: f64,
        lat_degrees: i32,
        lat_minutes: f64,
        lat_seconds: f64,
    ) -> Self {
        let longitude =
            constants::DEG_PER_HOUR * sexagesimal(lon_hours as f64, lon_minutes, lon_seconds);
        let latitude = sexagesimal(lat_degrees as f64, lat_minutes, lat_seconds);
        Self::from_degrees(longitude, latitude)
    }

    pub fn with_radius(&self, radius: f64) -> Self {
        SphericalCoords { radius, ..*self }
    }

    /**
     * Great-circle angle to `other`, in radians
     **/
    pub fn separation(&self, other: &SphericalCoords) -> f64 {
        if self.longitude == other.longitude && self.latitude == other.latitude {
            return 0.0;
        }
        // cos(lon1 - lon2) from the cached values
        let cos_dlon = self.longitude.cos() * other.longitude.cos()
            + self.longitude.sin() * other.longitude.sin();
        let delta = self.latitude.sin() * other.latitude.sin()
            + self.latitude.cos() * other.latitude.cos() * cos_dlon;
        // rounding can push |delta| slightly past 1
        delta.clamp(-1.0, 1.0).acos()
    }

    /**
     * True when both points are within `threshold` radians
     * of each other
     **/
    pub fn is_overlap(&self, other: &SphericalCoords, threshold: f64) -> bool {
        self.separation(other) <= threshold
    }

    /**
     * Rotates around the polar axis (only longitude changes)
     **/
    pub fn rotate(&self, offset: f64) -> Self {
        let mut longitude = self.longitude.radians() + offset;
        if longitude >= TWO_PI {
            longitude -= TWO_PI;
        }
        SphericalCoords::from_radians(longitude, self.latitude.radians(), self.radius)
    }

    /**
     * Coordinates in a frame whose pole is tilted by `offset`
     * radians around the axis of the zero meridian.
     **/
    pub fn reorient(&self, offset: f64) -> Self {
        let latitude = self.latitude.radians();
        if latitude == HALF_PI {
            return SphericalCoords::from_radians(HALF_PI, HALF_PI - offset, self.radius);
        } else if latitude == -HALF_PI {
            return SphericalCoords::from_radians(THREE_HALF_PI, -HALF_PI + offset, self.radius);
        }

        let (offset_sin, offset_cos) = offset.sin_cos();
        let lat = &self.latitude;
        let lon = &self.longitude;
        let new_latitude = (lat.sin() * offset_cos - lat.cos() * offset_sin * lon.sin()).asin();

        let longitude = lon.radians();
        if longitude == HALF_PI || longitude == THREE_HALF_PI {
            // Longitude kept, radius not carried over
            return SphericalCoords {
                longitude: *lon,
                latitude: Angle::from_radians(new_latitude),
                radius: 0.0,
            };
        }

        let x = lat.cos() * lon.cos();
        let y = lat.sin() * offset_sin + lat.cos() * offset_cos * lon.sin();
        SphericalCoords::from_radians(quadrant_atan(y, x), new_latitude, self.radius)
    }

    /**
     * Three chained rotations: around the pole, tilt of
     * the pole, and around the new pole.
     **/
    pub fn offset(&self, rotation: f64, precession: f64, nutation: f64) -> Self {
        self.rotate(rotation)
            .reorient(precession)
            .rotate(nutation)
    }

    /**
     * Ecliptic coordinates, using the fixed J2000 obliquity
     **/
    pub fn to_ecliptic(&self) -> Self {
        self.reorient(constants::ECLIPTIC_OBLIQUITY)
    }

    pub fn is_north_pole(&self) -> bool {
        self.latitude.radians() == HALF_PI
    }

    pub fn is_south_pole(&self) -> bool {
        self.latitude.radians() == -HALF_PI
    }
}

impl fmt::Display for SphericalCoords {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{:.6}, {:.6}, {} AU]",
            self.longitude.degrees(),
            self.latitude.degrees(),
            self.radius
        )
    }
}

/**
 * atan(y/x) moved into [0, 2pi): +pi when x < 0, otherwise
 * +2pi when y < 0. The origin maps to 0 and -0.0 counts
 * as +0.0.
 **/
pub fn quadrant_atan(y: f64, x: f64) -> f64 {
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }
    let x = if x == 0.0 { 0.0 } else { x };
    let mut angle = (y / x).atan();
    if x < 0.0 {
        angle += std::f64::consts::PI;
    } else if y < 0.0 {
        angle += TWO_PI;
    }
    angle
}

fn wrap_longitude(longitude: f64) -> f64 {
    if (0.0..TWO_PI).contains(&longitude) {
        return longitude;
    }
    let wrapped = longitude.rem_euclid(TWO_PI);
    if wrapped >= TWO_PI {
        0.0
    } else {
        wrapped
    }
}
