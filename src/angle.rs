use crate::constants;

use std::fmt;

/**
 * An angle in radians with its sine and cosine
 * computed once at construction. There are no
 * mutators, so the cached values always match
 * the angle.
 **/
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Angle {
    radians: f64,
    sin: f64,
    cos: f64,
}

impl Angle {
    pub fn from_radians(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Angle { radians, sin, cos }
    }

    /**
     * Sexagesimal degrees. The sign is carried by
     * `degree`; minutes and seconds are added as-is
     **/
    pub fn from_degrees(degree: i32, minutes: f64, seconds: f64) -> Self {
        Self::from_radians(sexagesimal(degree as f64, minutes, seconds) * constants::DEGREE)
    }

    /**
     * Hour angle (hours, minutes, seconds), 1h = 15 deg
     **/
    pub fn from_clock(hours: u32, minutes: f64, seconds: f64) -> Self {
        Self::from_radians(
            constants::DEG_PER_HOUR * sexagesimal(hours as f64, minutes, seconds) * constants::DEGREE,
        )
    }

    pub fn zero() -> Self {
        Angle {
            radians: 0.0,
            sin: 0.0,
            cos: 1.0,
        }
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn degrees(&self) -> f64 {
        self.radians * constants::RADIAN
    }

    pub fn sin(&self) -> f64 {
        self.sin
    }

    pub fn cos(&self) -> f64 {
        self.cos
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}

/**
 * Adds up a sexagesimal triple into its unit
 **/
pub fn sexagesimal(units: f64, minutes: f64, seconds: f64) -> f64 {
    units + minutes / 60.0 + seconds / 3600.0
}
