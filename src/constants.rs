use std::f64::consts::PI;

//
//ANGLES
//
// Degrees to radians
pub const DEGREE: f64 = PI / 180.0;
// Radians to degrees
pub const RADIAN: f64 = 180.0 / PI;
// Degrees of longitude per hour of right ascension
pub const DEG_PER_HOUR: f64 = 15.0;

pub const HALF_PI: f64 = PI / 2.0;
pub const THREE_HALF_PI: f64 = PI * 1.5;
pub const TWO_PI: f64 = PI * 2.0;

//
//NATURE
//
// Mean obliquity of the ecliptic at J2000, no time correction
pub const ECLIPTIC_OBLIQUITY: f64 = (23.0 + 26.0 / 60.0 + 21.406 / 3600.0) * DEGREE;

//
//DISTANCES
//
// AU in a light year
pub const LY: f64 = 63241.0;
// AU in a parsec
pub const PARSEC: f64 = 206265.0;
