#[macro_use]
extern crate lazy_static;

pub mod angle;
pub mod cartesian;
pub mod constants;
pub mod coord;
pub mod data;
pub mod designation;
pub mod errors;
pub mod logging;
pub mod reconcile;
pub mod xmatch;


pub use angle::Angle;
pub use cartesian::CartesianCoords;
pub use coord::{Positioned, SphericalCoords};
pub use data::{AstronomicalObject, Config, Location, NgcKey, NgcName};
pub use designation::{bayer_from_short_name, Designation, DesignationKey};
pub use errors::{CatalogError, CatalogResult};
pub use reconcile::{read, read_with, reconcile, reconcile_with, NameIndex, NameIndexBuilder, RecordSource};
