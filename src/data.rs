use crate::coord::{Positioned, SphericalCoords};
use crate::designation::Designation;
use crate::errors::{CatalogError, CatalogResult};

use std::fmt;
use std::str::FromStr;

// Columns of a names-catalogue row
pub const RECORD_FIELDS: usize = 11;

/**
 * Represents a catalogue entry. Zero values stand for
 * missing data: index 0 has no catalogue number and
 * magnitude 0 is unknown.
 **/
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AstronomicalObject {
    pub catalogue: String,
    pub index: u32,
    pub designation: Designation,
    pub name: String,
    pub local_name: String,
    pub alternate_names: Vec<String>,
    pub magnitude: f64,
    pub coords: SphericalCoords,
}

impl Positioned for AstronomicalObject {
    fn coords(&self) -> SphericalCoords {
        self.coords
    }
}

impl AstronomicalObject {
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /**
     * Copies the naming fields of `other` over ours,
     * keeping our identity and position
     **/
    pub fn take_names(&mut self, other: &AstronomicalObject) {
        self.name = other.name.clone();
        self.local_name = other.local_name.clone();
        self.alternate_names = other.alternate_names.clone();
    }

    /**
     * Parses a names-catalogue row:
     * name, local name, code, constellation, in-system index,
     * "<catalogue> <index>", magnitude, lon, lat (degrees),
     * radius (AU), alternate names separated by ';'
     **/
    pub fn from_record(fields: &[&str]) -> CatalogResult<Self> {
        if fields.len() != RECORD_FIELDS {
            return Err(CatalogError::FieldCount {
                expected: RECORD_FIELDS,
                actual: fields.len(),
            });
        }
        let mut record = AstronomicalObject {
            name: fields[0].to_string(),
            local_name: fields[1].to_string(),
            designation: Designation::from_code(fields[2], fields[3]),
            alternate_names: fields[10]
                .split(';')
                .filter(|n| !n.is_empty())
                .map(String::from)
                .collect(),
            ..Default::default()
        };
        if !fields[4].is_empty() {
            record.designation.in_system_index = Some(parse_field("in_system_index", fields[4])?);
        }
        if !fields[5].is_empty() {
            let mut split = fields[5].split(' ');
            match (split.next(), split.next()) {
                (Some(catalogue), Some(index)) => {
                    record.catalogue = catalogue.to_string();
                    record.index = parse_field("index", index)?;
                }
                _ => return Err(CatalogError::InvalidCatalogueKey(fields[5].to_string())),
            }
        }
        if !fields[6].is_empty() {
            record.magnitude = parse_field("magnitude", fields[6])?;
        }
        if !fields[7].is_empty() && !fields[8].is_empty() {
            let longitude: f64 = parse_field("longitude", fields[7])?;
            let latitude: f64 = parse_field("latitude", fields[8])?;
            record.coords = SphericalCoords::from_degrees(longitude, latitude);
        }
        if !fields[9].is_empty() {
            let radius: u64 = parse_field("radius", fields[9])?;
            record.coords = record.coords.with_radius(radius as f64);
        }
        Ok(record)
    }

    /**
     * Inverse of from_record. Unknown values are left empty.
     **/
    pub fn to_record(&self) -> Vec<String> {
        let mut s = vec![String::new(); RECORD_FIELDS];
        s[0] = self.name.clone();
        s[1] = self.local_name.clone();
        s[2] = self.designation.code();
        s[3] = self.designation.constellation.clone();
        if let Some(i) = self.designation.in_system_index {
            s[4] = i.to_string();
        }
        if !self.catalogue.is_empty() && self.index != 0 {
            s[5] = format!("{} {}", self.catalogue, self.index);
        }
        if self.magnitude != 0.0 {
            s[6] = format!("{:.2}", self.magnitude);
        }
        let (lon, lat) = (self.coords.longitude.degrees(), self.coords.latitude.degrees());
        if lon != 0.0 || lat != 0.0 {
            s[7] = format!("{:.6}", lon);
            s[8] = format!("{:.6}", lat);
        }
        if self.coords.radius != 0.0 {
            s[9] = format!("{}", self.coords.radius as u64);
        }
        s[10] = self.alternate_names.join(";");
        s
    }
}

impl fmt::Display for AstronomicalObject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} ({}) {}", self.catalogue, self.index, self.name, self.coords)
    }
}

/**
 * A place on Earth
 **/
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Location {
    pub name: String,
    pub local_name: String,
    pub population: u64,
    pub country_code: String,
    pub coords: SphericalCoords,
}

impl Positioned for Location {
    fn coords(&self) -> SphericalCoords {
        self.coords
    }
}

/**
 * Identifies an object of the New General Catalogue
 * or of its Index Catalogue supplement
 **/
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NgcKey {
    pub catalogue: String,
    pub index: u32,
}

impl NgcKey {
    pub fn new(catalogue: &str, index: u32) -> Self {
        NgcKey {
            catalogue: catalogue.to_string(),
            index,
        }
    }
}

impl FromStr for NgcKey {
    type Err = CatalogError;

    /**
     * "I" prefix means IC, anything else is NGC
     **/
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (catalogue, number) = match s.strip_prefix('I') {
            Some(rest) => ("IC", rest),
            None => ("NGC", s),
        };
        let index = number
            .trim()
            .parse::<u32>()
            .map_err(|_| CatalogError::InvalidCatalogueKey(s.to_string()))?;
        Ok(NgcKey::new(catalogue, index))
    }
}

impl fmt::Display for NgcKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.catalogue, self.index)
    }
}

/**
 * One line of the NGC/IC names list
 **/
#[derive(Clone, Debug, PartialEq)]
pub struct NgcName {
    pub key: NgcKey,
    pub name: String,
}

impl NgcName {
    pub fn new(key: NgcKey, name: &str) -> Self {
        NgcName {
            key,
            name: name.to_string(),
        }
    }
}

/**
 * Reconciliation settings
 **/
pub struct Config {
    // catalogue whose (catalogue, index) names are matched first
    pub index_catalogue: String,
    // keep NGC/IC objects that have no name
    pub keep_anonymous_nebulae: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            index_catalogue: "HR".to_string(),
            keep_anonymous_nebulae: false,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("index_catalogue", &self.index_catalogue)
            .field("keep_anonymous_nebulae", &self.keep_anonymous_nebulae)
            .finish()
    }
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> CatalogResult<T> {
    value
        .parse::<T>()
        .map_err(|_| CatalogError::invalid_field(field, value))
}
