use crate::data::{AstronomicalObject, Config, NgcKey, NgcName};
use crate::designation::DesignationKey;
use crate::errors::CatalogResult;

use std::collections::HashMap;

/**
 * Something that yields the records of one catalogue.
 * File readers implement this; any read or parse
 * failure aborts the whole load.
 **/
pub trait RecordSource<T> {
    fn catalogue(&self) -> &str;
    fn read(&self) -> CatalogResult<Vec<T>>;
}

impl<T: Clone> RecordSource<T> for Vec<T> {
    fn catalogue(&self) -> &str {
        "memory"
    }

    fn read(&self) -> CatalogResult<Vec<T>> {
        Ok(self.clone())
    }
}

/**
 * How a positional record found its name
 **/
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatchKind {
    Index,
    Designation,
}

/**
 * Collects name records. Call `build` once everything
 * has been added to get the read-only index.
 **/
pub struct NameIndexBuilder {
    index_catalogue: String,
    records: Vec<AstronomicalObject>,
    by_index: HashMap<u32, usize>,
    by_designation: HashMap<DesignationKey, usize>,
}

impl NameIndexBuilder {
    pub fn new(config: &Config) -> Self {
        NameIndexBuilder {
            index_catalogue: config.index_catalogue.clone(),
            records: Vec::new(),
            by_index: HashMap::new(),
            by_designation: HashMap::new(),
        }
    }

    /**
     * Adds a name record. A later record with the same
     * key replaces the earlier one.
     **/
    pub fn add(&mut self, record: AstronomicalObject) -> &mut Self {
        let idx = self.records.len();
        if record.catalogue == self.index_catalogue && record.index != 0 {
            self.by_index.insert(record.index, idx);
        }
        if let Some(key) = record.designation.key() {
            self.by_designation.insert(key, idx);
        }
        self.records.push(record);
        self
    }

    pub fn build(self) -> NameIndex {
        log::debug!(
            "Name index: {} records, {} by {} index, {} by designation",
            self.records.len(),
            self.by_index.len(),
            self.index_catalogue,
            self.by_designation.len()
        );
        NameIndex {
            index_catalogue: self.index_catalogue,
            records: self.records,
            by_index: self.by_index,
            by_designation: self.by_designation,
        }
    }
}

impl FromIterator<AstronomicalObject> for NameIndexBuilder {
    fn from_iter<I: IntoIterator<Item = AstronomicalObject>>(iter: I) -> Self {
        let mut builder = NameIndexBuilder::new(&Config::default());
        for record in iter {
            builder.add(record);
        }
        builder
    }
}

/**
 * Name records keyed by catalogue index and by
 * designation. Immutable once built.
 **/
pub struct NameIndex {
    index_catalogue: String,
    records: Vec<AstronomicalObject>,
    by_index: HashMap<u32, usize>,
    by_designation: HashMap<DesignationKey, usize>,
}

impl NameIndex {
    pub fn from_records(records: &[AstronomicalObject], config: &Config) -> Self {
        let mut builder = NameIndexBuilder::new(config);
        for record in records {
            builder.add(record.clone());
        }
        builder.build()
    }

    /**
     * Finds the name record of a positional record. The
     * catalogue index wins; otherwise the Bayer key, and
     * only without Bayer code the Flamsteed key, is tried.
     **/
    pub fn resolve(&self, record: &AstronomicalObject) -> Option<(&AstronomicalObject, MatchKind)> {
        if record.catalogue == self.index_catalogue {
            if let Some(&i) = self.by_index.get(&record.index) {
                return Some((&self.records[i], MatchKind::Index));
            }
        }
        record
            .designation
            .key()
            .and_then(|key| self.by_designation.get(&key))
            .map(|&i| (&self.records[i], MatchKind::Designation))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/**
 * NGC/IC names grouped by key, in input order
 **/
pub struct NgcNameIndex {
    names: HashMap<NgcKey, Vec<String>>,
}

impl NgcNameIndex {
    pub fn new(entries: &[NgcName]) -> Self {
        let mut names: HashMap<NgcKey, Vec<String>> = HashMap::new();
        for entry in entries {
            names
                .entry(entry.key.clone())
                .or_default()
                .push(entry.name.clone());
        }
        NgcNameIndex { names }
    }

    pub fn get(&self, key: &NgcKey) -> &[String] {
        self.names.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

// Counts for the summary log line
#[derive(Default)]
struct Counts {
    by_index: usize,
    by_designation: usize,
    unnamed_stars: usize,
    named_nebulae: usize,
    anonymous_nebulae: usize,
}

/**
 * Names the bright stars and attaches names to NGC/IC
 * objects, see `reconcile_with`
 **/
pub fn reconcile(
    names: &[AstronomicalObject],
    bsc: Vec<AstronomicalObject>,
    ngc: Vec<AstronomicalObject>,
    ngc_names: &[NgcName],
) -> Vec<AstronomicalObject> {
    reconcile_with(&Config::default(), names, bsc, ngc, ngc_names)
}

/**
 * Each positional record takes the name, local name and
 * alternate names of its name record and is kept; records
 * without a name are dropped. NGC/IC objects get their
 * first listed name and keep the rest as alternates.
 * Stars come first, then nebulae, both in input order.
 **/
pub fn reconcile_with(
    config: &Config,
    names: &[AstronomicalObject],
    bsc: Vec<AstronomicalObject>,
    ngc: Vec<AstronomicalObject>,
    ngc_names: &[NgcName],
) -> Vec<AstronomicalObject> {
    let index = NameIndex::from_records(names, config);
    let mut counts = Counts::default();
    let mut result = Vec::with_capacity(bsc.len());

    for mut record in bsc {
        match index.resolve(&record) {
            Some((name, kind)) => {
                match kind {
                    MatchKind::Index => counts.by_index += 1,
                    MatchKind::Designation => counts.by_designation += 1,
                }
                record.take_names(name);
                result.push(record);
            }
            None => {
                log::debug!(
                    "No name for {} {} ({})",
                    record.catalogue,
                    record.index,
                    record.designation
                );
                counts.unnamed_stars += 1;
            }
        }
    }

    let ngc_index = NgcNameIndex::new(ngc_names);
    for mut record in ngc {
        let key = NgcKey::new(&record.catalogue, record.index);
        if let Some((first, rest)) = ngc_index.get(&key).split_first() {
            record.name = first.clone();
            record.alternate_names = rest.to_vec();
        }
        if record.has_name() {
            counts.named_nebulae += 1;
        } else {
            counts.anonymous_nebulae += 1;
            if !config.keep_anonymous_nebulae {
                continue;
            }
        }
        result.push(record);
    }

    log::info!(
        "Reconciled {} objects: {} stars by index, {} by designation, {} unnamed dropped; {} named nebulae, {} anonymous",
        result.len(),
        counts.by_index,
        counts.by_designation,
        counts.unnamed_stars,
        counts.named_nebulae,
        counts.anonymous_nebulae
    );
    result
}

/**
 * Reads the four catalogues and reconciles them. The first
 * failing source aborts the load.
 **/
pub fn read(
    names: &impl RecordSource<AstronomicalObject>,
    bsc: &impl RecordSource<AstronomicalObject>,
    ngc: &impl RecordSource<AstronomicalObject>,
    ngc_names: &impl RecordSource<NgcName>,
) -> CatalogResult<Vec<AstronomicalObject>> {
    read_with(&Config::default(), names, bsc, ngc, ngc_names)
}

pub fn read_with(
    config: &Config,
    names: &impl RecordSource<AstronomicalObject>,
    bsc: &impl RecordSource<AstronomicalObject>,
    ngc: &impl RecordSource<AstronomicalObject>,
    ngc_names: &impl RecordSource<NgcName>,
) -> CatalogResult<Vec<AstronomicalObject>> {
    let name_records = load(names)?;
    let bsc_records = load(bsc)?;
    let ngc_name_records = load(ngc_names)?;
    let ngc_records = load(ngc)?;
    Ok(reconcile_with(
        config,
        &name_records,
        bsc_records,
        ngc_records,
        &ngc_name_records,
    ))
}

fn load<T>(source: &impl RecordSource<T>) -> CatalogResult<Vec<T>> {
    let records = source.read()?;
    log::info!("{} records loaded from {}", records.len(), source.catalogue());
    Ok(records)
}
