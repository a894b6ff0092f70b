pub mod star;

use crate::error::{Error, Result};
use serde_derive::Deserialize;
use star::CelestialObject;
use std::fs::File;
use std::io::{prelude::*, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// names of the catalog columns holding the fields of a CelestialObject
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogColumns {
    pub id: String,
    pub ra: String,
    pub dec: String,
    pub magnitude: String,
}

impl Default for CatalogColumns {
    fn default() -> Self {
        CatalogColumns {
            id: String::from("source_id"),
            ra: String::from("ra_ep2000"),
            dec: String::from("dec_ep2000"),
            magnitude: String::from("phot_g_mean_mag"),
        }
    }
}

/// layout of a tab separated catalog file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogFormat {
    pub columns: CatalogColumns,
    /// number of lines before the header line, gaia exports start with one
    pub skip_lines: usize,
}

impl Default for CatalogFormat {
    fn default() -> Self {
        CatalogFormat {
            columns: CatalogColumns::default(),
            skip_lines: 1,
        }
    }
}

/// positions of the needed columns in the header
struct ColumnIndices {
    id: usize,
    ra: usize,
    dec: usize,
    magnitude: usize,
}

impl ColumnIndices {
    fn resolve(header: &csv::StringRecord, columns: &CatalogColumns) -> Result<ColumnIndices> {
        let find = |name: &str| {
            header
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| Error::MissingColumn(name.to_string()))
        };
        Ok(ColumnIndices {
            id: find(columns.id.as_str())?,
            ra: find(columns.ra.as_str())?,
            dec: find(columns.dec.as_str())?,
            magnitude: find(columns.magnitude.as_str())?,
        })
    }
}

fn parse_float(record: &csv::StringRecord, index: usize, row: usize, column: &str) -> Result<f64> {
    let value = record.get(index).unwrap_or("").trim();
    value.parse::<f64>().map_err(|_| Error::InvalidField {
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// reads a tab separated catalog: `format.skip_lines` lines of preamble, a header line, then one
/// object per line. Empty lines are ignored, an empty magnitude field becomes None
pub fn read_catalog<R: Read>(reader: R, format: &CatalogFormat) -> Result<Vec<CelestialObject>> {
    let mut buff_reader = BufReader::new(reader);
    let mut preamble = String::new();
    for _ in 0..format.skip_lines {
        preamble.clear();
        if buff_reader.read_line(&mut preamble)? == 0 {
            return Err(Error::MissingHeader);
        }
    }

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(buff_reader);

    let mut records = csv_reader.records();
    let header = match records.next() {
        Some(header) => header?,
        None => return Err(Error::MissingHeader),
    };
    let columns = &format.columns;
    let indices = ColumnIndices::resolve(&header, columns)?;
    debug!(
        id = indices.id,
        ra = indices.ra,
        dec = indices.dec,
        magnitude = indices.magnitude,
        "resolved catalog columns"
    );

    let mut objects: Vec<CelestialObject> = vec![];
    for (index, record) in records.enumerate() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let row = index + 1;
        let id = record.get(indices.id).unwrap_or("").trim();
        let ra = parse_float(&record, indices.ra, row, &columns.ra)?;
        let dec = parse_float(&record, indices.dec, row, &columns.dec)?;
        let magnitude = match record.get(indices.magnitude).map(str::trim) {
            None | Some("") => None,
            Some(_) => Some(parse_float(&record, indices.magnitude, row, &columns.magnitude)?),
        };
        objects.push(CelestialObject::new(id, ra, dec, magnitude));
    }
    Ok(objects)
}

pub fn read_catalog_file<P: AsRef<Path>>(path: P, format: &CatalogFormat) -> Result<Vec<CelestialObject>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let objects = read_catalog(file, format)?;
    info!(path = %path.display(), objects = objects.len(), "catalog loaded");
    Ok(objects)
}
