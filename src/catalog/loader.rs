//! TSV dataset loader.
//!
//! Expected layout: a header row (discarded), then one city per line with the
//! name in column 1, latitude in column 4 and longitude in column 5. Extra
//! columns are ignored. Fields are taken literally, quote characters included.

use super::types::{Catalog, CatalogError, City};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const NAME_COLUMN: usize = 1;
const LATITUDE_COLUMN: usize = 4;
const LONGITUDE_COLUMN: usize = 5;
const MIN_FIELDS: usize = LONGITUDE_COLUMN + 1;

/// Row counts from a single load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

impl Catalog {
    /// Load the catalog from a TSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, LoadReport), CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a TSV stream into a catalog.
    ///
    /// Short or undecodable rows are skipped and counted; only a missing header
    /// or an I/O failure aborts the load.
    pub fn from_reader<R: Read>(reader: R) -> Result<(Self, LoadReport), CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        if reader.headers()?.is_empty() {
            return Err(CatalogError::MissingHeader);
        }

        let mut cities = Vec::new();
        let mut report = LoadReport::default();

        for result in reader.records() {
            let record = match result {
                Ok(r) => r,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(_) => {
                    report.skipped += 1;
                    continue;
                }
            };

            if record.len() < MIN_FIELDS {
                report.skipped += 1;
                continue;
            }

            cities.push(City {
                name: record[NAME_COLUMN].to_string(),
                latitude: parse_coordinate(&record[LATITUDE_COLUMN]),
                longitude: parse_coordinate(&record[LONGITUDE_COLUMN]),
            });
            report.loaded += 1;
        }

        Ok((Self::from_cities(cities), report))
    }
}

/// Unparsable values become 0.0, which is a valid coordinate.
fn parse_coordinate(field: &str) -> f64 {
    field.trim().parse().unwrap_or(0.0)
}
