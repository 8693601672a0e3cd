//! Core types for the catalog subsystem.

use std::fmt;
use std::path::PathBuf;

/// A single city record as read from the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }
}

/// The immutable, ordered collection of cities.
///
/// Position in the catalog is the only identity a city has; duplicate names
/// are kept as separate entries.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cities: Vec<City>,
}

impl Catalog {
    pub fn from_cities(cities: Vec<City>) -> Self {
        Self { cities }
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, City> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Fatal catalog loading errors.
#[derive(Debug)]
pub enum CatalogError {
    /// The dataset file could not be opened.
    Io { path: PathBuf, source: std::io::Error },
    /// The file has no header row.
    MissingHeader,
    /// The header row or a later read failed at the I/O level.
    Read(csv::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot open dataset '{}': {}", path.display(), source)
            }
            Self::MissingHeader => write!(f, "Dataset has no header row"),
            Self::Read(e) => write!(f, "Error reading dataset: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::MissingHeader => None,
            Self::Read(e) => Some(e),
        }
    }
}

impl From<csv::Error> for CatalogError {
    fn from(e: csv::Error) -> Self {
        Self::Read(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keeps_order_and_duplicates() {
        let catalog = Catalog::from_cities(vec![
            City::new("Springfield", 39.80172, -89.64371),
            City::new("Toronto", 43.70011, -79.4163),
            City::new("Springfield", 42.10148, -72.58981),
        ]);

        assert_eq!(catalog.len(), 3);
        let names: Vec<&str> = catalog.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Springfield", "Toronto", "Springfield"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.cities().len(), 0);
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::Io {
            path: PathBuf::from("missing.tsv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(format!("{}", err).contains("missing.tsv"));
        assert_eq!(format!("{}", CatalogError::MissingHeader), "Dataset has no header row");
    }
}
