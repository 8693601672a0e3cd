//! City catalog for City Suggest.
//!
//! Holds the in-memory city dataset loaded once at startup from a
//! tab-separated file. The catalog is read-only after construction and is
//! shared behind an `Arc`.

pub mod loader;
pub mod types;

pub use loader::LoadReport;
pub use types::{Catalog, CatalogError, City};
