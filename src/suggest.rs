//! Suggestion engine: filter, score and rank catalog cities for a query.
//!
//! A city is a candidate when its name contains the search term
//! (case-insensitive). Each candidate is then placed in one of six tiers
//! based on two signals:
//!
//!   - name match: the full name equals the term, ignoring case
//!   - coordinate match: the city's formatted latitude/longitude equals the
//!     caller's string exactly
//!
//! Coordinates are compared as text, so a caller only gets proximity credit
//! by echoing back the engine's own 5-decimal formatting. There is no
//! numeric distance.

use serde::Serialize;
use std::sync::Arc;

use crate::catalog::Catalog;

/// Decimal places used for every formatted coordinate.
pub const COORDINATE_PRECISION: usize = 5;

/// Format a coordinate the way suggestions carry it and the way callers must
/// supply it for a coordinate match.
pub fn format_coordinate(value: f64) -> String {
    format!("{:.*}", COORDINATE_PRECISION, value)
}

/// A ranked candidate returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub score: f64,
}

/// The six mutually exclusive scoring tiers, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    NameAndLocation,
    NameAndPartialLocation,
    NameOnly,
    LocationOnly,
    PartialLocation,
    Substring,
}

impl MatchTier {
    pub const ALL: [MatchTier; 6] = [
        Self::NameAndLocation,
        Self::NameAndPartialLocation,
        Self::NameOnly,
        Self::LocationOnly,
        Self::PartialLocation,
        Self::Substring,
    ];

    /// Pick the tier from the name signal and how many coordinates matched.
    pub fn classify(name_match: bool, coordinate_matches: u8) -> Self {
        match (name_match, coordinate_matches) {
            (true, 2) => Self::NameAndLocation,
            (true, 1) => Self::NameAndPartialLocation,
            (true, _) => Self::NameOnly,
            (false, 2) => Self::LocationOnly,
            (false, 1) => Self::PartialLocation,
            (false, _) => Self::Substring,
        }
    }

    pub fn score(self) -> f64 {
        match self {
            Self::NameAndLocation => 1.0,
            Self::NameAndPartialLocation => 0.9,
            Self::NameOnly => 0.8,
            Self::LocationOnly => 0.7,
            Self::PartialLocation => 0.6,
            Self::Substring => 0.5,
        }
    }
}

/// Ranks catalog cities against a query. Holds a shared read-only catalog.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    catalog: Arc<Catalog>,
}

impl SuggestionEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Return every city whose name contains `search_term`, sorted by score
    /// descending. Equal scores keep catalog order.
    pub fn suggest(&self, search_term: &str, latitude: &str, longitude: &str) -> Vec<Suggestion> {
        let term = fold_case(search_term);

        let mut suggestions: Vec<Suggestion> = self
            .catalog
            .iter()
            .filter_map(|city| {
                let name = fold_case(&city.name);
                if !name.contains(&term) {
                    return None;
                }
                let lat = format_coordinate(city.latitude);
                let lon = format_coordinate(city.longitude);
                let tier = rank(&name, &term, &lat, &lon, latitude, longitude);
                Some(Suggestion {
                    name: city.name.clone(),
                    latitude: lat,
                    longitude: lon,
                    score: tier.score(),
                })
            })
            .collect();

        // sort_by is stable
        suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
        suggestions
    }
}

/// Per-char lowercase. Unlike `str::to_lowercase`, a word-final 'Σ' folds to
/// 'σ', same as a lone "Σ" term.
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// `name` and `term` must already be folded.
fn rank(name: &str, term: &str, lat: &str, lon: &str, want_lat: &str, want_lon: &str) -> MatchTier {
    let coordinate_matches = u8::from(lat == want_lat) + u8::from(lon == want_lon);
    MatchTier::classify(name == term, coordinate_matches)
}
