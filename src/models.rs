//! Provider directory data types.
//!
//! Field names on the wire are camelCase, matching the original
//! `/doctors.json` payload. Every field carries a default so that sparse
//! records deserialize cleanly; absent strings compare as empty in the
//! query engine rather than failing.

use serde::{Deserialize, Serialize};

/// One row of the provider directory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderRecord {
    /// Unique within the collection; a stable render key, nothing more.
    pub id: i64,
    pub name: String,
    /// Primary specialty label, compared case-insensitively.
    pub speciality: String,
    /// Secondary specialty keyword; fallback match target when
    /// `speciality` does not contain the token.
    pub focus_area: String,
    pub address: Address,
    /// Expected range [0, 5]. Display-only; never used for filtering.
    pub rating: f64,
    pub consultation_fee: f64,
    pub experience: String,
    pub patient_stories: i64,
    pub availability: Availability,
    pub contact: String,
    pub additional_clinics: Vec<String>,
}

/// Structured address; `state` is the sole field used for region filtering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub state: String,
    pub city: String,
    pub location: String,
    pub clinic: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Availability {
    pub today: bool,
    pub timings: String,
    pub next_available: String,
}

/// A distinct region derived from the dataset.
///
/// The id is a synthetic 1-based position in first-seen order, assigned to
/// satisfy "unique key" list rendering. It is not stable across loads and
/// carries no other meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub id: usize,
    pub name: String,
}
