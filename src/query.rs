//! The query engine: region derivation and the search filter.
//!
//! Both operations are pure single passes over an immutable snapshot and
//! never fail. All string comparisons go through [`normalize`] (trim +
//! lowercase); missing fields compare as empty strings.

use std::collections::HashSet;

use crate::models::{ProviderRecord, Region};

/// Lowercased, whitespace-trimmed view of a compared string.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Derives the distinct region list from the snapshot.
///
/// States are deduplicated by exact string identity — source casing is
/// preserved — and numbered 1..=n in first-seen order. Identifiers are
/// render keys only: a differently ordered input produces a different
/// id-to-name mapping. An empty snapshot yields an empty list.
pub fn distinct_regions(records: &[ProviderRecord]) -> Vec<Region> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut regions = Vec::new();

    for record in records {
        let state = record.address.state.as_str();
        if seen.insert(state) {
            regions.push(Region {
                id: regions.len() + 1,
                name: state.to_string(),
            });
        }
    }

    regions
}

/// Filters the snapshot by a region token and a specialty token.
///
/// A record is included iff both hold:
/// - region: the token is empty, or `address.state` contains it;
/// - specialty: the token is empty, or `speciality` contains it, or
///   `focusArea` contains it.
///
/// The result is a subsequence of the input in original relative order —
/// no ranking, no limit, no pagination. Empty tokens for both return the
/// whole snapshot; zero matches return an empty vector, never an error.
pub fn search(
    records: &[ProviderRecord],
    region_token: &str,
    specialty_token: &str,
) -> Vec<ProviderRecord> {
    let region = normalize(region_token);
    let specialty = normalize(specialty_token);

    records
        .iter()
        .filter(|r| region_matches(r, &region) && specialty_matches(r, &specialty))
        .cloned()
        .collect()
}

fn region_matches(record: &ProviderRecord, token: &str) -> bool {
    token.is_empty() || normalize(&record.address.state).contains(token)
}

fn specialty_matches(record: &ProviderRecord, token: &str) -> bool {
    token.is_empty()
        || normalize(&record.speciality).contains(token)
        || normalize(&record.focus_area).contains(token)
}
