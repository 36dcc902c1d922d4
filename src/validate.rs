//! Strict dataset checks the query engine does not enforce.
//!
//! The engine tolerates sparse records by design; `pdq validate` is the
//! opt-in stricter pass: duplicate ids are a defect (ids are used as
//! render keys), and empty names or out-of-range ratings are flagged.

use anyhow::{bail, Result};
use std::collections::HashMap;

use crate::config::Config;
use crate::loader;
use crate::models::ProviderRecord;

pub async fn run_validate(config: &Config) -> Result<()> {
    let records = loader::load(config).await?;

    let duplicates = duplicate_ids(&records);
    let warnings = collect_warnings(&records);

    for warning in &warnings {
        println!("warning: {}", warning);
    }

    if !duplicates.is_empty() {
        for (id, count) in &duplicates {
            eprintln!("error: duplicate id {} appears {} times", id, count);
        }
        bail!("{} duplicate id(s) found", duplicates.len());
    }

    println!(
        "ok — {} records, {} warning(s)",
        records.len(),
        warnings.len()
    );
    Ok(())
}

fn duplicate_ids(records: &[ProviderRecord]) -> Vec<(i64, usize)> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.id).or_insert(0) += 1;
    }

    let mut duplicates: Vec<(i64, usize)> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .collect();
    duplicates.sort_unstable();
    duplicates
}

fn collect_warnings(records: &[ProviderRecord]) -> Vec<String> {
    let mut warnings = Vec::new();

    for record in records {
        if record.name.trim().is_empty() {
            warnings.push(format!("record id {} has an empty name", record.id));
        }
        if !(0.0..=5.0).contains(&record.rating) {
            warnings.push(format!(
                "record id {} has rating {} outside [0, 5]",
                record.id, record.rating
            ));
        }
        if record.address.state.trim().is_empty() {
            warnings.push(format!(
                "record id {} has no state and will only match empty region tokens",
                record.id
            ));
        }
    }

    warnings
}
