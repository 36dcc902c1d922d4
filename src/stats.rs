//! Dataset statistics overview.
//!
//! A quick summary of what the configured source holds: record counts,
//! distinct regions and specialties, fee range, and availability. Used by
//! `pdq stats` to sanity-check a dataset before serving it.

use anyhow::Result;
use std::collections::HashSet;

use crate::config::Config;
use crate::loader::{self, DirectorySource};
use crate::query;

pub async fn run_stats(config: &Config) -> Result<()> {
    let source = loader::source_from_config(config)?;
    let records = loader::load(config).await?;

    let regions = query::distinct_regions(&records);
    let specialities: HashSet<String> = records
        .iter()
        .map(|r| r.speciality.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    let available_today = records.iter().filter(|r| r.availability.today).count();

    println!("Provider Directory — Stats");
    println!("==========================");
    println!();
    println!("  Source:          {}", source.describe());
    println!("  Cache:           {}", config.cache.mode);
    println!();
    println!("  Providers:       {}", records.len());
    println!("  Regions:         {}", regions.len());
    println!("  Specialities:    {}", specialities.len());
    println!("  Available today: {}", available_today);

    if !records.is_empty() {
        let min_fee = records
            .iter()
            .map(|r| r.consultation_fee)
            .fold(f64::INFINITY, f64::min);
        let max_fee = records
            .iter()
            .map(|r| r.consultation_fee)
            .fold(f64::NEG_INFINITY, f64::max);
        println!("  Fee range:       {} – {}", min_fee, max_fee);
    }

    if !regions.is_empty() {
        println!();
        println!("  By region:");
        println!("  {:<24} {:>9}", "REGION", "PROVIDERS");
        println!("  {}", "-".repeat(34));
        for region in &regions {
            let count = records
                .iter()
                .filter(|r| r.address.state == region.name)
                .count();
            println!("  {:<24} {:>9}", region.name, count);
        }
    }

    println!();
    Ok(())
}
