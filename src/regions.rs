//! The `pdq regions` command: the distinct region list, in first-seen order.

use anyhow::Result;

use crate::config::Config;
use crate::loader;
use crate::query;

pub async fn run_regions(config: &Config) -> Result<()> {
    let records = loader::load(config).await?;
    let regions = query::distinct_regions(&records);

    if regions.is_empty() {
        println!("No regions.");
        return Ok(());
    }

    println!("{:<4} {}", "ID", "REGION");
    for region in &regions {
        println!("{:<4} {}", region.id, region.name);
    }

    Ok(())
}
