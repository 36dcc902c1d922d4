//! Provider retrieval by record id.
//!
//! Used by the `pdq get` CLI command. The id is the dataset's own stable
//! key, not a position in any filtered view.

use anyhow::Result;

use crate::config::Config;
use crate::error::DirectoryError;
use crate::loader;
use crate::models::ProviderRecord;

/// Core lookup returning structured data.
pub async fn get_provider(config: &Config, id: i64) -> Result<Option<ProviderRecord>, DirectoryError> {
    let records = loader::load(config).await?;
    Ok(records.into_iter().find(|r| r.id == id))
}

/// CLI entry point — looks the provider up and prints it to stdout.
pub async fn run_get(config: &Config, id: i64) -> Result<()> {
    let provider = match get_provider(config, id).await? {
        Some(p) => p,
        None => {
            eprintln!("Error: provider not found: {}", id);
            std::process::exit(1);
        }
    };

    println!("--- Provider ---");
    println!("id:            {}", provider.id);
    println!("name:          {}", provider.name);
    println!("speciality:    {}", provider.speciality);
    if !provider.focus_area.is_empty() {
        println!("focus area:    {}", provider.focus_area);
    }
    println!("clinic:        {}", provider.address.clinic);
    println!(
        "address:       {}, {}, {}",
        provider.address.location, provider.address.city, provider.address.state
    );
    println!("rating:        {:.1}", provider.rating);
    println!("fee:           {}", provider.consultation_fee);
    println!("experience:    {}", provider.experience);
    println!("stories:       {}", provider.patient_stories);
    if provider.availability.today {
        println!("availability:  today ({})", provider.availability.timings);
    } else {
        println!(
            "availability:  next {}",
            provider.availability.next_available
        );
    }
    println!("contact:       {}", provider.contact);
    if !provider.additional_clinics.is_empty() {
        println!(
            "also at:       {}",
            provider.additional_clinics.join(", ")
        );
    }

    Ok(())
}
