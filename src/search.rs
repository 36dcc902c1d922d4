//! The `pdq search` command.
//!
//! Loads the directory, runs the filter, and prints matching providers.
//! Zero matches is a success with a friendly message; a load failure is a
//! distinct error, never conflated with "no results".

use anyhow::Result;

use crate::config::Config;
use crate::loader;
use crate::models::ProviderRecord;
use crate::query;

pub async fn run_search(config: &Config, specialty: &str, state: &str) -> Result<()> {
    let records = loader::load(config).await?;
    let results = query::search(&records, state, specialty);

    if results.is_empty() {
        println!("No matching providers.");
        return Ok(());
    }

    let specialty_display = if specialty.trim().is_empty() {
        "all specialties"
    } else {
        specialty
    };
    print!("Found {} providers for {}", results.len(), specialty_display);
    if !state.trim().is_empty() {
        print!(" in {}", state);
    }
    println!();
    println!();

    for (i, provider) in results.iter().enumerate() {
        print_provider(i + 1, provider);
    }

    Ok(())
}

fn print_provider(rank: usize, p: &ProviderRecord) {
    println!("{}. {} — {}", rank, p.name, p.speciality);
    if !p.focus_area.is_empty() {
        println!("    focus:        {}", p.focus_area);
    }
    if !p.address.clinic.is_empty() {
        println!("    clinic:       {}", p.address.clinic);
    }
    println!(
        "    location:     {}, {}, {}",
        p.address.location, p.address.city, p.address.state
    );
    println!(
        "    rating:       {:.1} ({} patient stories)",
        p.rating, p.patient_stories
    );
    println!("    fee:          {}", p.consultation_fee);
    if !p.experience.is_empty() {
        println!("    experience:   {}", p.experience);
    }
    if p.availability.today {
        println!("    available:    today ({})", p.availability.timings);
    } else if !p.availability.next_available.is_empty() {
        println!("    available:    next {}", p.availability.next_available);
    }
    if !p.contact.is_empty() {
        println!("    contact:      {}", p.contact);
    }
    if !p.additional_clinics.is_empty() {
        println!("    also at:      {}", p.additional_clinics.join(", "));
    }
    println!("    id:           {}", p.id);
    println!();
}
