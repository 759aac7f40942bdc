use crate::domain::{SponsorFormData, SponsorTier};
use crate::seed::{SeedConfig, SeedData};
use crate::SponsorRegistry;
use chrono::{DateTime, TimeZone, Utc};

/// The embedded seed snapshot every scenario starts from.
pub fn seed() -> SeedData {
    SeedConfig::embedded()
        .load()
        .unwrap_or_else(|e| panic!("Seed data failed to load: {e}"))
}

pub fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

/// Sponsor registry over the seed roster with a frozen clock.
pub fn sponsor_registry() -> SponsorRegistry {
    SponsorRegistry::from_seed_with_clock(&seed(), fixed_clock).unwrap()
}

pub fn acme_form() -> SponsorFormData {
    SponsorFormData {
        name: "Acme".to_string(),
        logo: "x".to_string(),
        tier: SponsorTier::Gold,
        city: "Chennai".to_string(),
        area: "OMR".to_string(),
        website: String::new(),
        description: String::new(),
        contact_email: "a@a.com".to_string(),
        contact_phone: "1".to_string(),
        contribution: 1000,
    }
}

pub fn ids<'a>(records: impl IntoIterator<Item = &'a crate::domain::Sponsor>) -> Vec<String> {
    records.into_iter().map(|s| s.id.clone()).collect()
}
