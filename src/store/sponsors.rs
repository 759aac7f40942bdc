// src/store/sponsors.rs

use crate::domain::{LocationCatalog, Sponsor, SponsorFormData};
use crate::errors::{RegistryError, RegistryResult};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Source of "now" for id and date assignment.
pub type Clock = fn() -> DateTime<Utc>;

/// Owns the canonical sponsor collection, most recent first.
#[derive(Debug, Clone)]
pub struct SponsorStore {
    sponsors: Vec<Sponsor>,
    clock: Clock,
    last_issued_id: i64,
    locations: Option<LocationCatalog>,
}

impl SponsorStore {
    /// Wraps an initial snapshot. Rejects snapshots with repeated ids.
    pub fn new(sponsors: Vec<Sponsor>) -> RegistryResult<Self> {
        Self::with_clock(sponsors, Utc::now)
    }

    pub fn with_clock(sponsors: Vec<Sponsor>, clock: Clock) -> RegistryResult<Self> {
        let mut seen = HashSet::new();
        if let Some(dup) = sponsors.iter().find(|s| !seen.insert(s.id.as_str())) {
            return Err(RegistryError::Validation(format!(
                "duplicate sponsor id '{}'",
                dup.id
            )));
        }

        debug!(count = sponsors.len(), "sponsor store initialized");

        Ok(Self {
            sponsors,
            clock,
            last_issued_id: 0,
            locations: None,
        })
    }

    /// Attach a city → areas catalog. Mismatched pairs are still accepted,
    /// but logged.
    pub fn with_locations(mut self, locations: LocationCatalog) -> Self {
        self.locations = Some(locations);
        self
    }

    pub fn list(&self) -> &[Sponsor] {
        &self.sponsors
    }

    pub fn get(&self, id: &str) -> Option<&Sponsor> {
        self.sponsors.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.sponsors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sponsors.is_empty()
    }

    /// Validates `fields`, assigns a fresh id and today's date, and inserts
    /// the record at the head of the collection.
    pub fn create(&mut self, fields: SponsorFormData, is_active: bool) -> RegistryResult<Sponsor> {
        fields.validate()?;
        self.check_location(&fields);

        let id = self.next_id();
        let created_at = (self.clock)().date_naive();
        let sponsor = Sponsor::from_form(id, fields, is_active, created_at);

        self.sponsors.insert(0, sponsor.clone());
        info!(id = %sponsor.id, name = %sponsor.name, "sponsor added");

        Ok(sponsor)
    }

    /// Replaces every mutable field of `id` in place. Identity, creation
    /// date and position are kept.
    pub fn update(
        &mut self,
        id: &str,
        fields: SponsorFormData,
        is_active: bool,
    ) -> RegistryResult<Sponsor> {
        let index = self.position(id)?;
        fields.validate()?;
        self.check_location(&fields);

        let sponsor = &mut self.sponsors[index];
        sponsor.apply_form(fields, is_active);
        info!(id = %sponsor.id, name = %sponsor.name, "sponsor updated");

        Ok(sponsor.clone())
    }

    /// Removes `id` and hands the removed record back.
    pub fn delete(&mut self, id: &str) -> RegistryResult<Sponsor> {
        let index = self.position(id)?;
        let removed = self.sponsors.remove(index);
        info!(id = %removed.id, name = %removed.name, "sponsor removed");

        Ok(removed)
    }

    fn position(&self, id: &str) -> RegistryResult<usize> {
        self.sponsors
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| RegistryError::NotFound(format!("sponsor '{id}'")))
    }

    /// Millisecond timestamp, bumped past the last issued id and any id
    /// already present.
    fn next_id(&mut self) -> String {
        let mut candidate = (self.clock)()
            .timestamp_millis()
            .max(self.last_issued_id + 1);

        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }

        self.last_issued_id = candidate;
        candidate.to_string()
    }

    fn check_location(&self, fields: &SponsorFormData) {
        if let Some(locations) = &self.locations {
            if !locations.is_valid_area(&fields.city, &fields.area) {
                warn!(
                    city = %fields.city,
                    area = %fields.area,
                    "area is not listed for this city"
                );
            }
        }
    }
}
