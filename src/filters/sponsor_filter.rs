// src/filters/sponsor_filter.rs

use super::{contains_ignore_case, RecordFilter};
use crate::domain::{Sponsor, SponsorTier, ALL_AREAS, ALL_CITIES};
use crate::errors::RegistryResult;

/// The "no restriction" value of the tier selector.
pub const ALL_TIERS: &str = "all";

/// Current search/city/area/tier selections for the sponsor roster.
///
/// `None` on a dimension means "no restriction". Getters report the selector
/// strings the presentation layer shows ("All Cities", "All Areas", "all").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SponsorFilters {
    search_query: String,
    // lowercased copy of `search_query`, kept in step by the setter
    query_lower: String,
    city: Option<String>,
    area: Option<String>,
    tier: Option<SponsorTier>,
}

impl SponsorFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn city(&self) -> &str {
        self.city.as_deref().unwrap_or(ALL_CITIES)
    }

    pub fn area(&self) -> &str {
        self.area.as_deref().unwrap_or(ALL_AREAS)
    }

    pub fn tier(&self) -> Option<SponsorTier> {
        self.tier
    }

    /// Tier selector value: the tier name, or "all".
    pub fn tier_selection(&self) -> &'static str {
        self.tier.map(SponsorTier::as_str).unwrap_or(ALL_TIERS)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.query_lower = self.search_query.to_lowercase();
    }

    /// Selects a city and clears the area selection in the same step, since
    /// an area only means something inside its city.
    pub fn set_city(&mut self, city: impl Into<String>) {
        let city = city.into();
        self.city = (city != ALL_CITIES).then_some(city);
        self.area = None;
    }

    pub fn set_area(&mut self, area: impl Into<String>) {
        let area = area.into();
        self.area = (area != ALL_AREAS).then_some(area);
    }

    pub fn set_tier(&mut self, tier: Option<SponsorTier>) {
        self.tier = tier;
    }

    /// Parses a tier selector value ("all" or a tier name). Unknown values
    /// are rejected and the current selection kept.
    pub fn select_tier(&mut self, selection: &str) -> RegistryResult<()> {
        self.tier = match selection {
            ALL_TIERS => None,
            other => Some(other.parse()?),
        };
        Ok(())
    }

    /// Back to no restriction on every dimension.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl RecordFilter<Sponsor> for SponsorFilters {
    fn matches(&self, sponsor: &Sponsor) -> bool {
        let matches_search = contains_ignore_case(&sponsor.name, &self.query_lower)
            || contains_ignore_case(&sponsor.description, &self.query_lower);

        let matches_city = self.city.as_ref().map_or(true, |c| *c == sponsor.city);
        let matches_area = self.area.as_ref().map_or(true, |a| *a == sponsor.area);
        let matches_tier = self.tier.map_or(true, |t| t == sponsor.tier);

        matches_search && matches_city && matches_area && matches_tier
    }
}
