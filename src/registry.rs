// src/registry.rs

use crate::domain::{LocationCatalog, Space, Sponsor, SponsorFormData};
use crate::errors::RegistryResult;
use crate::filters::{project, SpaceFilters, SponsorFilters};
use crate::seed::SeedData;
use crate::stats::{aggregate, space_status_counts, SpaceStatusCounts, SponsorStats};
use crate::store::{Clock, SpaceCatalog, SponsorStore};

/// Sponsor store, its filter state and the location table, bundled for a
/// presentation layer. Views and stats are recomputed on every call.
#[derive(Debug, Clone)]
pub struct SponsorRegistry {
    store: SponsorStore,
    filters: SponsorFilters,
    locations: LocationCatalog,
}

impl SponsorRegistry {
    pub fn new(store: SponsorStore, locations: LocationCatalog) -> Self {
        Self {
            store: store.with_locations(locations.clone()),
            filters: SponsorFilters::default(),
            locations,
        }
    }

    pub fn from_seed(seed: &SeedData) -> RegistryResult<Self> {
        let store = SponsorStore::new(seed.sponsors.clone())?;
        Ok(Self::new(store, seed.locations.clone()))
    }

    pub fn from_seed_with_clock(seed: &SeedData, clock: Clock) -> RegistryResult<Self> {
        let store = SponsorStore::with_clock(seed.sponsors.clone(), clock)?;
        Ok(Self::new(store, seed.locations.clone()))
    }

    pub fn store(&self) -> &SponsorStore {
        &self.store
    }

    pub fn filters(&self) -> &SponsorFilters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut SponsorFilters {
        &mut self.filters
    }

    pub fn locations(&self) -> &LocationCatalog {
        &self.locations
    }

    pub fn list(&self) -> &[Sponsor] {
        self.store.list()
    }

    pub fn create(&mut self, fields: SponsorFormData, is_active: bool) -> RegistryResult<Sponsor> {
        self.store.create(fields, is_active)
    }

    pub fn update(
        &mut self,
        id: &str,
        fields: SponsorFormData,
        is_active: bool,
    ) -> RegistryResult<Sponsor> {
        self.store.update(id, fields, is_active)
    }

    pub fn delete(&mut self, id: &str) -> RegistryResult<Sponsor> {
        self.store.delete(id)
    }

    /// Sponsors passing the current filters, most recent first.
    pub fn view(&self) -> Vec<&Sponsor> {
        project(self.store.list(), &self.filters)
    }

    /// Stats over the whole roster, ignoring filters.
    pub fn stats(&self) -> SponsorStats {
        aggregate(self.store.list())
    }

    /// Area choices for the currently selected city.
    pub fn area_options(&self) -> Vec<&str> {
        self.locations.areas_for(self.filters.city())
    }
}

/// Read-only space catalog with its status/search state.
#[derive(Debug, Clone)]
pub struct SpaceRegistry {
    catalog: SpaceCatalog,
    filters: SpaceFilters,
}

impl SpaceRegistry {
    pub fn new(catalog: SpaceCatalog) -> Self {
        Self {
            catalog,
            filters: SpaceFilters::default(),
        }
    }

    pub fn from_seed(seed: &SeedData) -> RegistryResult<Self> {
        Ok(Self::new(SpaceCatalog::new(seed.spaces.clone())?))
    }

    pub fn catalog(&self) -> &SpaceCatalog {
        &self.catalog
    }

    pub fn filters(&self) -> &SpaceFilters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut SpaceFilters {
        &mut self.filters
    }

    pub fn view(&self) -> Vec<&Space> {
        project(self.catalog.list(), &self.filters)
    }

    pub fn status_counts(&self) -> SpaceStatusCounts {
        space_status_counts(self.catalog.list())
    }
}
