// src/filters/space_filter.rs

use super::{contains_ignore_case, RecordFilter};
use crate::domain::{Space, SpaceStatus};
use crate::errors::RegistryResult;

/// The "no restriction" value of the status selector.
pub const ALL_STATUSES: &str = "all";

/// Status tab + search box state for the space catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpaceFilters {
    search_query: String,
    query_lower: String,
    status: Option<SpaceStatus>,
}

impl SpaceFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn status(&self) -> Option<SpaceStatus> {
        self.status
    }

    pub fn status_selection(&self) -> &'static str {
        self.status.map(SpaceStatus::as_str).unwrap_or(ALL_STATUSES)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.query_lower = self.search_query.to_lowercase();
    }

    pub fn set_status(&mut self, status: Option<SpaceStatus>) {
        self.status = status;
    }

    /// Parses "all" or a status name.
    pub fn select_status(&mut self, selection: &str) -> RegistryResult<()> {
        self.status = match selection {
            ALL_STATUSES => None,
            other => Some(other.parse()?),
        };
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl RecordFilter<Space> for SpaceFilters {
    fn matches(&self, space: &Space) -> bool {
        let matches_search = contains_ignore_case(&space.name, &self.query_lower)
            || contains_ignore_case(&space.location, &self.query_lower);
        let matches_status = self.status.map_or(true, |s| s == space.status);

        matches_search && matches_status
    }
}
