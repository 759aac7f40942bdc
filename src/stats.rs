// src/stats.rs

use crate::domain::{Space, SpaceStatus, Sponsor, SponsorTier};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Summary figures over the whole (unfiltered) sponsor roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorStats {
    pub total_count: usize,
    pub active_count: usize,
    pub tier_counts: BTreeMap<SponsorTier, usize>,
    /// Raw rupee sum, saturating at `i64::MAX`; formatting is left to
    /// `format::format_compact_inr`.
    pub total_contribution: i64,
    pub unique_city_count: usize,
}

impl SponsorStats {
    pub fn tier_count(&self, tier: SponsorTier) -> usize {
        self.tier_counts.get(&tier).copied().unwrap_or(0)
    }
}

pub fn aggregate(sponsors: &[Sponsor]) -> SponsorStats {
    let mut tier_counts = BTreeMap::new();
    let mut cities = HashSet::new();
    let mut active_count = 0;
    let mut total_contribution: i64 = 0;

    for sponsor in sponsors {
        *tier_counts.entry(sponsor.tier).or_insert(0) += 1;
        cities.insert(sponsor.city.as_str());
        if sponsor.is_active {
            active_count += 1;
        }
        total_contribution = total_contribution.saturating_add(sponsor.contribution);
    }

    SponsorStats {
        total_count: sponsors.len(),
        active_count,
        tier_counts,
        total_contribution,
        unique_city_count: cities.len(),
    }
}

/// Per-status counts shown next to the status tabs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpaceStatusCounts {
    pub all: usize,
    pub available: usize,
    pub unavailable: usize,
    pub booked: usize,
    pub allotted: usize,
}

impl SpaceStatusCounts {
    pub fn get(&self, status: SpaceStatus) -> usize {
        match status {
            SpaceStatus::Available => self.available,
            SpaceStatus::Unavailable => self.unavailable,
            SpaceStatus::Booked => self.booked,
            SpaceStatus::Allotted => self.allotted,
        }
    }
}

pub fn space_status_counts(spaces: &[Space]) -> SpaceStatusCounts {
    spaces.iter().fold(
        SpaceStatusCounts {
            all: spaces.len(),
            ..Default::default()
        },
        |mut counts, space| {
            match space.status {
                SpaceStatus::Available => counts.available += 1,
                SpaceStatus::Unavailable => counts.unavailable += 1,
                SpaceStatus::Booked => counts.booked += 1,
                SpaceStatus::Allotted => counts.allotted += 1,
            }
            counts
        },
    )
}
