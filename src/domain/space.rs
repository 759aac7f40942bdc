// src/domain/space.rs

use crate::errors::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Booking state of a workspace. Static seed data; no transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceStatus {
    Available,
    Unavailable,
    Booked,
    Allotted,
}

impl SpaceStatus {
    pub const ALL: [SpaceStatus; 4] = [
        SpaceStatus::Available,
        SpaceStatus::Unavailable,
        SpaceStatus::Booked,
        SpaceStatus::Allotted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SpaceStatus::Available => "available",
            SpaceStatus::Unavailable => "unavailable",
            SpaceStatus::Booked => "booked",
            SpaceStatus::Allotted => "allotted",
        }
    }
}

impl fmt::Display for SpaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceStatus {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpaceStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| RegistryError::Validation(format!("unknown space status '{s}'")))
    }
}

/// A bookable hackathon workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: String,
    pub name: String,
    pub description: String,
    pub capacity: u32,
    pub location: String,
    pub amenities: Vec<String>,
    pub status: SpaceStatus,
    pub image: String,
    /// Display string such as "₹5,000/day".
    #[serde(default)]
    pub price: Option<String>,
}
