// src/seed.rs

use crate::domain::{LocationCatalog, Space, Sponsor};
use crate::errors::{SeedError, SeedResult};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming a directory with replacement seed files.
pub const SEED_DIR_ENV: &str = "HACKSPACE_SEED_DIR";

const SPACES_FILE: &str = "spaces.json";
const SPONSORS_FILE: &str = "sponsors.json";
const LOCATIONS_FILE: &str = "locations.json";

const EMBEDDED_SPACES: &str = include_str!("../data/spaces.json");
const EMBEDDED_SPONSORS: &str = include_str!("../data/sponsors.json");
const EMBEDDED_LOCATIONS: &str = include_str!("../data/locations.json");

/// Initial contents for both registries plus the city → areas table.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub spaces: Vec<Space>,
    pub sponsors: Vec<Sponsor>,
    pub locations: LocationCatalog,
}

/// Where seed data comes from: the copy compiled into the binary, or a
/// directory holding `spaces.json`, `sponsors.json` and `locations.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedConfig {
    pub dir: Option<PathBuf>,
}

impl SeedConfig {
    pub fn embedded() -> Self {
        Self { dir: None }
    }

    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Reads `HACKSPACE_SEED_DIR`; unset or empty means embedded data.
    pub fn from_env() -> Self {
        match std::env::var(SEED_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Self::from_dir(dir),
            _ => Self::embedded(),
        }
    }

    pub fn load(&self) -> SeedResult<SeedData> {
        let data = match &self.dir {
            None => SeedData {
                spaces: parse(SPACES_FILE, EMBEDDED_SPACES)?,
                sponsors: parse(SPONSORS_FILE, EMBEDDED_SPONSORS)?,
                locations: parse(LOCATIONS_FILE, EMBEDDED_LOCATIONS)?,
            },
            Some(dir) => SeedData {
                spaces: read(dir, SPACES_FILE)?,
                sponsors: read(dir, SPONSORS_FILE)?,
                locations: read(dir, LOCATIONS_FILE)?,
            },
        };

        check_unique(SPACES_FILE, data.spaces.iter().map(|s| s.id.as_str()))?;
        check_unique(SPONSORS_FILE, data.sponsors.iter().map(|s| s.id.as_str()))?;
        check_records(&data)?;

        info!(
            source = %self.describe(),
            spaces = data.spaces.len(),
            sponsors = data.sponsors.len(),
            cities = data.locations.cities().count(),
            "seed data loaded"
        );

        Ok(data)
    }

    fn describe(&self) -> String {
        match &self.dir {
            None => "embedded".to_string(),
            Some(dir) => dir.display().to_string(),
        }
    }
}

fn read<T: DeserializeOwned>(dir: &Path, file: &str) -> SeedResult<T> {
    let path = dir.join(file);
    let raw = fs::read_to_string(&path).map_err(|source| SeedError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(file, &raw)
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> SeedResult<T> {
    serde_json::from_str(raw).map_err(|source| SeedError::Json {
        name: name.to_string(),
        source,
    })
}

fn check_unique<'a>(name: &str, ids: impl Iterator<Item = &'a str>) -> SeedResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId {
                name: name.to_string(),
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_records(data: &SeedData) -> SeedResult<()> {
    if let Some(space) = data.spaces.iter().find(|s| s.capacity == 0) {
        return Err(SeedError::Invalid {
            name: SPACES_FILE.to_string(),
            reason: format!("space '{}' has zero capacity", space.id),
        });
    }

    if let Some(sponsor) = data.sponsors.iter().find(|s| s.contribution < 0) {
        return Err(SeedError::Invalid {
            name: SPONSORS_FILE.to_string(),
            reason: format!("sponsor '{}' has a negative contribution", sponsor.id),
        });
    }

    Ok(())
}
