// src/store/spaces.rs

use crate::domain::Space;
use crate::errors::{RegistryError, RegistryResult};
use std::collections::HashSet;

/// Read-only catalog of workspaces, in seed order.
#[derive(Debug, Clone, Default)]
pub struct SpaceCatalog {
    spaces: Vec<Space>,
}

impl SpaceCatalog {
    pub fn new(spaces: Vec<Space>) -> RegistryResult<Self> {
        let mut seen = HashSet::new();
        if let Some(dup) = spaces.iter().find(|s| !seen.insert(s.id.as_str())) {
            return Err(RegistryError::Validation(format!(
                "duplicate space id '{}'",
                dup.id
            )));
        }

        Ok(Self { spaces })
    }

    pub fn list(&self) -> &[Space] {
        &self.spaces
    }

    pub fn get(&self, id: &str) -> Option<&Space> {
        self.spaces.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}
