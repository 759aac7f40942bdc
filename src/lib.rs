//! In-memory registries for a hackathon workspace portal: a read-only space
//! catalog and an editable sponsor roster, each with filter state, a filtered
//! view, and (for sponsors) roster statistics.

pub mod domain;
pub mod errors;
pub mod filters;
pub mod format;
pub mod registry;
pub mod seed;
pub mod stats;
pub mod store;

pub use errors::{RegistryError, RegistryResult, SeedError, SeedResult};
pub use registry::{SpaceRegistry, SponsorRegistry};
pub use seed::{SeedConfig, SeedData};

#[cfg(test)]
mod tests;
