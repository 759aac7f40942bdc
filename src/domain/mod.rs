pub mod location;
pub mod space;
pub mod sponsor;

pub use location::{City, LocationCatalog, ALL_AREAS, ALL_CITIES};
pub use space::{Space, SpaceStatus};
pub use sponsor::{Sponsor, SponsorFormData, SponsorTier};
