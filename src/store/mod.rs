pub mod spaces;
pub mod sponsors;

pub use spaces::SpaceCatalog;
pub use sponsors::{Clock, SponsorStore};
