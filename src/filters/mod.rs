//! Filter state for both registries and the view projector that applies it.
//!
//! Each filter dimension starts at its "no restriction" value. A record is in
//! the view when it satisfies every dimension that has been narrowed.

pub mod space_filter;
pub mod sponsor_filter;

pub use space_filter::{SpaceFilters, ALL_STATUSES};
pub use sponsor_filter::{SponsorFilters, ALL_TIERS};

/// A predicate over one kind of record.
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Records that pass `filters`, in their original order.
pub fn project<'a, T, F>(records: &'a [T], filters: &F) -> Vec<&'a T>
where
    F: RecordFilter<T>,
{
    records.iter().filter(|r| filters.matches(*r)).collect()
}

/// Case-insensitive substring test shared by the text-search dimensions.
/// An empty query matches everything.
pub(crate) fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}
