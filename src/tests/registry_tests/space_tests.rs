// src/tests/registry_tests/space_tests.rs

use crate::domain::SpaceStatus;
use crate::filters::ALL_STATUSES;
use crate::tests::utils::seed;
use crate::SpaceRegistry;

fn names(registry: &SpaceRegistry) -> Vec<&str> {
    registry.view().into_iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn status_counts_cover_the_catalog() {
    let registry = SpaceRegistry::from_seed(&seed()).unwrap();
    let counts = registry.status_counts();

    assert_eq!(counts.all, 8);
    assert_eq!(counts.get(SpaceStatus::Available), 3);
    assert_eq!(counts.get(SpaceStatus::Unavailable), 1);
    assert_eq!(counts.get(SpaceStatus::Booked), 2);
    assert_eq!(counts.get(SpaceStatus::Allotted), 2);
}

#[test]
fn default_view_is_whole_catalog_in_order() {
    let registry = SpaceRegistry::from_seed(&seed()).unwrap();
    let ids: Vec<&str> = registry.view().into_iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
}

#[test]
fn status_filter_then_search() {
    let mut registry = SpaceRegistry::from_seed(&seed()).unwrap();

    registry.filters_mut().select_status("available").unwrap();
    assert_eq!(
        names(&registry),
        vec!["Innovation Hub A", "Code Lab D", "Maker Space F"]
    );

    registry.filters_mut().set_search_query("floor 2");
    assert_eq!(names(&registry), vec!["Innovation Hub A", "Code Lab D"]);

    registry.filters_mut().reset();
    assert_eq!(registry.filters().status_selection(), ALL_STATUSES);
    assert_eq!(registry.view().len(), 8);
}

#[test]
fn search_matches_location() {
    let mut registry = SpaceRegistry::from_seed(&seed()).unwrap();
    registry.filters_mut().set_search_query("GROUND");
    assert_eq!(names(&registry), vec!["Maker Space F"]);
}

#[test]
fn catalog_lookup_by_id() {
    let registry = SpaceRegistry::from_seed(&seed()).unwrap();
    let hall = registry.catalog().get("7").unwrap();

    assert_eq!(hall.name, "Presentation Hall G");
    assert_eq!(hall.capacity, 200);
    assert_eq!(hall.price.as_deref(), Some("₹15,000/day"));
    assert!(registry.catalog().get("42").is_none());
}
