// src/tests/registry_tests/sponsor_tests.rs

use crate::domain::{SponsorTier, ALL_AREAS, ALL_CITIES};
use crate::errors::RegistryError;
use crate::filters::ALL_TIERS;
use crate::store::SponsorStore;
use crate::tests::utils::{acme_form, fixed_clock, ids, seed, sponsor_registry};
use crate::SponsorRegistry;
use chrono::Utc;

#[test]
fn seed_roster_stats() {
    let registry = sponsor_registry();
    let stats = registry.stats();

    assert_eq!(stats.total_count, 6);
    assert_eq!(stats.active_count, 5);
    assert_eq!(stats.tier_count(SponsorTier::Platinum), 2);
    assert_eq!(stats.tier_count(SponsorTier::Gold), 2);
    assert_eq!(stats.total_contribution, 1_725_000);
    assert_eq!(stats.unique_city_count, 3);

    let tech = registry.store().get("1").unwrap();
    assert_eq!(tech.name, "TechCorp Industries");
    assert_eq!(tech.tier, SponsorTier::Platinum);
    assert_eq!(tech.city, "Bangalore");
    assert_eq!(tech.contribution, 500_000);
    assert!(tech.is_active);
}

#[test]
fn search_is_case_insensitive_over_name_and_description() {
    let mut registry = sponsor_registry();
    registry.filters_mut().set_search_query("cloud");

    let names: Vec<&str> = registry.view().into_iter().map(|s| s.name.as_str()).collect();
    // CloudNine by name and description, TechCorp by "cloud computing".
    assert_eq!(names, vec!["TechCorp Industries", "CloudNine Tech"]);
    assert!(!names.contains(&"InnovateLabs"));
}

#[test]
fn create_prepends_with_fresh_id_and_today() {
    let mut registry = sponsor_registry();
    let before = ids(registry.list());

    let created = registry.create(acme_form(), true).unwrap();

    assert_eq!(registry.list()[0], created);
    assert_eq!(ids(&registry.list()[1..]), before);
    assert!(!before.contains(&created.id));
    assert_eq!(created.created_at, fixed_clock().date_naive());
    assert!(created.is_active);
    assert_eq!(registry.stats().total_count, 7);
}

#[test]
fn create_with_system_clock_stamps_today() {
    let mut store = SponsorStore::new(seed().sponsors).unwrap();

    let before = Utc::now().date_naive();
    let created = store.create(acme_form(), false).unwrap();
    let after = Utc::now().date_naive();

    assert!(before <= created.created_at && created.created_at <= after);
    assert_eq!(store.list()[0].id, created.id);
}

#[test]
fn delete_of_missing_id_changes_nothing() {
    let mut registry = sponsor_registry();
    let before = registry.list().to_vec();

    let err = registry.delete("999").unwrap_err();

    assert!(matches!(err, RegistryError::NotFound(_)));
    assert_eq!(registry.list(), before.as_slice());
}

#[test]
fn delete_keeps_remaining_order() {
    let mut registry = sponsor_registry();

    let removed = registry.delete("3").unwrap();

    assert_eq!(removed.name, "DataDrive Solutions");
    assert_eq!(ids(registry.list()), vec!["1", "2", "4", "5", "6"]);
    assert!(registry.store().get("3").is_none());
    assert_eq!(registry.stats().total_contribution, 1_575_000);
}

#[test]
fn update_keeps_identity_and_position() {
    let mut registry = sponsor_registry();
    let original = registry.store().get("4").unwrap().clone();

    let mut fields = acme_form();
    fields.name = "CloudNine Technologies".to_string();
    fields.tier = SponsorTier::Silver;
    let updated = registry.update("4", fields.clone(), false).unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.form_data(), fields);
    assert!(!updated.is_active);
    assert_eq!(registry.list()[3], updated);
    assert_eq!(ids(registry.list()), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn changing_city_resets_area() {
    let mut registry = sponsor_registry();

    registry.filters_mut().set_city("Mumbai");
    registry.filters_mut().set_area("Andheri");
    assert_eq!(ids(registry.view()), vec!["3"]);

    registry.filters_mut().set_city("Delhi");
    assert_eq!(registry.filters().area(), ALL_AREAS);
    assert_eq!(ids(registry.view()), vec!["5", "6"]);
}

#[test]
fn filters_combine_with_and() {
    let mut registry = sponsor_registry();

    registry.filters_mut().set_city("Bangalore");
    registry.filters_mut().select_tier("gold").unwrap();
    assert_eq!(ids(registry.view()), vec!["2"]);

    registry.filters_mut().set_search_query("nothing like this");
    assert!(registry.view().is_empty());

    registry.filters_mut().reset();
    assert_eq!(registry.filters().city(), ALL_CITIES);
    assert_eq!(registry.filters().tier_selection(), ALL_TIERS);
    assert_eq!(registry.view().len(), 6);
}

#[test]
fn view_follows_mutations() {
    let mut registry = sponsor_registry();
    registry.filters_mut().set_city("Chennai");
    assert!(registry.view().is_empty());

    let created = registry.create(acme_form(), true).unwrap();
    assert_eq!(ids(registry.view()), vec![created.id.clone()]);

    registry.delete(&created.id).unwrap();
    assert!(registry.view().is_empty());
}

#[test]
fn area_options_follow_selected_city() {
    let mut registry = sponsor_registry();
    assert_eq!(registry.area_options(), vec![ALL_AREAS]);

    registry.filters_mut().set_city("Chennai");
    assert_eq!(
        registry.area_options(),
        vec![ALL_AREAS, "OMR", "T Nagar", "Adyar", "Velachery"]
    );
}

#[test]
fn registry_rejects_duplicate_seed_ids() {
    let mut data = seed();
    let first = data.sponsors[0].clone();
    data.sponsors.push(first);

    assert!(matches!(
        SponsorRegistry::from_seed(&data),
        Err(RegistryError::Validation(_))
    ));
}
