//! The worked examples over the two-service catalog.

use super::common::{ids, sample_catalog, sample_engine};
use tagdex::testing::make_service;
use tagdex::{Catalog, ValidationConfig, Validator};

#[test]
fn react_matches_only_the_exact_keyword() {
    // "react native" is one keyword, not "react" + "native".
    let engine = sample_engine();
    assert_eq!(ids(&engine.search("react")), vec!["web-dev"]);
}

#[test]
fn empty_query_lists_catalog_in_order() {
    let engine = sample_engine();
    assert_eq!(ids(&engine.search("")), vec!["web-dev", "mobile-dev"]);
}

#[test]
fn unknown_query_finds_nothing() {
    let engine = sample_engine();
    assert!(engine.search("xyz-not-present").is_empty());
}

#[test]
fn suggestions_for_mob() {
    let engine = sample_engine();
    let suggestions = engine.keyword_suggestions("mob", 5);
    assert!(suggestions.contains(&"mobile"));
    assert!(suggestions.iter().all(|s| s.starts_with("mob")));
}

#[test]
fn duplicate_service_id_fails_validation() {
    let mut services = sample_catalog().services().to_vec();
    services[1].id = "web-dev".to_string();
    let catalog = Catalog::new(services);

    let result = Validator::with_config(&catalog, ValidationConfig::for_year(2026))
        .validate_all_services();
    assert!(!result.valid);
    assert!(result.errors.iter().any(|e| e.contains("web-dev")));
}

#[test]
fn service_without_keywords_fails_validation() {
    let service = make_service("web-dev", "Web Development", &[]);
    let catalog = Catalog::new(vec![service.clone()]);

    let result = Validator::new(&catalog).validate_service(&service);
    assert!(!result.valid);
    assert!(result
        .errors
        .contains(&"At least one keyword is required".to_string()));
}
