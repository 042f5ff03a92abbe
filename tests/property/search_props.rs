//! Search property tests.
//!
//! - Empty and blank queries return the whole catalog
//! - An exact hit is returned as-is, with no scan results mixed in
//! - The fallback finds every service containing the query
//! - Results never repeat a service

use proptest::prelude::*;
use std::collections::HashSet;
use tagdex::testing::make_project;
use tagdex::{normalize, Catalog, SearchEngine, Service};

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,6}").unwrap()
}

fn service_strategy() -> impl Strategy<Value = (Vec<String>, String, Vec<String>)> {
    (
        prop::collection::vec(word_strategy(), 1..4),
        prop::collection::vec(word_strategy(), 1..6).prop_map(|w| w.join(" ")),
        prop::collection::vec(word_strategy(), 0..3),
    )
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(service_strategy(), 1..6).prop_map(|specs| {
        Catalog::new(
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (keywords, summary, tech))| {
                    let tech: Vec<&str> = tech.iter().map(String::as_str).collect();
                    Service {
                        id: format!("svc-{}", i),
                        title: format!("Service {}", i),
                        keywords,
                        summary,
                        projects: vec![make_project(&format!("proj-{}", i), "Work", &tech)],
                        ..Service::default()
                    }
                })
                .collect(),
        )
    })
}

/// Brute-force oracle for the fallback scan.
fn service_contains(service: &Service, needle: &str) -> bool {
    let hit = |s: &str| s.to_lowercase().contains(needle);
    hit(&service.id)
        || hit(&service.title)
        || hit(&service.summary)
        || service.keywords.iter().any(|k| normalize(k).contains(needle))
        || service.projects.iter().any(|p| {
            hit(&p.name) || hit(&p.description) || p.tech_stack.iter().any(|t| hit(t))
        })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_blank_query_is_identity(catalog in catalog_strategy(), blanks in "[ \t]{0,3}") {
        let engine = SearchEngine::new(catalog.clone());
        let all: Vec<&str> = catalog.services().iter().map(|s| s.id.as_str()).collect();
        let found: Vec<&str> = engine.search(&blanks).iter().map(|s| s.id.as_str()).collect();
        prop_assert_eq!(found, all);
    }

    #[test]
    fn prop_exact_short_circuit(catalog in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        let engine = SearchEngine::new(catalog.clone());
        let keywords = engine.all_keywords();
        let query = pick.get(&keywords).to_string();

        let exact: HashSet<&str> = engine.search_exact(&query).iter().map(|s| s.id.as_str()).collect();
        let found: HashSet<&str> = engine.search(&query).iter().map(|s| s.id.as_str()).collect();
        prop_assert!(!exact.is_empty());
        prop_assert_eq!(found, exact);
    }

    #[test]
    fn prop_fallback_matches_oracle(catalog in catalog_strategy(), query in "[a-z]{1,3}") {
        let engine = SearchEngine::new(catalog.clone());
        prop_assume!(engine.search_exact(&query).is_empty());

        let expected: Vec<&str> = catalog
            .services()
            .iter()
            .filter(|s| service_contains(s, &query))
            .map(|s| s.id.as_str())
            .collect();
        let found: Vec<&str> = engine.search(&query).iter().map(|s| s.id.as_str()).collect();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn prop_results_unique(catalog in catalog_strategy(), query in "[a-z ]{0,4}") {
        let engine = SearchEngine::new(catalog);
        let results = engine.search(&query);
        let unique: HashSet<&str> = results.iter().map(|s| s.id.as_str()).collect();
        prop_assert_eq!(unique.len(), results.len());
    }
}
