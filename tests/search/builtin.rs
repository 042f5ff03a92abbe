//! The catalog embedded in the crate.

use super::common::ids;
use tagdex::{Catalog, SearchEngine, ValidationConfig, Validator};

fn engine() -> SearchEngine {
    SearchEngine::new(Catalog::builtin().expect("embedded catalog parses"))
}

#[test]
fn builtin_catalog_is_valid_and_clean() {
    let catalog = Catalog::builtin().unwrap();
    let result = Validator::with_config(&catalog, ValidationConfig::for_year(2026))
        .validate_all_services();
    assert!(result.valid, "{:?}", result.errors);
    assert!(result.warnings.is_empty(), "{:?}", result.warnings);
}

#[test]
fn builtin_keyword_search() {
    assert_eq!(ids(&engine().search("Kubernetes")), vec!["cloud-infrastructure"]);
    assert_eq!(ids(&engine().search("react native")), vec!["mobile-development"]);
}

#[test]
fn builtin_fallback_search() {
    // Tech-stack only, not a keyword.
    assert_eq!(ids(&engine().search("clickhouse")), vec!["data-analytics"]);
}
