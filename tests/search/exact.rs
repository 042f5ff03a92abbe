//! Exact keyword tier and the multi-keyword union.

use super::common::{ids, sample_engine, sorted_ids};

#[test]
fn exact_lookup_ignores_case_and_padding() {
    let engine = sample_engine();
    assert_eq!(ids(&engine.search_exact("  WEB APP ")), vec!["web-dev"]);
}

#[test]
fn exact_hit_short_circuits_the_scan() {
    let engine = sample_engine();
    let exact = engine.search_exact("web app");
    assert_eq!(sorted_ids(&engine.search("Web App")), sorted_ids(&exact));
}

#[test]
fn exact_hit_hides_substring_matches_elsewhere() {
    let engine = sample_engine();
    // "react" also appears inside mobile-dev's "react native", but the exact
    // bucket answers first.
    assert_eq!(ids(&engine.search("React")), vec!["web-dev"]);
}

#[test]
fn multi_keyword_union_deduplicates() {
    let engine = sample_engine();
    let found = engine.search_multi_keyword(&["react", "web app", "mobile", "nope"]);
    assert_eq!(sorted_ids(&found), vec!["mobile-dev", "web-dev"]);
}

#[test]
fn search_does_not_split_multi_word_queries() {
    let engine = sample_engine();
    // Neither "react mobile" as a keyword nor as a substring exists.
    assert!(engine.search("react mobile").is_empty());
    // The union helper is the way to ask for several keywords.
    assert_eq!(
        sorted_ids(&engine.search_multi_keyword(&["react", "mobile"])),
        vec!["mobile-dev", "web-dev"]
    );
}

#[test]
fn facade_helpers() {
    let engine = sample_engine();
    assert_eq!(
        engine.all_keywords(),
        vec!["mobile", "react", "react native", "web app"]
    );
    assert_eq!(
        engine.all_technologies(),
        vec!["Framer Motion", "SQLite", "Swift", "TypeScript"]
    );
    assert_eq!(engine.all_projects().len(), 2);
    assert!(engine.service_by_id("mobile-dev").is_some());
    assert!(engine.service_by_id("desktop-dev").is_none());
}
