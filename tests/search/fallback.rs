//! Substring fallback tier.

use super::common::{ids, sample_engine};

#[test]
fn matches_service_id() {
    assert_eq!(ids(&sample_engine().search("obile-d")), vec!["mobile-dev"]);
}

#[test]
fn matches_title_and_keeps_catalog_order() {
    assert_eq!(
        ids(&sample_engine().search("DEVELOPMENT")),
        vec!["web-dev", "mobile-dev"]
    );
}

#[test]
fn matches_summary() {
    assert_eq!(ids(&sample_engine().search("single-page")), vec!["web-dev"]);
}

#[test]
fn matches_keyword_fragment() {
    assert_eq!(ids(&sample_engine().search("native")), vec!["mobile-dev"]);
}

#[test]
fn matches_project_fields() {
    let engine = sample_engine();
    assert_eq!(ids(&engine.search("honeycomb")), vec!["web-dev"]);
    assert_eq!(ids(&engine.search("framer")), vec!["web-dev"]);
    assert_eq!(ids(&engine.search("sqlite")), vec!["mobile-dev"]);
    // make_project descriptions read "Description of <name>"
    assert_eq!(ids(&engine.search("of fieldnotes")), vec!["mobile-dev"]);
}
