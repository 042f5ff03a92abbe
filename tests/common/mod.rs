//! Shared test utilities and fixtures.

#![allow(dead_code)]

use tagdex::testing::{make_project, make_service, with_projects};
use tagdex::{Catalog, SearchEngine, Service};

/// Service A from the illustrative two-service catalog.
pub fn web_dev() -> Service {
    with_projects(
        Service {
            summary: "Marketing sites and single-page apps".to_string(),
            ..make_service("web-dev", "Web Development", &["React", "Web App"])
        },
        vec![make_project(
            "proj-honeycomb",
            "Honeycomb Navigation",
            &["TypeScript", "Framer Motion"],
        )],
    )
}

/// Service B from the illustrative two-service catalog.
pub fn mobile_dev() -> Service {
    with_projects(
        Service {
            summary: "Native and cross-platform phone apps".to_string(),
            ..make_service("mobile-dev", "Mobile Development", &["react native", "mobile"])
        },
        vec![make_project("proj-fieldnotes", "FieldNotes", &["Swift", "SQLite"])],
    )
}

/// The illustrative catalog: `[web-dev, mobile-dev]`.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![web_dev(), mobile_dev()])
}

pub fn sample_engine() -> SearchEngine {
    SearchEngine::new(sample_catalog())
}

/// Ids of a result list, in result order.
pub fn ids<'a>(services: &[&'a Service]) -> Vec<&'a str> {
    services.iter().map(|s| s.id.as_str()).collect()
}

/// Ids of a result list, sorted (for order-insensitive comparisons).
pub fn sorted_ids<'a>(services: &[&'a Service]) -> Vec<&'a str> {
    let mut out = ids(services);
    out.sort_unstable();
    out
}
