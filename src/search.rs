// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search over the catalog: exact keyword hits first, substring scan second.
//!
//! The two tiers:
//!
//! 1. **Exact**: the whole query, normalized, is looked up as one keyword in
//!    the [`KeywordIndex`]. O(1) after the index is built. A multi-word query
//!    is never split here; `"react native"` is one candidate keyword.
//! 2. **Fallback**: only if the exact tier finds nothing, every service is
//!    scanned for the query as a case-insensitive substring of its id, title,
//!    summary, normalized keywords, or any project's name, description or
//!    tech stack. Linear, unweighted, catalog order.
//!
//! An empty query isn't an error, it's "show me everything".

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::index::KeywordIndex;
use crate::types::{CatalogStats, Project, Service};
use crate::utils::{contains_folded, normalize};

/// The search service: a catalog plus the keyword index built over it.
#[derive(Debug)]
pub struct SearchEngine {
    catalog: Arc<Catalog>,
    index: KeywordIndex,
}

impl SearchEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self::from_shared(Arc::new(catalog))
    }

    pub fn from_shared(catalog: Arc<Catalog>) -> Self {
        Self {
            index: KeywordIndex::new(Arc::clone(&catalog)),
            catalog,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    /// Services carrying `keyword` exactly (after normalization).
    ///
    /// Ids that no longer resolve to a service are skipped, not fatal.
    pub fn search_exact(&self, keyword: &str) -> Vec<&Service> {
        self.index
            .service_ids(keyword)
            .iter()
            .filter_map(|id| {
                let service = self.catalog.service_by_id(id);
                if service.is_none() {
                    log::warn!("keyword index references unknown service '{}'", id);
                }
                service
            })
            .collect()
    }

    /// Union of exact matches across `keywords`, de-duplicated by service id.
    ///
    /// Order is first-seen; callers shouldn't rely on it.
    pub fn search_multi_keyword<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<&Service> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut results = Vec::new();

        for keyword in keywords {
            for service in self.search_exact(keyword.as_ref()) {
                if seen.insert(service.id.as_str()) {
                    results.push(service);
                }
            }
        }

        results
    }

    /// Answer a free-text query.
    pub fn search(&self, query: &str) -> Vec<&Service> {
        let query = normalize(query);
        if query.is_empty() {
            return self.catalog.services().iter().collect();
        }

        let exact = self.search_exact(&query);
        if !exact.is_empty() {
            return exact;
        }

        log::trace!("no exact keyword match for '{}', scanning catalog", query);
        self.catalog
            .services()
            .iter()
            .enumerate()
            .filter(|(position, service)| self.matches_substring(*position, service, &query))
            .map(|(_, service)| service)
            .collect()
    }

    /// Fallback predicate: does `needle` (already lowercase) occur anywhere
    /// searchable in this service?
    fn matches_substring(&self, position: usize, service: &Service, needle: &str) -> bool {
        contains_folded(&service.id, needle)
            || contains_folded(&service.title, needle)
            || contains_folded(&service.summary, needle)
            || self
                .index
                .normalized_keywords(position)
                .iter()
                .any(|keyword| contains_folded(keyword, needle))
            || service
                .projects
                .iter()
                .any(|project| project_matches(project, needle))
    }

    pub fn service_by_id(&self, id: &str) -> Option<&Service> {
        self.catalog.service_by_id(id)
    }

    /// All indexed keywords, sorted. For autocomplete.
    pub fn all_keywords(&self) -> Vec<&str> {
        self.index.all_keywords()
    }

    pub fn keyword_suggestions(&self, partial: &str, limit: usize) -> Vec<&str> {
        self.index.suggestions(partial, limit)
    }

    pub fn all_technologies(&self) -> Vec<&str> {
        self.catalog.all_technologies()
    }

    pub fn all_projects(&self) -> Vec<&Project> {
        self.catalog.all_projects()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            service_count: self.catalog.len(),
            project_count: self.catalog.all_projects().len(),
            keyword_count: self.index.keyword_count(),
            technology_count: self.catalog.all_technologies().len(),
        }
    }
}

fn project_matches(project: &Project, needle: &str) -> bool {
    contains_folded(&project.name, needle)
        || contains_folded(&project.description, needle)
        || project
            .tech_stack
            .iter()
            .any(|tech| contains_folded(tech, needle))
}
