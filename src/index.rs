// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword index construction.
//!
//! Maps each normalized keyword to the ids of the services that carry it. The
//! index is built at most once, on the first call to any accessor, and then
//! stays valid for as long as the catalog does (which is forever: catalogs
//! don't change after load).
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **COMPLETE**: every keyword of every service, once normalized, has a
//!    bucket containing that service's id.
//! 2. **NO_DUPLICATES**: a bucket holds each service id at most once, even when
//!    a service repeats a keyword.
//! 3. **ALIGNED**: the derived normalized keywords of a service have the same
//!    length and order as its authored keywords.
//!
//! The derived keywords live in a side table owned by the index, keyed by
//! catalog position. Services are never written to.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::catalog::Catalog;
use crate::contracts::{check_bucket_unique, check_normalized_aligned};
use crate::utils::normalize;

/// Default cap on the number of autocomplete suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

#[derive(Debug, Default)]
struct BuiltIndex {
    buckets: HashMap<String, Vec<String>>,
    /// Bucket keys in first-insertion order; this is the iteration order.
    keys: Vec<String>,
    /// Normalized keywords per service, by catalog position.
    normalized: Vec<Vec<String>>,
}

/// Lazily built keyword → service id index over a shared catalog.
///
/// Safe to share across threads: concurrent first callers race on a
/// `OnceLock`, exactly one of them builds, the rest wait and read.
#[derive(Debug)]
pub struct KeywordIndex {
    catalog: Arc<Catalog>,
    built: OnceLock<BuiltIndex>,
}

impl KeywordIndex {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            built: OnceLock::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Whether the first accessor call has happened yet.
    pub fn is_built(&self) -> bool {
        self.built.get().is_some()
    }

    fn built(&self) -> &BuiltIndex {
        self.built.get_or_init(|| build_keyword_index(&self.catalog))
    }

    /// Ids of services carrying `keyword`. Empty when nobody does.
    pub fn service_ids(&self, keyword: &str) -> &[String] {
        self.built()
            .buckets
            .get(&normalize(keyword))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every indexed keyword, sorted ascending.
    pub fn all_keywords(&self) -> Vec<&str> {
        let mut keywords: Vec<&str> = self.built().keys.iter().map(String::as_str).collect();
        keywords.sort_unstable();
        keywords
    }

    /// Number of distinct normalized keywords.
    pub fn keyword_count(&self) -> usize {
        self.built().keys.len()
    }

    /// Up to `limit` keywords starting with `partial`, in index order.
    ///
    /// A blank `partial` returns nothing and does not force a build.
    pub fn suggestions(&self, partial: &str, limit: usize) -> Vec<&str> {
        let prefix = normalize(partial);
        if prefix.is_empty() {
            return Vec::new();
        }

        self.built()
            .keys
            .iter()
            .filter(|keyword| keyword.starts_with(&prefix))
            .take(limit)
            .map(String::as_str)
            .collect()
    }

    /// Normalized keywords of the service at catalog position `position`.
    pub fn normalized_keywords(&self, position: usize) -> &[String] {
        self.built()
            .normalized
            .get(position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Build the index in one pass over the catalog.
fn build_keyword_index(catalog: &Catalog) -> BuiltIndex {
    let mut index = BuiltIndex::default();

    for service in catalog.services() {
        // Authored normalized keywords win; only derive when missing.
        // Misaligned authored data is reported by `verify`, not asserted here.
        let normalized: Vec<String> = match &service.normalized_keywords {
            Some(authored) => authored.clone(),
            None => {
                let derived: Vec<String> = service.keywords.iter().map(|k| normalize(k)).collect();
                check_normalized_aligned(&service.id, &service.keywords, &derived);
                derived
            }
        };

        for keyword in &normalized {
            if !index.buckets.contains_key(keyword) {
                index.keys.push(keyword.clone());
            }
            let bucket = index.buckets.entry(keyword.clone()).or_default();
            // INVARIANT: NO_DUPLICATES
            if !bucket.contains(&service.id) {
                bucket.push(service.id.clone());
            }
        }

        index.normalized.push(normalized);
    }

    for (keyword, bucket) in &index.buckets {
        check_bucket_unique(keyword, bucket);
    }

    log::debug!(
        "built keyword index: {} keywords across {} services",
        index.keys.len(),
        catalog.len()
    );

    index
}
