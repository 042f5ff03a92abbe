// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records a catalog is made of.
//!
//! A catalog is a flat list of [`Service`]s, each owning its [`Project`]s. The
//! shapes mirror the JSON the showcase site authors by hand, so every field is
//! camelCase on the wire and defaults to empty when absent. Missing data is
//! the validator's problem, not the loader's: a catalog with holes still loads,
//! and `verify` tells you where the holes are.
//!
//! # Invariants (checked by `verify`, not by construction)
//!
//! - **Service.id**: unique across the catalog, kebab-case.
//! - **Project.id**: unique across the whole catalog, not just its parent.
//! - **Service.keywords**: at least one entry.
//! - **Service.normalized_keywords**: when present, same length and index
//!   correspondence as `keywords`.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A top-level catalog entry: one line of business the consultancy sells.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Free-text search terms. Order carries no search meaning.
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    /// Pre-normalized keywords, if the authored data already carries them.
    ///
    /// When absent, the keyword index derives them into its own side table
    /// instead of writing them back here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normalized_keywords: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
}

/// A piece of delivered work, owned by exactly one [`Service`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Copy of the owning service's title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

/// Aggregate counts over a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub service_count: usize,
    pub project_count: usize,
    /// Distinct normalized keywords.
    pub keyword_count: usize,
    /// Distinct technologies across all tech stacks.
    pub technology_count: usize,
}
