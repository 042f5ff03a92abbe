// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog store: every service and project, loaded once, never mutated.
//!
//! Loading accepts either a bare JSON array of services or an object with a
//! `services` key, which is what the data-migration scripts emit. The default
//! catalog is compiled into the binary from `data/services.json`.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::types::{Project, Service};

/// The catalog shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../data/services.json");

/// `{"services": [...]}`, as emitted by the migration scripts.
#[derive(Deserialize)]
struct WrappedCatalog {
    services: Vec<Service>,
}

/// Immutable collection of services in authored order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Catalog {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    /// Parse a catalog from its JSON definition.
    ///
    /// The shape is picked from the first non-whitespace character so that
    /// serde reports type errors with their line and column.
    pub fn from_json(json: &str) -> Result<Self> {
        let services: Vec<Service> = if json.trim_start().starts_with('[') {
            serde_json::from_str(json)?
        } else {
            serde_json::from_str::<WrappedCatalog>(json)?.services
        };
        log::debug!("loaded catalog with {} services", services.len());
        Ok(Self::new(services))
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The catalog compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// First service with this id, if any.
    pub fn service_by_id(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }

    /// Every project in the catalog, flattened in service order.
    pub fn all_projects(&self) -> Vec<&Project> {
        self.services
            .iter()
            .flat_map(|service| service.projects.iter())
            .collect()
    }

    /// Sorted, de-duplicated technology names across all tech stacks.
    pub fn all_technologies(&self) -> Vec<&str> {
        let technologies: BTreeSet<&str> = self
            .services
            .iter()
            .flat_map(|service| service.projects.iter())
            .flat_map(|project| project.tech_stack.iter())
            .map(String::as_str)
            .collect();
        technologies.into_iter().collect()
    }

    /// Projects whose tech stack mentions `technology`, ignoring case.
    pub fn projects_using(&self, technology: &str) -> Vec<&Project> {
        let wanted = technology.trim();
        self.services
            .iter()
            .flat_map(|service| service.projects.iter())
            .filter(|project| {
                project
                    .tech_stack
                    .iter()
                    .any(|tech| tech.eq_ignore_ascii_case(wanted))
            })
            .collect()
    }
}
