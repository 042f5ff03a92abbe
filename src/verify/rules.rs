// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-record validation rules.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::types::{ValidationConfig, ValidationResult};
use crate::catalog::Catalog;
use crate::types::{Project, Service};
use crate::utils::normalize;

/// `web-dev`, `ai`, `cloud-2`
static SERVICE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid service id regex"));

/// `proj-storefront`, `web-acme-portal`: a prefix segment plus at least one more.
static PROJECT_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]+(?:-[a-z0-9]+)+$").expect("valid project id regex")
});

/// Audits services and projects against the catalog they live in.
///
/// Uniqueness rules need the whole catalog, so the validator borrows it.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    catalog: &'a Catalog,
    config: ValidationConfig,
}

impl<'a> Validator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_config(catalog, ValidationConfig::default())
    }

    pub fn with_config(catalog: &'a Catalog, config: ValidationConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Check one project. `service_id` names the owner, when known, so the
    /// denormalized `service_type` can be compared against its title.
    pub fn validate_project(&self, project: &Project, service_id: Option<&str>) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if project.id.trim().is_empty() {
            errors.push("Project ID is required".to_string());
        } else {
            if !PROJECT_ID.is_match(&project.id) {
                warnings.push(format!(
                    "Project ID \"{}\" should be prefixed kebab-case (e.g. proj-name)",
                    project.id
                ));
            }
            let occurrences = self
                .catalog
                .all_projects()
                .iter()
                .filter(|other| other.id == project.id)
                .count();
            if occurrences > 1 {
                errors.push(format!("Duplicate project ID: {}", project.id));
            }
        }

        if project.name.trim().is_empty() {
            errors.push("Project name is required".to_string());
        }
        if project.service_type.trim().is_empty() {
            errors.push("Service type is required".to_string());
        }
        if project.description.trim().is_empty() {
            errors.push("Description is required".to_string());
        }
        if project.tech_stack.is_empty() {
            errors.push("At least one technology is required".to_string());
        }

        match project.year {
            None => errors.push("Year is required".to_string()),
            Some(year) if year < self.config.min_year || year > self.config.max_year() => {
                warnings.push(format!(
                    "Year {} is outside the expected range {}-{}",
                    year,
                    self.config.min_year,
                    self.config.max_year()
                ));
            }
            Some(_) => {}
        }

        let description_len = project.description.chars().count();
        if description_len > self.config.max_description_len {
            warnings.push(format!(
                "Description is {} characters; keep it under {}",
                description_len, self.config.max_description_len
            ));
        }

        if let Some(parent) = service_id.and_then(|id| self.catalog.service_by_id(id)) {
            if !project.service_type.is_empty() && project.service_type != parent.title {
                warnings.push(format!(
                    "Service type \"{}\" does not match parent service title \"{}\"",
                    project.service_type, parent.title
                ));
            }
        }

        ValidationResult::new(errors, warnings)
    }

    /// Check one service and, recursively, its projects.
    pub fn validate_service(&self, service: &Service) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if service.id.trim().is_empty() {
            errors.push("Service ID is required".to_string());
        } else {
            if !SERVICE_ID.is_match(&service.id) {
                warnings.push(format!("Service ID \"{}\" should be kebab-case", service.id));
            }
            let occurrences = self
                .catalog
                .services()
                .iter()
                .filter(|other| other.id == service.id)
                .count();
            if occurrences > 1 {
                errors.push(format!("Duplicate service ID: {}", service.id));
            }
        }

        if service.title.trim().is_empty() {
            errors.push("Title is required".to_string());
        }
        if service.keywords.is_empty() {
            errors.push("At least one keyword is required".to_string());
        }
        if service.summary.trim().is_empty() {
            errors.push("Summary is required".to_string());
        }

        let mut seen = HashSet::new();
        for keyword in &service.keywords {
            if !seen.insert(normalize(keyword)) {
                warnings.push(format!("Duplicate keyword: \"{}\"", keyword));
            }
            if keyword.to_lowercase() != *keyword {
                warnings.push(format!("Keyword \"{}\" should be lowercase", keyword));
            }
        }

        if let Some(normalized) = &service.normalized_keywords {
            if normalized.len() != service.keywords.len() {
                errors.push(format!(
                    "normalizedKeywords has {} entries but keywords has {}",
                    normalized.len(),
                    service.keywords.len()
                ));
            }
        }

        let mut result = ValidationResult::new(errors, warnings);

        if service.projects.is_empty() {
            result.warnings.push("Service has no projects".to_string());
        }
        let owner = (!service.id.is_empty()).then_some(service.id.as_str());
        for (i, project) in service.projects.iter().enumerate() {
            let project_result = self.validate_project(project, owner);
            result.absorb(project_result, &format!("Project {}", i + 1));
        }

        result
    }

    /// Check the whole catalog. Messages are attributed to their service by
    /// title, or by 1-based position when the title is missing.
    pub fn validate_all_services(&self) -> ValidationResult {
        let mut result = ValidationResult::new(Vec::new(), Vec::new());

        for (i, service) in self.catalog.services().iter().enumerate() {
            let label = if service.title.trim().is_empty() {
                format!("Service {}", i + 1)
            } else {
                service.title.clone()
            };
            result.absorb(self.validate_service(service), &label);
        }

        log::debug!(
            "validated {} services: {} errors, {} warnings",
            self.catalog.len(),
            result.errors.len(),
            result.warnings.len()
        );

        result
    }
}
