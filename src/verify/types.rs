// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Report and configuration types for catalog validation.

use chrono::Datelike;
use serde::Serialize;

/// Earliest project year that doesn't look like a typo.
pub const DEFAULT_MIN_YEAR: i32 = 2000;

/// Project descriptions longer than this (in characters) draw a warning.
pub const DEFAULT_MAX_DESCRIPTION_LEN: usize = 300;

/// Tunables for the validator.
///
/// `current_year` is explicit so tests don't depend on the wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    pub min_year: i32,
    pub current_year: i32,
    pub max_description_len: usize,
}

impl ValidationConfig {
    /// Defaults with a pinned current year.
    pub fn for_year(current_year: i32) -> Self {
        Self {
            current_year,
            ..Self::default()
        }
    }

    /// Latest acceptable project year. One year of forward-dating is allowed
    /// for work that's planned but not shipped.
    pub fn max_year(&self) -> i32 {
        self.current_year + 1
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_YEAR,
            current_year: chrono::Utc::now().year(),
            max_description_len: DEFAULT_MAX_DESCRIPTION_LEN,
        }
    }
}

/// Outcome of a validation pass.
///
/// Errors are must-fix, warnings are should-fix. `valid` only looks at errors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub(crate) fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// Fold another result in, prefixing each of its messages.
    pub(crate) fn absorb(&mut self, other: ValidationResult, prefix: &str) {
        self.errors
            .extend(other.errors.into_iter().map(|e| format!("{}: {}", prefix, e)));
        self.warnings
            .extend(other.warnings.into_iter().map(|w| format!("{}: {}", prefix, w)));
        self.valid = self.errors.is_empty();
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
