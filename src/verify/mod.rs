// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The validation layer: a read-only audit of the catalog.
//!
//! Nothing here fails fast. Every rule runs, and what it finds lands in one of
//! two buckets:
//!
//! 1. **Errors**: missing required fields, duplicate ids. The catalog is wrong.
//! 2. **Warnings**: id format, odd years, long descriptions, duplicate or
//!    non-lowercase keywords, services without projects. The catalog is
//!    probably fine but someone should look.
//!
//! Run it from a test or a CI step (`tagdex validate`). The search path never
//! consults it, and it never touches the keyword index.

mod rules;
mod types;

pub use rules::Validator;
pub use types::*;
