//! Runtime contracts for the keyword index.
//!
//! Debug-mode assertions over the properties the index promises its callers.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Fire on algorithm bugs, never on bad catalog data (that is `verify`'s job)
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                   |
//! |----------------------------|--------------------------------------------|
//! | `check_normalized_aligned` | derived keywords line up with authored ones|
//! | `check_bucket_unique`      | each service id at most once per bucket    |
//! | `check_normalized_form`    | a normalized string is a fixed point       |

use crate::utils::normalize;

// ============================================================================
// DERIVED KEYWORD CONTRACTS
// ============================================================================

/// Check that derived normalized keywords correspond one-to-one with the
/// authored keywords.
///
/// # Panics (debug builds only)
/// Panics on a length mismatch or if any entry is not the normalized form of
/// its authored counterpart.
#[inline]
pub fn check_normalized_aligned(service_id: &str, keywords: &[String], normalized: &[String]) {
    debug_assert_eq!(
        keywords.len(),
        normalized.len(),
        "Contract violation: normalized keywords of '{}' have length {} but keywords have {}",
        service_id,
        normalized.len(),
        keywords.len()
    );

    #[cfg(debug_assertions)]
    for (i, (raw, derived)) in keywords.iter().zip(normalized).enumerate() {
        debug_assert!(
            *derived == normalize(raw),
            "Contract violation: normalized keyword {} of '{}' is '{}', expected '{}'",
            i,
            service_id,
            derived,
            normalize(raw)
        );
        check_normalized_form(derived);
    }
}

/// Check that a string is already in normalized form.
#[inline]
pub fn check_normalized_form(value: &str) {
    debug_assert!(
        normalize(value) == value,
        "Contract violation: '{}' is not normalized",
        value
    );
}

// ============================================================================
// BUCKET CONTRACTS
// ============================================================================

/// Check that a bucket holds each service id at most once.
///
/// # Panics (debug builds only)
/// Panics if an id repeats.
#[inline]
pub fn check_bucket_unique(keyword: &str, bucket: &[String]) {
    #[cfg(debug_assertions)]
    for (i, id) in bucket.iter().enumerate() {
        debug_assert!(
            !bucket[..i].contains(id),
            "Contract violation: bucket '{}' contains '{}' more than once",
            keyword,
            id
        );
    }
    #[cfg(not(debug_assertions))]
    let _ = (keyword, bucket);
}
