//! Input validation for jagged-array sorting.
//!
//! ## Purpose
//!
//! This module checks the preconditions of every sort call and of sorter
//! construction.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Before mutation**: All checks run before any row is compared or moved.
//!
//! ## Non-goals
//!
//! * Absent or empty rows are valid input; this module never rejects a row.

// Internal dependencies
use crate::primitives::errors::JaggedError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sort inputs and sorter configuration.
pub struct Validator;

impl Validator {
    /// Require the outer array to be present, handing it back on success.
    pub fn validate_source<R>(source: Option<&mut [R]>) -> Result<&mut [R], JaggedError> {
        source.ok_or(JaggedError::InvalidArgument { name: "source" })
    }

    /// Reject a builder on which some parameter was set more than once.
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), JaggedError> {
        match duplicate {
            Some(parameter) => Err(JaggedError::DuplicateParameter { parameter }),
            None => Ok(()),
        }
    }
}
