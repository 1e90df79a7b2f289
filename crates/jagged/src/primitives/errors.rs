//! Error types for jagged-array operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when sorting a
//! jagged array or configuring a sorter.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors name the offending argument or parameter.
//! * **Deferred**: Builder misuse is recorded and reported at `build()`.
//! * **No-std**: Only `&'static str` payloads, so no allocation is needed.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * Every error is raised before the input array is touched.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for jagged-array operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JaggedError {
    /// A required argument was absent (the outer array itself).
    InvalidArgument {
        /// Name of the missing argument.
        name: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for JaggedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidArgument { name } => {
                write!(f, "Invalid argument: '{name}' must not be absent")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for JaggedError {}
