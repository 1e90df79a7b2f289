//! Key reducers for jagged-array rows.
//!
//! ## Purpose
//!
//! This module maps each row to the `i32` key the sorting routines compare.
//!
//! ## Design notes
//!
//! * **Pure**: Reducers only read the row; calling one twice yields the same key.
//! * **Sentinels**: Absent and empty rows get fixed keys instead of errors.
//! * **Wrapping**: Sums wrap on overflow in every build profile.
//!
//! ## Key concepts
//!
//! | Reducer | Present row          | Empty row  | Absent row |
//! |---------|----------------------|------------|------------|
//! | `Sum`   | wrapping sum         | `0`        | `0`        |
//! | `Max`   | largest element      | `i32::MIN` | `i32::MIN` |
//!
//! ## Non-goals
//!
//! * This module does not widen or saturate sums.

// Internal dependencies
use crate::primitives::row::Row;

// ============================================================================
// Key Reducer
// ============================================================================

/// Scalar reduction applied to every row to obtain its sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyReducer {
    /// Arithmetic sum of the row's elements.
    #[default]
    Sum,

    /// Largest element of the row.
    Max,
}

impl KeyReducer {
    /// Compute the key of `row` under this reducer.
    #[inline]
    pub fn key<R: Row + ?Sized>(self, row: &R) -> i32 {
        match self {
            Self::Sum => key_sum(row),
            Self::Max => key_max(row),
        }
    }

    /// Short name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Max => "max",
        }
    }
}

// ============================================================================
// Reducers
// ============================================================================

/// Sum of the row's elements; `0` for absent or empty rows.
///
/// Overflow wraps (two's complement), matching plain `i32` addition in a
/// release build but without the debug-mode panic.
#[inline]
pub fn key_sum<R: Row + ?Sized>(row: &R) -> i32 {
    match row.elements() {
        Some(elems) => elems.iter().fold(0i32, |acc, &v| acc.wrapping_add(v)),
        None => 0,
    }
}

/// Largest element of the row; `i32::MIN` for absent or empty rows.
#[inline]
pub fn key_max<R: Row + ?Sized>(row: &R) -> i32 {
    row.elements()
        .and_then(|elems| elems.iter().copied().max())
        .unwrap_or(i32::MIN)
}
