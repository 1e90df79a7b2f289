//! Row abstraction for jagged arrays.
//!
//! ## Purpose
//!
//! A jagged array is any slice `[R]` whose element type implements [`Row`].
//! The trait gives key reducers a uniform read-only view of a row, whether it
//! is owned, borrowed, fixed-size, or absent.
//!
//! ## Key concepts
//!
//! * **Present row**: `elements()` returns `Some(slice)`, possibly empty.
//! * **Absent row**: `elements()` returns `None`. Any `Option<R>` row that is
//!   `None` is absent.
//!
//! ## Non-goals
//!
//! * Rows are never mutated through this trait.

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};

// ============================================================================
// Row Trait
// ============================================================================

/// Read-only view of one row of a jagged array.
pub trait Row {
    /// Elements of the row, or `None` if the row is absent.
    fn elements(&self) -> Option<&[i32]>;

    /// Whether this row is the absent-row marker.
    #[inline]
    fn is_absent(&self) -> bool {
        self.elements().is_none()
    }
}

// ============================================================================
// Implementations
// ============================================================================

impl Row for [i32] {
    #[inline]
    fn elements(&self) -> Option<&[i32]> {
        Some(self)
    }
}

impl<const N: usize> Row for [i32; N] {
    #[inline]
    fn elements(&self) -> Option<&[i32]> {
        Some(self.as_slice())
    }
}

impl Row for Vec<i32> {
    #[inline]
    fn elements(&self) -> Option<&[i32]> {
        Some(self.as_slice())
    }
}

impl Row for Box<[i32]> {
    #[inline]
    fn elements(&self) -> Option<&[i32]> {
        Some(&**self)
    }
}

impl<R: Row + ?Sized> Row for &R {
    #[inline]
    fn elements(&self) -> Option<&[i32]> {
        (**self).elements()
    }
}

impl<R: Row> Row for Option<R> {
    #[inline]
    fn elements(&self) -> Option<&[i32]> {
        self.as_ref().and_then(|row| row.elements())
    }
}
