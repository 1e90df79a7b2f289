//! Stable sorting of jagged-array rows by key.
//!
//! ## Purpose
//!
//! This module reorders the rows of a jagged array in place so that their keys
//! are monotone in the requested direction.
//!
//! ## Design notes
//!
//! * **Stability**: Both routines preserve the relative order of rows with equal keys.
//! * **In place**: Rows are moved by swapping within the caller's slice; no row is
//!   copied or mutated.
//! * **Two costs**: Insertion sort allocates nothing and is O(n) on nearly sorted
//!   input; the cached-key sort evaluates each key once and is O(n log n).
//!
//! ## Key concepts
//!
//! ### Insertion sort
//! Each row is bubbled left by adjacent transpositions while its left neighbour
//! is strictly out of order. Keys are recomputed on every comparison.
//!
//! ### Cached-key sort
//! Keys are computed once per row, then the slice is stably sorted against
//! them. Descending order uses `Reverse` keys so ties still keep input order.
//!
//! ## Invariants
//!
//! * After sorting, `order.is_ordered(key(rows[i]), key(rows[i + 1]))` for every `i`.
//! * The multiset of rows is unchanged.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Reverse;

// Internal dependencies
use crate::math::keys::KeyReducer;
use crate::primitives::row::Row;

// ============================================================================
// Configuration Types
// ============================================================================

/// Row count up to which `SortStrategy::Auto` uses insertion sort.
pub const INSERTION_THRESHOLD: usize = 16;

/// Direction of the key ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest key first.
    #[default]
    Ascending,

    /// Largest key first.
    Descending,
}

impl SortOrder {
    /// Whether key `a` may precede key `b` under this order.
    #[inline]
    pub fn is_ordered(self, a: i32, b: i32) -> bool {
        match self {
            Self::Ascending => a <= b,
            Self::Descending => a >= b,
        }
    }

    /// Short name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Sorting routine used to reorder the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortStrategy {
    /// Skip already sorted input, then pick by row count.
    #[default]
    Auto,

    /// Adjacent-transposition insertion sort.
    Insertion,

    /// Stable sort against keys computed once per row.
    CachedKey,
}

impl SortStrategy {
    /// Concrete routine for an input of `len` rows.
    ///
    /// `Auto` never resolves to itself.
    #[inline]
    pub fn resolve(self, len: usize) -> Self {
        match self {
            Self::Auto if len <= INSERTION_THRESHOLD => Self::Insertion,
            Self::Auto => Self::CachedKey,
            other => other,
        }
    }
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort `rows` in place with adjacent-transposition insertion sort.
pub fn insertion_sort_by_key<R: Row>(rows: &mut [R], reducer: KeyReducer, order: SortOrder) {
    for i in 1..rows.len() {
        let mut j = i;
        // Strict comparison: equal keys stop the walk, keeping ties in input order.
        while j > 0 && !order.is_ordered(reducer.key(&rows[j - 1]), reducer.key(&rows[j])) {
            rows.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sort `rows` in place, evaluating each row's key exactly once.
pub fn cached_key_sort<R: Row>(rows: &mut [R], reducer: KeyReducer, order: SortOrder) {
    match order {
        SortOrder::Ascending => rows.sort_by_cached_key(|row| reducer.key(row)),
        SortOrder::Descending => rows.sort_by_cached_key(|row| Reverse(reducer.key(row))),
    }
}

/// Sort `rows` in place with an explicit strategy.
///
/// 1. `Auto` returns early when the rows are already in order.
/// 2. The strategy is resolved against the row count.
/// 3. The chosen routine runs.
pub fn sort_rows<R: Row>(
    rows: &mut [R],
    reducer: KeyReducer,
    order: SortOrder,
    strategy: SortStrategy,
) {
    if rows.len() < 2 {
        return;
    }

    // Fast path: nothing to move
    if strategy == SortStrategy::Auto && is_sorted_by_key(rows, reducer, order) {
        return;
    }

    match strategy.resolve(rows.len()) {
        SortStrategy::CachedKey => cached_key_sort(rows, reducer, order),
        _ => insertion_sort_by_key(rows, reducer, order),
    }
}

// ============================================================================
// Inspection
// ============================================================================

/// Whether every adjacent pair of rows is ordered by `reducer` under `order`.
pub fn is_sorted_by_key<R: Row>(rows: &[R], reducer: KeyReducer, order: SortOrder) -> bool {
    rows.windows(2)
        .all(|w| order.is_ordered(reducer.key(&w[0]), reducer.key(&w[1])))
}

/// Keys of every row, in current row order.
pub fn row_keys<R: Row>(rows: &[R], reducer: KeyReducer) -> Vec<i32> {
    rows.iter().map(|row| reducer.key(row)).collect()
}
