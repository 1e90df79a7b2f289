//! High-level API for jagged-array sorting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points:
//!
//! * Four free functions, one per (reducer, direction) pair, that accept an
//!   optional outer array and fail with `InvalidArgument` when it is absent.
//! * The [`JaggedExt`] extension trait, attaching the same four operations to
//!   `[R]` as infallible methods.
//! * A fluent [`RowSorterBuilder`] for choosing reducer, direction and
//!   strategy once and reusing the resulting [`RowSorter`].
//!
//! ## Configuration Flow
//!
//! 1. Create a [`RowSorterBuilder`] via `RowSort::new()`.
//! 2. Chain configuration methods (`.key()`, `.order()`, `.strategy()`).
//! 3. Call `.build()` to validate and obtain a [`RowSorter`].

// Internal dependencies
use crate::engine::executor::SortExecutor;
use crate::engine::validator::Validator;

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Publicly re-exported types
pub use crate::algorithms::sorting::{SortOrder, SortStrategy, INSERTION_THRESHOLD};
pub use crate::math::keys::{key_max, key_sum, KeyReducer};
pub use crate::primitives::errors::JaggedError;
pub use crate::primitives::row::Row;

// ============================================================================
// Free Functions
// ============================================================================

/// Order rows by ascending row sum.
///
/// Absent and empty rows have sum `0`. Rows with equal sums keep their
/// relative order.
///
/// # Errors
///
/// [`JaggedError::InvalidArgument`] if `source` is `None`.
pub fn sort_by_sum_ascending<R: Row>(source: Option<&mut [R]>) -> Result<(), JaggedError> {
    SortExecutor::new(KeyReducer::Sum, SortOrder::Ascending).run(source)
}

/// Order rows by descending row sum.
///
/// # Errors
///
/// [`JaggedError::InvalidArgument`] if `source` is `None`.
pub fn sort_by_sum_descending<R: Row>(source: Option<&mut [R]>) -> Result<(), JaggedError> {
    SortExecutor::new(KeyReducer::Sum, SortOrder::Descending).run(source)
}

/// Order rows by ascending row maximum.
///
/// Absent and empty rows key as `i32::MIN` and therefore come first.
///
/// # Errors
///
/// [`JaggedError::InvalidArgument`] if `source` is `None`.
pub fn sort_by_max_ascending<R: Row>(source: Option<&mut [R]>) -> Result<(), JaggedError> {
    SortExecutor::new(KeyReducer::Max, SortOrder::Ascending).run(source)
}

/// Order rows by descending row maximum.
///
/// Absent and empty rows key as `i32::MIN` and therefore come last.
///
/// # Errors
///
/// [`JaggedError::InvalidArgument`] if `source` is `None`.
pub fn sort_by_max_descending<R: Row>(source: Option<&mut [R]>) -> Result<(), JaggedError> {
    SortExecutor::new(KeyReducer::Max, SortOrder::Descending).run(source)
}

/// Whether `rows` is already ordered by `reducer` in `order`.
pub fn is_sorted_by_key<R: Row>(rows: &[R], reducer: KeyReducer, order: SortOrder) -> bool {
    crate::algorithms::sorting::is_sorted_by_key(rows, reducer, order)
}

/// Key of every row under `reducer`, in current row order.
pub fn row_keys<R: Row>(rows: &[R], reducer: KeyReducer) -> Vec<i32> {
    crate::algorithms::sorting::row_keys(rows, reducer)
}

// ============================================================================
// Extension Trait
// ============================================================================

/// Row-ordering operations attached to a jagged array.
pub trait JaggedExt {
    /// Order rows by ascending row sum.
    fn sort_by_sum_ascending(&mut self);

    /// Order rows by descending row sum.
    fn sort_by_sum_descending(&mut self);

    /// Order rows by ascending row maximum.
    fn sort_by_max_ascending(&mut self);

    /// Order rows by descending row maximum.
    fn sort_by_max_descending(&mut self);
}

impl<R: Row> JaggedExt for [R] {
    fn sort_by_sum_ascending(&mut self) {
        SortExecutor::new(KeyReducer::Sum, SortOrder::Ascending).run_rows(self);
    }

    fn sort_by_sum_descending(&mut self) {
        SortExecutor::new(KeyReducer::Sum, SortOrder::Descending).run_rows(self);
    }

    fn sort_by_max_ascending(&mut self) {
        SortExecutor::new(KeyReducer::Max, SortOrder::Ascending).run_rows(self);
    }

    fn sort_by_max_descending(&mut self) {
        SortExecutor::new(KeyReducer::Max, SortOrder::Descending).run_rows(self);
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a reusable [`RowSorter`].
#[derive(Debug, Clone, Default)]
pub struct RowSorterBuilder {
    /// Key reducer (default: Sum).
    pub reducer: Option<KeyReducer>,

    /// Sort direction (default: Ascending).
    pub order: Option<SortOrder>,

    /// Sorting routine (default: Auto).
    pub strategy: Option<SortStrategy>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl RowSorterBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key reducer.
    pub fn key(mut self, reducer: KeyReducer) -> Self {
        if self.reducer.is_some() {
            self.duplicate_param = Some("key");
        }
        self.reducer = Some(reducer);
        self
    }

    /// Set the sort direction.
    pub fn order(mut self, order: SortOrder) -> Self {
        if self.order.is_some() {
            self.duplicate_param = Some("order");
        }
        self.order = Some(order);
        self
    }

    /// Set the sorting routine.
    pub fn strategy(mut self, strategy: SortStrategy) -> Self {
        if self.strategy.is_some() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(strategy);
        self
    }

    /// Validate the configuration and build the sorter.
    pub fn build(self) -> Result<RowSorter, JaggedError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(RowSorter {
            executor: SortExecutor {
                reducer: self.reducer.unwrap_or_default(),
                order: self.order.unwrap_or_default(),
                strategy: self.strategy.unwrap_or_default(),
            },
        })
    }
}

// ============================================================================
// Sorter
// ============================================================================

/// A validated, reusable row sorter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowSorter {
    executor: SortExecutor,
}

impl RowSorter {
    /// Sort `source` in place.
    ///
    /// # Errors
    ///
    /// [`JaggedError::InvalidArgument`] if `source` is `None`.
    pub fn sort<R: Row>(&self, source: Option<&mut [R]>) -> Result<(), JaggedError> {
        self.executor.run(source)
    }

    /// Sort a jagged array that is known to be present.
    pub fn sort_rows<R: Row>(&self, rows: &mut [R]) {
        self.executor.run_rows(rows);
    }

    /// Whether `rows` already satisfies this sorter's ordering.
    pub fn is_sorted<R: Row>(&self, rows: &[R]) -> bool {
        is_sorted_by_key(rows, self.executor.reducer, self.executor.order)
    }

    /// Configured key reducer.
    pub fn reducer(&self) -> KeyReducer {
        self.executor.reducer
    }

    /// Configured sort direction.
    pub fn order(&self) -> SortOrder {
        self.executor.order
    }

    /// Configured sorting routine.
    pub fn strategy(&self) -> SortStrategy {
        self.executor.strategy
    }
}
