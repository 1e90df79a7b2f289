//! Execution of a validated row sort.
//!
//! ## Purpose
//!
//! [`SortExecutor`] bundles a reducer, an order and a strategy, validates the
//! caller's array and runs the sorting routine on it.
//!
//! ## Design notes
//!
//! * **Copy**: The executor is three small enums and is passed by value.
//! * **Logging**: With the `tracing` feature, each run emits a `trace!` event and a
//!   rejected input emits a `debug!` event.

// Internal dependencies
use crate::algorithms::sorting::{sort_rows, SortOrder, SortStrategy};
use crate::engine::validator::Validator;
use crate::math::keys::KeyReducer;
use crate::primitives::errors::JaggedError;
use crate::primitives::row::Row;

// ============================================================================
// Executor
// ============================================================================

/// Resolved sort configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortExecutor {
    /// Key reducer applied to each row.
    pub reducer: KeyReducer,

    /// Direction of the ordering.
    pub order: SortOrder,

    /// Sorting routine.
    pub strategy: SortStrategy,
}

impl SortExecutor {
    /// Executor with the default (`Auto`) strategy.
    pub fn new(reducer: KeyReducer, order: SortOrder) -> Self {
        Self {
            reducer,
            order,
            strategy: SortStrategy::Auto,
        }
    }

    /// Validate `source` and sort it in place.
    pub fn run<R: Row>(&self, source: Option<&mut [R]>) -> Result<(), JaggedError> {
        let rows = match Validator::validate_source(source) {
            Ok(rows) => rows,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    reducer = self.reducer.name(),
                    order = self.order.name(),
                    "rejected absent jagged array"
                );
                return Err(err);
            }
        };

        self.run_rows(rows);
        Ok(())
    }

    /// Sort a jagged array that is known to be present.
    pub fn run_rows<R: Row>(&self, rows: &mut [R]) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            rows = rows.len(),
            reducer = self.reducer.name(),
            order = self.order.name(),
            strategy = ?self.strategy.resolve(rows.len()),
            "sorting jagged rows"
        );

        sort_rows(rows, self.reducer, self.order, self.strategy);
    }
}
