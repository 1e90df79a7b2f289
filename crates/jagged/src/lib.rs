//! # jagged — stable row ordering for jagged integer arrays
//!
//! Reorders the rows of a jagged (ragged) two-dimensional `i32` array in place,
//! keyed by either the **sum** or the **maximum** of each row, ascending or
//! descending. Rows may have any length and may be absent (`None`).
//!
//! ## Quick Start
//!
//! ### Free functions
//!
//! ```rust
//! use jagged::prelude::*;
//!
//! let mut rows = vec![vec![3, 1], vec![1], vec![5, 5, 5]];
//!
//! sort_by_sum_ascending(Some(&mut rows[..]))?;
//! assert_eq!(rows, vec![vec![1], vec![3, 1], vec![5, 5, 5]]);
//!
//! sort_by_max_descending(Some(&mut rows[..]))?;
//! assert_eq!(rows, vec![vec![5, 5, 5], vec![3, 1], vec![1]]);
//! # Result::<(), JaggedError>::Ok(())
//! ```
//!
//! ### Extension methods
//!
//! A slice can never be absent, so the methods attached to `[R]` are infallible:
//!
//! ```rust
//! use jagged::prelude::*;
//!
//! let mut rows: Vec<Option<Vec<i32>>> = vec![Some(vec![]), None, Some(vec![2])];
//! rows.sort_by_max_ascending();
//!
//! // Absent and empty rows both key as `i32::MIN` and keep their relative order.
//! assert_eq!(rows, vec![Some(vec![]), None, Some(vec![2])]);
//! ```
//!
//! ### Configured sorter
//!
//! ```rust
//! use jagged::prelude::*;
//!
//! let sorter = RowSort::new()
//!     .key(Max)
//!     .order(Descending)
//!     .strategy(CachedKey)
//!     .build()?;
//!
//! let mut rows = vec![vec![1, 9], vec![4], vec![12, -3]];
//! sorter.sort(Some(&mut rows[..]))?;
//! assert_eq!(rows, vec![vec![12, -3], vec![1, 9], vec![4]]);
//! # Result::<(), JaggedError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible entry point returns `Result<(), JaggedError>`. Passing `None`
//! as the outer array fails with [`JaggedError::InvalidArgument`](prelude::JaggedError)
//! before any row is compared or moved.
//!
//! ```rust
//! use jagged::prelude::*;
//!
//! let res = sort_by_sum_descending::<Vec<i32>>(None);
//! assert_eq!(res, Err(JaggedError::InvalidArgument { name: "source" }));
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! ```toml
//! [dependencies]
//! jagged = { version = "0.1", default-features = false }
//! ```
//!
//! The crate still requires `alloc` for the cached-key strategy.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - row abstraction and error types.
mod primitives;

// Layer 2: Math - key reducers.
mod math;

// Layer 3: Algorithms - stable sorting routines.
mod algorithms;

// Layer 4: Engine - validation and dispatch.
mod engine;

// High-level API: free functions, extension trait and builder.
mod api;

// Standard jagged prelude.
pub mod prelude {
    pub use crate::api::{
        is_sorted_by_key, row_keys, sort_by_max_ascending, sort_by_max_descending,
        sort_by_sum_ascending, sort_by_sum_descending, JaggedError, JaggedExt,
        KeyReducer::Max, KeyReducer::Sum, Row, RowSorter, RowSorterBuilder as RowSort,
        SortOrder::Ascending, SortOrder::Descending, SortStrategy::Auto,
        SortStrategy::CachedKey, SortStrategy::Insertion,
    };
}

pub use api::{KeyReducer, SortOrder, SortStrategy};

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
