//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the row abstraction and the shared error type. It has
//! zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Row abstraction over owned, borrowed and absent rows.
pub mod row;

/// Shared error types.
pub mod errors;
