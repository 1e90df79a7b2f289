//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure key reducers that map a row to the scalar used
//! as its sort key. They carry no sorting logic.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Row key reducers (sum, max).
pub mod keys;
