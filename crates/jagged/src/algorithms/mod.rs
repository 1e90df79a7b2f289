//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the stable sorting routines that reorder rows by key.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Stable row sorting (insertion and cached-key).
pub mod sorting;
