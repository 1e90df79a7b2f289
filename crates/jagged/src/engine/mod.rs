//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer validates inputs and configuration, then dispatches to the
//! sorting routines.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input and configuration validation.
pub mod validator;

/// Validated sort execution.
pub mod executor;
