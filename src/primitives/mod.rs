//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures every other layer builds on:
//! - Points and their identities
//! - The observable point set
//! - Graph bounds
//! - The crate error type
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Graph bounds and the acceptance predicate.
pub mod bounds;

/// Error types.
pub mod errors;

/// Point positions and identities.
pub mod point;

/// Observable point collection.
pub mod point_set;
