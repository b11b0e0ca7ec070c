//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer owns the point set and keeps every derived value (fit, residuals,
//! sums of squared residuals) consistent with it as points and the user line
//! change.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Event-driven regression engine.
pub mod regression;

/// Validation utilities.
pub mod validator;

/// Output snapshot.
pub mod output;

/// Lock-serialized engine handle.
#[cfg(feature = "std")]
pub mod shared;
