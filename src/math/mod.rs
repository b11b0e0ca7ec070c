//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numerical building blocks of the fit:
//! - Raw moment accumulation (scalar and SIMD)
//! - Running sums and sample means
//!
//! These have no knowledge of lines, residuals or events.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Scalar and SIMD moment accumulators.
pub mod accumulators;

/// Running sums and sample means.
pub mod sums;
