//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the regression content of the crate:
//! - Line parameterizations (slope/intercept and angle/intercept)
//! - The ordinary least-squares fit and Pearson correlation
//! - Residual descriptors and their per-line maintenance
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Least-squares fit.
pub mod fit;

/// Line models.
pub mod line;

/// Residuals and residual collections.
pub mod residual;
