//! Ordinary least-squares fit and Pearson correlation.
//!
//! ## Purpose
//!
//! This module turns running sums into the best fit line parameters and the
//! Pearson correlation coefficient.
//!
//! ## Design notes
//!
//! * **Closed form**: Uses the mean-of-products formulation over moments taken
//!   about the running sums' origin (shift invariant for every term but the
//!   intercept, which uses the means in original coordinates)
//!   ```text
//!   slope     = (meanXY - meanX·meanY) / (meanXX - meanX²)
//!   intercept = meanY - slope·meanX
//!   r         = (meanXY - meanX·meanY) / sqrt((meanXX - meanX²)(meanYY - meanY²))
//!   ```
//! * **Relative tolerance**: A variance is treated as zero when it does not
//!   exceed `tolerance · (mean of squares about the origin)`. The test is scale
//!   free. Its only job is to absorb rounding left by `meanXX - meanX²`, so the
//!   default is a small multiple of machine epsilon.
//!
//! ## Invariants
//!
//! * A returned `FitResult` has finite slope and intercept.
//! * `pearson`, when present, lies in `[-1, 1]`.
//! * Fewer than two points never produce a fit.
//!
//! ## Non-goals
//!
//! * Weighted or robust regression.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::line::LineModel;
use crate::math::sums::{RunningSums, SumsLinalg};

/// Default degeneracy tolerance, in multiples of machine epsilon.
pub const DEFAULT_TOLERANCE_EPSILONS: f64 = 64.0;

/// Default relative tolerance for the degeneracy tests: 64 machine epsilons
/// of `T`.
pub fn default_tolerance<T: Float>() -> T {
    T::from(DEFAULT_TOLERANCE_EPSILONS).map_or(T::epsilon(), |k| k * T::epsilon())
}

/// Parameters of the least-squares line for a point population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult<T> {
    /// Slope of the regression line.
    pub slope: T,
    /// Intercept of the regression line.
    pub intercept: T,
    /// Pearson correlation coefficient, `None` when all y values coincide.
    pub pearson: Option<T>,
    /// Number of points the fit was computed from.
    pub count: usize,
}

impl<T: Float> FitResult<T> {
    /// Compute the fit from running sums.
    ///
    /// Returns `None` when fewer than two points exist or all x values coincide.
    pub fn from_sums(sums: &RunningSums<T>, tolerance: T) -> Option<Self> {
        if sums.count < 2 {
            return None;
        }
        let m = sums.means()?;

        let slope_denominator = m.variance_x();
        if is_negligible(slope_denominator, m.xx, tolerance) {
            return None;
        }

        let slope_numerator = m.covariance();
        let slope = slope_numerator / slope_denominator;
        let intercept = m.mean_y() - slope * m.mean_x();
        if !slope.is_finite() || !intercept.is_finite() {
            return None;
        }

        let variance_y = m.variance_y();
        let pearson = if is_negligible(variance_y, m.yy, tolerance) {
            None
        } else {
            let denominator = (slope_denominator * variance_y).sqrt();
            let r = slope_numerator / denominator;
            if r.is_finite() {
                Some(r.max(-T::one()).min(T::one()))
            } else {
                None
            }
        };

        Some(Self {
            slope,
            intercept,
            pearson,
            count: sums.count,
        })
    }

    /// Compute the fit directly from coordinate columns.
    pub fn from_columns(x: &[T], y: &[T], tolerance: T) -> Option<Self>
    where
        T: SumsLinalg,
    {
        Self::from_sums(&RunningSums::from_columns(x, y), tolerance)
    }

    /// The fitted line.
    #[inline]
    pub fn line(&self) -> LineModel<T> {
        LineModel::new(self.slope, self.intercept)
    }

    /// Coefficient of determination, `r²`.
    #[inline]
    pub fn r_squared(&self) -> Option<T> {
        self.pearson.map(|r| r * r)
    }
}

#[inline]
fn is_negligible<T: Float>(variance: T, mean_square: T, tolerance: T) -> bool {
    variance <= tolerance * mean_square
}
