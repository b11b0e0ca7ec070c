//! Moment Accumulators
//!
//! ## Purpose
//!
//! This module provides scalar and SIMD accumulation of the five raw moments
//! used by the least-squares fit: `Sx`, `Sy`, `Sxx`, `Sxy`, `Syy`.
//!
//! Coordinates are taken relative to an origin `(x0, y0)` before they are
//! summed. Output layout is `[Sx, Sy, Sxx, Sxy, Syy]` over the shifted values.

// External dependencies
use num_traits::Float;
use wide::f64x2;

// ============================================================================
// Accumulation Functions
// ============================================================================

/// Accumulate raw moments about `(x0, y0)` over paired coordinate slices (Scalar).
///
/// Extra elements in the longer slice are ignored.
pub fn accumulate_moments_scalar<T: Float>(x: &[T], y: &[T], x0: T, y0: T) -> [T; 5] {
    let mut s_x = T::zero();
    let mut s_y = T::zero();
    let mut s_xx = T::zero();
    let mut s_xy = T::zero();
    let mut s_yy = T::zero();

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let (xi, yi) = (xi - x0, yi - y0);
        s_x = s_x + xi;
        s_y = s_y + yi;
        s_xx = s_xx + xi * xi;
        s_xy = s_xy + xi * yi;
        s_yy = s_yy + yi * yi;
    }

    [s_x, s_y, s_xx, s_xy, s_yy]
}

/// Accumulate raw moments about `(x0, y0)` over paired coordinate slices using SIMD.
pub fn accumulate_moments_simd(x: &[f64], y: &[f64], x0: f64, y0: f64) -> [f64; 5] {
    let n = x.len().min(y.len());
    let (x, y) = (&x[..n], &y[..n]);

    let origin_x = f64x2::splat(x0);
    let origin_y = f64x2::splat(y0);

    let mut s_x = f64x2::splat(0.0);
    let mut s_y = f64x2::splat(0.0);
    let mut s_xx = f64x2::splat(0.0);
    let mut s_xy = f64x2::splat(0.0);
    let mut s_yy = f64x2::splat(0.0);

    let x_chunks = x.chunks_exact(2);
    let y_chunks = y.chunks_exact(2);
    let x_tail = x_chunks.remainder();
    let y_tail = y_chunks.remainder();

    for (xc, yc) in x_chunks.zip(y_chunks) {
        let xv = f64x2::new([xc[0], xc[1]]) - origin_x;
        let yv = f64x2::new([yc[0], yc[1]]) - origin_y;

        s_x += xv;
        s_y += yv;
        s_xx += xv * xv;
        s_xy += xv * yv;
        s_yy += yv * yv;
    }

    let mut a_x = s_x.reduce_add();
    let mut a_y = s_y.reduce_add();
    let mut a_xx = s_xx.reduce_add();
    let mut a_xy = s_xy.reduce_add();
    let mut a_yy = s_yy.reduce_add();

    // Tail
    for (&xi, &yi) in x_tail.iter().zip(y_tail.iter()) {
        let (xi, yi) = (xi - x0, yi - y0);
        a_x += xi;
        a_y += yi;
        a_xx += xi * xi;
        a_xy += xi * yi;
        a_yy += yi * yi;
    }

    [a_x, a_y, a_xx, a_xy, a_yy]
}
