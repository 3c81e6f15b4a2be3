//! Numeric backends and backend selection.
//!
//! The harness treats every bulk numeric operation as an opaque kernel
//! supplied by a backend. A backend honors three contracts:
//!
//! - `dot(x, y)`: sum of elementwise products (reduction order is
//!   backend-defined);
//! - `add(x, y, out)`: `out[i] = x[i] + y[i]`;
//! - `gemv(a, b, alpha, beta, c)`:
//!   `c[i] = alpha * sum_j(a[i,j] * b[j]) + beta * c[i]` over a
//!   row-major matrix.
//!
//! Two portable backends ship with the crate: [`ScalarBackend`]
//! (sequential loops, the correctness oracle) and [`ParallelBackend`]
//! (rayon-chunked kernels for large buffers). [`select_backend`] picks
//! one by problem size.

mod fill;
mod parallel;
mod scalar;

pub use fill::{BoxMullerFill, GaussianFill};
pub use parallel::ParallelBackend;
pub use scalar::ScalarBackend;

use crate::error::{Error, Result};
use crate::primitives::Matrix;

/// Contract for the bulk numeric kernels a backend supplies.
pub trait NumericBackend: Send + Sync {
    /// Backend identifier for reporting.
    fn name(&self) -> &'static str;

    /// Dot product of two equal-length vectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the lengths differ.
    fn dot(&self, x: &[f64], y: &[f64]) -> Result<f64>;

    /// Elementwise addition into a caller-owned output buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if any length differs.
    fn add(&self, x: &[f64], y: &[f64], out: &mut [f64]) -> Result<()>;

    /// Affine matrix-vector multiply:
    /// `c[i] = alpha * sum_j(a[i,j] * b[j]) + beta * c[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `b.len() != a.n_cols()`
    /// or `c.len() != a.n_rows()`.
    fn gemv(&self, a: &Matrix<f64>, b: &[f64], alpha: f64, beta: f64, c: &mut [f64])
        -> Result<()>;
}

/// Element count at which the parallel backend starts paying off.
pub const PARALLEL_THRESHOLD: usize = 10_000;

/// Returns true when a problem of `n` elements should run in parallel.
#[must_use]
pub fn should_use_parallel(n: usize) -> bool {
    n >= PARALLEL_THRESHOLD
}

/// Picks a backend by problem size.
#[must_use]
pub fn select_backend(n: usize) -> Box<dyn NumericBackend> {
    if should_use_parallel(n) {
        Box::new(ParallelBackend)
    } else {
        Box::new(ScalarBackend)
    }
}

pub(crate) fn check_equal_len(kernel: &str, x: &[f64], other: &str, y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(Error::DimensionMismatch {
            expected: format!("{kernel}: x.len()={}", x.len()),
            actual: format!("{other}.len()={}", y.len()),
        });
    }
    Ok(())
}

pub(crate) fn check_gemv_shape(a: &Matrix<f64>, b: &[f64], c: &[f64]) -> Result<()> {
    if b.len() != a.n_cols() {
        return Err(Error::DimensionMismatch {
            expected: format!("gemv: b.len()={}", a.n_cols()),
            actual: format!("{}", b.len()),
        });
    }
    if c.len() != a.n_rows() {
        return Err(Error::DimensionMismatch {
            expected: format!("gemv: c.len()={}", a.n_rows()),
            actual: format!("{}", c.len()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_use_parallel_thresholds() {
        assert!(!should_use_parallel(500));
        assert!(!should_use_parallel(9_999));
        assert!(should_use_parallel(10_000));
        assert!(should_use_parallel(1_000_000));
    }

    #[test]
    fn test_select_backend_small() {
        let backend = select_backend(100);
        assert_eq!(backend.name(), "scalar");
    }

    #[test]
    fn test_select_backend_large() {
        let backend = select_backend(1_000_000);
        assert_eq!(backend.name(), "parallel");
    }

    #[test]
    fn test_check_equal_len_mismatch() {
        let err = check_equal_len("dot-product", &[1.0, 2.0], "y", &[1.0]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("dot-product"));
        assert!(msg.contains("x.len()=2"));
        assert!(msg.contains("y.len()=1"));
    }

    #[test]
    fn test_check_equal_len_names_operand() {
        let err = check_equal_len("elementwise-add", &[1.0, 2.0], "out", &[1.0]).unwrap_err();
        assert!(err.to_string().contains("out.len()=1"));
    }

    #[test]
    fn test_check_gemv_shape_mismatch() {
        let a = Matrix::from_vec(2, 3, vec![0.0; 6]).unwrap();
        assert!(check_gemv_shape(&a, &[0.0; 3], &[0.0; 2]).is_ok());
        assert!(check_gemv_shape(&a, &[0.0; 2], &[0.0; 2]).is_err());
        assert!(check_gemv_shape(&a, &[0.0; 3], &[0.0; 3]).is_err());
    }
}
