//! Sequential reference kernels.

use super::{check_equal_len, check_gemv_shape, NumericBackend};
use crate::error::Result;
use crate::primitives::Matrix;

/// Straightforward sequential loops over the input buffers.
///
/// Serves as the correctness oracle for other backends and as the
/// kernel source for small problems where parallel dispatch overhead
/// dominates.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarBackend;

impl NumericBackend for ScalarBackend {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn dot(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        check_equal_len("dot-product", x, "y", y)?;
        Ok(x.iter()
            .zip(y.iter())
            .fold(0.0, |acc, (a, b)| acc + a * b))
    }

    fn add(&self, x: &[f64], y: &[f64], out: &mut [f64]) -> Result<()> {
        check_equal_len("elementwise-add", x, "y", y)?;
        check_equal_len("elementwise-add", x, "out", out)?;
        for ((o, a), b) in out.iter_mut().zip(x.iter()).zip(y.iter()) {
            *o = a + b;
        }
        Ok(())
    }

    fn gemv(
        &self,
        a: &Matrix<f64>,
        b: &[f64],
        alpha: f64,
        beta: f64,
        c: &mut [f64],
    ) -> Result<()> {
        check_gemv_shape(a, b, c)?;
        for (i, ci) in c.iter_mut().enumerate() {
            let row_dot = a
                .row(i)
                .iter()
                .zip(b.iter())
                .fold(0.0, |acc, (aij, bj)| acc + aij * bj);
            *ci = alpha * row_dot + beta * *ci;
        }
        Ok(())
    }
}
