//! Rayon-parallel kernels for large buffers.

use rayon::prelude::*;

use super::{check_equal_len, check_gemv_shape, NumericBackend};
use crate::error::Result;
use crate::primitives::Matrix;

/// Chunk size for the parallel dot reduction. Large enough that each
/// task amortizes dispatch, small enough to keep all cores loaded.
const DOT_CHUNK: usize = 64 * 1024;

/// Rayon-chunked kernels.
///
/// The dot reduction accumulates per-chunk partial sums sequentially
/// and combines them with a parallel sum, so the result may differ
/// from the scalar backend by rounding only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelBackend;

impl NumericBackend for ParallelBackend {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn dot(&self, x: &[f64], y: &[f64]) -> Result<f64> {
        check_equal_len("dot-product", x, "y", y)?;
        Ok(x.par_chunks(DOT_CHUNK)
            .zip(y.par_chunks(DOT_CHUNK))
            .map(|(xs, ys)| {
                xs.iter()
                    .zip(ys.iter())
                    .fold(0.0, |acc, (a, b)| acc + a * b)
            })
            .sum())
    }

    fn add(&self, x: &[f64], y: &[f64], out: &mut [f64]) -> Result<()> {
        check_equal_len("elementwise-add", x, "y", y)?;
        check_equal_len("elementwise-add", x, "out", out)?;
        out.par_iter_mut()
            .zip(x.par_iter().zip(y.par_iter()))
            .for_each(|(o, (a, b))| {
                *o = a + b;
            });
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
        let k = a.n_cols();
        if k == 0 {
            // Empty rows contribute nothing; par_chunks needs k > 0.
            for ci in c.iter_mut() {
                *ci = beta * *ci;
            }
            return Ok(());
        }
        a.as_slice()
            .par_chunks(k)
            .zip(c.par_iter_mut())
            .for_each(|(row, ci)| {
                let row_dot = row
                    .iter()
                    .zip(b.iter())
                    .fold(0.0, |acc, (aij, bj)| acc + aij * bj);
                *ci = alpha * row_dot + beta * *ci;
            });
        Ok(())
    }
}
