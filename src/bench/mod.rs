//! Benchmark harness: cases, scoped timing, and console reporting.
//!
//! A benchmark run is a fixed sequence of [`BenchmarkCase`] records,
//! each describing one scenario (kernel, buffer lengths, scalars,
//! fill distribution). The [`Runner`] executes cases strictly
//! sequentially: allocate buffers, fill them from the Gaussian
//! source, time the kernel call with a monotonic clock, report, drop.
//! Any failure aborts the run; a case's later steps depend entirely
//! on its earlier ones, so there is no retry and no skipping.
//!
//! # Example
//!
//! ```
//! use medir::backend::ScalarBackend;
//! use medir::bench::{BenchmarkCase, KernelSpec, Runner};
//!
//! let runner = Runner::with_backend(Box::new(ScalarBackend));
//! let case = BenchmarkCase::new("res", KernelSpec::Dot { n: 1_000 });
//! let result = runner.run_case(&case).unwrap();
//! assert_eq!(result.kernel, "dot-product");
//! assert_eq!(result.sample.len(), 1);
//! ```

use std::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::backend::{BoxMullerFill, GaussianFill, NumericBackend};
use crate::error::Result;
use crate::primitives::{Matrix, Vector};

/// Number of leading output values sampled into each report.
pub const SAMPLE_LEN: usize = 3;

/// Which kernel a case exercises, with its shape and scalars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum KernelSpec {
    /// Dot product of two vectors of length `n`.
    Dot {
        /// Vector length
        n: usize,
    },
    /// Elementwise addition of two vectors of length `n`.
    Add {
        /// Vector length
        n: usize,
    },
    /// Affine matrix-vector multiply over an m-by-k row-major matrix:
    /// `c[i] = alpha * sum_j(a[i,j] * b[j]) + beta * c[i]`.
    Gemv {
        /// Rows of the matrix (and length of `c`)
        m: usize,
        /// Columns of the matrix (and length of `b`)
        k: usize,
        /// Scale on the product term
        alpha: f64,
        /// Scale on the accumulator term
        beta: f64,
        /// Initial value of every accumulator element
        c0: f64,
    },
}

impl KernelSpec {
    /// Kernel identifier used in reports.
    #[must_use]
    pub fn kernel_name(&self) -> &'static str {
        match self {
            Self::Dot { .. } => "dot-product",
            Self::Add { .. } => "elementwise-add",
            Self::Gemv { .. } => "gemv",
        }
    }

    /// Largest input buffer the case allocates, in elements.
    /// Drives backend selection.
    #[must_use]
    pub fn input_len(&self) -> usize {
        match self {
            Self::Dot { n } | Self::Add { n } => *n,
            Self::Gemv { m, k, .. } => m.saturating_mul(*k),
        }
    }
}

/// One benchmark scenario. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkCase {
    /// Report label for the sampled output values
    pub label: String,
    /// Kernel, shape, and scalars
    pub kernel: KernelSpec,
    /// Seed for the Gaussian fill
    pub seed: u64,
    /// Mean of the fill distribution
    pub mean: f64,
    /// Standard deviation of the fill distribution
    pub std_dev: f64,
}

impl BenchmarkCase {
    /// Creates a case with the default fill distribution N(0, 3)
    /// and seed 1337.
    #[must_use]
    pub fn new(label: impl Into<String>, kernel: KernelSpec) -> Self {
        Self {
            label: label.into(),
            kernel,
            seed: 1337,
            mean: 0.0,
            std_dev: 3.0,
        }
    }

    /// Set the fill seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the fill distribution.
    #[must_use]
    pub fn with_distribution(mut self, mean: f64, std_dev: f64) -> Self {
        self.mean = mean;
        self.std_dev = std_dev;
        self
    }
}

/// Elapsed time for one kernel call plus a sample of its output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingResult {
    /// Case label
    pub label: String,
    /// Kernel identifier
    pub kernel: String,
    /// Monotonic elapsed time of the kernel call only
    pub elapsed: Duration,
    /// Monotonic elapsed time of the Gaussian fill phase
    pub fill_elapsed: Duration,
    /// Up to [`SAMPLE_LEN`] leading output values
    pub sample: Vec<f64>,
}

impl TimingResult {
    /// Kernel elapsed time in fractional milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Fill elapsed time in fractional milliseconds.
    #[must_use]
    pub fn fill_elapsed_ms(&self) -> f64 {
        self.fill_elapsed.as_secs_f64() * 1_000.0
    }
}

impl fmt::Display for TimingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.sample.iter().map(|&v| format_sig(v, 12)).collect();
        writeln!(
            f,
            "Time of gaussian-fill: {} milliseconds",
            self.fill_elapsed_ms()
        )?;
        writeln!(f, "{}: {}", self.label, values.join(", "))?;
        write!(
            f,
            "Time of {}: {} milliseconds",
            self.kernel,
            self.elapsed_ms()
        )
    }
}

/// Formats a value at a fixed number of significant digits.
#[must_use]
pub fn format_sig(value: f64, digits: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    format!("{value:.decimals$}")
}

/// Scoped timing: brackets exactly the kernel call with a monotonic
/// clock, excluding allocation and formatting overhead.
pub fn run_timed<T>(kernel_call: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = kernel_call();
    (out, start.elapsed())
}

/// Executes benchmark cases against one numeric backend and one
/// Gaussian source.
pub struct Runner {
    backend: Box<dyn NumericBackend>,
    fill: Box<dyn GaussianFill>,
}

impl Runner {
    /// Creates a runner from a backend and a fill source.
    #[must_use]
    pub fn new(backend: Box<dyn NumericBackend>, fill: Box<dyn GaussianFill>) -> Self {
        Self { backend, fill }
    }

    /// Creates a runner with the default Box-Muller fill.
    #[must_use]
    pub fn with_backend(backend: Box<dyn NumericBackend>) -> Self {
        Self::new(backend, Box::new(BoxMullerFill))
    }

    /// Name of the numeric backend in use.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Runs one case: allocate, fill, time the kernel, sample the
    /// output. Buffers are dropped when this returns, on every path.
    ///
    /// # Errors
    ///
    /// Propagates allocation, fill, and kernel failures; no partial
    /// result is produced.
    pub fn run_case(&self, case: &BenchmarkCase) -> Result<TimingResult> {
        let (elapsed, fill_elapsed, sample) = match case.kernel {
            KernelSpec::Dot { n } => {
                let mut x = Vector::try_zeros(n)?;
                let mut y = Vector::try_zeros(n)?;
                let (filled, fill_elapsed) = run_timed(|| {
                    self.fill
                        .fill_gaussian(x.as_mut_slice(), case.mean, case.std_dev, case.seed)?;
                    self.fill.fill_gaussian(
                        y.as_mut_slice(),
                        case.mean,
                        case.std_dev,
                        case.seed.wrapping_add(1),
                    )
                });
                filled?;

                let (res, elapsed) = run_timed(|| self.backend.dot(x.as_slice(), y.as_slice()));
                (elapsed, fill_elapsed, vec![res?])
            }
            KernelSpec::Add { n } => {
                let mut x = Vector::try_zeros(n)?;
                let mut y = Vector::try_zeros(n)?;
                let (filled, fill_elapsed) = run_timed(|| {
                    self.fill
                        .fill_gaussian(x.as_mut_slice(), case.mean, case.std_dev, case.seed)?;
                    self.fill.fill_gaussian(
                        y.as_mut_slice(),
                        case.mean,
                        case.std_dev,
                        case.seed.wrapping_add(1),
                    )
                });
                filled?;
                let mut r = Vector::try_zeros(n)?;

                let (res, elapsed) =
                    run_timed(|| self.backend.add(x.as_slice(), y.as_slice(), r.as_mut_slice()));
                res?;
                (elapsed, fill_elapsed, r.head(SAMPLE_LEN).to_vec())
            }
            KernelSpec::Gemv {
                m,
                k,
                alpha,
                beta,
                c0,
            } => {
                let mut a = Matrix::try_zeros(m, k)?;
                let mut b = Vector::try_zeros(k)?;
                let (filled, fill_elapsed) = run_timed(|| {
                    self.fill
                        .fill_gaussian(a.as_mut_slice(), case.mean, case.std_dev, case.seed)?;
                    self.fill.fill_gaussian(
                        b.as_mut_slice(),
                        case.mean,
                        case.std_dev,
                        case.seed.wrapping_add(1),
                    )
                });
                filled?;
                let mut c = Vector::try_zeros(m)?;
                c.as_mut_slice().fill(c0);

                let (res, elapsed) =
                    run_timed(|| self.backend.gemv(&a, b.as_slice(), alpha, beta, c.as_mut_slice()));
                res?;
                (elapsed, fill_elapsed, c.head(SAMPLE_LEN).to_vec())
            }
        };

        Ok(TimingResult {
            label: case.label.clone(),
            kernel: case.kernel.kernel_name().to_string(),
            elapsed,
            fill_elapsed,
            sample,
        })
    }

    /// Runs every case in order, streaming each report to `out`.
    ///
    /// # Errors
    ///
    /// Stops at the first failing case or write error; earlier
    /// results are lost with the rest of the run.
    pub fn run_all<W: Write>(&self, cases: &[BenchmarkCase], out: &mut W) -> Result<Vec<TimingResult>> {
        let mut results = Vec::with_capacity(cases.len());
        for case in cases {
            let result = self.run_case(case)?;
            writeln!(out, "{result}")?;
            results.push(result);
        }
        Ok(results)
    }
}

/// The fixed scenario sequence the console binary runs: one dot
/// product and one elementwise add over two-billion-element vectors,
/// then an affine matrix-vector multiply over a 6000x200000 matrix.
#[must_use]
pub fn default_cases() -> Vec<BenchmarkCase> {
    let n = 2_100_000_000;
    vec![
        BenchmarkCase::new("res", KernelSpec::Dot { n }),
        BenchmarkCase::new("res", KernelSpec::Add { n }),
        BenchmarkCase::new(
            "res",
            KernelSpec::Gemv {
                m: 6_000,
                k: 200_000,
                alpha: 2.0,
                beta: 1.0,
                c0: 2.0,
            },
        ),
    ]
}
