//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use medir::prelude::*;
//! ```

pub use crate::backend::{
    select_backend, BoxMullerFill, GaussianFill, NumericBackend, ParallelBackend, ScalarBackend,
};
pub use crate::bench::{
    default_cases, run_timed, BenchmarkCase, KernelSpec, Runner, TimingResult,
};
pub use crate::error::{Error, Result};
pub use crate::primitives::{Matrix, Vector};
