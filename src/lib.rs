//! Medir: numeric kernel micro-benchmark harness in pure Rust.
//!
//! Medir allocates large f64 buffers, fills them from a seeded Gaussian
//! source, times bulk numeric kernels (dot product, elementwise add,
//! affine matrix-vector multiply) with a monotonic clock, and reports
//! leading output values plus elapsed milliseconds. The kernels and the
//! fill are swappable backends behind traits; the harness only does
//! allocation, timer bracketing, and reporting.
//!
//! # Quick Start
//!
//! ```
//! use medir::prelude::*;
//!
//! let runner = Runner::with_backend(Box::new(ScalarBackend));
//! let case = BenchmarkCase::new("res", KernelSpec::Add { n: 1_000 });
//! let result = runner.run_case(&case).unwrap();
//! assert_eq!(result.kernel, "elementwise-add");
//! assert!(result.elapsed_ms() >= 0.0);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Fixed-length Vector and Matrix buffer types
//! - [`backend`]: Kernel and Gaussian-fill traits plus the portable
//!   scalar/parallel backends and size-based selection
//! - [`bench`]: Benchmark cases, scoped monotonic timing, the case
//!   runner, and console reporting
//! - [`error`]: Error taxonomy (allocation, backend, dimension,
//!   parameter failures)

pub mod backend;
pub mod bench;
pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{Error, Result};
pub use primitives::{Matrix, Vector};
