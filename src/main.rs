//! Console entry point: runs the fixed benchmark sequence.
//!
//! No flags. Exits 0 after all cases complete, or prints a diagnostic
//! to stderr and exits non-zero on the first allocation or backend
//! failure.

use std::io;
use std::process::ExitCode;

use medir::backend::select_backend;
use medir::bench::{default_cases, Runner};

fn main() -> ExitCode {
    let cases = default_cases();
    let largest = cases.iter().map(|c| c.kernel.input_len()).max().unwrap_or(0);
    let runner = Runner::with_backend(select_backend(largest));

    let stdout = io::stdout();
    match runner.run_all(&cases, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("medir: {e}");
            ExitCode::FAILURE
        }
    }
}
