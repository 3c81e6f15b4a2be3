//! Core storage primitives (Vector, Matrix).
//!
//! These types own the buffers every benchmark case allocates, fills,
//! and hands to a numeric backend. Lengths are fixed at allocation.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
