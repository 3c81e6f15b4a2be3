//! Vector type for 1D numeric buffers.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A fixed-length, contiguous buffer of numeric values.
///
/// The length is set at allocation and never changes; there is no
/// resize API. Benchmark cases allocate one of these per input or
/// output buffer and drop it when the case ends.
///
/// # Examples
///
/// ```
/// use medir::primitives::Vector;
///
/// let v = Vector::try_zeros(4).expect("allocation of 4 f64 values");
/// assert_eq!(v.len(), 4);
/// assert_eq!(v.as_slice(), &[0.0, 0.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Copy> Vector<T> {
    /// Creates a vector that takes ownership of existing data.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the underlying data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns up to the first `k` elements, for report sampling.
    #[must_use]
    pub fn head(&self, k: usize) -> &[T] {
        &self.data[..k.min(self.data.len())]
    }
}

impl Vector<f64> {
    /// Allocates a zeroed vector of length `n` without aborting on failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the allocator cannot satisfy the
    /// request, so an oversized case surfaces as a diagnostic instead of
    /// a process abort.
    pub fn try_zeros(n: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(n).map_err(|_| Error::Allocation {
            requested_bytes: n.saturating_mul(std::mem::size_of::<f64>()),
        })?;
        data.resize(n, 0.0);
        Ok(Self { data })
    }
}
