//! Riccati-Bessel functions of the first kind, ψₙ(x) = x·jₙ(x).
//!
//! All orders 0..=n at a real argument x are produced in one pass of the
//! upward recurrence
//!
//! ```text
//! ψ₀(x) = sin x
//! ψ₁(x) = ψ₀(x)/x − cos x
//! ψₙ(x) = (2n − 1)·ψₙ₋₁(x)/x − ψₙ₋₂(x)
//! ```
//!
//! The recurrence is accurate for n up to about x and stays usable for very
//! large arguments. For x small relative to n it amplifies rounding error;
//! results in that regime are returned as computed, without any warning.
//!
//! # Entry points
//!
//! - [`riccati_jn_into`]: fill a caller-owned buffer (no allocation).
//! - [`riccati_jn`]: allocate and return all orders (`alloc` feature).
//! - [`riccati_j`]: a single order in O(1) memory.
//! - [`RiccatiJ`]: lazy iterator over orders.
//!
//! # `no_std`
//!
//! Disable the default `std` feature to build without the standard library;
//! `sin`/`cos` then come from `libm` through [`num_traits::Float`].

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod recurrence;
mod riccati;
pub mod types;

pub use recurrence::RiccatiJ;
pub use riccati::riccati_jn_into;
pub use types::Error;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Compute ψ_k(x) for k = 0, 1, ..., n, returned as a vector of length n+1.
///
/// Allocating counterpart of [`riccati_jn_into`].
#[cfg(feature = "alloc")]
pub fn riccati_jn(n: usize, x: f64) -> Vec<f64> {
    RiccatiJ::new(x).take(n.saturating_add(1)).collect()
}

/// Riccati-Bessel function of the first kind, ψₙ(x).
///
/// Runs the recurrence up to order `n` without storing the lower orders.
/// Bit-identical to `riccati_jn(n, x)[n]`.
#[inline]
pub fn riccati_j(n: usize, x: f64) -> f64 {
    RiccatiJ::new(x).nth(n).unwrap_or(f64::NAN)
}
