//! Riccati-Bessel ψ upper interface.
//!
//! ψₙ(x) = x·jₙ(x), where jₙ is the spherical Bessel function of the first
//! kind. Checks the output buffer, then hands the prefix `psi[..=n]` to the
//! upward recurrence.

use crate::recurrence::fill;
use crate::types::Error;

/// Compute ψ_k(x) for k = 0, 1, ..., n into `psi[0..=n]`.
///
/// `psi` is owned by the caller and must hold at least `n + 1` values.
/// Entries past index `n` are never touched. If the buffer is too short,
/// [`Error::BufferTooSmall`] is returned and nothing is written.
///
/// `x` should be finite and nonzero. `x == 0` is not trapped: ψ₁ and every
/// higher order come out NaN. Accuracy degrades for x small relative to n
/// (upward recurrence); this is not reported.
///
/// ```
/// let mut psi = [0.0; 3];
/// riccati_bessel::riccati_jn_into(&mut psi, 2, 1.0).unwrap();
/// assert!((psi[2] - 0.0620350520).abs() < 1e-9);
/// ```
#[inline]
pub fn riccati_jn_into(psi: &mut [f64], n: usize, x: f64) -> Result<(), Error> {
    if n >= psi.len() {
        return Err(Error::BufferTooSmall {
            required: n.saturating_add(1),
            len: psi.len(),
        });
    }
    fill(&mut psi[..=n], x);
    Ok(())
}
