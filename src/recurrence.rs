//! Upward three-term recurrence for ψₙ(x).
//!
//! ψ₀(x) = sin x
//! ψ₁(x) = ψ₀(x)/x − cos x
//! ψₙ(x) = (2n − 1)·ψₙ₋₁(x)/x − ψₙ₋₂(x),  n ≥ 2
//!
//! Upward recurrence loses accuracy once n grows past x: rounding error in
//! the lower orders is amplified by roughly (2n − 1)/x at every step. No
//! attempt is made to stabilize this regime.

use core::iter::FusedIterator;

use num_traits::Float;

/// Iterator over ψ₀(x), ψ₁(x), ψ₂(x), … for a fixed argument `x`.
///
/// The sequence is unbounded; bound it with [`Iterator::take`] or
/// [`Iterator::nth`]. `sin x` and `cos x` are evaluated once, at construction.
///
/// Every term is computed with the same operations, in the same order, as
/// [`riccati_jn_into`](crate::riccati_jn_into), so both paths agree bit for bit.
///
/// ```
/// use riccati_bessel::RiccatiJ;
///
/// let x = 1.0_f64;
/// let mut psi = RiccatiJ::new(x);
/// assert_eq!(psi.next(), Some(x.sin()));
/// assert_eq!(psi.next(), Some(x.sin() / x - x.cos()));
/// ```
#[derive(Debug, Clone)]
pub struct RiccatiJ {
    x: f64,
    cos: f64,
    /// Order of the next term to be yielded.
    order: usize,
    /// ψ_{order-2}; unused until order >= 2.
    prev: f64,
    /// ψ_{order-1}, or sin x while order <= 1.
    curr: f64,
}

impl RiccatiJ {
    /// Start the sequence at order 0 for argument `x`.
    ///
    /// `x == 0` is not rejected: ψ₁ becomes `0/0 − 1 = NaN` and the NaN
    /// propagates to every later order.
    #[inline]
    pub fn new(x: f64) -> Self {
        let (sin, cos) = Float::sin_cos(x);
        Self {
            x,
            cos,
            order: 0,
            prev: 0.0,
            curr: sin,
        }
    }

    /// Argument the sequence is evaluated at.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Order of the term the next call to `next` yields.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }
}

impl Iterator for RiccatiJ {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        let value = match self.order {
            0 => self.curr,
            1 => self.curr / self.x - self.cos,
            k => ((2 * k - 1) as f64 * self.curr) / self.x - self.prev,
        };
        if self.order > 0 {
            self.prev = self.curr;
            self.curr = value;
        }
        self.order += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for RiccatiJ {}

/// Write ψ₀(x), …, ψ_{len−1}(x) into `psi`.
///
/// Nothing is written for an empty slice; for a slice of length 1 only the
/// sine is taken.
#[inline]
pub(crate) fn fill(psi: &mut [f64], x: f64) {
    for (slot, value) in psi.iter_mut().zip(RiccatiJ::new(x)) {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_terms_match_base_cases() {
        let x = 2.5_f64;
        let mut it = RiccatiJ::new(x);
        let p0 = it.next().unwrap();
        let p1 = it.next().unwrap();
        let p2 = it.next().unwrap();
        assert_eq!(p0, x.sin());
        assert_eq!(p1, x.sin() / x - x.cos());
        assert_eq!(p2, (3.0 * p1) / x - p0);
        assert_eq!(it.order(), 3);
        assert_eq!(it.x(), x);
    }

    #[test]
    fn fill_empty_is_noop() {
        let mut psi: [f64; 0] = [];
        fill(&mut psi, 1.0);
    }

    #[test]
    fn fill_single_takes_only_sine() {
        let mut psi = [f64::NAN];
        fill(&mut psi, 0.75);
        assert_eq!(psi[0], 0.75_f64.sin());
    }

    #[test]
    fn fill_matches_iterator() {
        let x = 7.3;
        let mut psi = [0.0; 12];
        fill(&mut psi, x);
        for (a, b) in psi.iter().zip(RiccatiJ::new(x)) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn zero_argument_yields_nan_from_order_one() {
        let mut it = RiccatiJ::new(0.0);
        assert_eq!(it.next(), Some(0.0));
        assert!(it.next().unwrap().is_nan());
        assert!(it.next().unwrap().is_nan());
    }

    #[test]
    fn size_hint_is_unbounded() {
        assert_eq!(RiccatiJ::new(1.0).size_hint(), (usize::MAX, None));
    }
}
