//! Deterministic random sources for noise table construction.
//!
//! Reproducibility is the contract: a stored seed must rebuild the exact
//! same tables across runs and releases, so the generator lives in this
//! crate instead of coming from a general-purpose RNG crate whose streams
//! may shift between versions.
//!
//! [`Random`] is the seam the table builders are generic over;
//! [`Xoroshiro`] is the concrete source used for seeded generation.

pub mod xoroshiro;

pub use xoroshiro::Xoroshiro;

/// Scale factor mapping the top 53 bits of a `u64` onto `[0, 1)`.
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// A deterministic source of pseudo-random values.
///
/// `next_u64` defines the stream; the provided methods derive every other
/// value shape from it, so two sources with the same `next_u64` stream
/// agree on all draws.
pub trait Random {
    /// The next 64 raw bits of the stream.
    fn next_u64(&mut self) -> u64;

    /// The next `f64` uniformly distributed in `[0, 1)`.
    ///
    /// Built from the top 53 bits of [`next_u64`](Self::next_u64), so every
    /// representable step of `2^-53` is reachable and `1.0` is not.
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * DOUBLE_UNIT
    }

    /// The next `i32` uniformly distributed in `[0, bound)`.
    ///
    /// Unbiased multiply-shift: a 32-bit draw is mapped onto `[0, bound)`
    /// and redrawn while it falls in the short low slice that would
    /// otherwise favor small values.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `bound` is not positive.
    #[inline]
    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive, got {bound}");
        let bound = bound as u64;
        let mut product = (self.next_u64() >> 32) * bound;
        let mut low = product & 0xFFFF_FFFF;
        if low < bound {
            let threshold = (1u64 << 32) % bound;
            while low < threshold {
                product = (self.next_u64() >> 32) * bound;
                low = product & 0xFFFF_FFFF;
            }
        }
        (product >> 32) as i32
    }
}
