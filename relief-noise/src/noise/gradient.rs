//! Single-octave 2D gradient noise.
//!
//! Classic permutation-table Perlin noise with one departure from the
//! textbook version: instead of a small fixed direction set, the 256
//! gradients are unit vectors at seed-drawn angles, one per permutation
//! value, which removes the directional bias of the classic 8-direction
//! table.

use std::f64::consts::TAU;

use crate::math::{floor, inverse_lerp, lerp, smoothstep};
use crate::random::{Random, Xoroshiro};

/// Seeded 2D gradient noise sampler.
///
/// Construction builds two immutable tables from a random source: a
/// 256-entry permutation duplicated to 512 entries (so the `+ 1` corner
/// lookups never index out of range), and 256 unit gradients addressed by
/// permutation value. Sampling never mutates, so a built sampler can be
/// shared across threads freely, and two samplers built from the same seed
/// are interchangeable.
#[derive(Debug, Clone)]
pub struct GradientNoise {
    /// Doubled permutation table; every entry is in `[0, 255]`.
    perm: [u8; 512],
    /// Unit gradient vectors, selected by permutation value.
    gradients: [[f64; 2]; 256],
}

impl GradientNoise {
    /// Build the permutation and gradient tables from a random source.
    ///
    /// Draw order is part of the seed format: the 256 gradient angles come
    /// first, in index order, then the shuffle draws, all from the same
    /// stream. Reordering the draws would silently change the terrain every
    /// stored seed produces.
    #[must_use]
    pub fn new<R: Random>(random: &mut R) -> Self {
        let mut gradients = [[0.0f64; 2]; 256];
        for gradient in &mut gradients {
            let angle = random.next_f64() * TAU;
            *gradient = [angle.cos(), angle.sin()];
        }

        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = i as u8;
        }

        // Fisher-Yates from the top, swap index drawn from [0, i] inclusive.
        for i in (1..256).rev() {
            let j = random.next_i32_bounded(i as i32 + 1) as usize;
            table.swap(i, j);
        }

        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&table);
        perm[256..].copy_from_slice(&table);

        Self { perm, gradients }
    }

    /// Build a sampler from a seed. Any value is valid, including negative
    /// seeds, and equal seeds build equal samplers.
    #[must_use]
    pub fn from_seed(seed: i32) -> Self {
        // Sign extension keeps distinct negative seeds distinct.
        let mut random = Xoroshiro::from_seed(seed as u64);
        Self::new(&mut random)
    }

    #[inline]
    const fn p(&self, index: usize) -> usize {
        self.perm[index] as usize
    }

    /// Dot product of the gradient selected by `hash` with `(x, y)`.
    #[inline]
    fn grad_dot(&self, hash: usize, x: f64, y: f64) -> f64 {
        let gradient = &self.gradients[hash & 255];
        gradient[0] * x + gradient[1] * y
    }

    /// Sample the noise at a point.
    ///
    /// The corner-gradient interpolation lands nominally in `[-1, 1]` and
    /// is renormalized through a clamped inverse lerp, so the returned
    /// `[0, 1]` bound is hard even where the nominal raw range is not.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let cell_x = floor(x);
        let cell_y = floor(y);
        let xi = (cell_x & 255) as usize;
        let yi = (cell_y & 255) as usize;
        let xf = x - f64::from(cell_x);
        let yf = y - f64::from(cell_y);

        let u = smoothstep(xf);
        let v = smoothstep(yf);

        // Corner hashes through the doubled table; `xi + 1` and `yi + 1`
        // reach at most index 511.
        let aa = self.p(self.p(xi) + yi);
        let ab = self.p(self.p(xi) + yi + 1);
        let ba = self.p(self.p(xi + 1) + yi);
        let bb = self.p(self.p(xi + 1) + yi + 1);

        let x1 = lerp(
            self.grad_dot(aa, xf, yf),
            self.grad_dot(ba, xf - 1.0, yf),
            u,
        );
        let x2 = lerp(
            self.grad_dot(ab, xf, yf - 1.0),
            self.grad_dot(bb, xf - 1.0, yf - 1.0),
            u,
        );
        let raw = lerp(x1, x2, v);

        inverse_lerp(-1.0, 1.0, raw)
    }
}
