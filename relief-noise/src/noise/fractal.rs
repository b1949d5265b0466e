//! Fractal Brownian motion over the gradient sampler.

use super::GradientNoise;

/// Multi-octave composition of [`GradientNoise`].
///
/// Each octave samples the base noise at `lacunarity`-scaled frequency and
/// adds it with `persistence`-scaled amplitude, then the sum is mapped back
/// to a nominal `[0, 1]`.
///
/// The mapping is unclamped on purpose. With amplitude sums above 1 (for
/// example `persistence >= 1`) the octave total can leave `[-1, 1]` and the
/// result can land slightly outside `[0, 1]`; downstream height scaling
/// owns the final range, so the excursion is passed through untouched.
#[derive(Debug, Clone)]
pub struct FractalNoise {
    noise: GradientNoise,
    octaves: u32,
    lacunarity: f64,
    persistence: f64,
}

impl FractalNoise {
    /// Compose `octaves` layers over `noise`.
    ///
    /// Zero octaves is valid: the empty sum maps to a constant `0.5`.
    #[must_use]
    pub const fn new(
        noise: GradientNoise,
        octaves: u32,
        lacunarity: f64,
        persistence: f64,
    ) -> Self {
        Self {
            noise,
            octaves,
            lacunarity,
            persistence,
        }
    }

    /// Sample the octave sum at a point, mapped to a nominal `[0, 1]`.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut total = 0.0;

        for _ in 0..self.octaves {
            // Base sampler yields [0, 1]; octaves accumulate in [-1, 1].
            let raw = self.noise.sample(x * frequency, y * frequency);
            total += (raw * 2.0 - 1.0) * amplitude;

            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        (total + 1.0) / 2.0
    }
}
