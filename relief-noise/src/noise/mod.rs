//! 2D gradient noise for terrain height generation.
//!
//! Two layers, composed the way the generation pipeline consumes them:
//!
//! - [`GradientNoise`] - single-octave gradient (Perlin-style) noise over a
//!   seeded permutation table and gradient set
//! - [`FractalNoise`] - fractal Brownian motion summing several octaves of
//!   [`GradientNoise`] at rising frequency and falling amplitude
//!
//! Both sample to a nominal `[0, 1]`; only the single-octave bound is hard
//! (see [`FractalNoise`] on why its output is left unclamped).

mod fractal;
mod gradient;

pub use fractal::FractalNoise;
pub use gradient::GradientNoise;
