//! Deterministic noise primitives for terrain heightmap generation.
//!
//! This crate holds the seed-controlled building blocks consumed by
//! `relief-core`:
//!
//! - [`random`] - reproducible random sources behind the
//!   [`Random`](random::Random) trait
//! - [`math`] - interpolation and fade helpers shared by the samplers
//! - [`noise`] - 2D gradient noise and its fractal (octave) composition
//!
//! Everything here is a plain value once constructed: the same seed always
//! rebuilds the same tables and yields the same samples, and nothing keeps
//! process-wide state.

pub mod math;
pub mod noise;
pub mod random;
