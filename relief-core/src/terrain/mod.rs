//! Terrain heightmap generation pipeline.
//!
//! The module is the external surface of the crate:
//!
//! - [`TerrainSettings`] / [`NoiseSettings`] - configuration value objects,
//!   passed whole into generation so a run never sees a half-edited setup
//! - [`regenerate`] / [`regenerate_cancellable`] - the generation entry
//!   points, seed to finished grid
//! - [`Heightmap`] - the produced grid, handed off to the consumer
//! - [`GenerateError`] - the precondition violations plus cancellation

mod generator;
mod heightmap;
mod settings;

pub use generator::{GenerateError, regenerate, regenerate_cancellable};
pub use heightmap::Heightmap;
pub use settings::{NoiseSettings, TerrainSettings};
