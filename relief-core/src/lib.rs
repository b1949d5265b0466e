//! Deterministic terrain heightmap generation.
//!
//! This crate turns a [`TerrainSettings`](terrain::TerrainSettings) value
//! into a finished [`Heightmap`](terrain::Heightmap): seed in, grid out,
//! bit-identical on every run. The noise primitives live in
//! `relief-noise`; this crate owns the configuration surface, the grid
//! container, and the parallel generation pipeline.
//!
//! What triggers a regeneration (an editor hook, a CLI, a job queue) is
//! the host's concern. Generation itself is a pure function of its
//! settings.

pub mod terrain;
