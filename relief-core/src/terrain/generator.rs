//! Grid generation: settings in, finished heightmap out.
//!
//! Every run rebuilds the noise tables from the seed before any cell is
//! sampled (construction is a hard barrier), then fans the rows out across
//! the rayon pool. Cells only read the immutable tables, so the only
//! synchronization is the final join, and the output is bit-identical no
//! matter how the rows were scheduled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use relief_noise::noise::{FractalNoise, GradientNoise};
use thiserror::Error;

use super::heightmap::Heightmap;
use super::settings::TerrainSettings;

/// An error produced by a generation request.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GenerateError {
    /// The requested resolution was zero; there is no grid to produce.
    #[error("resolution must be positive")]
    InvalidResolution,
    /// The vertical scale divisor was not a positive finite number.
    #[error("vertical scale must be positive and finite, got {0}")]
    InvalidVerticalScale(f64),
    /// The caller abandoned the run; no partial grid escapes.
    #[error("generation cancelled")]
    Cancelled,
}

/// Generate a heightmap from the settings.
///
/// Equivalent to [`regenerate_cancellable`] with a flag that is never
/// raised.
pub fn regenerate(settings: &TerrainSettings) -> Result<Heightmap, GenerateError> {
    regenerate_cancellable(settings, &AtomicBool::new(false))
}

/// Generate a heightmap, abandoning the run once `cancel` is raised.
///
/// The flag is checked at row boundaries. Rows finished before the flag
/// was seen are discarded along with everything else; a grid is only ever
/// handed back whole.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(resolution = settings.resolution, seed = settings.seed)
)]
pub fn regenerate_cancellable(
    settings: &TerrainSettings,
    cancel: &AtomicBool,
) -> Result<Heightmap, GenerateError> {
    settings.validate()?;
    let start = Instant::now();

    let noise = FractalNoise::new(
        GradientNoise::from_seed(settings.seed),
        settings.noise.octaves,
        settings.noise.lacunarity,
        settings.noise.persistence,
    );
    let base_scale = settings.noise.base_scale;
    let height_scale = settings.height_multiplier / settings.vertical_scale;

    let resolution = settings.resolution as usize;
    let mut data = vec![0.0f32; resolution * resolution];
    data.par_chunks_mut(resolution)
        .enumerate()
        .try_for_each(|(grid_y, row)| {
            if cancel.load(Ordering::Relaxed) {
                return Err(GenerateError::Cancelled);
            }
            let y = grid_y as f64 * base_scale;
            for (grid_x, cell) in row.iter_mut().enumerate() {
                let x = grid_x as f64 * base_scale;
                *cell = (noise.sample(x, y) * height_scale) as f32;
            }
            Ok(())
        })?;

    tracing::debug!(elapsed = ?start.elapsed(), "heightmap generated");
    Ok(Heightmap::from_raw(resolution, data))
}
