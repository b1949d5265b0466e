//! Generation parameters.
//!
//! Settings are plain serializable values handed whole to
//! [`regenerate`](super::regenerate). Nothing here is live: editing a
//! settings value never affects a run already in flight, and the next run
//! sees exactly the value it was given.

use serde::{Deserialize, Serialize};

use super::generator::GenerateError;

/// Octave-composition parameters for the fractal noise layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseSettings {
    /// Base spatial frequency. Grid coordinates are multiplied by this
    /// before sampling, so smaller values stretch features wider. Zero is
    /// accepted and collapses every sample onto the origin.
    pub base_scale: f64,
    /// Number of noise layers to sum. Zero is accepted and yields a flat
    /// grid at the midpoint height.
    pub octaves: u32,
    /// Per-octave frequency multiplier. Values above 1 add finer detail
    /// with each layer.
    pub lacunarity: f64,
    /// Per-octave amplitude multiplier. Values below 1 fade the finer
    /// layers out; values at or above 1 are accepted and let the octave
    /// sum escape its nominal range.
    pub persistence: f64,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            base_scale: 0.01,
            octaves: 5,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }
}

/// Full configuration for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerrainSettings {
    /// Side length of the square grid, in cells. Must be positive.
    pub resolution: u32,
    /// Seed controlling all randomness. Any value is valid, negative ones
    /// included, and equal seeds reproduce equal grids.
    pub seed: i32,
    /// World-space amplitude applied to the normalized noise height.
    pub height_multiplier: f64,
    /// Vertical world size the stored heights are expressed against. Must
    /// be positive; the default of `1.0` keeps heights in world units.
    pub vertical_scale: f64,
    /// Fractal noise parameters.
    pub noise: NoiseSettings,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            resolution: 513,
            seed: 42,
            height_multiplier: 25.0,
            vertical_scale: 1.0,
            noise: NoiseSettings::default(),
        }
    }
}

impl TerrainSettings {
    /// Check the two preconditions generation cannot absorb.
    ///
    /// Only `resolution` and `vertical_scale` are constrained. Every other
    /// combination, including zero octaves, zero `base_scale`, and negative
    /// seeds, is taken as given and produces a well-defined (possibly
    /// degenerate) grid.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.resolution == 0 {
            return Err(GenerateError::InvalidResolution);
        }
        if self.vertical_scale <= 0.0 || !self.vertical_scale.is_finite() {
            return Err(GenerateError::InvalidVerticalScale(self.vertical_scale));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert_eq!(TerrainSettings::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_resolution_is_rejected() {
        let settings = TerrainSettings {
            resolution: 0,
            ..TerrainSettings::default()
        };
        assert_eq!(settings.validate(), Err(GenerateError::InvalidResolution));
    }

    #[test]
    fn test_non_positive_vertical_scale_is_rejected() {
        for vertical_scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let settings = TerrainSettings {
                vertical_scale,
                ..TerrainSettings::default()
            };
            assert!(
                matches!(
                    settings.validate(),
                    Err(GenerateError::InvalidVerticalScale(_))
                ),
                "vertical_scale {vertical_scale} slipped through"
            );
        }
    }

    #[test]
    fn test_degenerate_noise_settings_are_accepted() {
        let settings = TerrainSettings {
            seed: -42,
            noise: NoiseSettings {
                base_scale: 0.0,
                octaves: 0,
                ..NoiseSettings::default()
            },
            ..TerrainSettings::default()
        };
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn test_settings_round_trip_through_json() {
        let settings = TerrainSettings {
            resolution: 129,
            seed: -7,
            noise: NoiseSettings {
                octaves: 3,
                ..NoiseSettings::default()
            },
            ..TerrainSettings::default()
        };
        let json = serde_json::to_string(&settings).expect("serialization failed");
        let back: TerrainSettings = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(settings, back);
    }
}
