use crate::core::geometry::{GlyphRadii, HelixParams};
use crate::core::palette::ColorPalette;
use thiserror::Error;

/// Default number of records per partition for resolution and assembly.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    pub chunk_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub base_pairs: usize,
    pub geometry: HelixParams,
    pub glyphs: GlyphRadii,
    pub palette: ColorPalette,
    pub batch: BatchConfig,
}

#[derive(Default)]
pub struct RenderConfigBuilder {
    base_pairs: Option<usize>,
    radius: Option<f64>,
    vertical_stretch: Option<f64>,
    sphere_radius: Option<f64>,
    cylinder_radius: Option<f64>,
    palette: Option<ColorPalette>,
    chunk_size: Option<usize>,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_pairs(mut self, n: usize) -> Self {
        self.base_pairs = Some(n);
        self
    }
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
    pub fn vertical_stretch(mut self, stretch: f64) -> Self {
        self.vertical_stretch = Some(stretch);
        self
    }
    pub fn sphere_radius(mut self, radius: f64) -> Self {
        self.sphere_radius = Some(radius);
        self
    }
    pub fn cylinder_radius(mut self, radius: f64) -> Self {
        self.cylinder_radius = Some(radius);
        self
    }
    pub fn palette(mut self, palette: ColorPalette) -> Self {
        self.palette = Some(palette);
        self
    }
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    pub fn build(self) -> Result<RenderConfig, ConfigError> {
        let base_pairs = self
            .base_pairs
            .ok_or(ConfigError::MissingParameter("base_pairs"))?;
        if base_pairs == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "base_pairs",
                reason: "must be at least 1".to_string(),
            });
        }

        let geometry = HelixParams {
            radius: positive(
                "radius",
                self.radius.ok_or(ConfigError::MissingParameter("radius"))?,
            )?,
            vertical_stretch: positive(
                "vertical_stretch",
                self.vertical_stretch
                    .ok_or(ConfigError::MissingParameter("vertical_stretch"))?,
            )?,
        };
        let glyphs = GlyphRadii {
            sphere: positive(
                "sphere_radius",
                self.sphere_radius
                    .ok_or(ConfigError::MissingParameter("sphere_radius"))?,
            )?,
            cylinder: positive(
                "cylinder_radius",
                self.cylinder_radius
                    .ok_or(ConfigError::MissingParameter("cylinder_radius"))?,
            )?,
        };

        let chunk_size = self
            .chunk_size
            .ok_or(ConfigError::MissingParameter("chunk_size"))?;
        if chunk_size == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "chunk_size",
                reason: "must be at least 1".to_string(),
            });
        }

        let palette = self
            .palette
            .ok_or(ConfigError::MissingParameter("palette"))?;
        if palette.is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "palette",
                reason: "defines no colors".to_string(),
            });
        }

        Ok(RenderConfig {
            base_pairs,
            geometry,
            glyphs,
            palette,
            batch: BatchConfig { chunk_size },
        })
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            reason: format!("expected a finite positive number, got {}", value),
        })
    }
}
