mod defaults;

use crate::cli::RenderArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use dnahelix::core::models::primitive::Color;
use dnahelix::core::palette::{ColorPalette, PaletteStyle, parse_symbol};
use dnahelix::engine::config as core_config;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialGeometryConfig {
    radius: Option<f64>,
    #[serde(rename = "vertical-stretch")]
    vertical_stretch: Option<f64>,
    #[serde(rename = "sphere-radius")]
    sphere_radius: Option<f64>,
    #[serde(rename = "cylinder-radius")]
    cylinder_radius: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialPaletteConfig {
    style: Option<PaletteStyle>,
    file: Option<PathBuf>,
    colors: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialBatchConfig {
    #[serde(rename = "chunk-size")]
    chunk_size: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialRenderConfig {
    #[serde(rename = "base-pairs")]
    base_pairs: Option<usize>,
    geometry: Option<PartialGeometryConfig>,
    palette: Option<PartialPaletteConfig>,
    batch: Option<PartialBatchConfig>,
}

impl PartialRenderConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `path` if given, otherwise starts from an empty configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No configuration file given, using built-in defaults.");
                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli(mut self, args: &RenderArgs) -> Result<core_config::RenderConfig> {
        self.apply_set_values(&args.set_values)?;

        let defaults = DefaultsConfig::default();
        let geometry = self.geometry.take().unwrap_or_default();
        let batch = self.batch.take().unwrap_or_default();
        let palette = Self::merge_palette(self.palette.take().unwrap_or_default(), args, &defaults)?;

        let config = core_config::RenderConfigBuilder::new()
            .base_pairs(
                args.base_pairs
                    .or(self.base_pairs)
                    .unwrap_or(defaults.base_pairs),
            )
            .radius(geometry.radius.unwrap_or(defaults.radius))
            .vertical_stretch(
                geometry
                    .vertical_stretch
                    .unwrap_or(defaults.vertical_stretch),
            )
            .sphere_radius(geometry.sphere_radius.unwrap_or(defaults.sphere_radius))
            .cylinder_radius(
                geometry
                    .cylinder_radius
                    .unwrap_or(defaults.cylinder_radius),
            )
            .palette(palette)
            .chunk_size(
                args.chunk_size
                    .or(batch.chunk_size)
                    .unwrap_or(defaults.chunk_size),
            )
            .build()?;

        debug!("Final render configuration: {:?}", config);
        Ok(config)
    }

    fn merge_palette(
        partial: PartialPaletteConfig,
        args: &RenderArgs,
        defaults: &DefaultsConfig,
    ) -> Result<ColorPalette> {
        let cli_style = args
            .palette
            .as_deref()
            .map(PaletteStyle::from_str)
            .transpose()
            .map_err(|e| CliError::Argument(e.to_string()))?;

        let mut palette = if let Some(path) = &args.palette_file {
            ColorPalette::load(path)?
        } else if let Some(style) = cli_style {
            ColorPalette::builtin(style)
        } else if let Some(path) = &partial.file {
            ColorPalette::load(path)?
        } else {
            ColorPalette::builtin(partial.style.unwrap_or(defaults.palette_style))
        };

        for (key, token) in partial.colors.unwrap_or_default() {
            let symbol = parse_symbol(&key)?;
            debug!("Palette override: '{}' -> {}", symbol, token);
            palette.insert(symbol, Color::from(token));
        }
        Ok(palette)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let parts: Vec<_> = kv_pair.splitn(2, '=').collect();
            if parts.len() != 2 {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            }
            let key = parts[0].trim();
            let value_str = parts[1].trim();

            match key {
                "base-pairs" => {
                    self.base_pairs = Some(parse_value(key, value_str, "integer")?);
                }
                "geometry.radius" => {
                    self.geometry.get_or_insert_with(Default::default).radius =
                        Some(parse_value(key, value_str, "float")?);
                }
                "geometry.vertical-stretch" => {
                    self.geometry
                        .get_or_insert_with(Default::default)
                        .vertical_stretch = Some(parse_value(key, value_str, "float")?);
                }
                "geometry.sphere-radius" => {
                    self.geometry
                        .get_or_insert_with(Default::default)
                        .sphere_radius = Some(parse_value(key, value_str, "float")?);
                }
                "geometry.cylinder-radius" => {
                    self.geometry
                        .get_or_insert_with(Default::default)
                        .cylinder_radius = Some(parse_value(key, value_str, "float")?);
                }
                "palette.style" => {
                    self.palette.get_or_insert_with(Default::default).style = Some(
                        PaletteStyle::from_str(value_str)
                            .map_err(|e| CliError::Config(e.to_string()))?,
                    );
                }
                "batch.chunk-size" => {
                    self.batch.get_or_insert_with(Default::default).chunk_size =
                        Some(parse_value(key, value_str, "integer")?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}
