use dnahelix::core::geometry::{GlyphRadii, HelixParams};
use dnahelix::core::palette::PaletteStyle;
use dnahelix::engine::config::DEFAULT_CHUNK_SIZE;

pub struct DefaultsConfig {
    pub base_pairs: usize,
    pub radius: f64,
    pub vertical_stretch: f64,
    pub sphere_radius: f64,
    pub cylinder_radius: f64,
    pub palette_style: PaletteStyle,
    pub chunk_size: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let helix = HelixParams::default();
        let glyphs = GlyphRadii::default();
        Self {
            base_pairs: 200,
            radius: helix.radius,
            vertical_stretch: helix.vertical_stretch,
            sphere_radius: glyphs.sphere,
            cylinder_radius: glyphs.cylinder,
            palette_style: PaletteStyle::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
