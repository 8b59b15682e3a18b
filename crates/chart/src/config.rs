// crates/chart/src/config.rs

use std::num::NonZeroU32;
use std::path::PathBuf;

use crate::bar::Palette;

pub const DEFAULT_INPUT: &str = "../projects.json";
pub const DEFAULT_SCALE: NonZeroU32 = NonZeroU32::new(10).unwrap();
pub const DEFAULT_MAX_BAR_WIDTH: u32 = 60;

/// Configuration for a chart run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartConfig {
    pub input_path: PathBuf,
    /// Activities represented by one full glyph.
    pub scale: NonZeroU32,
    /// Maximum number of full glyphs in a bar.
    pub max_bar_width: u32,
    /// Write the chart here instead of printing it.
    pub output_path: Option<PathBuf>,
    pub palette: Palette,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            scale: DEFAULT_SCALE,
            max_bar_width: DEFAULT_MAX_BAR_WIDTH,
            output_path: None,
            palette: Palette::default(),
        }
    }
}

impl ChartConfig {
    /// Create a new builder for [`ChartConfig`].
    pub fn builder() -> ChartConfigBuilder {
        ChartConfigBuilder::default()
    }
}

/// Builder for [`ChartConfig`].
#[derive(Debug, Default)]
#[must_use]
pub struct ChartConfigBuilder {
    cfg: ChartConfig,
}

impl ChartConfigBuilder {
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cfg.input_path = path.into();
        self
    }

    pub fn scale(mut self, scale: NonZeroU32) -> Self {
        self.cfg.scale = scale;
        self
    }

    pub fn max_bar_width(mut self, width: u32) -> Self {
        self.cfg.max_bar_width = width;
        self
    }

    pub fn output_path(mut self, path: Option<PathBuf>) -> Self {
        self.cfg.output_path = path;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.cfg.palette = palette;
        self
    }

    pub fn build(self) -> ChartConfig {
        self.cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let cfg = ChartConfig::default();
        assert_eq!(cfg.input_path, PathBuf::from("../projects.json"));
        assert_eq!(cfg.scale.get(), 10);
        assert_eq!(cfg.max_bar_width, 60);
        assert!(cfg.output_path.is_none());
        assert_eq!(cfg.palette, Palette::default());
    }

    #[test]
    fn builder_overrides_fields() {
        let cfg = ChartConfig::builder()
            .input_path("data/projects.json")
            .scale(NonZeroU32::new(5).unwrap())
            .max_bar_width(20)
            .output_path(Some(PathBuf::from("chart.md")))
            .palette(Palette::without_fractions('#'))
            .build();
        assert_eq!(cfg.input_path, PathBuf::from("data/projects.json"));
        assert_eq!(cfg.scale.get(), 5);
        assert_eq!(cfg.max_bar_width, 20);
        assert_eq!(cfg.output_path, Some(PathBuf::from("chart.md")));
        assert!(cfg.palette.fractional().is_empty());
    }

    #[test]
    fn repeated_calls_overwrite() {
        let cfg = ChartConfig::builder()
            .max_bar_width(10)
            .max_bar_width(30)
            .build();
        assert_eq!(cfg.max_bar_width, 30);
    }
}
