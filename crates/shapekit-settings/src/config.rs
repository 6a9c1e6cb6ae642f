//! Scene configuration for ShapeKit
//!
//! Describes the demo scene: which shapes are shown, the frame each one is
//! generated in, how it is painted, and the ranges the flower controls are
//! allowed to move in. Supports JSON and TOML files.
//!
//! Entries are stacked top to bottom and centered horizontally on a canvas
//! of fixed width.

use serde::{Deserialize, Serialize};
use shapekit_geometry::{
    ArcParams, FillRule, FlowerParams, LineStyle, Rect, SceneItem, Shape, Style, TriangleParams,
};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult, SettingsResult};

/// File name used inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "scene.toml";

/// Inclusive range a slider-driven value is kept in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
}

impl SliderRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the range. NaN falls back to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, key: &str) -> ConfigResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ConfigError::InvalidRange {
                key: key.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Ranges for the interactive flower parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowerControls {
    pub petal_offset: SliderRange,
    pub petal_width: SliderRange,
}

impl Default for FlowerControls {
    fn default() -> Self {
        Self {
            petal_offset: SliderRange::new(-40.0, 40.0),
            petal_width: SliderRange::new(0.0, 100.0),
        }
    }
}

/// One shape of the scene with its frame size and paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEntry {
    pub shape: Shape,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub style: Style,
}

impl SceneEntry {
    pub fn new(shape: impl Into<Shape>, width: f64, height: f64, style: Style) -> Self {
        Self {
            shape: shape.into(),
            width,
            height,
            style,
        }
    }
}

/// Complete scene configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Width of the output canvas
    pub canvas_width: f64,
    /// Vertical gap below each entry
    pub spacing: f64,
    /// Ranges for the flower controls
    pub flower_controls: FlowerControls,
    /// Shapes, top to bottom
    pub entries: Vec<SceneEntry>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas_width: 300.0,
            spacing: 16.0,
            flower_controls: FlowerControls::default(),
            entries: vec![
                SceneEntry::new(
                    ArcParams::default(),
                    300.0,
                    300.0,
                    Style::stroked("green", 10.0),
                ),
                SceneEntry::new(
                    TriangleParams {},
                    200.0,
                    200.0,
                    Style {
                        line_style: LineStyle::Round,
                        ..Style::stroked("red", 5.0)
                    },
                ),
                SceneEntry::new(
                    FlowerParams::default(),
                    300.0,
                    600.0,
                    Style::filled("blue", FillRule::EvenOdd),
                ),
            ],
        }
    }
}

/// Laid-out scene ready to export
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLayout {
    pub items: Vec<SceneItem>,
    pub width: f64,
    pub height: f64,
}

impl SceneConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location (`<config dir>/shapekit/scene.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shapekit").join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        debug!("Loading scene config from {}", path.display());
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded {} scene entries", config.entries.len());
        Ok(config)
    }

    /// Load from `path`, or return defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No scene config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        debug!("Saved scene config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.canvas_width.is_finite() && self.canvas_width > 0.0) {
            return Err(out_of_range("canvas_width", self.canvas_width));
        }
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(out_of_range("spacing", self.spacing));
        }

        self.flower_controls
            .petal_offset
            .validate("flower_controls.petal_offset")?;
        self.flower_controls
            .petal_width
            .validate("flower_controls.petal_width")?;

        for (i, entry) in self.entries.iter().enumerate() {
            if !(entry.width.is_finite() && entry.width >= 0.0) {
                return Err(out_of_range(&format!("entries[{}].width", i), entry.width));
            }
            if !(entry.height.is_finite() && entry.height >= 0.0) {
                return Err(out_of_range(&format!("entries[{}].height", i), entry.height));
            }
            if !(entry.style.stroke_width.is_finite() && entry.style.stroke_width >= 0.0) {
                return Err(out_of_range(
                    &format!("entries[{}].style.stroke_width", i),
                    entry.style.stroke_width,
                ));
            }
        }

        Ok(())
    }

    /// Set flower parameters on every flower entry, clamped to the control
    /// ranges. `None` keeps the current value.
    pub fn apply_flower_parameters(&mut self, petal_offset: Option<f64>, petal_width: Option<f64>) {
        let controls = self.flower_controls;
        for entry in &mut self.entries {
            if let Shape::Flower(params) = &mut entry.shape {
                if let Some(offset) = petal_offset {
                    params.petal_offset = controls.petal_offset.clamp(offset);
                }
                if let Some(width) = petal_width {
                    params.petal_width = controls.petal_width.clamp(width);
                }
                debug!(
                    "Flower parameters now offset {} width {}",
                    params.petal_offset, params.petal_width
                );
            }
        }
    }

    /// Stack entries vertically, centered on the canvas
    pub fn layout(&self) -> SceneLayout {
        let mut items = Vec::with_capacity(self.entries.len());
        let mut y = 0.0;
        let mut width = self.canvas_width;

        for entry in &self.entries {
            let x = ((self.canvas_width - entry.width) / 2.0).max(0.0);
            items.push(SceneItem {
                shape: entry.shape.clone(),
                frame: Rect::new(x, y, entry.width, entry.height),
                style: entry.style.clone(),
            });
            width = width.max(x + entry.width);
            y += entry.height + self.spacing;
        }

        let height = if items.is_empty() {
            0.0
        } else {
            y - self.spacing
        };

        SceneLayout {
            items,
            width,
            height,
        }
    }
}

fn out_of_range(key: &str, value: f64) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
