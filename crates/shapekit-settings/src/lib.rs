//! ShapeKit Settings Crate
//!
//! Handles scene configuration: shape frames, paint styles and the ranges
//! of the interactive flower controls, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{FlowerControls, SceneConfig, SceneEntry, SceneLayout, SliderRange};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
