//! # ShapeKit
//!
//! Parametric 2D shape paths and a small SVG scene exporter.
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Angles, unit parsing, error types
//! 2. **shapekit-geometry** - Path model, arc/triangle/flower builders, SVG output
//! 3. **shapekit-settings** - Scene configuration (JSON/TOML)
//! 4. **shapekit** - Logging bootstrap and the command-line exporter
//!
//! ## Example
//!
//! ```rust
//! use shapekit::{render_scene, SceneConfig};
//!
//! let svg = render_scene(&SceneConfig::default());
//! assert!(svg.starts_with("<svg"));
//! ```

pub use shapekit_core::{format_angle, parse_angle, Angle, AngleUnit, UnitError};

pub use shapekit_geometry::{
    build_arc, build_flower, build_triangle, svg_renderer, ArcParams, ArcSegment, FillRule,
    FlowerParams, LineStyle, Path, PathCommand, Point, Rect, SceneItem, Shape, ShapePath,
    ShapeType, Style, TriangleParams, PETAL_COUNT,
};

pub use shapekit_settings::{
    ConfigError, FlowerControls, SceneConfig, SceneEntry, SceneLayout, SettingsError,
    SliderRange,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Lay out the scene and render it as a standalone SVG document
pub fn render_scene(config: &SceneConfig) -> String {
    let layout = config.layout();
    tracing::info!(
        "Rendering {} shapes on a {}x{} canvas",
        layout.items.len(),
        layout.width,
        layout.height
    );
    svg_renderer::render_document(&layout.items, layout.width, layout.height)
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, keeping stdout free for SVG
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
