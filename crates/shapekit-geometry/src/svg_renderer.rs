//! SVG export for shape paths
//! Serializes paths as SVG path data (`d` attribute) and wraps placed
//! shapes into a standalone SVG document.
//! Features:
//! - Move, line, cubic, arc and close commands
//! - Full-circle arcs split into two half arcs
//! - Per-item stroke/fill style and fill rule

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt::Write;

use crate::model::{Rect, Shape, ShapePath};
use crate::path::{ArcSegment, Path, PathCommand};

/// Fill rule for closed areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

impl FillRule {
    fn as_svg(self) -> &'static str {
        match self {
            FillRule::NonZero => "nonzero",
            FillRule::EvenOdd => "evenodd",
        }
    }
}

/// Line cap and join style for strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Butt,
    Round,
}

/// SVG paint value meaning "do not paint"
pub const NO_PAINT: &str = "none";

/// Paint applied to a shape in an exported document
///
/// Colors are SVG paint strings; [`NO_PAINT`] disables fill or stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub stroke: String,
    pub stroke_width: f64,
    pub fill: String,
    pub fill_rule: FillRule,
    pub line_style: LineStyle,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: "black".to_string(),
            stroke_width: 1.0,
            fill: NO_PAINT.to_string(),
            fill_rule: FillRule::NonZero,
            line_style: LineStyle::Butt,
        }
    }
}

impl Style {
    pub fn stroked(color: impl Into<String>, width: f64) -> Self {
        Self {
            stroke: color.into(),
            stroke_width: width,
            ..Self::default()
        }
    }

    pub fn filled(color: impl Into<String>, fill_rule: FillRule) -> Self {
        Self {
            stroke: NO_PAINT.to_string(),
            fill: color.into(),
            fill_rule,
            ..Self::default()
        }
    }

    fn attributes(&self) -> String {
        let mut attrs = String::new();
        let _ = write!(attrs, r#" fill="{}""#, escape(&self.fill));
        if self.fill != NO_PAINT {
            let _ = write!(attrs, r#" fill-rule="{}""#, self.fill_rule.as_svg());
        }
        if self.stroke != NO_PAINT {
            let _ = write!(
                attrs,
                r#" stroke="{}" stroke-width="{}""#,
                escape(&self.stroke),
                self.stroke_width
            );
            if self.line_style == LineStyle::Round {
                attrs.push_str(r#" stroke-linecap="round" stroke-linejoin="round""#);
            }
        }
        attrs
    }
}

/// A shape placed in a frame with a style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneItem {
    pub shape: Shape,
    pub frame: Rect,
    #[serde(default)]
    pub style: Style,
}

impl SceneItem {
    /// Path of the shape, generated in the frame's local space and moved to
    /// the frame's position.
    pub fn placed_path(&self) -> Path {
        let local = Rect::from_size(self.frame.width, self.frame.height);
        let t = crate::path::translation(self.frame.x, self.frame.y);
        self.shape.path_in(&local).transformed(&t)
    }
}

/// Render a path as SVG path data
pub fn path_data(path: &Path) -> String {
    let mut out = String::new();
    write_commands(path, &mut out);
    out.trim_end().to_string()
}

fn write_commands(path: &Path, out: &mut String) {
    for command in path.commands() {
        match command {
            PathCommand::MoveTo { to } => {
                let _ = write!(out, "M {} {} ", to.x, to.y);
            }
            PathCommand::LineTo { to } => {
                let _ = write!(out, "L {} {} ", to.x, to.y);
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                let _ = write!(
                    out,
                    "C {} {} {} {} {} {} ",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                );
            }
            PathCommand::ArcTo { arc } => write_arc(arc, out),
            PathCommand::ClosePath => out.push_str("Z "),
            PathCommand::AppendSubpath { path } => write_commands(path, out),
        }
    }
}

// Assumes the current point is already the arc's start point.
fn write_arc(arc: &ArcSegment, out: &mut String) {
    let sweep = arc.sweep_angle().to_radians();
    if sweep == 0.0 {
        return;
    }
    let sweep_flag = u8::from(sweep > 0.0);
    let r = arc.radius;

    if sweep.abs() >= 2.0 * PI {
        // A single SVG arc cannot end where it starts.
        let mid = arc.point_at(arc.start_angle + shapekit_core::Angle::radians(sweep / 2.0));
        let end = arc.end_point();
        let _ = write!(
            out,
            "A {} {} 0 0 {} {} {} A {} {} 0 0 {} {} {} ",
            r, r, sweep_flag, mid.x, mid.y, r, r, sweep_flag, end.x, end.y
        );
        return;
    }

    let large_arc = u8::from(sweep.abs() > PI);
    let end = arc.end_point();
    let _ = write!(
        out,
        "A {} {} 0 {} {} {} {} ",
        r, r, large_arc, sweep_flag, end.x, end.y
    );
}

/// Render placed shapes as a standalone SVG document
pub fn render_document(items: &[SceneItem], width: f64, height: f64) -> String {
    let mut doc = String::new();
    let _ = writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    );
    for item in items {
        let _ = writeln!(
            doc,
            r#"  <path data-shape="{}" d="{}"{}/>"#,
            item.shape.shape_type(),
            path_data(&item.placed_path()),
            item.style.attributes()
        );
    }
    doc.push_str("</svg>\n");
    doc
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
