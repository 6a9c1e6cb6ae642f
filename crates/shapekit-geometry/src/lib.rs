//! # ShapeKit Geometry
//!
//! Parametric 2D shape paths. Every builder is a pure function from a
//! bounding rectangle and a handful of parameters to a [`Path`]: an ordered
//! list of drawing commands in the rectangle's coordinate space.
//!
//! ## Shapes
//!
//! - **Arc**: circular arc with compass-style angles (0° at 12 o'clock)
//! - **Triangle**: isoceles triangle inscribed in the rectangle
//! - **Flower**: 16 elliptical petals rotated around the center
//!
//! ## Architecture
//!
//! ```text
//! Shape (Arc | Triangle | Flower)
//!   └── ShapePath::path_in(rect) -> Path
//!
//! Path (MoveTo, LineTo, CubicTo, ArcTo, ClosePath, AppendSubpath)
//!   ├── transformed(Affine)
//!   ├── to_lyon()         -> Option<lyon::path::Path>
//!   └── svg_renderer      -> SVG path data / documents
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_geometry::{build_flower, Rect};
//!
//! let flower = build_flower(&Rect::new(0.0, 0.0, 300.0, 300.0), -20.0, 100.0);
//! assert_eq!(flower.subpaths().count(), 16);
//! ```

pub mod model;
pub mod path;
pub mod svg_renderer;

pub use model::{
    build_arc, build_flower, build_triangle, petal_rect, petal_transform, ArcParams,
    FlowerParams, Point, Property, PropertyValue, Rect, Shape, ShapePath, ShapeType,
    TriangleParams, PETAL_COUNT,
};
pub use path::{Affine, ArcSegment, Path, PathCommand};
pub use shapekit_core::Angle;
pub use svg_renderer::{FillRule, LineStyle, SceneItem, Style, NO_PAINT};
