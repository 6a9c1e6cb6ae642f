use serde::{Deserialize, Serialize};
use std::fmt;

use crate::path::Path;

mod arc;
mod flower;
mod triangle;

pub use arc::{build_arc, ArcParams, ROTATION_ADJUSTMENT_DEGREES};
pub use flower::{
    build_flower, petal_rect, petal_transform, FlowerParams, DEFAULT_PETAL_OFFSET,
    DEFAULT_PETAL_WIDTH, PETAL_COUNT,
};
pub use triangle::{build_triangle, TriangleParams};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned bounding rectangle a shape is generated within.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Number(f64),
    Bool(bool),
}

/// Anything that can produce a [`Path`] for a bounding rectangle.
pub trait ShapePath {
    fn path_in(&self, rect: &Rect) -> Path;
    fn shape_type(&self) -> ShapeType;
    fn properties(&self) -> Vec<Property>;

    /// Bounding box of the generated geometry.
    fn bounds_in(&self, rect: &Rect) -> Option<Rect> {
        self.path_in(rect).bounding_box()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Arc,
    Triangle,
    Flower,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arc => write!(f, "Arc"),
            Self::Triangle => write!(f, "Triangle"),
            Self::Flower => write!(f, "Flower"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Arc(ArcParams),
    Triangle(TriangleParams),
    Flower(FlowerParams),
}

impl ShapePath for Shape {
    fn path_in(&self, rect: &Rect) -> Path {
        match self {
            Shape::Arc(s) => s.path_in(rect),
            Shape::Triangle(s) => s.path_in(rect),
            Shape::Flower(s) => s.path_in(rect),
        }
    }

    fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Arc(_) => ShapeType::Arc,
            Shape::Triangle(_) => ShapeType::Triangle,
            Shape::Flower(_) => ShapeType::Flower,
        }
    }

    fn properties(&self) -> Vec<Property> {
        match self {
            Shape::Arc(s) => s.properties(),
            Shape::Triangle(s) => s.properties(),
            Shape::Flower(s) => s.properties(),
        }
    }
}

impl From<ArcParams> for Shape {
    fn from(params: ArcParams) -> Self {
        Shape::Arc(params)
    }
}

impl From<TriangleParams> for Shape {
    fn from(params: TriangleParams) -> Self {
        Shape::Triangle(params)
    }
}

impl From<FlowerParams> for Shape {
    fn from(params: FlowerParams) -> Self {
        Shape::Flower(params)
    }
}
