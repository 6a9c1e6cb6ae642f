use serde::{Deserialize, Serialize};
use shapekit_core::Angle;
use std::f64::consts::PI;
use tracing::debug;

use super::{Property, PropertyValue, Rect, ShapePath, ShapeType};
use crate::path::{rotation, translation, Affine, Path};

/// Number of petals in a flower. Petals are spaced by π/8.
pub const PETAL_COUNT: usize = 16;

pub const DEFAULT_PETAL_OFFSET: f64 = -20.0;
pub const DEFAULT_PETAL_WIDTH: f64 = 100.0;

const PETAL_STEP: f64 = PI / 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowerParams {
    /// How far each petal sits from the center along its own axis
    #[serde(default = "default_petal_offset")]
    pub petal_offset: f64,
    /// How wide each petal is
    #[serde(default = "default_petal_width")]
    pub petal_width: f64,
}

fn default_petal_offset() -> f64 {
    DEFAULT_PETAL_OFFSET
}

fn default_petal_width() -> f64 {
    DEFAULT_PETAL_WIDTH
}

impl FlowerParams {
    pub fn new(petal_offset: f64, petal_width: f64) -> Self {
        Self {
            petal_offset,
            petal_width,
        }
    }
}

impl Default for FlowerParams {
    fn default() -> Self {
        Self::new(DEFAULT_PETAL_OFFSET, DEFAULT_PETAL_WIDTH)
    }
}

/// Local rectangle the unrotated petal ellipse is inscribed in.
///
/// The petal height is `rect.width / 2`; the rect's height never affects
/// petal size.
pub fn petal_rect(rect: &Rect, petal_offset: f64, petal_width: f64) -> Rect {
    Rect::new(petal_offset, 0.0, petal_width, rect.width / 2.0)
}

/// Rotate by `theta` about the origin, then move to the middle of `rect`.
///
/// The translation is `(width / 2, height / 2)`, i.e. the center in the
/// rect's own frame; `rect.x` and `rect.y` are not added.
pub fn petal_transform(rect: &Rect, theta: Angle) -> Affine {
    rotation(theta).then(&translation(rect.width / 2.0, rect.height / 2.0))
}

/// Builds 16 elliptical petals fanned around the center of `rect`.
///
/// Later petals are appended after earlier ones and so paint on top.
/// Offsets and widths are not validated.
pub fn build_flower(rect: &Rect, petal_offset: f64, petal_width: f64) -> Path {
    let base_petal = Path::ellipse_in(petal_rect(rect, petal_offset, petal_width));

    let mut path = Path::new();
    for k in 0..PETAL_COUNT {
        let theta = Angle::radians(k as f64 * PETAL_STEP);
        path.add_path(base_petal.transformed(&petal_transform(rect, theta)));
    }

    debug!(
        "Built flower with {} petals (offset {}, width {}) in {}x{}",
        PETAL_COUNT, petal_offset, petal_width, rect.width, rect.height
    );
    path
}

impl ShapePath for FlowerParams {
    fn path_in(&self, rect: &Rect) -> Path {
        build_flower(rect, self.petal_offset, self.petal_width)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Flower
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property {
                name: "Petal Offset".to_string(),
                value: PropertyValue::Number(self.petal_offset),
            },
            Property {
                name: "Petal Width".to_string(),
                value: PropertyValue::Number(self.petal_width),
            },
        ]
    }
}
