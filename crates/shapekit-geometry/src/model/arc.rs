use serde::{Deserialize, Serialize};
use shapekit_core::Angle;
use tracing::debug;

use super::{Property, PropertyValue, Rect, ShapePath, ShapeType};
use crate::path::Path;

/// Offset subtracted from both arc angles so that 0° points at 12 o'clock.
pub const ROTATION_ADJUSTMENT_DEGREES: f64 = 90.0;

/// Circular arc using compass-style angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcParams {
    pub start_angle: Angle,
    pub end_angle: Angle,
    pub clockwise: bool,
}

impl ArcParams {
    pub fn new(start_angle: Angle, end_angle: Angle, clockwise: bool) -> Self {
        Self {
            start_angle,
            end_angle,
            clockwise,
        }
    }
}

impl Default for ArcParams {
    fn default() -> Self {
        Self::new(Angle::degrees(0.0), Angle::degrees(90.0), true)
    }
}

/// Builds an arc centered in `rect` with radius `rect.width / 2`.
///
/// The height of `rect` is ignored for the radius, so a non-square rect
/// gives a circular arc fitted to the width. The arc primitive receives
/// `!clockwise`, so `clockwise == true` draws clockwise on a y-down canvas.
pub fn build_arc(rect: &Rect, start_angle: Angle, end_angle: Angle, clockwise: bool) -> Path {
    let adjustment = Angle::degrees(ROTATION_ADJUSTMENT_DEGREES);
    let modified_start = start_angle - adjustment;
    let modified_end = end_angle - adjustment;

    let mut path = Path::new();
    path.add_arc(
        rect.center(),
        rect.width / 2.0,
        modified_start,
        modified_end,
        !clockwise,
    );

    debug!(
        "Built arc {} -> {} (clockwise: {}) in {}x{}",
        start_angle, end_angle, clockwise, rect.width, rect.height
    );
    path
}

impl ShapePath for ArcParams {
    fn path_in(&self, rect: &Rect) -> Path {
        build_arc(rect, self.start_angle, self.end_angle, self.clockwise)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Arc
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property {
                name: "Start Angle".to_string(),
                value: PropertyValue::Number(self.start_angle.to_degrees()),
            },
            Property {
                name: "End Angle".to_string(),
                value: PropertyValue::Number(self.end_angle.to_degrees()),
            },
            Property {
                name: "Clockwise".to_string(),
                value: PropertyValue::Bool(self.clockwise),
            },
        ]
    }
}
