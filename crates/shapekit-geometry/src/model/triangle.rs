use serde::{Deserialize, Serialize};

use super::{Point, Property, Rect, ShapePath, ShapeType};
use crate::path::Path;

/// Isoceles triangle inscribed in its bounding rectangle. Takes no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TriangleParams {}

/// Apex at the middle of the top edge, base along the bottom edge.
///
/// The outline ends with an explicit line back to the apex, not a close
/// command.
pub fn build_triangle(rect: &Rect) -> Path {
    let apex = Point::new(rect.mid_x(), rect.min_y());

    let mut path = Path::new();
    path.move_to(apex);
    path.line_to(Point::new(rect.min_x(), rect.max_y()));
    path.line_to(Point::new(rect.max_x(), rect.max_y()));
    path.line_to(apex);
    path
}

impl ShapePath for TriangleParams {
    fn path_in(&self, rect: &Rect) -> Path {
        build_triangle(rect)
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Triangle
    }

    fn properties(&self) -> Vec<Property> {
        Vec::new()
    }
}
