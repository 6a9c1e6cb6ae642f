use shapekit_geometry::{build_triangle, Point, Rect, ShapePath, TriangleParams};

#[test]
fn test_demo_triangle_points() {
    let path = build_triangle(&Rect::new(0.0, 0.0, 200.0, 200.0));
    assert_eq!(
        path.points(),
        vec![
            Point::new(100.0, 0.0),
            Point::new(0.0, 200.0),
            Point::new(200.0, 200.0),
            Point::new(100.0, 0.0),
        ]
    );
}

#[test]
fn test_triangle_is_closed_by_line() {
    let rect = Rect::new(-5.0, 12.0, 33.0, 7.5);
    let pts = build_triangle(&rect).points();

    assert_eq!(pts.len(), 4);
    assert_eq!(pts.first(), pts.last());
    assert_eq!(pts[0].x, rect.mid_x());
}

#[test]
fn test_degenerate_rect() {
    let pts = build_triangle(&Rect::new(4.0, 4.0, 0.0, 0.0)).points();
    assert!(pts.iter().all(|p| *p == Point::new(4.0, 4.0)));
}

#[test]
fn test_triangle_bounds() {
    let bounds = TriangleParams {}
        .bounds_in(&Rect::new(10.0, 20.0, 40.0, 30.0))
        .unwrap();
    assert!((bounds.x - 10.0).abs() < 1e-4);
    assert!((bounds.y - 20.0).abs() < 1e-4);
    assert!((bounds.width - 40.0).abs() < 1e-4);
    assert!((bounds.height - 30.0).abs() < 1e-4);
}
