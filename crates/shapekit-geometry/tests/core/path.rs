use shapekit_geometry::path::{rotation, translation};
use shapekit_geometry::{build_arc, build_triangle, Angle, Path, PathCommand, Point, Rect};

#[test]
fn test_points_inline_subpaths() {
    let mut inner = Path::new();
    inner.move_to(Point::new(1.0, 1.0));
    inner.line_to(Point::new(2.0, 1.0));

    let mut outer = Path::new();
    outer.move_to(Point::new(0.0, 0.0));
    outer.add_path(inner.clone());
    outer.add_path(inner);

    assert_eq!(outer.points().len(), 5);
    assert_eq!(outer.subpaths().count(), 2);
    assert_eq!(outer.current_point(), Some(Point::new(2.0, 1.0)));
}

#[test]
fn test_rotate_then_translate_order() {
    let mut path = Path::new();
    path.move_to(Point::new(10.0, 0.0));

    let rotate_first = rotation(Angle::degrees(90.0)).then(&translation(100.0, 0.0));
    let translate_first = translation(100.0, 0.0).then(&rotation(Angle::degrees(90.0)));

    let a = path.transformed(&rotate_first).points()[0];
    let b = path.transformed(&translate_first).points()[0];

    assert!(a.distance_to(&Point::new(100.0, 10.0)) < 1e-9);
    assert!(b.distance_to(&Point::new(0.0, 110.0)) < 1e-9);
}

#[test]
fn test_transform_recurses_into_subpaths() {
    let mut outer = Path::new();
    outer.add_path(Path::ellipse_in(Rect::new(0.0, 0.0, 2.0, 2.0)));

    let moved = outer.transformed(&translation(5.0, 5.0));
    let first = moved.subpaths().next().unwrap().points()[0];
    assert_eq!(first, Point::new(7.0, 6.0));
}

#[test]
fn test_mirrored_arc_flips_direction() {
    let mut path = Path::new();
    path.add_arc(
        Point::new(0.0, 0.0),
        1.0,
        Angle::degrees(0.0),
        Angle::degrees(90.0),
        false,
    );
    let mirror = shapekit_geometry::Affine::scale(1.0, -1.0);
    let flipped = path.transformed(&mirror);

    match flipped.commands()[1] {
        PathCommand::ArcTo { arc } => {
            assert!(arc.clockwise);
            assert!(arc.end_point().distance_to(&Point::new(0.0, -1.0)) < 1e-9);
        }
        ref other => panic!("expected arc, got {:?}", other),
    }
}

#[test]
fn test_serde_round_trip_keeps_structure() {
    let mut path = Path::new();
    path.move_to(Point::new(0.0, 0.0));
    path.add_path(Path::ellipse_in(Rect::new(0.0, 0.0, 4.0, 2.0)));
    path.close();

    let json = serde_json::to_string(&path).unwrap();
    assert!(json.contains(r#""op":"append_subpath""#));
    let back: Path = serde_json::from_str(&json).unwrap();
    assert_eq!(back.commands().len(), path.commands().len());
    assert_eq!(back.points(), path.points());
}

#[test]
fn test_lyon_arc_ends_on_circle() {
    let mut path = Path::new();
    path.add_arc(
        Point::new(10.0, 10.0),
        5.0,
        Angle::degrees(0.0),
        Angle::degrees(180.0),
        false,
    );
    let lyon_path = path.to_lyon().unwrap();
    let last = lyon_path
        .iter()
        .filter_map(|e| match e {
            lyon::path::Event::Quadratic { to, .. } => Some(to),
            _ => None,
        })
        .last()
        .unwrap();
    assert!((last.x - 5.0).abs() < 1e-3);
    assert!((last.y - 10.0).abs() < 1e-3);
}

#[test]
fn test_out_of_range_coordinates_have_no_bounds() {
    let huge = build_triangle(&Rect::new(0.0, 0.0, 1e39, 1e39));
    assert!(huge.to_lyon().is_none());
    assert!(huge.bounding_box().is_none());

    let mut nan = Path::new();
    nan.move_to(Point::new(f64::NAN, 0.0));
    nan.line_to(Point::new(1.0, 1.0));
    assert!(nan.bounding_box().is_none());
}

#[test]
fn test_non_finite_arc_angles_have_no_bounds() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    for start in [f64::INFINITY, f64::NAN] {
        let path = build_arc(&rect, Angle::degrees(start), Angle::degrees(90.0), true);
        assert!(path.to_lyon().is_none());
        assert!(path.bounding_box().is_none());
    }
}

#[test]
fn test_line_after_close_starts_at_subpath_start() {
    let mut path = Path::new();
    path.move_to(Point::new(1.0, 1.0));
    path.line_to(Point::new(5.0, 1.0));
    path.close();
    path.line_to(Point::new(5.0, 5.0));

    let events: Vec<_> = path.to_lyon().unwrap().iter().collect();
    let begins: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            lyon::path::Event::Begin { at } => Some(*at),
            _ => None,
        })
        .collect();
    let lines = events
        .iter()
        .filter(|e| matches!(e, lyon::path::Event::Line { .. }))
        .count();

    assert_eq!(begins.len(), 2);
    assert_eq!((begins[1].x, begins[1].y), (1.0, 1.0));
    assert_eq!(lines, 2);
}

#[test]
fn test_leading_cubic_starts_at_origin() {
    let mut path = Path::new();
    path.cubic_to(Point::new(1.0, 4.0), Point::new(3.0, 4.0), Point::new(4.0, 0.0));

    let first = path.to_lyon().unwrap().iter().next().unwrap();
    match first {
        lyon::path::Event::Begin { at } => assert_eq!((at.x, at.y), (0.0, 0.0)),
        other => panic!("expected begin, got {:?}", other),
    }
}
