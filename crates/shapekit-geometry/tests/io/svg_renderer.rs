use shapekit_geometry::svg_renderer::{path_data, render_document};
use shapekit_geometry::{
    build_arc, build_flower, build_triangle, Angle, ArcParams, FillRule, FlowerParams, Path,
    Point, Rect, SceneItem, Shape, Style, TriangleParams,
};

#[test]
fn test_render_triangle() {
    let d = path_data(&build_triangle(&Rect::new(0.0, 0.0, 200.0, 200.0)));
    assert_eq!(d, "M 100 0 L 0 200 L 200 200 L 100 0");
}

#[test]
fn test_render_demo_arc() {
    let d = path_data(&build_arc(
        &Rect::new(0.0, 0.0, 300.0, 300.0),
        Angle::degrees(0.0),
        Angle::degrees(90.0),
        true,
    ));
    assert!(d.starts_with("M 150"));
    // Quarter turn toward increasing angles: small arc, positive sweep.
    assert!(d.contains("A 150 150 0 0 1 300 150"), "{}", d);
}

#[test]
fn test_render_long_arc_sets_large_flag() {
    let d = path_data(&build_arc(
        &Rect::new(0.0, 0.0, 100.0, 100.0),
        Angle::degrees(0.0),
        Angle::degrees(90.0),
        false,
    ));
    assert!(d.contains("A 50 50 0 1 0 "), "{}", d);
}

#[test]
fn test_render_full_circle_uses_two_arcs() {
    let mut path = Path::new();
    path.add_arc(
        Point::new(0.0, 0.0),
        10.0,
        Angle::radians(0.0),
        Angle::radians(std::f64::consts::TAU),
        false,
    );
    let d = path_data(&path);
    assert_eq!(d.matches('A').count(), 2);
}

#[test]
fn test_render_flower() {
    let d = path_data(&build_flower(&Rect::new(0.0, 0.0, 300.0, 300.0), -20.0, 100.0));
    assert_eq!(d.matches('M').count(), 16);
    assert_eq!(d.matches('C').count(), 64);
    assert_eq!(d.matches('Z').count(), 16);
}

#[test]
fn test_render_empty_path() {
    assert_eq!(path_data(&Path::new()), "");
}

#[test]
fn test_placed_path_moves_to_frame() {
    let item = SceneItem {
        shape: Shape::Triangle(TriangleParams {}),
        frame: Rect::new(50.0, 400.0, 200.0, 200.0),
        style: Style::default(),
    };
    assert_eq!(item.placed_path().points()[0], Point::new(150.0, 400.0));
}

#[test]
fn test_render_document() {
    let items = vec![
        SceneItem {
            shape: Shape::Arc(ArcParams::default()),
            frame: Rect::new(0.0, 0.0, 300.0, 300.0),
            style: Style::stroked("green", 10.0),
        },
        SceneItem {
            shape: Shape::Flower(FlowerParams::default()),
            frame: Rect::new(0.0, 300.0, 300.0, 300.0),
            style: Style::filled("blue", FillRule::EvenOdd),
        },
    ];
    let doc = render_document(&items, 300.0, 600.0);

    assert!(doc.starts_with("<svg "));
    assert!(doc.contains(r#"viewBox="0 0 300 600""#));
    assert!(doc.contains(r#"data-shape="Arc""#));
    assert!(doc.contains(r#"stroke="green" stroke-width="10""#));
    assert!(doc.contains(r#"fill-rule="evenodd""#));
    assert_eq!(doc.matches("<path ").count(), 2);
    assert!(doc.trim_end().ends_with("</svg>"));
}
