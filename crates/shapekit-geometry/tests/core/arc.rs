use shapekit_geometry::{
    build_arc, Angle, ArcParams, ArcSegment, PathCommand, Point, Rect, ShapePath,
};

const EPS: f64 = 1e-9;

fn only_arc(rect: &Rect, start: f64, end: f64, clockwise: bool) -> ArcSegment {
    let path = build_arc(rect, Angle::degrees(start), Angle::degrees(end), clockwise);
    let arcs: Vec<ArcSegment> = path
        .commands()
        .iter()
        .filter_map(|c| match c {
            PathCommand::ArcTo { arc } => Some(*arc),
            _ => None,
        })
        .collect();
    assert_eq!(arcs.len(), 1);
    arcs[0]
}

#[test]
fn test_demo_arc() {
    let arc = only_arc(&Rect::new(0.0, 0.0, 300.0, 300.0), 0.0, 90.0, true);

    assert_eq!(arc.center, Point::new(150.0, 150.0));
    assert_eq!(arc.radius, 150.0);
    assert!(arc.start_angle.approx_eq(Angle::degrees(-90.0), EPS));
    assert!(arc.end_angle.approx_eq(Angle::degrees(0.0), EPS));
    assert!(!arc.clockwise);
}

#[test]
fn test_demo_arc_runs_from_top_to_right() {
    let arc = only_arc(&Rect::new(0.0, 0.0, 300.0, 300.0), 0.0, 90.0, true);

    assert!(arc.start_point().distance_to(&Point::new(150.0, 0.0)) < EPS);
    assert!(arc.end_point().distance_to(&Point::new(300.0, 150.0)) < EPS);
    assert!(arc.sweep_angle().approx_eq(Angle::degrees(90.0), EPS));
}

#[test]
fn test_direction_only_changes_sweep_flag() {
    let rect = Rect::new(3.0, 7.0, 120.0, 80.0);
    let cw = only_arc(&rect, 30.0, 250.0, true);
    let ccw = only_arc(&rect, 30.0, 250.0, false);

    assert_eq!(cw.center, ccw.center);
    assert_eq!(cw.radius, ccw.radius);
    assert_eq!(cw.start_angle, ccw.start_angle);
    assert_eq!(cw.end_angle, ccw.end_angle);
    assert_ne!(cw.clockwise, ccw.clockwise);
}

#[test]
fn test_radius_ignores_height() {
    let tall = only_arc(&Rect::new(0.0, 0.0, 100.0, 400.0), 0.0, 180.0, false);
    let flat = only_arc(&Rect::new(0.0, 0.0, 100.0, 10.0), 0.0, 180.0, false);

    assert_eq!(tall.radius, 50.0);
    assert_eq!(flat.radius, 50.0);
    assert_eq!(tall.center, Point::new(50.0, 200.0));
}

#[test]
fn test_move_to_arc_start() {
    let path = build_arc(
        &Rect::new(0.0, 0.0, 200.0, 200.0),
        Angle::degrees(90.0),
        Angle::degrees(180.0),
        false,
    );
    match path.commands()[0] {
        // 90° compass is 3 o'clock.
        PathCommand::MoveTo { to } => assert!(to.distance_to(&Point::new(200.0, 100.0)) < EPS),
        ref other => panic!("expected move, got {:?}", other),
    }
}

#[test]
fn test_params_delegate_to_builder() {
    let rect = Rect::new(0.0, 0.0, 50.0, 50.0);
    let params = ArcParams::new(Angle::degrees(45.0), Angle::degrees(135.0), false);
    assert_eq!(
        params.path_in(&rect),
        build_arc(&rect, Angle::degrees(45.0), Angle::degrees(135.0), false)
    );
}

#[test]
fn test_radian_and_degree_inputs_agree() {
    let rect = Rect::new(0.0, 0.0, 80.0, 80.0);
    let deg = only_arc(&rect, 180.0, 270.0, true);
    let rad = {
        let path = build_arc(
            &rect,
            Angle::radians(std::f64::consts::PI),
            Angle::radians(1.5 * std::f64::consts::PI),
            true,
        );
        match path.commands()[1] {
            PathCommand::ArcTo { arc } => arc,
            ref other => panic!("expected arc, got {:?}", other),
        }
    };
    assert!(deg.start_angle.approx_eq(rad.start_angle, EPS));
    assert!(deg.end_angle.approx_eq(rad.end_angle, EPS));
}
