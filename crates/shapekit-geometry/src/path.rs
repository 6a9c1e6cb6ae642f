//! # Path model
//!
//! A [`Path`] is an ordered list of [`PathCommand`]s. Order is draw order:
//! when sub-paths overlap, later ones are painted on top.
//!
//! Paths are kept in `f64` so that generated geometry can be checked exactly.
//! [`Path::to_lyon`] converts to a `lyon::path::Path` for tessellation or
//! stroking downstream.

use lyon::geom::euclid;
use lyon::math::point;
use serde::{Deserialize, Serialize};
use shapekit_core::Angle;
use std::f64::consts::TAU;

use crate::model::{Point, Rect};

/// 2D affine transform in `f64`.
pub type Affine = euclid::default::Transform2D<f64>;

/// Bézier handle length for a quarter ellipse, as a fraction of the radius.
pub const ELLIPSE_KAPPA: f64 = 0.552_284_749_830_793_4;

/// A circular arc between two angles around a center.
///
/// Points on the arc are `center + radius * (cos a, sin a)`. With
/// `clockwise == false` the arc travels toward increasing angles, with
/// `clockwise == true` toward decreasing angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub center: Point,
    pub radius: f64,
    pub start_angle: Angle,
    pub end_angle: Angle,
    pub clockwise: bool,
}

impl ArcSegment {
    pub fn point_at(&self, angle: Angle) -> Point {
        Point::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.start_angle + self.sweep_angle())
    }

    /// Signed angular distance travelled from the start angle.
    ///
    /// Positive when counter-clockwise (increasing angles), negative when
    /// clockwise. Angles that differ by a full turn or more give a full
    /// circle; equal angles give an empty sweep.
    pub fn sweep_angle(&self) -> Angle {
        let delta = (self.end_angle - self.start_angle).to_radians();
        let sweep = if delta.abs() >= TAU {
            TAU
        } else if self.clockwise {
            (-delta).rem_euclid(TAU)
        } else {
            delta.rem_euclid(TAU)
        };

        if self.clockwise {
            Angle::radians(-sweep)
        } else {
            Angle::radians(sweep)
        }
    }

    fn to_geom(self) -> lyon::geom::Arc<f64> {
        lyon::geom::Arc {
            center: euclid::default::Point2D::new(self.center.x, self.center.y),
            radii: euclid::default::Vector2D::new(self.radius, self.radius),
            start_angle: euclid::Angle::radians(self.start_angle.to_radians()),
            sweep_angle: euclid::Angle::radians(self.sweep_angle().to_radians()),
            x_rotation: euclid::Angle::zero(),
        }
    }

    /// Cubic Bézier approximation, one segment per quarter turn at most.
    pub fn to_cubics(&self) -> Vec<(Point, Point, Point)> {
        let mut segments = Vec::new();
        if self.sweep_angle().to_radians() == 0.0 {
            return segments;
        }
        self.to_geom().for_each_cubic_bezier(&mut |s| {
            segments.push((
                Point::new(s.ctrl1.x, s.ctrl1.y),
                Point::new(s.ctrl2.x, s.ctrl2.y),
                Point::new(s.to.x, s.to.y),
            ));
        });
        segments
    }
}

/// One drawing command of a [`Path`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: Point },
    LineTo { to: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
    ArcTo { arc: ArcSegment },
    ClosePath,
    AppendSubpath { path: Path },
}

/// Ordered sequence of drawing commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, to: Point) {
        self.commands.push(PathCommand::MoveTo { to });
    }

    pub fn line_to(&mut self, to: Point) {
        self.commands.push(PathCommand::LineTo { to });
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::ClosePath);
    }

    /// Adds an arc. Starts a new sub-path at the arc's first point, or joins
    /// it with a straight line when a sub-path is already in progress.
    pub fn add_arc(
        &mut self,
        center: Point,
        radius: f64,
        start_angle: Angle,
        end_angle: Angle,
        clockwise: bool,
    ) {
        let arc = ArcSegment {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        };
        let start = arc.start_point();
        match self.current_point() {
            Some(_) => self.line_to(start),
            None => self.move_to(start),
        }
        self.commands.push(PathCommand::ArcTo { arc });
    }

    /// Appends `path` as a self-contained sub-path.
    pub fn add_path(&mut self, path: Path) {
        self.commands.push(PathCommand::AppendSubpath { path });
    }

    /// Adds a closed ellipse inscribed in `rect`, made of four cubic quadrants
    /// starting from the right-hand extreme.
    pub fn add_ellipse_in(&mut self, rect: Rect) {
        let rx = rect.width / 2.0;
        let ry = rect.height / 2.0;
        let (cx, cy) = (rect.mid_x(), rect.mid_y());
        let (kx, ky) = (rx * ELLIPSE_KAPPA, ry * ELLIPSE_KAPPA);

        self.move_to(Point::new(cx + rx, cy));
        self.cubic_to(
            Point::new(cx + rx, cy + ky),
            Point::new(cx + kx, cy + ry),
            Point::new(cx, cy + ry),
        );
        self.cubic_to(
            Point::new(cx - kx, cy + ry),
            Point::new(cx - rx, cy + ky),
            Point::new(cx - rx, cy),
        );
        self.cubic_to(
            Point::new(cx - rx, cy - ky),
            Point::new(cx - kx, cy - ry),
            Point::new(cx, cy - ry),
        );
        self.cubic_to(
            Point::new(cx + kx, cy - ry),
            Point::new(cx + rx, cy - ky),
            Point::new(cx + rx, cy),
        );
        self.close();
    }

    /// Path of a single ellipse inscribed in `rect`.
    pub fn ellipse_in(rect: Rect) -> Self {
        let mut path = Self::new();
        path.add_ellipse_in(rect);
        path
    }

    /// The point the next command would continue from, if any.
    pub fn current_point(&self) -> Option<Point> {
        let last = self.commands.last()?;
        match last {
            PathCommand::MoveTo { to } | PathCommand::LineTo { to } => Some(*to),
            PathCommand::CubicTo { to, .. } => Some(*to),
            PathCommand::ArcTo { arc } => Some(arc.end_point()),
            PathCommand::ClosePath => self.commands.iter().rev().find_map(|c| match c {
                PathCommand::MoveTo { to } => Some(*to),
                _ => None,
            }),
            PathCommand::AppendSubpath { path } => path.current_point(),
        }
    }

    /// Sub-paths appended with [`Path::add_path`], in order.
    pub fn subpaths(&self) -> impl Iterator<Item = &Path> {
        self.commands.iter().filter_map(|c| match c {
            PathCommand::AppendSubpath { path } => Some(path),
            _ => None,
        })
    }

    /// On-curve points in drawing order, with sub-paths inlined.
    ///
    /// Arcs contribute their end point, Bézier control points are skipped.
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::new();
        self.collect_points(&mut points);
        points
    }

    fn collect_points(&self, points: &mut Vec<Point>) {
        for command in &self.commands {
            match command {
                PathCommand::MoveTo { to }
                | PathCommand::LineTo { to }
                | PathCommand::CubicTo { to, .. } => points.push(*to),
                PathCommand::ArcTo { arc } => points.push(arc.end_point()),
                PathCommand::ClosePath => {}
                PathCommand::AppendSubpath { path } => path.collect_points(points),
            }
        }
    }

    /// Applies `transform` to every command.
    ///
    /// Arcs stay arcs under rotations, translations and uniform scaling.
    /// Any other transform turns them into cubic Béziers first.
    pub fn transformed(&self, transform: &Affine) -> Path {
        let map = |p: &Point| -> Point {
            let q = transform.transform_point(euclid::default::Point2D::new(p.x, p.y));
            Point::new(q.x, q.y)
        };

        let mut out = Path::new();
        for command in &self.commands {
            match command {
                PathCommand::MoveTo { to } => out.move_to(map(to)),
                PathCommand::LineTo { to } => out.line_to(map(to)),
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    out.cubic_to(map(ctrl1), map(ctrl2), map(to))
                }
                PathCommand::ArcTo { arc } => match similarity(transform) {
                    Some((scale, rotation, mirrored)) => {
                        let (start, end) = if mirrored {
                            (-arc.start_angle, -arc.end_angle)
                        } else {
                            (arc.start_angle, arc.end_angle)
                        };
                        out.commands.push(PathCommand::ArcTo {
                            arc: ArcSegment {
                                center: map(&arc.center),
                                radius: arc.radius * scale,
                                start_angle: start + rotation,
                                end_angle: end + rotation,
                                clockwise: arc.clockwise != mirrored,
                            },
                        });
                    }
                    None => {
                        for (c1, c2, to) in arc.to_cubics() {
                            out.cubic_to(map(&c1), map(&c2), map(&to));
                        }
                    }
                },
                PathCommand::ClosePath => out.close(),
                PathCommand::AppendSubpath { path } => out.add_path(path.transformed(transform)),
            }
        }
        out
    }

    /// Tight bounding box of the geometry.
    ///
    /// `None` for an empty path, or when the geometry cannot be expressed
    /// in `f32` (see [`Path::to_lyon`]).
    pub fn bounding_box(&self) -> Option<Rect> {
        if self.points().is_empty() {
            return None;
        }
        let path = self.to_lyon()?;
        let bb = lyon::algorithms::aabb::bounding_box(path.iter());
        Some(Rect::new(
            bb.min.x as f64,
            bb.min.y as f64,
            (bb.max.x - bb.min.x) as f64,
            (bb.max.y - bb.min.y) as f64,
        ))
    }

    /// Converts to a `lyon` path. Arcs are approximated with quadratic
    /// Béziers, appended sub-paths are inlined.
    ///
    /// Returns `None` when a coordinate is not finite or does not fit in
    /// `f32`, or when an arc has a non-finite angle.
    ///
    /// A segment drawn with no sub-path open continues from the start of
    /// the last sub-path, or from the origin if there was none.
    pub fn to_lyon(&self) -> Option<lyon::path::Path> {
        let mut emitter = LyonEmitter {
            builder: lyon::path::Path::builder(),
            open: false,
            restart: point(0.0, 0.0),
        };
        emitter.emit(self)?;
        emitter.end(false);
        Some(emitter.builder.build())
    }
}

struct LyonEmitter {
    builder: lyon::path::path::Builder,
    open: bool,
    restart: lyon::math::Point,
}

impl LyonEmitter {
    fn begin(&mut self, at: lyon::math::Point) {
        self.end(false);
        self.builder.begin(at);
        self.restart = at;
        self.open = true;
    }

    fn ensure_open(&mut self) {
        if !self.open {
            let at = self.restart;
            self.builder.begin(at);
            self.open = true;
        }
    }

    fn end(&mut self, close: bool) {
        if self.open {
            self.builder.end(close);
            self.open = false;
        }
    }

    fn emit(&mut self, path: &Path) -> Option<()> {
        for command in &path.commands {
            match command {
                PathCommand::MoveTo { to } => self.begin(to_f32(to.x, to.y)?),
                PathCommand::LineTo { to } => {
                    let to = to_f32(to.x, to.y)?;
                    self.ensure_open();
                    self.builder.line_to(to);
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    let (c1, c2, to) = (
                        to_f32(ctrl1.x, ctrl1.y)?,
                        to_f32(ctrl2.x, ctrl2.y)?,
                        to_f32(to.x, to.y)?,
                    );
                    self.ensure_open();
                    self.builder.cubic_bezier_to(c1, c2, to);
                }
                PathCommand::ArcTo { arc } => self.emit_arc(arc)?,
                PathCommand::ClosePath => self.end(true),
                PathCommand::AppendSubpath { path } => {
                    self.end(false);
                    self.emit(path)?;
                    self.end(false);
                }
            }
        }
        Some(())
    }

    fn emit_arc(&mut self, arc: &ArcSegment) -> Option<()> {
        let sweep = arc.sweep_angle().to_radians();
        if !arc.start_angle.to_radians().is_finite() || !sweep.is_finite() {
            return None;
        }
        let start = arc.start_point();
        let start = to_f32(start.x, start.y)?;

        let mut quads = Vec::new();
        if sweep != 0.0 {
            arc.to_geom().for_each_quadratic_bezier(&mut |q| {
                quads.push((q.ctrl, q.to));
            });
        }

        if self.open {
            self.builder.line_to(start);
        } else {
            self.begin(start);
        }
        for (ctrl, to) in quads {
            let (ctrl, to) = (to_f32(ctrl.x, ctrl.y)?, to_f32(to.x, to.y)?);
            self.builder.quadratic_bezier_to(ctrl, to);
        }
        Some(())
    }
}

/// Narrows a point to `f32`, rejecting anything that would not be finite.
fn to_f32(x: f64, y: f64) -> Option<lyon::math::Point> {
    let p = point(x as f32, y as f32);
    (p.x.is_finite() && p.y.is_finite()).then_some(p)
}

/// Decomposes a similarity transform into (scale, rotation, mirrored).
fn similarity(t: &Affine) -> Option<(f64, Angle, bool)> {
    const EPS: f64 = 1e-9;
    let sx = (t.m11 * t.m11 + t.m12 * t.m12).sqrt();
    let sy = (t.m21 * t.m21 + t.m22 * t.m22).sqrt();
    let dot = t.m11 * t.m21 + t.m12 * t.m22;
    if (sx - sy).abs() > EPS * sx.max(1.0) || dot.abs() > EPS * sx.max(1.0) {
        return None;
    }
    let det = t.m11 * t.m22 - t.m12 * t.m21;
    Some((sx, Angle::radians(t.m12.atan2(t.m11)), det < 0.0))
}

/// Rotation by `angle` about the origin.
pub fn rotation(angle: Angle) -> Affine {
    Affine::rotation(euclid::Angle::radians(angle.to_radians()))
}

/// Translation by `(dx, dy)`.
pub fn translation(dx: f64, dy: f64) -> Affine {
    Affine::translation(dx, dy)
}
