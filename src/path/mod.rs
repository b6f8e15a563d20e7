//! # Path Engine
//!
//! The mini-language for region geometry. Raw path strings use the familiar
//! single-letter command vocabulary (M, L, H, V, C, S, Q, T, A, Z — case
//! selects absolute vs. relative). [`parser`] turns a string into an ordered
//! command list; [`builder`] folds the commands into a [`CompiledPath`]: an
//! absolute, scaled, offset sequence of drawing operations ready for a fill
//! backend or for hit-testing.
//!
//! Arc commands are a documented simplification: all seven operands parse,
//! but the builder draws a straight line to the arc's endpoint instead of
//! flattening the ellipse.

pub mod builder;
pub mod parser;

use crate::geometry::{Point, Rect};

/// One parsed path command. Immutable once parsed; coordinates are raw
/// operands, still relative when the flag says so.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
        relative: bool,
    },
    LineTo {
        x: f64,
        y: f64,
        relative: bool,
    },
    HorizontalLineTo {
        x: f64,
        relative: bool,
    },
    VerticalLineTo {
        y: f64,
        relative: bool,
    },
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
        relative: bool,
    },
    SmoothCurveTo {
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
        relative: bool,
    },
    QuadraticCurveTo {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
        relative: bool,
    },
    SmoothQuadraticCurveTo {
        x: f64,
        y: f64,
        relative: bool,
    },
    ArcTo {
        rx: f64,
        ry: f64,
        angle: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
        relative: bool,
    },
    ClosePath,
}

/// One drawing operation in target coordinate space. All points are
/// absolute and already transformed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
    QuadTo { ctrl: Point, to: Point },
    Close,
}

/// Number of line segments a curve is flattened into for hit-testing.
/// Fixed-step subdivision keeps containment results bit-for-bit
/// reproducible across runs.
const CURVE_FLATTEN_STEPS: u32 = 16;

/// Compiled geometry: an ordered sequence of absolute drawing operations.
/// Immutable and safe to share across readers once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompiledPath {
    ops: Vec<PathOp>,
}

impl CompiledPath {
    pub(crate) fn from_ops(ops: Vec<PathOp>) -> Self {
        CompiledPath { ops }
    }

    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The loose bounding rectangle: the union over every operand point,
    /// curve control points included. `None` for an empty path.
    pub fn bounding_rect(&self) -> Option<Rect> {
        let mut rect: Option<Rect> = None;
        let mut add = |p: Point| {
            rect = Some(match rect {
                Some(r) => r.expanded_to(p),
                None => Rect::new(p.x, p.y, 0.0, 0.0),
            });
        };
        for op in &self.ops {
            match *op {
                PathOp::MoveTo(p) | PathOp::LineTo(p) => add(p),
                PathOp::CubicTo { c1, c2, to } => {
                    add(c1);
                    add(c2);
                    add(to);
                }
                PathOp::QuadTo { ctrl, to } => {
                    add(ctrl);
                    add(to);
                }
                PathOp::Close => {}
            }
        }
        rect
    }

    /// Whether `point` lies inside the filled area, using the nonzero
    /// winding rule. Subpaths are treated as closed for filling whether or
    /// not they end in an explicit close, and curves are flattened with
    /// fixed-step subdivision so the answer is deterministic.
    pub fn contains(&self, point: Point) -> bool {
        let mut winding = 0i32;
        let mut current = Point::ZERO;
        let mut start = Point::ZERO;
        let mut in_subpath = false;

        for op in &self.ops {
            match *op {
                PathOp::MoveTo(p) => {
                    if in_subpath {
                        winding += winding_delta(point, current, start);
                    }
                    current = p;
                    start = p;
                    in_subpath = true;
                }
                PathOp::LineTo(p) => {
                    winding += winding_delta(point, current, p);
                    current = p;
                }
                PathOp::CubicTo { c1, c2, to } => {
                    let mut prev = current;
                    for i in 1..=CURVE_FLATTEN_STEPS {
                        let t = f64::from(i) / f64::from(CURVE_FLATTEN_STEPS);
                        let next = cubic_point(current, c1, c2, to, t);
                        winding += winding_delta(point, prev, next);
                        prev = next;
                    }
                    current = to;
                }
                PathOp::QuadTo { ctrl, to } => {
                    let mut prev = current;
                    for i in 1..=CURVE_FLATTEN_STEPS {
                        let t = f64::from(i) / f64::from(CURVE_FLATTEN_STEPS);
                        let next = quad_point(current, ctrl, to, t);
                        winding += winding_delta(point, prev, next);
                        prev = next;
                    }
                    current = to;
                }
                PathOp::Close => {
                    winding += winding_delta(point, current, start);
                    current = start;
                    in_subpath = false;
                }
            }
        }
        if in_subpath {
            winding += winding_delta(point, current, start);
        }
        winding != 0
    }
}

/// Winding contribution of edge `a`→`b` for a ray cast rightward from `p`.
fn winding_delta(p: Point, a: Point, b: Point) -> i32 {
    let cross = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
    if a.y <= p.y {
        if b.y > p.y && cross > 0.0 {
            return 1;
        }
    } else if b.y <= p.y && cross < 0.0 {
        return -1;
    }
    0
}

/// Point on a cubic Bezier at parameter `t`.
fn cubic_point(p0: Point, c1: Point, c2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let w0 = u * u * u;
    let w1 = 3.0 * u * u * t;
    let w2 = 3.0 * u * t * t;
    let w3 = t * t * t;
    Point::new(
        w0 * p0.x + w1 * c1.x + w2 * c2.x + w3 * p3.x,
        w0 * p0.y + w1 * c1.y + w2 * c2.y + w3 * p3.y,
    )
}

/// Point on a quadratic Bezier at parameter `t`.
fn quad_point(p0: Point, ctrl: Point, p2: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let w0 = u * u;
    let w1 = 2.0 * u * t;
    let w2 = t * t;
    Point::new(
        w0 * p0.x + w1 * ctrl.x + w2 * p2.x,
        w0 * p0.y + w1 * ctrl.y + w2 * p2.y,
    )
}
