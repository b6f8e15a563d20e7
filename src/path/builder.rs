//! Folds parsed commands into compiled geometry.
//!
//! The builder resolves relative operands against the current point, applies
//! the smooth-curve reflection rule, and maps every resulting point through
//! the uniform `point * scale + offset` transform. It never fails: malformed
//! commands were already dropped by the parser.

use super::{parser, CompiledPath, PathCommand, PathOp};
use crate::geometry::Point;

/// Parses `path` and builds compiled geometry in one step.
pub fn build_path(path: &str, scale: f64, offset_x: f64, offset_y: f64) -> CompiledPath {
    build_commands(&parser::parse(path), scale, offset_x, offset_y)
}

/// Builds compiled geometry from an already-parsed command list.
pub fn build_commands(
    commands: &[PathCommand],
    scale: f64,
    offset_x: f64,
    offset_y: f64,
) -> CompiledPath {
    let transform = |p: Point| Point::new(p.x * scale + offset_x, p.y * scale + offset_y);

    let mut ops = Vec::with_capacity(commands.len());
    let mut current = Point::ZERO;
    let mut start = Point::ZERO;
    // Kept in untransformed coordinates; reflection happens before the
    // scale/offset transform is applied.
    let mut last_control: Option<Point> = None;

    for command in commands {
        match *command {
            PathCommand::MoveTo { x, y, relative } => {
                let point = resolve(current, x, y, relative);
                ops.push(PathOp::MoveTo(transform(point)));
                current = point;
                start = point;
                last_control = None;
            }
            PathCommand::LineTo { x, y, relative } => {
                let point = resolve(current, x, y, relative);
                ops.push(PathOp::LineTo(transform(point)));
                current = point;
                last_control = None;
            }
            PathCommand::HorizontalLineTo { x, relative } => {
                let point = if relative {
                    Point::new(current.x + x, current.y)
                } else {
                    Point::new(x, current.y)
                };
                ops.push(PathOp::LineTo(transform(point)));
                current = point;
                last_control = None;
            }
            PathCommand::VerticalLineTo { y, relative } => {
                let point = if relative {
                    Point::new(current.x, current.y + y)
                } else {
                    Point::new(current.x, y)
                };
                ops.push(PathOp::LineTo(transform(point)));
                current = point;
                last_control = None;
            }
            PathCommand::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
                relative,
            } => {
                let control1 = resolve(current, x1, y1, relative);
                let control2 = resolve(current, x2, y2, relative);
                let end = resolve(current, x, y, relative);
                ops.push(PathOp::CubicTo {
                    c1: transform(control1),
                    c2: transform(control2),
                    to: transform(end),
                });
                current = end;
                last_control = Some(control2);
            }
            PathCommand::SmoothCurveTo {
                x2,
                y2,
                x,
                y,
                relative,
            } => {
                let control1 = reflect(current, last_control);
                let control2 = resolve(current, x2, y2, relative);
                let end = resolve(current, x, y, relative);
                ops.push(PathOp::CubicTo {
                    c1: transform(control1),
                    c2: transform(control2),
                    to: transform(end),
                });
                current = end;
                last_control = Some(control2);
            }
            PathCommand::QuadraticCurveTo {
                x1,
                y1,
                x,
                y,
                relative,
            } => {
                let control = resolve(current, x1, y1, relative);
                let end = resolve(current, x, y, relative);
                ops.push(PathOp::QuadTo {
                    ctrl: transform(control),
                    to: transform(end),
                });
                current = end;
                last_control = Some(control);
            }
            PathCommand::SmoothQuadraticCurveTo { x, y, relative } => {
                let control = reflect(current, last_control);
                let end = resolve(current, x, y, relative);
                ops.push(PathOp::QuadTo {
                    ctrl: transform(control),
                    to: transform(end),
                });
                current = end;
                last_control = Some(control);
            }
            PathCommand::ArcTo { x, y, relative, .. } => {
                // Documented simplification: a straight line to the arc's
                // endpoint. Radius, rotation, and flags parse but are not
                // geometrically applied.
                let end = resolve(current, x, y, relative);
                ops.push(PathOp::LineTo(transform(end)));
                current = end;
                last_control = None;
            }
            PathCommand::ClosePath => {
                ops.push(PathOp::Close);
                current = start;
                last_control = None;
            }
        }
    }

    CompiledPath::from_ops(ops)
}

fn resolve(current: Point, x: f64, y: f64, relative: bool) -> Point {
    if relative {
        Point::new(current.x + x, current.y + y)
    } else {
        Point::new(x, y)
    }
}

/// Reflection of the previous control point through the current point, or
/// the current point itself when no prior curve set one.
fn reflect(current: Point, last_control: Option<Point>) -> Point {
    match last_control {
        Some(c) => Point::new(2.0 * current.x - c.x, 2.0 * current.y - c.y),
        None => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    #[test]
    fn test_build_simple_line() {
        let path = build_path("M 0 0 L 100 100", 1.0, 0.0, 0.0);
        assert!(!path.is_empty());
        assert_eq!(path.ops().len(), 2);
    }

    #[test]
    fn test_build_with_scale() {
        let path = build_path("M 0 0 L 100 100", 2.0, 0.0, 0.0);
        let bounds = path.bounding_rect().unwrap();
        assert!((bounds.max_x() - 200.0).abs() < 1e-9);
        assert!((bounds.max_y() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_with_offset() {
        let path = build_path("M 0 0 L 100 100", 1.0, 50.0, 50.0);
        let bounds = path.bounding_rect().unwrap();
        assert!((bounds.min_x() - 50.0).abs() < 1e-9);
        assert!((bounds.min_y() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_closed_triangle_contains_center() {
        let path = build_path("M 0 0 L 100 0 L 50 100 Z", 1.0, 0.0, 0.0);
        assert!(path.contains(crate::geometry::Point::new(50.0, 30.0)));
    }

    #[test]
    fn test_relative_commands_accumulate() {
        let path = build_path("m 10 10 l 20 0 l 0 20", 1.0, 0.0, 0.0);
        let bounds = path.bounding_rect().unwrap();
        assert_eq!(bounds, Rect::new(10.0, 10.0, 20.0, 20.0));
    }

    #[test]
    fn test_horizontal_and_vertical_lines() {
        let path = build_path("M 10 20 H 50 V 60 h -10 v -10", 1.0, 0.0, 0.0);
        let bounds = path.bounding_rect().unwrap();
        assert_eq!(bounds, Rect::new(10.0, 20.0, 40.0, 40.0));
    }

    #[test]
    fn test_smooth_curve_reflection() {
        // S after C reflects the second control point through the current
        // point: 2*(95,80) - (65,10) = (125,150).
        let path = build_path("M 10 80 C 40 10 65 10 95 80 S 150 150 180 80", 1.0, 0.0, 0.0);
        let ops = path.ops();
        assert_eq!(ops.len(), 3);
        match ops[2] {
            PathOp::CubicTo { c1, .. } => {
                assert!((c1.x - 125.0).abs() < 1e-9);
                assert!((c1.y - 150.0).abs() < 1e-9);
            }
            _ => panic!("expected cubic op"),
        }
    }

    #[test]
    fn test_smooth_curve_without_prior_control_uses_current_point() {
        let path = build_path("M 10 20 S 50 60 70 80", 1.0, 0.0, 0.0);
        match path.ops()[1] {
            PathOp::CubicTo { c1, .. } => {
                assert!((c1.x - 10.0).abs() < 1e-9);
                assert!((c1.y - 20.0).abs() < 1e-9);
            }
            _ => panic!("expected cubic op"),
        }
    }

    #[test]
    fn test_smooth_quadratic_reflection() {
        // T after Q reflects (95,10) through (180,80) = (265,150).
        let path = build_path("M 10 80 Q 95 10 180 80 T 350 80", 1.0, 0.0, 0.0);
        match path.ops()[2] {
            PathOp::QuadTo { ctrl, .. } => {
                assert!((ctrl.x - 265.0).abs() < 1e-9);
                assert!((ctrl.y - 150.0).abs() < 1e-9);
            }
            _ => panic!("expected quad op"),
        }
    }

    #[test]
    fn test_reflection_resets_after_line() {
        // The L between the curves clears the stored control point, so the
        // S falls back to the current point.
        let path = build_path("M 0 0 C 10 10 20 10 30 0 L 40 0 S 60 10 70 0", 1.0, 0.0, 0.0);
        match path.ops()[3] {
            PathOp::CubicTo { c1, .. } => {
                assert!((c1.x - 40.0).abs() < 1e-9);
                assert!((c1.y - 0.0).abs() < 1e-9);
            }
            _ => panic!("expected cubic op"),
        }
    }

    #[test]
    fn test_arc_renders_as_line_to_endpoint() {
        let path = build_path("M 0 0 A 25 26 -80 0 1 50 25", 1.0, 0.0, 0.0);
        assert_eq!(path.ops().len(), 2);
        match path.ops()[1] {
            PathOp::LineTo(p) => {
                assert!((p.x - 50.0).abs() < 1e-9);
                assert!((p.y - 25.0).abs() < 1e-9);
            }
            _ => panic!("expected line op"),
        }
    }

    #[test]
    fn test_close_path_resets_current_point() {
        // The l after z is relative to the subpath start, not the last
        // vertex of the previous subpath.
        let path = build_path("M 10 10 L 30 10 L 30 30 z l 5 5", 1.0, 0.0, 0.0);
        match *path.ops().last().unwrap() {
            PathOp::LineTo(p) => {
                assert!((p.x - 15.0).abs() < 1e-9);
                assert!((p.y - 15.0).abs() < 1e-9);
            }
            _ => panic!("expected line op"),
        }
    }

    #[test]
    fn test_scale_applies_after_reflection() {
        // Reflection happens in source coordinates; only the emitted
        // points are transformed.
        let path = build_path("M 10 80 C 40 10 65 10 95 80 S 150 150 180 80", 2.0, 5.0, 7.0);
        match path.ops()[2] {
            PathOp::CubicTo { c1, .. } => {
                assert!((c1.x - (125.0 * 2.0 + 5.0)).abs() < 1e-9);
                assert!((c1.y - (150.0 * 2.0 + 7.0)).abs() < 1e-9);
            }
            _ => panic!("expected cubic op"),
        }
    }

    #[test]
    fn test_build_empty_string() {
        assert!(build_path("", 1.0, 0.0, 0.0).is_empty());
    }

    #[test]
    fn test_build_real_body_path() {
        let chest = "M272.91 422.84c-18.95-17.19-22-57-12.64-78.79 5.57-12.99 \
                     26.54-24.37 39.97-25.87q20.36-2.26 37.02.75c9.74 1.76 16.13 \
                     15.64 18.41 25.04 3.99 16.48 3.23 31.38 1.67 48.06q-1.35 \
                     14.35-2.05 16.89c-6.52 23.5-38.08 29.23-58.28 24.53-9.12 \
                     -2.12-17.24-4.38-24.1-10.61z";
        let path = build_path(chest, 0.5, 0.0, 0.0);
        assert!(!path.is_empty());
        assert!(matches!(*path.ops().last().unwrap(), PathOp::Close));
    }
}
