use approx::assert_abs_diff_eq;

use marquee_core::consts::{BEZIER_KAPPA, MARQUEE_STROKE};
use marquee_core::error::CropError;
use marquee_core::geometry::{flatten_path, Bounds, PathCommand, Point};
use marquee_core::shape::{Marquee, MarqueeKind};
use marquee_core::surface::{DrawOp, RecordingSurface};

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn test_normalize_all_sign_combinations() {
    for (w, h) in [(30.0, 20.0), (-30.0, 20.0), (30.0, -20.0), (-30.0, -20.0)] {
        let b = Bounds::normalized(100.0, 100.0, w, h);
        assert!(b.w >= 0.0 && b.h >= 0.0);
        assert_eq!(b.w, 30.0);
        assert_eq!(b.h, 20.0);
    }
}

#[test]
fn test_normalize_moves_origin_to_top_left() {
    let b = Bounds::normalized(100.0, 100.0, -30.0, -20.0);
    assert_eq!(b.top_left(), Point::new(70.0, 80.0));
}

#[test]
fn test_update_keeps_kind_and_normalizes() {
    let m = Marquee::new(MarqueeKind::Ellipse, 0.0, 0.0, 10.0, 10.0);
    let moved = m.update(50.0, 50.0, -20.0, 10.0);
    assert_eq!(moved.kind(), MarqueeKind::Ellipse);
    assert_eq!(moved.bounds(), Bounds::normalized(30.0, 50.0, 20.0, 10.0));
}

// ---------------------------------------------------------------------------
// Containment
// ---------------------------------------------------------------------------

#[test]
fn test_contains_center_for_both_kinds() {
    for kind in MarqueeKind::ALL {
        let m = Marquee::new(*kind, 10.0, 20.0, 40.0, 60.0);
        assert!(m.contains(m.bounds().center()), "{kind} should contain its center");
    }
}

#[test]
fn test_contains_false_outside_bounding_box() {
    for kind in MarqueeKind::ALL {
        let m = Marquee::new(*kind, 10.0, 20.0, 40.0, 60.0);
        assert!(!m.contains(Point::new(9.0, 50.0)));
        assert!(!m.contains(Point::new(51.0, 50.0)));
        assert!(!m.contains(Point::new(30.0, 19.0)));
        assert!(!m.contains(Point::new(30.0, 81.0)));
    }
}

#[test]
fn test_rectangle_contains_edges_inclusive() {
    let m = Marquee::new(MarqueeKind::Rectangle, 10.0, 20.0, 40.0, 60.0);
    assert!(m.contains(Point::new(10.0, 20.0)));
    assert!(m.contains(Point::new(50.0, 80.0)));
    assert!(m.contains(Point::new(10.0, 80.0)));
}

#[test]
fn test_ellipse_excludes_bounding_box_corners() {
    let m = Marquee::new(MarqueeKind::Ellipse, 0.0, 0.0, 100.0, 50.0);
    assert!(!m.contains(Point::new(2.0, 2.0)));
    assert!(!m.contains(Point::new(98.0, 48.0)));
}

#[test]
fn test_ellipse_boundary_inclusive() {
    let m = Marquee::new(MarqueeKind::Ellipse, 0.0, 0.0, 100.0, 50.0);
    assert!(m.contains(Point::new(0.0, 25.0)));
    assert!(m.contains(Point::new(50.0, 0.0)));
    assert!(m.contains(Point::new(100.0, 25.0)));
}

#[test]
fn test_degenerate_ellipse_contains_nothing() {
    let m = Marquee::new(MarqueeKind::Ellipse, 10.0, 10.0, 0.0, 20.0);
    assert!(!m.contains(Point::new(10.0, 20.0)));
}

// ---------------------------------------------------------------------------
// Paths and drawing
// ---------------------------------------------------------------------------

#[test]
fn test_ellipse_path_uses_kappa_offsets() {
    let m = Marquee::new(MarqueeKind::Ellipse, 0.0, 0.0, 200.0, 100.0);
    let path = m.path();
    assert_eq!(path.len(), 6);
    assert_eq!(path[0], PathCommand::MoveTo(Point::new(0.0, 50.0)));

    match path[1] {
        PathCommand::CubicTo { ctrl1, ctrl2, to } => {
            assert_abs_diff_eq!(ctrl1.y, 50.0 - 50.0 * BEZIER_KAPPA, epsilon = 1e-4);
            assert_abs_diff_eq!(ctrl2.x, 100.0 - 100.0 * BEZIER_KAPPA, epsilon = 1e-4);
            assert_eq!(to, Point::new(100.0, 0.0));
        }
        other => panic!("expected cubic, got {other:?}"),
    }
    assert_eq!(path[5], PathCommand::Close);
}

#[test]
fn test_flattened_ellipse_stays_near_outline() {
    let m = Marquee::new(MarqueeKind::Ellipse, 0.0, 0.0, 200.0, 100.0);
    let points = flatten_path(&m.path(), 16);
    assert_eq!(points.len(), 1 + 4 * 16);
    for p in points {
        let dx = (p.x - 100.0) / 100.0;
        let dy = (p.y - 50.0) / 50.0;
        let r = dx * dx + dy * dy;
        assert!((r - 1.0).abs() < 0.01, "point {p:?} off the outline: {r}");
    }
}

#[test]
fn test_rectangle_draw_strokes_outline() {
    let m = Marquee::new(MarqueeKind::Rectangle, 5.0, 5.0, 10.0, 10.0);
    let mut surface = RecordingSurface::new(50.0, 50.0);
    m.draw(&mut surface);
    assert_eq!(surface.ops(), &[DrawOp::StrokePath(m.path(), MARQUEE_STROKE)]);
}

// ---------------------------------------------------------------------------
// Kind parsing
// ---------------------------------------------------------------------------

#[test]
fn test_kind_parse_known_names() {
    assert_eq!("rectangle".parse::<MarqueeKind>().unwrap(), MarqueeKind::Rectangle);
    assert_eq!("Ellipse".parse::<MarqueeKind>().unwrap(), MarqueeKind::Ellipse);
}

#[test]
fn test_kind_parse_unknown_is_unimplemented() {
    let err = "polygon".parse::<MarqueeKind>().unwrap_err();
    assert!(matches!(err, CropError::UnimplementedCapability(_)), "got: {err}");
}
