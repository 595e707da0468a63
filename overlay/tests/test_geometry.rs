// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Whole crate geometry checks: bounding boxes over a sweep of angles, and resize
//! gestures that must keep the far end of the ruler where it was.

use r3bl_ruler_overlay::{BOUNDS_EPSILON, MonitorRect, PhysicalRect, Point, ResizeEdge,
                         ResizeOutcome, ResizeSession, Rotation, RulerGeometry,
                         SurfacePlacement, assert_approx_eq, assert_eq2, compute_bounds, pt,
                         rotated_corners};

fn angles() -> impl Iterator<Item = f64> { (0..48).map(|step| f64::from(step) * 7.5 - 45.0) }

#[test]
fn test_bounds_contain_every_corner_and_are_tight() {
    for degrees in angles() {
        let rotation = Rotation::from_degrees(degrees);
        let bounds = compute_bounds(500.0, 90.0, rotation);

        let surface_corners: Vec<Point> = rotated_corners(500.0, 90.0, rotation)
            .into_iter()
            .map(|it| it + bounds.translate)
            .collect();

        for corner in &surface_corners {
            assert!(corner.x >= -BOUNDS_EPSILON, "{degrees}: {corner} left of surface");
            assert!(corner.y >= -BOUNDS_EPSILON, "{degrees}: {corner} above surface");
            assert!(
                corner.x <= bounds.width + BOUNDS_EPSILON,
                "{degrees}: {corner} right of surface"
            );
            assert!(
                corner.y <= bounds.height + BOUNDS_EPSILON,
                "{degrees}: {corner} below surface"
            );
        }

        // Never more than one unit of slack from rounding up.
        let max_x = surface_corners.iter().map(|it| it.x).fold(0.0, f64::max);
        let max_y = surface_corners.iter().map(|it| it.y).fold(0.0, f64::max);
        assert!(bounds.width - max_x < 1.0, "{degrees}: width not tight");
        assert!(bounds.height - max_y < 1.0, "{degrees}: height not tight");
    }
}

#[test]
fn test_bounds_repeat_every_full_turn() {
    for degrees in angles() {
        let once = compute_bounds(320.0, 60.0, Rotation::from_degrees(degrees));
        let again = compute_bounds(320.0, 60.0, Rotation::from_degrees(degrees + 360.0));
        assert_eq2!(
            (once.width, once.height, once.translate),
            (again.width, again.height, again.translate)
        );
    }
}

fn anchor_on_screen(edge: ResizeEdge, width: f64, rotation: Rotation, origin: Point) -> Point {
    let bounds = compute_bounds(width, 90.0, rotation);
    origin + bounds.translate + rotation.rotate(edge.anchor_in_ruler(width))
}

fn drag(
    edge: ResizeEdge,
    rotation: Rotation,
    origin: Point,
    monitor: MonitorRect,
    from: Point,
    to: Point,
) -> (f64, Point) {
    let geometry = RulerGeometry::new(500.0, 90.0, rotation);
    let placement = SurfacePlacement {
        origin,
        translate: geometry.bounds().translate,
    };
    let mut session = ResizeSession::begin(edge, from, geometry, placement, monitor);
    session.on_render_pass();
    session.update(to);
    match session.end() {
        ResizeOutcome::Completed {
            width, position, ..
        } => (width, position),
        ResizeOutcome::Abandoned => panic!("expanded sessions always complete"),
    }
}

#[test]
fn test_resize_keeps_anchor_for_any_angle() {
    let monitor = MonitorRect::new(PhysicalRect::new(0.0, 0.0, 2880.0, 1620.0), 1.5);
    let origin = pt(400, 300);

    for degrees in angles() {
        let rotation = Rotation::from_degrees(degrees);
        for edge in [ResizeEdge::Start, ResizeEdge::End] {
            let before = anchor_on_screen(edge, 500.0, rotation, origin);
            let (width, position) =
                drag(edge, rotation, origin, monitor, pt(900, 600), pt(987, 533));
            let after = anchor_on_screen(edge, width, rotation, position);

            assert_approx_eq!(before.x, after.x, 1e-6);
            assert_approx_eq!(before.y, after.y, 1e-6);
        }
    }
}

#[test]
fn test_shrink_then_grow_returns_home() {
    let monitor = MonitorRect::new(PhysicalRect::new(0.0, 0.0, 1920.0, 1080.0), 1.0);
    let rotation = Rotation::from_degrees(0.0);
    let origin = pt(200, 100);

    // Drag the start handle 150 to the right, then back.
    let (width, position) = drag(
        ResizeEdge::Start,
        rotation,
        origin,
        monitor,
        pt(200, 130),
        pt(350, 130),
    );
    assert_eq2!(width, 350.0);
    assert_eq2!(position, pt(350, 100));

    let geometry = RulerGeometry::new(width, 90.0, rotation);
    let mut session = ResizeSession::begin(
        ResizeEdge::Start,
        pt(350, 130),
        geometry,
        SurfacePlacement {
            origin: position,
            translate: geometry.bounds().translate,
        },
        monitor,
    );
    session.on_render_pass();
    session.update(pt(200, 130));
    let ResizeOutcome::Completed {
        width, position, ..
    } = session.end()
    else {
        panic!("expected a completed resize");
    };
    assert_eq2!(width, 500.0);
    assert_eq2!(position, origin);
}

#[test]
fn test_width_never_below_minimum() {
    let monitor = MonitorRect::new(PhysicalRect::new(0.0, 0.0, 1920.0, 1080.0), 1.0);
    let (width, position) = drag(
        ResizeEdge::End,
        Rotation::default(),
        pt(200, 100),
        monitor,
        pt(700, 130),
        pt(0, 130),
    );
    assert_eq2!(width, 100.0);
    assert_eq2!(position, pt(200, 100));
}
