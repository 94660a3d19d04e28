use circuit_canvas::model::Position;
use circuit_canvas::view::{
    Quadrant, SCALE_FACTOR_MAX, SCALE_FACTOR_MIN, Transform, View, ZOOM_MAX, ZOOM_MIN,
};
use glam::Vec2;

fn approx(a: Vec2, b: Vec2) {
    assert!(
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3,
        "expected {b:?}, got {a:?}"
    );
}

/// A view with a known base scale: 1000x1000 viewport -> base 0.9.
fn unit_view(scale_factor: f32) -> View {
    View::new(Transform::new(scale_factor), Vec2::new(1000.0, 1000.0))
}

#[test]
fn test_base_scale() {
    let view = unit_view(1000.0);
    assert!((view.base_scale() - 0.9).abs() < 1e-6);

    let wide = View::new(Transform::new(1000.0), Vec2::new(800.0, 600.0));
    assert!((wide.base_scale() - 0.54).abs() < 1e-6);
}

#[test]
fn test_quadrant_cases() {
    let mut view = unit_view(1000.0);
    view.transform.pan = Vec2::new(10.0, 20.0);
    let p = Position::new(2.0, 3.0);

    // scaled_x = 2000, scaled_z = 3000, k = 0.9
    view.transform.quadrant = Quadrant::Deg0;
    approx(view.project(&p, 1.0), Vec2::new(1810.0, 2720.0));

    view.transform.quadrant = Quadrant::Deg90;
    approx(view.project(&p, 1.0), Vec2::new(-2690.0, 1820.0));

    view.transform.quadrant = Quadrant::Deg180;
    approx(view.project(&p, 1.0), Vec2::new(-1790.0, -2680.0));

    view.transform.quadrant = Quadrant::Deg270;
    approx(view.project(&p, 1.0), Vec2::new(2710.0, -1780.0));
}

#[test]
fn test_determinism() {
    let mut view = unit_view(4200.0);
    view.transform.pan = Vec2::new(-33.0, 7.5);
    view.transform.zoom = 2.5;
    view.transform.quadrant = Quadrant::Deg90;

    let p = Position::new(0.137, -0.42);
    let first = view.project(&p, 1.3);
    let second = view.project(&p, 1.3);
    assert_eq!(first, second);
}

#[test]
fn test_opposite_quadrants_negate() {
    // With pan at the origin, Q and Q+180 produce mirrored screen points.
    let pairs = [
        (Quadrant::Deg0, Quadrant::Deg180),
        (Quadrant::Deg90, Quadrant::Deg270),
    ];
    let p = Position::new(1.5, -0.75);

    for (q, opposite) in pairs {
        let mut view = unit_view(2000.0);
        view.transform.quadrant = q;
        let a = view.project(&p, 1.0);
        view.transform.quadrant = opposite;
        let b = view.project(&p, 1.0);
        approx(a, -b);
    }
}

#[test]
fn test_zoom_monotonicity() {
    let p = Position::new(0.4, 0.8);
    let mut view = unit_view(3000.0);
    view.transform.pan = Vec2::new(120.0, -40.0);

    let mut previous = 0.0;
    for zoom in [0.5, 1.0, 2.0, 4.0, 8.0] {
        view.transform.zoom = zoom;
        let offset = (view.project(&p, 1.0) - view.transform.pan).length();
        assert!(
            offset > previous,
            "offset must grow with zoom, got {offset} at zoom {zoom}"
        );
        previous = offset;
    }
}

#[test]
fn test_local_scale_applies_to_devices_only() {
    let view = unit_view(1000.0);
    let p = Position::new(1.0, 2.0);

    let as_wire = view.project(&p, 1.0);
    let as_device = view.project(&p, 2.0);
    approx(as_device, as_wire * 2.0);
}

#[test]
fn test_clamp_boundaries() {
    let mut transform = Transform::new(8000.0);

    transform.zoom_by(100.0);
    assert_eq!(transform.zoom, ZOOM_MAX);
    transform.zoom_by(-100.0);
    assert_eq!(transform.zoom, ZOOM_MIN);

    assert_eq!(transform.set_scale_factor(500.0), SCALE_FACTOR_MIN);
    assert_eq!(transform.set_scale_factor(20000.0), SCALE_FACTOR_MAX);
    assert_eq!(transform.set_scale_factor(1000.0), 1000.0);
    assert_eq!(transform.set_scale_factor(15000.0), 15000.0);

    // Construction clamps too.
    assert_eq!(Transform::new(1.0).scale_factor, SCALE_FACTOR_MIN);
}

#[test]
fn test_rotate_step_wraps() {
    let mut transform = Transform::new(8000.0);
    assert_eq!(transform.quadrant, Quadrant::Deg0);

    for expected in [90.0, 180.0, 270.0, 0.0] {
        transform.rotate_step();
        assert_eq!(transform.quadrant.degrees(), expected);
    }
}

#[test]
fn test_worked_scenario_start_point() {
    // R1 and J1 both at {x:1, z:0}; quadrant 0, zoom 1, pan (0,0),
    // scale factor 1000, base scale 0.9 -> screen (900, 0).
    let view = unit_view(1000.0);
    let anchor = Position::new(1.0, 0.0);
    approx(view.project(&anchor, 1.0), Vec2::new(900.0, 0.0));
}
