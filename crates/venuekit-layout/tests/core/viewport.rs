use venuekit_layout::{snap_to_grid, BoundingBox, Point, Viewport};
use venuekit_settings::ViewportSettings;

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new(1200.0, 800.0);
    assert_eq!(vp.scale(), 1.0);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
    assert_eq!(vp.canvas_width(), 1200.0);
}

#[test]
fn test_screen_to_world_with_pan_and_scale() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.set_pan(100.0, 50.0);
    vp.zoom_to(2.0, Point::new(100.0, 50.0));

    let world = vp.screen_to_world(Point::new(300.0, 250.0));
    assert!((world.x - 100.0).abs() < 0.01);
    assert!((world.y - 100.0).abs() < 0.01);

    let screen = vp.world_to_screen(world);
    assert!((screen.x - 300.0).abs() < 0.01);
    assert!((screen.y - 250.0).abs() < 0.01);
}

#[test]
fn test_zoom_keeps_anchor_fixed() {
    let mut vp = Viewport::new(1200.0, 800.0);
    let anchor = Point::new(400.0, 300.0);
    let before = vp.screen_to_world(anchor);

    vp.zoom_by(0.1, anchor);

    assert!((vp.scale() - 1.1).abs() < 1e-9);
    let after = vp.screen_to_world(anchor);
    assert!((after.x - before.x).abs() < 1e-9);
    assert!((after.y - before.y).abs() < 1e-9);
}

#[test]
fn test_zoom_clamps_to_settings() {
    let settings = ViewportSettings {
        min_scale: 0.5,
        max_scale: 2.0,
        ..Default::default()
    };
    let mut vp = Viewport::from_settings(&settings);
    vp.zoom_by(10.0, Point::new(0.0, 0.0));
    assert_eq!(vp.scale(), 2.0);
    vp.zoom_by(-10.0, Point::new(0.0, 0.0));
    assert_eq!(vp.scale(), 0.5);
}

#[test]
fn test_pan_accumulates_screen_delta() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.zoom_to(3.0, Point::new(0.0, 0.0));
    vp.pan_by(12.0, 8.0);
    vp.pan_by(-2.0, 2.0);
    assert_eq!(vp.pan_x(), 10.0);
    assert_eq!(vp.pan_y(), 10.0);
}

#[test]
fn test_fit_to_bounds_centers_content() {
    let mut vp = Viewport::new(1200.0, 800.0);
    let bounds = BoundingBox::new(0.0, 0.0, 600.0, 400.0);
    vp.fit_to_bounds(&bounds, 0.05);

    let padding_factor = 1.0 - 0.05 * 2.0;
    let expected = ((1200.0 * padding_factor) / 600.0_f64).min((800.0 * padding_factor) / 400.0);
    assert!((vp.scale() - expected).abs() < 1e-10);

    let center = vp.world_to_screen(bounds.center());
    assert!((center.x - 600.0).abs() < 0.01);
    assert!((center.y - 400.0).abs() < 0.01);
}

#[test]
fn test_fit_to_empty_bounds_is_noop() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.fit_to_bounds(&BoundingBox::new(5.0, 5.0, 5.0, 5.0), 0.05);
    assert_eq!(vp.scale(), 1.0);
}

#[test]
fn test_reset() {
    let mut vp = Viewport::new(1200.0, 800.0);
    vp.zoom_to(3.0, Point::new(10.0, 10.0));
    vp.pan_by(5.0, 5.0);
    vp.reset();
    assert_eq!(vp.scale(), 1.0);
    assert_eq!(vp.pan_x(), 0.0);
}

#[test]
fn test_grid_snapping() {
    let p = snap_to_grid(Point::new(101.0, 248.0), 5.0);
    assert_eq!(p, Point::new(100.0, 250.0));
    let p = snap_to_grid(Point::new(101.0, 248.0), 25.0);
    assert_eq!(p, Point::new(100.0, 250.0));
}
