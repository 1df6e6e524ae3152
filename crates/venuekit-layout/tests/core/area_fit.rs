use venuekit_layout::area_fit::{
    classify, fit_report, required_area, required_dimensions, scale_shape_to_area, FitClass,
};
use venuekit_layout::{Point, SeatCapacity, Section, Shape};
use venuekit_settings::FitSettings;

#[test]
fn test_drawn_rectangle_without_seats_fits() {
    let fit = FitSettings::default();
    let section = Section::new("Lawn", Some(Shape::rectangle(100.0, 100.0, 300.0, 250.0)));

    let report = fit_report(&section, &fit);
    assert_eq!(report.required_area, 0.0);
    assert!((report.actual_area - 30000.0).abs() < 0.01);
    assert_eq!(report.class, FitClass::Fits);
    assert!(report.ratio.is_none());
}

#[test]
fn test_ten_rows_of_twenty_requirement() {
    let fit = FitSettings::default();
    let section = Section::new("Floor", None).with_capacity(SeatCapacity::grid(10, 20));

    let dims = required_dimensions(&section, &fit).unwrap();
    assert!((dims.width - 400.0).abs() < 0.01);
    assert!((dims.height - 250.0).abs() < 0.01);
    assert!((required_area(&section, &fit) - 100000.0).abs() < 0.01);
}

#[test]
fn test_small_shape_is_insufficient() {
    let fit = FitSettings::default();
    let section = Section::new("Floor", Some(Shape::rectangle(0.0, 0.0, 40.0, 40.0)))
        .with_capacity(SeatCapacity::grid(10, 20));
    assert_eq!(fit_report(&section, &fit).class, FitClass::Insufficient);
}

#[test]
fn test_huge_shape_is_oversized() {
    let fit = FitSettings::default();
    let section = Section::new("Floor", Some(Shape::rectangle(0.0, 0.0, 1000.0, 1000.0)))
        .with_capacity(SeatCapacity::grid(10, 20));
    let report = fit_report(&section, &fit);
    assert_eq!(report.class, FitClass::Oversized);
    assert!(report.could_shrink);
}

#[test]
fn test_missing_shape_with_seats_is_insufficient() {
    let fit = FitSettings::default();
    let section = Section::new("Floor", None).with_capacity(SeatCapacity::total(50));
    assert_eq!(fit_report(&section, &fit).class, FitClass::Insufficient);
}

#[test]
fn test_thresholds_are_configurable() {
    let mut fit = FitSettings::default();
    fit.insufficient_ratio = 1.5;
    assert_eq!(classify(120.0, 100.0, &fit), FitClass::Fits);
    fit.insufficient_ratio = 1.05;
    assert_eq!(classify(120.0, 100.0, &fit), FitClass::Insufficient);
}

#[test]
fn test_scale_polygon_to_area_keeps_centroid() {
    let shape = Shape::polygon(vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 100.0),
    ]);
    let scaled = scale_shape_to_area(&shape, 40000.0).unwrap();
    assert!((scaled.area() - 40000.0).abs() < 0.01);

    let c = scaled.reference_point();
    assert!((c.x - 50.0).abs() < 0.01);
    assert!((c.y - 50.0).abs() < 0.01);
}
