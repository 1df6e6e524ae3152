use venuekit_layout::geometry::{
    bounding_box, point_in_polygon, point_in_rectangle, polygon_area, polygon_centroid,
};
use venuekit_layout::{BoundingBox, Point, RectBounds, Shape};

fn square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 100.0),
    ]
}

#[test]
fn test_square_polygon_area_and_centroid() {
    let pts = square();
    assert!((polygon_area(&pts) - 10000.0).abs() < 0.01);

    let c = polygon_centroid(&pts);
    assert!((c.x - 50.0).abs() < 0.01);
    assert!((c.y - 50.0).abs() < 0.01);
}

#[test]
fn test_centroid_is_vertex_mean() {
    // Extra vertex on the bottom edge pulls the vertex mean down
    let pts = vec![
        Point::new(0.0, 0.0),
        Point::new(50.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 100.0),
        Point::new(0.0, 100.0),
    ];
    let c = polygon_centroid(&pts);
    assert!((c.x - 50.0).abs() < 0.01);
    assert!((c.y - 40.0).abs() < 0.01);
}

#[test]
fn test_rectangle_area() {
    let shape = Shape::rectangle(100.0, 100.0, 300.0, 250.0);
    assert!((shape.area() - 30000.0).abs() < 0.01);
}

#[test]
fn test_point_in_rectangle_edges() {
    let bounds = RectBounds::new(0.0, 0.0, 10.0, 10.0);
    assert!(point_in_rectangle(&Point::new(0.0, 10.0), &bounds));
    assert!(point_in_rectangle(&Point::new(5.0, 5.0), &bounds));
    assert!(!point_in_rectangle(&Point::new(-0.1, 5.0), &bounds));
}

#[test]
fn test_point_in_polygon_triangle() {
    let tri = vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(50.0, 100.0),
    ];
    assert!(point_in_polygon(&Point::new(50.0, 50.0), &tri));
    assert!(!point_in_polygon(&Point::new(90.0, 90.0), &tri));
    assert!(!point_in_polygon(&Point::new(50.0, 50.0), &tri[..2]));
}

#[test]
fn test_bounding_box_of_shapes() {
    assert_eq!(
        bounding_box(&Shape::rectangle(30.0, 40.0, 10.0, 20.0)),
        BoundingBox::new(10.0, 20.0, 30.0, 40.0)
    );
    assert_eq!(
        bounding_box(&Shape::polygon(square())),
        BoundingBox::new(0.0, 0.0, 100.0, 100.0)
    );
}
