//! Points, rectangles, polygons and their bounding boxes.

use serde::{Deserialize, Serialize};

use crate::geometry;

/// A point in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns this point moved by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Rectangle corners as drawn. The corners may be in any order; use
/// [`RectBounds::normalized`] before comparing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectBounds {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl RectBounds {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Reorders the corners so that `x1 <= x2` and `y1 <= y2`.
    pub fn normalized(&self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }

    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }
}

/// Section, obstruction or central feature outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Rectangle { bounds: RectBounds },
    Polygon { points: Vec<Point> },
}

impl Shape {
    pub fn rectangle(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Shape::Rectangle {
            bounds: RectBounds::new(x1, y1, x2, y2),
        }
    }

    pub fn polygon(points: Vec<Point>) -> Self {
        Shape::Polygon { points }
    }

    /// Unsigned area; 0 for degenerate shapes.
    pub fn area(&self) -> f64 {
        match self {
            Shape::Rectangle { bounds } => bounds.width() * bounds.height(),
            Shape::Polygon { points } => geometry::polygon_area(points),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        geometry::bounding_box(self)
    }

    pub fn contains(&self, p: &Point) -> bool {
        match self {
            Shape::Rectangle { bounds } => geometry::point_in_rectangle(p, bounds),
            Shape::Polygon { points } => geometry::point_in_polygon(p, points),
        }
    }

    /// Anchor used for dragging and scaling: the center of a rectangle,
    /// the vertex mean of a polygon.
    pub fn reference_point(&self) -> Point {
        match self {
            Shape::Rectangle { bounds } => bounds.center(),
            Shape::Polygon { points } => geometry::polygon_centroid(points),
        }
    }

    /// A polygon needs at least 3 points, and every shape needs a non-zero area.
    pub fn is_valid(&self) -> bool {
        if let Shape::Polygon { points } = self {
            if points.len() < 3 {
                return false;
            }
        }
        self.area() > 0.0
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Rectangle { bounds } => {
                bounds.x1 += dx;
                bounds.x2 += dx;
                bounds.y1 += dy;
                bounds.y2 += dy;
            }
            Shape::Polygon { points } => {
                for p in points.iter_mut() {
                    p.x += dx;
                    p.y += dy;
                }
            }
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Shape {
        let mut shape = self.clone();
        shape.translate(dx, dy);
        shape
    }

    /// Scales the shape about `origin` by `factor` in both axes.
    pub fn scaled_about(&self, origin: Point, factor: f64) -> Shape {
        let scale = |p: Point| {
            Point::new(
                origin.x + (p.x - origin.x) * factor,
                origin.y + (p.y - origin.y) * factor,
            )
        };
        match self {
            Shape::Rectangle { bounds } => {
                let b = bounds.normalized();
                let a = scale(Point::new(b.x1, b.y1));
                let c = scale(Point::new(b.x2, b.y2));
                Shape::Rectangle {
                    bounds: RectBounds::from_corners(a, c).normalized(),
                }
            }
            Shape::Polygon { points } => Shape::Polygon {
                points: points.iter().copied().map(scale).collect(),
            },
        }
    }

    pub fn point_count(&self) -> usize {
        match self {
            Shape::Rectangle { .. } => 4,
            Shape::Polygon { points } => points.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_bounds() {
        let b = RectBounds::new(300.0, 250.0, 100.0, 100.0).normalized();
        assert_eq!(b, RectBounds::new(100.0, 100.0, 300.0, 250.0));
    }

    #[test]
    fn test_rectangle_area_any_corner_order() {
        let shape = Shape::rectangle(300.0, 250.0, 100.0, 100.0);
        assert!((shape.area() - 30000.0).abs() < 0.01);
    }

    #[test]
    fn test_polygon_with_two_points_is_invalid() {
        let shape = Shape::polygon(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        assert!(!shape.is_valid());
        assert_eq!(shape.area(), 0.0);
    }

    #[test]
    fn test_zero_size_rectangle_is_invalid() {
        assert!(!Shape::rectangle(5.0, 5.0, 5.0, 40.0).is_valid());
    }

    #[test]
    fn test_translate_rectangle() {
        let shape = Shape::rectangle(0.0, 0.0, 10.0, 20.0).translated(5.0, -5.0);
        assert_eq!(shape, Shape::rectangle(5.0, -5.0, 15.0, 15.0));
    }

    #[test]
    fn test_scaled_about_center_keeps_center() {
        let shape = Shape::rectangle(0.0, 0.0, 100.0, 50.0);
        let scaled = shape.scaled_about(shape.reference_point(), 2.0);
        assert_eq!(scaled.reference_point(), Point::new(50.0, 25.0));
        assert!((scaled.area() - 20000.0).abs() < 0.01);
    }

    #[test]
    fn test_shape_serde_tag() {
        let json = serde_json::to_string(&Shape::rectangle(0.0, 0.0, 1.0, 1.0)).unwrap();
        assert!(json.contains("\"type\":\"rectangle\""));
    }
}
