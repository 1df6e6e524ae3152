//! Geometry kernel.
//!
//! Pure functions over points, rectangles and polygons. None of them fail:
//! degenerate input (fewer than 3 polygon points, zero-size rectangles)
//! yields an area of 0, which callers treat as "no valid area".

use crate::model::{BoundingBox, Point, RectBounds, Shape};

/// Inclusive containment test against normalized bounds.
pub fn point_in_rectangle(p: &Point, bounds: &RectBounds) -> bool {
    let b = bounds.normalized();
    p.x >= b.x1 && p.x <= b.x2 && p.y >= b.y1 && p.y <= b.y2
}

/// Even-odd ray casting.
///
/// A horizontal ray is cast from `p` towards +X. An edge counts as a
/// crossing only when its endpoints lie strictly on opposite sides of the
/// ray (one above, one at or below), so vertices touching the ray are
/// counted once and horizontal edges never.
pub fn point_in_polygon(p: &Point, points: &[Point]) -> bool {
    if points.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Shoelace area, positive for counter-clockwise winding in a Y-up frame.
pub fn signed_polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        sum += points[j].x * points[i].y - points[i].x * points[j].y;
        j = i;
    }
    sum / 2.0
}

/// Unsigned shoelace area.
pub fn polygon_area(points: &[Point]) -> f64 {
    signed_polygon_area(points).abs()
}

/// Arithmetic mean of the vertices. The origin for an empty slice.
pub fn polygon_centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::default();
    }

    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

pub fn rectangle_area(bounds: &RectBounds) -> f64 {
    bounds.width() * bounds.height()
}

/// Bounding box of a shape. An empty polygon has a zero-size box at the origin.
pub fn bounding_box(shape: &Shape) -> BoundingBox {
    match shape {
        Shape::Rectangle { bounds } => {
            let b = bounds.normalized();
            BoundingBox::new(b.x1, b.y1, b.x2, b.y2)
        }
        Shape::Polygon { points } => points_bounding_box(points),
    }
}

pub fn points_bounding_box(points: &[Point]) -> BoundingBox {
    let Some(first) = points.first() else {
        return BoundingBox::new(0.0, 0.0, 0.0, 0.0);
    };

    points.iter().skip(1).fold(
        BoundingBox::new(first.x, first.y, first.x, first.y),
        |b, p| {
            BoundingBox::new(
                b.min_x.min(p.x),
                b.min_y.min(p.y),
                b.max_x.max(p.x),
                b.max_y.max(p.y),
            )
        },
    )
}
