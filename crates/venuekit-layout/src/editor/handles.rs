//! Resize handles.
//!
//! Rectangles expose eight handles (four corners, four edge midpoints);
//! polygons expose one handle per vertex. Screen +Y points down, so "top"
//! is the smaller Y.

use serde::{Deserialize, Serialize};

use crate::model::{Point, RectBounds, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RectHandle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl RectHandle {
    pub const ALL: [RectHandle; 8] = [
        RectHandle::TopLeft,
        RectHandle::Top,
        RectHandle::TopRight,
        RectHandle::Right,
        RectHandle::BottomRight,
        RectHandle::Bottom,
        RectHandle::BottomLeft,
        RectHandle::Left,
    ];

    fn position(&self, b: &RectBounds) -> Point {
        let cx = (b.x1 + b.x2) / 2.0;
        let cy = (b.y1 + b.y2) / 2.0;
        match self {
            RectHandle::TopLeft => Point::new(b.x1, b.y1),
            RectHandle::Top => Point::new(cx, b.y1),
            RectHandle::TopRight => Point::new(b.x2, b.y1),
            RectHandle::Right => Point::new(b.x2, cy),
            RectHandle::BottomRight => Point::new(b.x2, b.y2),
            RectHandle::Bottom => Point::new(cx, b.y2),
            RectHandle::BottomLeft => Point::new(b.x1, b.y2),
            RectHandle::Left => Point::new(b.x1, cy),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    Rect(RectHandle),
    Vertex(usize),
}

/// All handles of `shape` with their world positions.
pub fn handle_positions(shape: &Shape) -> Vec<(Handle, Point)> {
    match shape {
        Shape::Rectangle { bounds } => {
            let b = bounds.normalized();
            RectHandle::ALL
                .iter()
                .map(|h| (Handle::Rect(*h), h.position(&b)))
                .collect()
        }
        Shape::Polygon { points } => points
            .iter()
            .enumerate()
            .map(|(i, p)| (Handle::Vertex(i), *p))
            .collect(),
    }
}

/// The handle nearest to `p` within `tolerance` world units.
pub fn handle_at(shape: &Shape, p: &Point, tolerance: f64) -> Option<Handle> {
    handle_positions(shape)
        .into_iter()
        .map(|(handle, pos)| (handle, pos.distance_to(p)))
        .filter(|(_, d)| *d <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(handle, _)| handle)
}

/// Candidate shape with `handle` moved to `p`. Rectangles stay normalized,
/// so dragging an edge past the opposite one flips the rectangle. `None`
/// when the handle does not belong to the shape.
pub fn resize_shape(original: &Shape, handle: Handle, p: Point) -> Option<Shape> {
    match (original, handle) {
        (Shape::Rectangle { bounds }, Handle::Rect(h)) => {
            let mut b = bounds.normalized();
            match h {
                RectHandle::TopLeft => {
                    b.x1 = p.x;
                    b.y1 = p.y;
                }
                RectHandle::Top => b.y1 = p.y,
                RectHandle::TopRight => {
                    b.x2 = p.x;
                    b.y1 = p.y;
                }
                RectHandle::Right => b.x2 = p.x,
                RectHandle::BottomRight => {
                    b.x2 = p.x;
                    b.y2 = p.y;
                }
                RectHandle::Bottom => b.y2 = p.y,
                RectHandle::BottomLeft => {
                    b.x1 = p.x;
                    b.y2 = p.y;
                }
                RectHandle::Left => b.x1 = p.x,
            }
            Some(Shape::Rectangle {
                bounds: b.normalized(),
            })
        }
        (Shape::Polygon { points }, Handle::Vertex(i)) if i < points.len() => {
            let mut points = points.clone();
            points[i] = p;
            Some(Shape::Polygon { points })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_has_eight_handles() {
        let handles = handle_positions(&Shape::rectangle(0.0, 0.0, 100.0, 50.0));
        assert_eq!(handles.len(), 8);
        assert!(handles.contains(&(Handle::Rect(RectHandle::Right), Point::new(100.0, 25.0))));
    }

    #[test]
    fn test_handle_at_picks_nearest() {
        let shape = Shape::rectangle(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            handle_at(&shape, &Point::new(9.0, 1.0), 8.0),
            Some(Handle::Rect(RectHandle::TopRight))
        );
        assert_eq!(handle_at(&shape, &Point::new(50.0, 50.0), 8.0), None);
    }

    #[test]
    fn test_resize_edge_moves_one_side() {
        let shape = Shape::rectangle(0.0, 0.0, 100.0, 100.0);
        let handle = Handle::Rect(RectHandle::Right);
        let resized = resize_shape(&shape, handle, Point::new(150.0, 999.0));
        assert_eq!(resized, Some(Shape::rectangle(0.0, 0.0, 150.0, 100.0)));
    }

    #[test]
    fn test_resize_polygon_vertex() {
        let shape = Shape::polygon(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ]);
        let resized = resize_shape(&shape, Handle::Vertex(1), Point::new(20.0, 0.0)).unwrap();
        assert_eq!(resized.point_count(), 3);
        assert!((resized.area() - 100.0).abs() < 0.01);
        assert!(resize_shape(&shape, Handle::Vertex(7), Point::new(0.0, 0.0)).is_none());
    }
}
