//! Viewport and coordinate transformation.
//!
//! Converts between screen coordinates (pointer positions, pixels) and
//! world coordinates (layout space). Both spaces have +Y pointing down, so
//! the mapping is a plain scale and offset:
//!
//! ```text
//! world  = (screen - pan) / scale
//! screen = world * scale + pan
//! ```
//!
//! The viewport is ephemeral editor state and never enters undo history.

use std::fmt;

use serde::{Deserialize, Serialize};
use venuekit_core::constants;
use venuekit_settings::ViewportSettings;

use crate::model::{BoundingBox, Point};

/// Pan and scale, as exposed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub pan_x: f64,
    pub pan_y: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pan_x: f64,
    pan_y: f64,
    scale: f64,
    canvas_width: f64,
    canvas_height: f64,
    min_scale: f64,
    max_scale: f64,
}

impl Viewport {
    /// Creates a viewport at scale 1.0 with the world origin at the top-left
    /// corner of the canvas.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            scale: 1.0,
            canvas_width,
            canvas_height,
            min_scale: constants::MIN_SCALE,
            max_scale: constants::MAX_SCALE,
        }
    }

    pub fn from_settings(settings: &ViewportSettings) -> Self {
        let mut viewport = Self::new(settings.canvas_width, settings.canvas_height);
        viewport.set_scale_limits(settings.min_scale, settings.max_scale);
        viewport
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when the host resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Sets the allowed scale range and re-clamps the current scale.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        if min_scale > 0.0 && max_scale >= min_scale {
            self.min_scale = min_scale;
            self.max_scale = max_scale;
            self.scale = self.clamp_scale(self.scale);
        }
    }

    fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_finite() {
            scale.clamp(self.min_scale, self.max_scale)
        } else {
            self.scale
        }
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a screen-space delta. The delta is not scaled.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    pub fn state(&self) -> ViewportState {
        ViewportState {
            pan_x: self.pan_x,
            pan_y: self.pan_y,
            scale: self.scale,
        }
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan_x) / self.scale,
            (screen.y - self.pan_y) / self.scale,
        )
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.scale + self.pan_x,
            world.y * self.scale + self.pan_y,
        )
    }

    /// Converts a screen-pixel distance to world units at the current scale.
    pub fn screen_distance_to_world(&self, pixels: f64) -> f64 {
        pixels / self.scale
    }

    /// Adds `delta` to the scale, keeping the world point under `anchor`
    /// (screen coordinates) at the same screen position.
    pub fn zoom_by(&mut self, delta: f64, anchor: Point) {
        self.zoom_to(self.scale + delta, anchor);
    }

    /// Sets the scale (clamped) keeping `anchor` stationary.
    pub fn zoom_to(&mut self, scale: f64, anchor: Point) {
        let world = self.screen_to_world(anchor);
        self.scale = self.clamp_scale(scale);
        self.pan_x = anchor.x - world.x * self.scale;
        self.pan_y = anchor.y - world.y * self.scale;
    }

    /// Fits the given bounding box into the canvas with padding.
    ///
    /// `padding` is the fraction of the canvas reserved on each edge
    /// (0.0 - 0.5). Empty boxes leave the viewport untouched.
    pub fn fit_to_bounds(&mut self, bounds: &BoundingBox, padding: f64) {
        let width = bounds.width();
        let height = bounds.height();
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let padding_factor = 1.0 - (padding.clamp(0.0, 0.49) * 2.0);
        let scale_x = (self.canvas_width * padding_factor) / width;
        let scale_y = (self.canvas_height * padding_factor) / height;
        self.scale = self.clamp_scale(scale_x.min(scale_y));

        let center = bounds.center();
        self.pan_x = self.canvas_width / 2.0 - center.x * self.scale;
        self.pan_y = self.canvas_height / 2.0 - center.y * self.scale;
    }

    /// Fits with the default padding.
    pub fn fit_to_view(&mut self, bounds: &BoundingBox) {
        self.fit_to_bounds(bounds, constants::VIEW_PADDING);
    }

    /// Back to scale 1.0 with no pan.
    pub fn reset(&mut self) {
        self.scale = self.clamp_scale(1.0);
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(constants::DEFAULT_CANVAS_WIDTH, constants::DEFAULT_CANVAS_HEIGHT)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Viewport(scale: {:.2}, pan: ({:.2}, {:.2}), canvas: {}x{})",
            self.scale, self.pan_x, self.pan_y, self.canvas_width, self.canvas_height
        )
    }
}

/// Rounds each coordinate to the nearest multiple of `spacing`.
/// Non-positive spacing returns the point unchanged.
pub fn snap_to_grid(point: Point, spacing: f64) -> Point {
    if spacing.is_nan() || spacing <= 0.0 {
        return point;
    }
    Point::new(
        (point.x / spacing).round() * spacing,
        (point.y / spacing).round() * spacing,
    )
}
