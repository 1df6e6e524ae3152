//! Background reference image placement.
//!
//! Only the transform numbers are stored; decoding and drawing the image is
//! left to the renderer. The background is not part of undo history.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackgroundTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    /// Degrees, clockwise.
    pub rotation: f64,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f64,
    pub visible: bool,
}

impl Default for BackgroundTransform {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            rotation: 0.0,
            opacity: 1.0,
            visible: true,
        }
    }
}

impl BackgroundTransform {
    /// Clamps opacity into `[0, 1]` and rejects non-positive scales.
    /// Non-finite values fall back to the defaults.
    pub fn sanitized(mut self) -> Self {
        self.opacity = if self.opacity.is_finite() {
            self.opacity.clamp(0.0, 1.0)
        } else {
            1.0
        };
        if !self.scale.is_finite() || self.scale <= 0.0 {
            self.scale = 1.0;
        }
        self.rotation = if self.rotation.is_finite() {
            self.rotation.rem_euclid(360.0)
        } else {
            0.0
        };
        if !self.translate_x.is_finite() {
            self.translate_x = 0.0;
        }
        if !self.translate_y.is_finite() {
            self.translate_y = 0.0;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundImage {
    pub source: String,
    #[serde(default)]
    pub transform: BackgroundTransform,
}

impl BackgroundImage {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            transform: BackgroundTransform::default(),
        }
    }
}
