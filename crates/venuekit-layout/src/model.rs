//! Layout data model.
//!
//! All coordinates are world units (abstract pixels, no physical unit).
//! Shapes are plain values; sections own their obstructions and the
//! document owns its sections exclusively.

pub mod background;
pub mod document;
pub mod feature;
pub mod section;
pub mod shape;

pub use background::{BackgroundImage, BackgroundTransform};
pub use document::{CapacitySummary, LayoutDocument, LayoutSnapshot};
pub use feature::{CentralFeature, FeatureKind, ReferenceImage};
pub use section::{Obstruction, RowConfig, SeatCapacity, Section, SectionId, SpacingConfig};
pub use shape::{BoundingBox, Point, RectBounds, Shape};
