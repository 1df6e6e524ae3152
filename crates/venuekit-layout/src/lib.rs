//! # VenueKit Layout
//!
//! The seating-layout editing core. Operators define venue sections
//! (rectangles or polygons) and obstructions inside them, the area-fit
//! validator checks that every section is large enough for its seats, and
//! an interaction state machine turns pointer and keyboard input into
//! draw, select, drag and resize operations with pan, zoom, grid snapping
//! and undo/redo.
//!
//! ## Modules
//!
//! - [`geometry`] - containment, area, centroid and bounding boxes
//! - [`area_fit`] - required vs. drawn area, scale-to-fit, spacing relaxation
//! - [`viewport`] - screen/world transform, zoom about a point, grid snapping
//! - [`editor`] - tools, interaction states and the pure input reducer
//! - [`history`] - bounded linear undo/redo over document snapshots
//! - [`model`] - sections, obstructions, central feature, layout document
//! - [`render`] - read-only snapshot handed to renderers
//! - [`persistence`] - load/save collaborators
//! - [`scheduler`] - debounced, coalescing side effects
//! - [`session`] - the editing session tying it all together
//!
//! Rendering pixels is not part of this crate; hosts register a render
//! callback and draw the [`RenderSnapshot`] they receive.

pub mod area_fit;
pub mod editor;
pub mod geometry;
pub mod history;
pub mod model;
pub mod persistence;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod viewport;

pub use area_fit::{FitClass, FitReport, RelaxOutcome, RequiredDimensions};
pub use editor::{
    reduce, Draft, EditorAction, Handle, InputEvent, InteractionState, Key, Modifiers,
    PointerButton, RectHandle, ReduceContext, Tool, Transition,
};
pub use history::HistoryManager;
pub use model::{
    BackgroundImage, BackgroundTransform, BoundingBox, CapacitySummary, CentralFeature,
    FeatureKind, LayoutDocument, LayoutSnapshot, Obstruction, Point, RectBounds, ReferenceImage,
    RowConfig, SeatCapacity, Section, SectionId, Shape, SpacingConfig,
};
pub use persistence::{JsonFileStore, LayoutFile, LayoutStore, MemoryStore};
pub use render::{HandleMarker, InProgressShape, RenderSnapshot};
pub use scheduler::CoalescingScheduler;
pub use session::EditorSession;
pub use viewport::{snap_to_grid, Viewport, ViewportState};
