//! Default tuning values for the layout editor.
//!
//! These are product tuning values, not geometric law. Every one of them is
//! surfaced through `venuekit_settings::EditorSettings` so a deployment can
//! override it; the constants here only seed the defaults.

/// Grid spacing (world units) used when snapping vertices.
pub const DEFAULT_GRID_SPACING: f64 = 5.0;

/// Smallest allowed viewport scale.
pub const MIN_SCALE: f64 = 0.1;

/// Largest allowed viewport scale.
pub const MAX_SCALE: f64 = 5.0;

/// Scale delta applied per wheel notch.
pub const ZOOM_STEP: f64 = 0.1;

/// Default canvas size in screen pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 800.0;

/// Fraction of the canvas reserved on each edge by fit-to-bounds.
pub const VIEW_PADDING: f64 = 0.05;

/// `required / actual` above this is classified as insufficient.
pub const INSUFFICIENT_RATIO: f64 = 1.05;

/// `required / actual` below this is classified as oversized.
pub const OVERSIZED_RATIO: f64 = 0.5;

/// `required / actual` below this yields a "could shrink" advisory.
pub const SHRINK_ADVISORY_RATIO: f64 = 0.9;

/// Minimum horizontal distance between seat centres at the reference radius.
pub const MIN_SEAT_PITCH: f64 = 20.0;

/// Minimum vertical distance between rows at the reference radius.
pub const MIN_ROW_PITCH: f64 = 25.0;

/// Seat radius at which the pitch constants apply unscaled.
pub const REFERENCE_SEAT_RADIUS: f64 = 10.0;

/// Commit scale-to-fit remediation at this multiple of the strict requirement.
pub const EXPAND_BUFFER: f64 = 1.10;

/// Seat radius clamp used by spacing relaxation.
pub const MIN_SEAT_RADIUS: f64 = 4.0;
pub const MAX_SEAT_RADIUS: f64 = 20.0;

/// Spacing multiplier clamp used by spacing relaxation.
pub const MIN_SPACING_MULTIPLIER: f64 = 0.5;
pub const MAX_SPACING_MULTIPLIER: f64 = 3.0;

/// Upper bound on relaxation passes.
pub const RELAX_MAX_ITERATIONS: u32 = 20;

/// Pixel radius within which a click hits an existing polygon point.
pub const POINT_HIT_TOLERANCE_PX: f64 = 8.0;

/// Pixel radius within which a click hits a resize handle.
pub const HANDLE_HIT_TOLERANCE_PX: f64 = 8.0;

/// Minimum width and height (world units) a resize may produce.
pub const MIN_SECTION_SIZE: f64 = 50.0;

/// Undo/redo depth.
pub const HISTORY_DEPTH: usize = 50;

/// Quiet period before a debounced save fires.
pub const SAVE_DEBOUNCE_MS: u64 = 800;
