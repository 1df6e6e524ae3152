//! # VenueKit
//!
//! Core of a venue seating-layout editor. Operators draw the sections of a
//! venue (rectangles or polygons), mark obstructions inside them and place a
//! central feature such as a stage or rink. Every section carries a seat
//! configuration, and the area-fit validator checks that the drawn shape is
//! large enough for its seats.
//!
//! ## Architecture
//!
//! VenueKit is organized as a workspace with multiple crates:
//!
//! 1. **venuekit-core** - Error types, shared constants and type aliases
//! 2. **venuekit-settings** - Editor settings with TOML/JSON persistence
//! 3. **venuekit-layout** - Geometry, area fit, viewport, interaction state
//!    machine, history, layout document, persistence and render snapshots
//! 4. **venuekit** - This crate: re-exports, logging setup and the layout
//!    report CLI
//!
//! ## Features
//!
//! - **Drawing**: rectangles and click-to-place polygons with grid snapping
//! - **Editing**: select, drag, handle-based resize guarded by seat requirements
//! - **Navigation**: pan and zoom about the pointer
//! - **History**: 50-step undo/redo over whole-layout snapshots
//! - **Persistence**: pluggable stores with a debounced, coalescing autosave

pub mod report;

pub use venuekit_core::{constants, Error, LayoutError, PersistenceError, Result, SchedulerError};

pub use venuekit_settings::{
    default_config_path, EditorSettings, FitSettings, GridSettings, HistorySettings,
    InteractionSettings, PersistenceSettings, SettingsError, ViewportSettings,
};

pub use venuekit_layout::{
    area_fit, geometry, BackgroundImage, BackgroundTransform, BoundingBox, CapacitySummary,
    CentralFeature, CoalescingScheduler, EditorSession, FeatureKind, FitClass, FitReport,
    HistoryManager, InputEvent, InteractionState, JsonFileStore, Key, LayoutDocument, LayoutStore,
    MemoryStore, Modifiers, Obstruction, Point, PointerButton, RectBounds, RenderSnapshot,
    RowConfig, SeatCapacity, Section, SectionId, Shape, SpacingConfig, Tool, Viewport,
};

pub use report::{CliArgs, LayoutReport, SectionReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - stderr output with pretty formatting, keeping stdout for reports
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
