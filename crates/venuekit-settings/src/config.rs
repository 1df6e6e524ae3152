//! Editor configuration for VenueKit
//!
//! Provides configuration file handling and validation for the seating
//! layout editor. Supports JSON and TOML file formats.
//!
//! Configuration is organized into logical sections:
//! - Grid snapping
//! - Viewport limits and zoom step
//! - Area-fit thresholds and seat spacing constants
//! - Interaction tolerances
//! - History depth
//! - Persistence debounce

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use venuekit_core::constants;

/// Grid snapping settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Grid spacing in world units
    pub spacing: f64,
    /// Snap placed vertices to the grid
    pub snap_enabled: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            spacing: constants::DEFAULT_GRID_SPACING,
            snap_enabled: true,
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Scale delta per wheel notch or zoom command
    pub zoom_step: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            min_scale: constants::MIN_SCALE,
            max_scale: constants::MAX_SCALE,
            zoom_step: constants::ZOOM_STEP,
            canvas_width: constants::DEFAULT_CANVAS_WIDTH,
            canvas_height: constants::DEFAULT_CANVAS_HEIGHT,
        }
    }
}

/// Area-fit validation settings.
///
/// The ratio thresholds compare `required / actual` area. The pitch values
/// are the minimum distance between seat centres (and between rows) for a
/// seat of `reference_seat_radius`; they scale linearly with seat radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitSettings {
    pub insufficient_ratio: f64,
    pub oversized_ratio: f64,
    pub shrink_advisory_ratio: f64,
    pub min_seat_pitch: f64,
    pub min_row_pitch: f64,
    pub reference_seat_radius: f64,
    /// Multiple of the strict requirement that scale-to-fit commits to
    pub expand_buffer: f64,
    pub min_seat_radius: f64,
    pub max_seat_radius: f64,
    pub min_spacing_multiplier: f64,
    pub max_spacing_multiplier: f64,
    pub relax_max_iterations: u32,
}

impl Default for FitSettings {
    fn default() -> Self {
        Self {
            insufficient_ratio: constants::INSUFFICIENT_RATIO,
            oversized_ratio: constants::OVERSIZED_RATIO,
            shrink_advisory_ratio: constants::SHRINK_ADVISORY_RATIO,
            min_seat_pitch: constants::MIN_SEAT_PITCH,
            min_row_pitch: constants::MIN_ROW_PITCH,
            reference_seat_radius: constants::REFERENCE_SEAT_RADIUS,
            expand_buffer: constants::EXPAND_BUFFER,
            min_seat_radius: constants::MIN_SEAT_RADIUS,
            max_seat_radius: constants::MAX_SEAT_RADIUS,
            min_spacing_multiplier: constants::MIN_SPACING_MULTIPLIER,
            max_spacing_multiplier: constants::MAX_SPACING_MULTIPLIER,
            relax_max_iterations: constants::RELAX_MAX_ITERATIONS,
        }
    }
}

/// Pointer interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Screen-pixel radius for hitting an existing polygon point
    pub point_hit_tolerance_px: f64,
    /// Screen-pixel radius for hitting a resize handle
    pub handle_hit_tolerance_px: f64,
    /// Minimum width and height a resize may produce (world units)
    pub min_section_size: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            point_hit_tolerance_px: constants::POINT_HIT_TOLERANCE_PX,
            handle_hit_tolerance_px: constants::HANDLE_HIT_TOLERANCE_PX,
            min_section_size: constants::MIN_SECTION_SIZE,
        }
    }
}

/// Undo/redo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    pub depth: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            depth: constants::HISTORY_DEPTH,
        }
    }
}

/// Persistence settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceSettings {
    /// Quiet period before a debounced save fires
    pub save_debounce_ms: u64,
}

impl Default for PersistenceSettings {
    fn default() -> Self {
        Self {
            save_debounce_ms: constants::SAVE_DEBOUNCE_MS,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorSettings {
    pub grid: GridSettings,
    pub viewport: ViewportSettings,
    pub fit: FitSettings,
    pub interaction: InteractionSettings,
    pub history: HistorySettings,
    pub persistence: PersistenceSettings,
}

impl EditorSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file (JSON or TOML, chosen by extension)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let settings: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        settings.validate()?;
        tracing::info!("Loaded editor settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML, chosen by extension)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load settings from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(
                "No settings file at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.grid.spacing > 0.0) {
            return Err(SettingsError::invalid("grid.spacing", "must be > 0"));
        }

        let vp = &self.viewport;
        if !(vp.min_scale > 0.0) {
            return Err(SettingsError::invalid("viewport.min_scale", "must be > 0"));
        }
        if vp.max_scale < vp.min_scale {
            return Err(SettingsError::invalid(
                "viewport.max_scale",
                "must be >= viewport.min_scale",
            ));
        }
        if !(vp.zoom_step > 0.0) {
            return Err(SettingsError::invalid("viewport.zoom_step", "must be > 0"));
        }
        if !(vp.canvas_width > 0.0) || !(vp.canvas_height > 0.0) {
            return Err(SettingsError::invalid(
                "viewport.canvas_size",
                "dimensions must be > 0",
            ));
        }

        let fit = &self.fit;
        if !(fit.oversized_ratio > 0.0)
            || fit.oversized_ratio > fit.shrink_advisory_ratio
            || fit.shrink_advisory_ratio > fit.insufficient_ratio
        {
            return Err(SettingsError::invalid(
                "fit.ratios",
                "must satisfy 0 < oversized <= shrink_advisory <= insufficient",
            ));
        }
        if !(fit.min_seat_pitch > 0.0) || !(fit.min_row_pitch > 0.0) {
            return Err(SettingsError::invalid("fit.pitch", "must be > 0"));
        }
        if !(fit.reference_seat_radius > 0.0) {
            return Err(SettingsError::invalid(
                "fit.reference_seat_radius",
                "must be > 0",
            ));
        }
        if fit.expand_buffer < 1.0 {
            return Err(SettingsError::invalid("fit.expand_buffer", "must be >= 1.0"));
        }
        if !(fit.min_seat_radius > 0.0) || fit.max_seat_radius < fit.min_seat_radius {
            return Err(SettingsError::invalid(
                "fit.seat_radius",
                "must satisfy 0 < min <= max",
            ));
        }
        if !(fit.min_spacing_multiplier > 0.0)
            || fit.max_spacing_multiplier < fit.min_spacing_multiplier
        {
            return Err(SettingsError::invalid(
                "fit.spacing_multiplier",
                "must satisfy 0 < min <= max",
            ));
        }

        let interaction = &self.interaction;
        if interaction.point_hit_tolerance_px < 0.0 || interaction.handle_hit_tolerance_px < 0.0 {
            return Err(SettingsError::invalid(
                "interaction.tolerance",
                "must be >= 0",
            ));
        }
        if interaction.min_section_size < 0.0 {
            return Err(SettingsError::invalid(
                "interaction.min_section_size",
                "must be >= 0",
            ));
        }

        if self.history.depth == 0 {
            return Err(SettingsError::invalid("history.depth", "must be > 0"));
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Default location of the editor settings file.
///
/// `<platform config dir>/venuekit/editor.toml`
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        SettingsError::ConfigDirectory("could not resolve platform config directory".to_string())
    })?;
    Ok(base.join("venuekit").join("editor.toml"))
}
