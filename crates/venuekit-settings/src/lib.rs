//! VenueKit Settings Crate
//!
//! Handles editor configuration and its persistence to JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, EditorSettings, FitSettings, GridSettings, HistorySettings,
    InteractionSettings, PersistenceSettings, ViewportSettings,
};
pub use error::{SettingsError, SettingsResult};
