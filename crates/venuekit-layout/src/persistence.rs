//! Layout persistence collaborators.
//!
//! The editor talks to storage through [`LayoutStore`]: load a venue's
//! layout, save it back. Both calls may fail; the core never retries and a
//! failed save leaves the in-memory document untouched.
//!
//! [`JsonFileStore`] keeps one pretty-printed JSON file per venue with a
//! format version and timestamps. [`MemoryStore`] keeps layouts in memory
//! for previews and tests.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use venuekit_core::PersistenceError;

use crate::model::{BackgroundImage, CentralFeature, LayoutDocument, Section};

/// Layout file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

#[async_trait]
pub trait LayoutStore: Send + Sync {
    /// Loads the stored layout for `venue_id`.
    async fn load_layout(&self, venue_id: &str) -> Result<LayoutDocument, PersistenceError>;

    /// Stores `layout` as the layout of `venue_id`.
    async fn save_layout(
        &self,
        venue_id: &str,
        layout: &LayoutDocument,
    ) -> Result<(), PersistenceError>;
}

/// Layout file metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutMetadata {
    pub venue_id: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// On-disk layout file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutFile {
    pub version: String,
    pub metadata: LayoutMetadata,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub central_feature: Option<CentralFeature>,
    #[serde(default)]
    pub background: Option<BackgroundImage>,
}

impl LayoutFile {
    pub fn new(venue_id: impl Into<String>, layout: &LayoutDocument) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: LayoutMetadata {
                venue_id: venue_id.into(),
                created: now,
                modified: now,
            },
            sections: layout.sections.clone(),
            central_feature: layout.central_feature.clone(),
            background: layout.background.clone(),
        }
    }

    /// Checks the major format version.
    pub fn check_version(&self) -> Result<(), PersistenceError> {
        let major = |v: &str| v.split('.').next().map(str::to_owned);
        if major(&self.version) == major(FILE_FORMAT_VERSION) {
            Ok(())
        } else {
            Err(PersistenceError::Rejected(format!(
                "unsupported layout format version {}",
                self.version
            )))
        }
    }

    pub fn into_document(self) -> LayoutDocument {
        LayoutDocument {
            sections: self.sections,
            central_feature: self.central_feature,
            background: self.background,
        }
    }
}

/// One JSON file per venue under a root directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `venue_id`'s layout. Characters outside
    /// `[A-Za-z0-9_-]` are replaced with `_`.
    pub fn path_for(&self, venue_id: &str) -> Result<PathBuf, PersistenceError> {
        if venue_id.trim().is_empty() {
            return Err(PersistenceError::Rejected("empty venue id".to_string()));
        }
        let file_stem: String = venue_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        Ok(self.root.join(format!("{file_stem}.json")))
    }

    /// Reads and parses a layout file directly.
    pub async fn read_file(path: &Path) -> Result<LayoutFile, PersistenceError> {
        let content = tokio::fs::read_to_string(path).await?;
        let file: LayoutFile = serde_json::from_str(&content)?;
        file.check_version()?;
        Ok(file)
    }
}

#[async_trait]
impl LayoutStore for JsonFileStore {
    async fn load_layout(&self, venue_id: &str) -> Result<LayoutDocument, PersistenceError> {
        let path = self.path_for(venue_id)?;
        let file = match Self::read_file(&path).await {
            Ok(file) => file,
            Err(PersistenceError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PersistenceError::NotFound {
                    venue_id: venue_id.to_string(),
                })
            }
            Err(e) => return Err(e),
        };

        tracing::info!(
            "Loaded layout for venue '{}' ({} sections) from {}",
            venue_id,
            file.sections.len(),
            path.display()
        );
        Ok(file.into_document())
    }

    async fn save_layout(
        &self,
        venue_id: &str,
        layout: &LayoutDocument,
    ) -> Result<(), PersistenceError> {
        let path = self.path_for(venue_id)?;
        let mut file = LayoutFile::new(venue_id, layout);

        // Keep the original creation time when overwriting.
        if let Ok(existing) = Self::read_file(&path).await {
            file.metadata.created = existing.metadata.created;
        }

        let json = serde_json::to_string_pretty(&file)?;
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(&path, json).await?;

        tracing::info!("Saved layout for venue '{}' to {}", venue_id, path.display());
        Ok(())
    }
}

/// In-memory layouts keyed by venue id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    layouts: Mutex<HashMap<String, LayoutDocument>>,
    saves: AtomicUsize,
    rejecting: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, venue_id: impl Into<String>, layout: LayoutDocument) {
        self.layouts.lock().insert(venue_id.into(), layout);
    }

    pub fn get(&self, venue_id: &str) -> Option<LayoutDocument> {
        self.layouts.lock().get(venue_id).cloned()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Makes every following save fail with [`PersistenceError::Rejected`].
    pub fn set_rejecting(&self, rejecting: bool) {
        self.rejecting.store(rejecting, Ordering::SeqCst);
    }
}

#[async_trait]
impl LayoutStore for MemoryStore {
    async fn load_layout(&self, venue_id: &str) -> Result<LayoutDocument, PersistenceError> {
        self.get(venue_id).ok_or_else(|| PersistenceError::NotFound {
            venue_id: venue_id.to_string(),
        })
    }

    async fn save_layout(
        &self,
        venue_id: &str,
        layout: &LayoutDocument,
    ) -> Result<(), PersistenceError> {
        if self.rejecting.load(Ordering::SeqCst) {
            return Err(PersistenceError::Rejected(format!(
                "store is not accepting layouts for '{venue_id}'"
            )));
        }
        self.insert(venue_id, layout.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
