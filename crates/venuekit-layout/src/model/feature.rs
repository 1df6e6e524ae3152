//! The venue's central feature (stage, rink, field, court).

use serde::{Deserialize, Serialize};

use super::shape::Shape;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Stage,
    Rink,
    Field,
    Court,
    Custom(String),
}

impl FeatureKind {
    pub fn label(&self) -> &str {
        match self {
            FeatureKind::Stage => "Stage",
            FeatureKind::Rink => "Rink",
            FeatureKind::Field => "Field",
            FeatureKind::Court => "Court",
            FeatureKind::Custom(label) => label,
        }
    }
}

/// Metadata of an image drawn inside the feature outline. The editor never
/// decodes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceImage {
    pub source: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralFeature {
    pub kind: FeatureKind,
    pub shape: Shape,
    #[serde(default)]
    pub reference_image: Option<ReferenceImage>,
}

impl CentralFeature {
    pub fn new(kind: FeatureKind, shape: Shape) -> Self {
        Self {
            kind,
            shape,
            reference_image: None,
        }
    }

    pub fn with_reference_image(mut self, image: ReferenceImage) -> Self {
        self.reference_image = Some(image);
        self
    }
}
