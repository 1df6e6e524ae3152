//! The layout document and its history snapshots.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use venuekit_core::LayoutError;

use super::background::BackgroundImage;
use super::feature::CentralFeature;
use super::section::{Obstruction, Section, SectionId, SpacingConfig};
use super::shape::{BoundingBox, Point};

/// The sections and central feature at one point in history.
///
/// Snapshots are structural clones of the document; they never share data
/// with the live document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub sections: Vec<Section>,
    pub central_feature: Option<CentralFeature>,
}

impl LayoutSnapshot {
    pub fn new(sections: &[Section], central_feature: Option<&CentralFeature>) -> Self {
        Self {
            sections: sections.to_vec(),
            central_feature: central_feature.cloned(),
        }
    }
}

/// Seat count of one section, as handed to manifest generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacitySummary {
    pub section: SectionId,
    pub name: String,
    pub display_order: u32,
    pub seats: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub sections: Vec<Section>,
    #[serde(default)]
    pub central_feature: Option<CentralFeature>,
    #[serde(default)]
    pub background: Option<BackgroundImage>,
}

impl LayoutDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    /// Like [`section_mut`](Self::section_mut) but reports unknown ids.
    pub fn require_section_mut(&mut self, id: SectionId) -> Result<&mut Section, LayoutError> {
        self.section_mut(id).ok_or(LayoutError::UnknownSection(id))
    }

    pub fn contains_section(&self, id: SectionId) -> bool {
        self.section(id).is_some()
    }

    pub fn add_section(&mut self, section: Section) -> SectionId {
        let id = section.id;
        self.sections.push(section);
        id
    }

    pub fn remove_section(&mut self, id: SectionId) -> Option<Section> {
        let index = self.sections.iter().position(|s| s.id == id)?;
        Some(self.sections.remove(index))
    }

    pub fn add_obstruction(
        &mut self,
        section: SectionId,
        obstruction: Obstruction,
    ) -> Result<Uuid, LayoutError> {
        let id = obstruction.id;
        self.require_section_mut(section)?.obstructions.push(obstruction);
        Ok(id)
    }

    pub fn remove_obstruction(
        &mut self,
        section: SectionId,
        obstruction: Uuid,
    ) -> Result<Obstruction, LayoutError> {
        let target = self.require_section_mut(section)?;
        let index = target
            .obstructions
            .iter()
            .position(|o| o.id == obstruction)
            .ok_or(LayoutError::UnknownObstruction(obstruction))?;
        Ok(target.obstructions.remove(index))
    }

    /// Topmost section whose shape contains `p`. Later sections draw on top
    /// of earlier ones, so the search runs in reverse document order.
    pub fn hit_test(&self, p: &Point) -> Option<SectionId> {
        self.sections
            .iter()
            .rev()
            .find(|s| s.valid_shape().is_some_and(|shape| shape.contains(p)))
            .map(|s| s.id)
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::new(&self.sections, self.central_feature.as_ref())
    }

    /// Replaces sections and central feature with the snapshot's. The
    /// background is not part of history and is kept.
    pub fn restore(&mut self, snapshot: &LayoutSnapshot) {
        self.sections = snapshot.sections.clone();
        self.central_feature = snapshot.central_feature.clone();
    }

    /// Checks the one hard save precondition: a section with seats needs a
    /// valid drawn shape.
    pub fn validate_for_save(&self) -> Result<(), LayoutError> {
        for section in &self.sections {
            if section.capacity.has_seats() && section.valid_shape().is_none() {
                return Err(LayoutError::MissingShape {
                    section: section.id,
                    name: section.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Drops geometry that must never live in a document: invalid section
    /// shapes become `None`, invalid obstructions and central features are
    /// removed, and unusable spacing is reset to the default. Returns how
    /// many items were dropped or reset.
    pub fn sanitize(&mut self) -> usize {
        let mut dropped = 0;
        for section in &mut self.sections {
            if section.shape.as_ref().is_some_and(|s| !s.is_valid()) {
                tracing::warn!("Dropping invalid shape of section '{}'", section.name);
                section.shape = None;
                dropped += 1;
            }
            if !section.spacing.is_valid() {
                tracing::warn!("Resetting invalid spacing of section '{}'", section.name);
                section.spacing = SpacingConfig::default();
                dropped += 1;
            }
            let before = section.obstructions.len();
            section.obstructions.retain(|o| o.shape.is_valid());
            dropped += before - section.obstructions.len();
        }
        if self
            .central_feature
            .as_ref()
            .is_some_and(|f| !f.shape.is_valid())
        {
            tracing::warn!("Dropping central feature with invalid shape");
            self.central_feature = None;
            dropped += 1;
        }
        dropped
    }

    pub fn total_capacity(&self) -> u64 {
        self.sections
            .iter()
            .map(|s| u64::from(s.total_seats()))
            .sum()
    }

    /// Per-section seat counts ordered by display order.
    pub fn capacity_summary(&self) -> Vec<CapacitySummary> {
        let mut summary: Vec<CapacitySummary> = self
            .sections
            .iter()
            .map(|s| CapacitySummary {
                section: s.id,
                name: s.name.clone(),
                display_order: s.display_order,
                seats: s.total_seats(),
            })
            .collect();
        summary.sort_by_key(|s| s.display_order);
        summary
    }

    /// Bounds of every drawn shape, or `None` for an empty layout.
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.sections
            .iter()
            .filter_map(|s| s.valid_shape())
            .chain(self.central_feature.iter().map(|f| &f.shape))
            .map(|shape| shape.bounding_box())
            .reduce(|a, b| a.union(&b))
    }

    pub fn next_display_order(&self) -> u32 {
        self.sections
            .iter()
            .map(|s| s.display_order.saturating_add(1))
            .max()
            .unwrap_or(0)
    }
}
