//! Tools and interaction states.

use serde::{Deserialize, Serialize};

use super::handles::Handle;
use crate::model::{Point, RectBounds, SectionId, Shape};

/// The active drawing tool, chosen explicitly by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Select,
    Rectangle,
    Polygon,
    ObstructionRectangle,
    ObstructionPolygon,
    Pan,
}

impl Tool {
    pub fn draws_obstructions(&self) -> bool {
        matches!(self, Tool::ObstructionRectangle | Tool::ObstructionPolygon)
    }
}

/// An obstruction outline being drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum Draft {
    Rectangle { start: Point, current: Point },
    Polygon { points: Vec<Point> },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    DrawingRectangle {
        start: Point,
        current: Point,
    },
    DrawingPolygon {
        points: Vec<Point>,
    },
    Selected {
        section: SectionId,
    },
    Dragging {
        section: SectionId,
        /// Pointer position minus the shape's reference point at grab time.
        grab_offset: Point,
        moved: bool,
    },
    Resizing {
        section: SectionId,
        handle: Handle,
        original_shape: Shape,
        changed: bool,
    },
    PanningViewport {
        last_pointer: Point,
        /// State to return to when the pan ends.
        resume: Box<InteractionState>,
    },
    DrawingObstruction {
        section: SectionId,
        draft: Draft,
    },
}

impl InteractionState {
    /// The section the operator is working on, if any.
    pub fn selection(&self) -> Option<SectionId> {
        match self {
            InteractionState::Selected { section }
            | InteractionState::Dragging { section, .. }
            | InteractionState::Resizing { section, .. } => Some(*section),
            InteractionState::PanningViewport { resume, .. } => resume.selection(),
            _ => None,
        }
    }

    /// Section referenced by this state, including an obstruction's parent.
    pub fn referenced_section(&self) -> Option<SectionId> {
        match self {
            InteractionState::DrawingObstruction { section, .. } => Some(*section),
            InteractionState::PanningViewport { resume, .. } => resume.referenced_section(),
            other => other.selection(),
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(
            self,
            InteractionState::DrawingRectangle { .. }
                | InteractionState::DrawingPolygon { .. }
                | InteractionState::DrawingObstruction { .. }
        )
    }

    /// Outline of the shape being drawn, as drawn so far.
    pub fn in_progress_shape(&self) -> Option<Shape> {
        match self {
            InteractionState::DrawingRectangle { start, current }
            | InteractionState::DrawingObstruction {
                draft: Draft::Rectangle { start, current },
                ..
            } => Some(Shape::Rectangle {
                bounds: RectBounds::from_corners(*start, *current).normalized(),
            }),
            InteractionState::DrawingPolygon { points }
            | InteractionState::DrawingObstruction {
                draft: Draft::Polygon { points },
                ..
            } => Some(Shape::Polygon {
                points: points.clone(),
            }),
            InteractionState::PanningViewport { resume, .. } => resume.in_progress_shape(),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            InteractionState::Idle => "Idle",
            InteractionState::DrawingRectangle { .. } => "DrawingRectangle",
            InteractionState::DrawingPolygon { .. } => "DrawingPolygon",
            InteractionState::Selected { .. } => "Selected",
            InteractionState::Dragging { .. } => "Dragging",
            InteractionState::Resizing { .. } => "Resizing",
            InteractionState::PanningViewport { .. } => "PanningViewport",
            InteractionState::DrawingObstruction { .. } => "DrawingObstruction",
        }
    }
}
