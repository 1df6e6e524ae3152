//! Read-only render snapshot.
//!
//! After every mutation the session hands the renderer a plain copy of
//! everything it needs to draw. The snapshot owns its data; nothing in it
//! aliases the live document.

use serde::Serialize;

use crate::editor::{handle_positions, Handle, InteractionState, Tool};
use crate::model::{
    BackgroundImage, CentralFeature, LayoutDocument, Point, Section, SectionId, Shape,
};
use crate::viewport::{Viewport, ViewportState};

/// A resize handle to draw for the selected section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandleMarker {
    pub handle: Handle,
    pub position: Point,
}

/// The shape currently being drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InProgressShape {
    pub shape: Shape,
    /// Parent section when an obstruction is being drawn.
    pub obstruction_of: Option<SectionId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub sections: Vec<Section>,
    pub central_feature: Option<CentralFeature>,
    pub background: Option<BackgroundImage>,
    pub selection: Option<SectionId>,
    pub handles: Vec<HandleMarker>,
    pub in_progress: Option<InProgressShape>,
    pub viewport: ViewportState,
    pub tool: Tool,
    pub state: &'static str,
}

impl RenderSnapshot {
    pub fn capture(
        document: &LayoutDocument,
        state: &InteractionState,
        viewport: &Viewport,
        tool: Tool,
    ) -> Self {
        let selection = state.selection();
        let handles = selection
            .and_then(|id| document.section(id))
            .and_then(|s| s.valid_shape())
            .map(|shape| {
                handle_positions(shape)
                    .into_iter()
                    .map(|(handle, position)| HandleMarker { handle, position })
                    .collect()
            })
            .unwrap_or_default();

        let in_progress = state.in_progress_shape().map(|shape| InProgressShape {
            shape,
            obstruction_of: match state {
                InteractionState::DrawingObstruction { section, .. } => Some(*section),
                InteractionState::PanningViewport { resume, .. } => match resume.as_ref() {
                    InteractionState::DrawingObstruction { section, .. } => Some(*section),
                    _ => None,
                },
                _ => None,
            },
        });

        Self {
            sections: document.sections.clone(),
            central_feature: document.central_feature.clone(),
            background: document.background.clone(),
            selection,
            handles,
            in_progress,
            viewport: viewport.state(),
            tool,
            state: state.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_selected_rectangle_handles() {
        let mut doc = LayoutDocument::new();
        let id = doc.add_section(Section::new("A", Some(Shape::rectangle(0.0, 0.0, 100.0, 100.0))));
        let state = InteractionState::Selected { section: id };

        let snapshot = RenderSnapshot::capture(&doc, &state, &Viewport::default(), Tool::Select);
        assert_eq!(snapshot.selection, Some(id));
        assert_eq!(snapshot.handles.len(), 8);
        assert!(snapshot.in_progress.is_none());
        assert_eq!(snapshot.state, "Selected");
    }

    #[test]
    fn test_capture_in_progress_rectangle() {
        let doc = LayoutDocument::new();
        let state = InteractionState::DrawingRectangle {
            start: Point::new(50.0, 50.0),
            current: Point::new(10.0, 20.0),
        };
        let snapshot = RenderSnapshot::capture(&doc, &state, &Viewport::default(), Tool::Rectangle);
        let draft = snapshot.in_progress.unwrap();
        assert_eq!(draft.shape, Shape::rectangle(10.0, 20.0, 50.0, 50.0));
        assert!(draft.obstruction_of.is_none());
    }
}
