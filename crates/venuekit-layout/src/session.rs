//! Editing session.
//!
//! The session owns the layout document exclusively and wires the pieces
//! together: input events go through the reducer, the resulting actions
//! mutate the document, committed steps are pushed to history, and the
//! render callback receives a fresh snapshot after every change.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;
use venuekit_core::{constants, Error, LayoutError, RenderCallback, Result};
use venuekit_settings::EditorSettings;

use crate::area_fit::{self, FitReport, RelaxOutcome};
use crate::editor::{
    reduce, EditorAction, InputEvent, InteractionState, ReduceContext, Tool, Transition,
};
use crate::history::HistoryManager;
use crate::model::{
    BackgroundImage, BackgroundTransform, CapacitySummary, CentralFeature, LayoutDocument,
    Obstruction, SeatCapacity, Section, SectionId, SpacingConfig,
};
use crate::persistence::LayoutStore;
use crate::render::RenderSnapshot;
use crate::scheduler::CoalescingScheduler;
use crate::viewport::Viewport;

pub struct EditorSession {
    venue_id: String,
    document: LayoutDocument,
    state: InteractionState,
    tool: Tool,
    viewport: Viewport,
    history: HistoryManager,
    settings: EditorSettings,
    render_callback: Option<RenderCallback<RenderSnapshot>>,
    store: Option<Arc<dyn LayoutStore>>,
    autosave: CoalescingScheduler,
}

impl EditorSession {
    pub fn new(venue_id: impl Into<String>, settings: EditorSettings) -> Self {
        Self::with_document(venue_id, LayoutDocument::new(), settings)
    }

    pub fn with_document(
        venue_id: impl Into<String>,
        document: LayoutDocument,
        settings: EditorSettings,
    ) -> Self {
        let history = HistoryManager::with_initial(document.snapshot(), settings.history.depth);
        Self {
            venue_id: venue_id.into(),
            viewport: Viewport::from_settings(&settings.viewport),
            autosave: CoalescingScheduler::from_millis(settings.persistence.save_debounce_ms),
            document,
            state: InteractionState::Idle,
            tool: Tool::default(),
            history,
            settings,
            render_callback: None,
            store: None,
        }
    }

    pub fn with_store(mut self, store: Arc<dyn LayoutStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Loads `venue_id` from `store` and opens a session on it.
    pub async fn open(
        venue_id: impl Into<String>,
        settings: EditorSettings,
        store: Arc<dyn LayoutStore>,
    ) -> Result<Self> {
        let mut session = Self::new(venue_id, settings).with_store(store);
        session.load().await?;
        Ok(session)
    }

    pub fn set_render_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&RenderSnapshot) + 'static,
    {
        self.render_callback = Some(Box::new(callback));
        self.render();
    }

    pub fn venue_id(&self) -> &str {
        &self.venue_id
    }

    pub fn document(&self) -> &LayoutDocument {
        &self.document
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn selection(&self) -> Option<SectionId> {
        self.state.selection()
    }

    pub fn render_snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.document, &self.state, &self.viewport, self.tool)
    }

    fn render(&mut self) {
        if self.render_callback.is_none() {
            return;
        }
        let snapshot = self.render_snapshot();
        if let Some(callback) = self.render_callback.as_mut() {
            callback(&snapshot);
        }
    }

    fn commit(&mut self) {
        self.history.push(self.document.snapshot());
        debug!(
            "History step {} of {}",
            self.history.index() + 1,
            self.history.len()
        );
    }

    /// Ends a state that refers to a section that no longer exists.
    fn reconcile_state(&mut self) {
        if let Some(id) = self.state.referenced_section() {
            if !self.document.contains_section(id) {
                self.state = InteractionState::Idle;
            }
        }
    }

    // ----- Input -----

    /// Feeds one input event through the interaction state machine.
    /// Returns true when anything visible changed.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        let Transition {
            next,
            actions,
            commit,
        } = {
            let ctx = ReduceContext {
                document: &self.document,
                viewport: &self.viewport,
                tool: self.tool,
                settings: &self.settings,
            };
            reduce(&self.state, &event, &ctx)
        };

        let previous = std::mem::replace(&mut self.state, next);
        let state_changed = previous != self.state;
        if previous.name() != self.state.name() {
            debug!("Interaction {} -> {}", previous.name(), self.state.name());
        }

        let mut mutated = false;
        for action in actions {
            mutated |= self.apply(action);
        }
        if commit {
            self.commit();
        }
        self.reconcile_state();

        let changed = mutated || state_changed;
        if changed {
            self.render();
        }
        changed
    }

    fn apply(&mut self, action: EditorAction) -> bool {
        match action {
            EditorAction::AddSection { shape } => {
                let name = format!("Section {}", self.document.sections.len() + 1);
                let mut section = Section::new(name, Some(shape));
                section.display_order = self.document.next_display_order();
                info!("Added section '{}'", section.name);
                self.document.add_section(section);
                true
            }
            EditorAction::AddObstruction { section, shape } => {
                let count = self
                    .document
                    .section(section)
                    .map_or(0, |s| s.obstructions.len());
                let obstruction = Obstruction::new(format!("Obstruction {}", count + 1), shape);
                match self.document.add_obstruction(section, obstruction) {
                    Ok(_) => true,
                    Err(e) => {
                        warn!("Dropping obstruction: {}", e);
                        false
                    }
                }
            }
            EditorAction::UpdateShape { section, shape } => {
                match self.document.section_mut(section) {
                    Some(target) => {
                        target.shape = Some(shape);
                        true
                    }
                    None => false,
                }
            }
            EditorAction::DeleteSection { section } => match self.document.remove_section(section) {
                Some(removed) => {
                    info!("Deleted section '{}'", removed.name);
                    true
                }
                None => false,
            },
            EditorAction::PanBy { dx, dy } => {
                self.viewport.pan_by(dx, dy);
                true
            }
            EditorAction::ZoomAt { delta, anchor } => {
                self.viewport.zoom_by(delta, anchor);
                true
            }
            EditorAction::Undo => self.step_history(false),
            EditorAction::Redo => self.step_history(true),
        }
    }

    /// Switches the drawing tool. Any gesture in progress ends; a selection
    /// survives only into the obstruction tools, which draw inside it.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool == tool {
            return;
        }
        self.tool = tool;

        let pending_commit = matches!(
            self.state,
            InteractionState::Dragging { moved: true, .. }
                | InteractionState::Resizing { changed: true, .. }
        );
        if pending_commit {
            self.commit();
        }

        self.state = match (self.state.selection(), tool.draws_obstructions()) {
            (Some(section), true) => InteractionState::Selected { section },
            _ => InteractionState::Idle,
        };
        debug!("Tool set to {:?}", tool);
        self.render();
    }

    // ----- History -----

    fn step_history(&mut self, forward: bool) -> bool {
        let snapshot = if forward {
            self.history.redo()
        } else {
            self.history.undo()
        };
        match snapshot {
            Some(snapshot) => {
                self.document.restore(snapshot);
                self.reconcile_state();
                true
            }
            None => false,
        }
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.step_history(false);
        if changed {
            self.render();
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.step_history(true);
        if changed {
            self.render();
        }
        changed
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ----- Form edits -----

    fn edit_section<R>(
        &mut self,
        id: SectionId,
        edit: impl FnOnce(&mut Section) -> R,
    ) -> std::result::Result<R, LayoutError> {
        let result = edit(self.document.require_section_mut(id)?);
        self.commit();
        self.render();
        Ok(result)
    }

    /// Adds a section without a shape; it is drawn later.
    pub fn add_section(&mut self, name: impl Into<String>, capacity: SeatCapacity) -> SectionId {
        let mut section = Section::new(name, None).with_capacity(capacity);
        section.display_order = self.document.next_display_order();
        let id = self.document.add_section(section);
        self.commit();
        self.render();
        id
    }

    pub fn rename_section(
        &mut self,
        id: SectionId,
        name: impl Into<String>,
    ) -> std::result::Result<(), LayoutError> {
        let name = name.into();
        self.edit_section(id, |s| s.name = name)
    }

    /// Replaces the seat configuration and returns the new fit advisory.
    pub fn set_section_capacity(
        &mut self,
        id: SectionId,
        capacity: SeatCapacity,
    ) -> std::result::Result<FitReport, LayoutError> {
        let fit = self.settings.fit.clone();
        self.edit_section(id, |s| {
            s.capacity = capacity;
            area_fit::fit_report(s, &fit)
        })
    }

    /// Replaces the spacing and returns the new fit advisory.
    pub fn set_section_spacing(
        &mut self,
        id: SectionId,
        spacing: SpacingConfig,
    ) -> std::result::Result<FitReport, LayoutError> {
        if !spacing.is_valid() {
            return Err(LayoutError::InvalidSpacing(format!(
                "radius {} and multipliers {}/{} must be positive",
                spacing.seat_radius, spacing.seat_spacing, spacing.row_spacing
            )));
        }
        let fit = self.settings.fit.clone();
        self.edit_section(id, |s| {
            s.spacing = spacing;
            area_fit::fit_report(s, &fit)
        })
    }

    pub fn set_display_order(
        &mut self,
        id: SectionId,
        order: u32,
    ) -> std::result::Result<(), LayoutError> {
        self.edit_section(id, |s| s.display_order = order)
    }

    pub fn delete_section(&mut self, id: SectionId) -> std::result::Result<Section, LayoutError> {
        let removed = self
            .document
            .remove_section(id)
            .ok_or(LayoutError::UnknownSection(id))?;
        self.reconcile_state();
        self.commit();
        self.render();
        Ok(removed)
    }

    pub fn remove_obstruction(
        &mut self,
        section: SectionId,
        obstruction: Uuid,
    ) -> std::result::Result<Obstruction, LayoutError> {
        let removed = self.document.remove_obstruction(section, obstruction)?;
        self.commit();
        self.render();
        Ok(removed)
    }

    /// Selects a section programmatically (e.g. from a list).
    pub fn select(&mut self, id: SectionId) -> std::result::Result<(), LayoutError> {
        if !self.document.contains_section(id) {
            return Err(LayoutError::UnknownSection(id));
        }
        self.state = InteractionState::Selected { section: id };
        self.render();
        Ok(())
    }

    // ----- Area fit -----

    pub fn fit_report(&self, id: SectionId) -> std::result::Result<FitReport, LayoutError> {
        let section = self
            .document
            .section(id)
            .ok_or(LayoutError::UnknownSection(id))?;
        Ok(area_fit::fit_report(section, &self.settings.fit))
    }

    /// Scales the section's shape to its seat requirement plus the expand
    /// buffer. Returns false when there is nothing to scale.
    pub fn expand_section_to_fit(
        &mut self,
        id: SectionId,
    ) -> std::result::Result<bool, LayoutError> {
        let section = self
            .document
            .section(id)
            .ok_or(LayoutError::UnknownSection(id))?;
        let Some(shape) = area_fit::expand_to_fit(section, &self.settings.fit) else {
            return Ok(false);
        };
        self.edit_section(id, |s| s.shape = Some(shape))?;
        Ok(true)
    }

    /// Shrinks spacing until the seats fit the drawn shape. The relaxed
    /// spacing is committed only when it differs from the current one and
    /// does not raise the requirement.
    pub fn relax_section_spacing(
        &mut self,
        id: SectionId,
        scale_factor: f64,
    ) -> std::result::Result<RelaxOutcome, LayoutError> {
        let section = self
            .document
            .section(id)
            .ok_or(LayoutError::UnknownSection(id))?;
        let outcome = area_fit::relax_spacing(section, scale_factor, &self.settings.fit);
        let before = area_fit::required_area(section, &self.settings.fit);
        if outcome.spacing != section.spacing && outcome.required_area <= before {
            let spacing = outcome.spacing;
            self.edit_section(id, |s| s.spacing = spacing)?;
        }
        Ok(outcome)
    }

    // ----- Central feature and background -----

    /// Sets, replaces or removes the central feature.
    pub fn set_central_feature(
        &mut self,
        feature: Option<CentralFeature>,
    ) -> std::result::Result<(), LayoutError> {
        if let Some(f) = &feature {
            if !f.shape.is_valid() {
                return Err(LayoutError::InvalidGeometry(format!(
                    "{} outline has no area",
                    f.kind.label()
                )));
            }
        }
        self.document.central_feature = feature;
        self.commit();
        self.render();
        Ok(())
    }

    /// Sets or clears the background image. Not an undoable step; requests a
    /// debounced save instead.
    pub fn set_background(&mut self, background: Option<BackgroundImage>) -> Result<()> {
        self.document.background = background;
        self.render();
        self.autosave_background();
        Ok(())
    }

    /// Updates the background transform. Rapid updates (slider drags)
    /// coalesce into one save after the quiet period.
    pub fn set_background_transform(&mut self, transform: BackgroundTransform) -> Result<()> {
        let Some(background) = self.document.background.as_mut() else {
            return Err(Error::other("no background image set"));
        };
        background.transform = transform.sanitized();
        self.render();
        self.autosave_background();
        Ok(())
    }

    /// Background edits are saved fire-and-forget; a missing runtime only
    /// skips the save, the edit itself stands.
    fn autosave_background(&mut self) {
        if let Err(e) = self.request_save() {
            warn!("Background change not scheduled for saving: {}", e);
        }
    }

    // ----- Capacity -----

    pub fn total_capacity(&self) -> u64 {
        self.document.total_capacity()
    }

    pub fn capacity_summary(&self) -> Vec<CapacitySummary> {
        self.document.capacity_summary()
    }

    // ----- Viewport -----

    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.viewport.set_canvas_size(width, height);
        self.render();
    }

    /// Zooms by `steps` zoom steps about the canvas center.
    pub fn zoom_steps(&mut self, steps: i32) {
        let anchor = crate::model::Point::new(
            self.viewport.canvas_width() / 2.0,
            self.viewport.canvas_height() / 2.0,
        );
        self.viewport
            .zoom_by(f64::from(steps) * self.settings.viewport.zoom_step, anchor);
        self.render();
    }

    /// Fits the whole layout into the canvas.
    pub fn fit_view(&mut self) {
        if let Some(bounds) = self.document.bounds() {
            self.viewport.fit_to_bounds(&bounds, constants::VIEW_PADDING);
            self.render();
        }
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
        self.render();
    }

    // ----- Persistence -----

    /// Requests a debounced save of the current document. Returns false when
    /// no store is attached or the document does not meet the save
    /// precondition.
    pub fn request_save(&mut self) -> Result<bool> {
        let Some(store) = self.store.clone() else {
            debug!("No layout store attached; skipping save request");
            return Ok(false);
        };
        if let Err(e) = self.document.validate_for_save() {
            warn!("Not saving layout: {}", e);
            return Ok(false);
        }

        let venue_id = self.venue_id.clone();
        let document = self.document.clone();
        self.autosave.schedule(move || async move {
            if let Err(e) = store.save_layout(&venue_id, &document).await {
                warn!("Debounced save for venue '{}' failed: {}", venue_id, e);
            }
        })?;
        Ok(true)
    }

    /// True while a debounced save is waiting for its quiet period.
    pub fn save_pending(&self) -> bool {
        self.autosave.is_pending()
    }

    /// Saves immediately. The document is left as-is when the store fails.
    pub async fn save(&mut self) -> Result<()> {
        self.document.validate_for_save()?;
        let store = self
            .store
            .clone()
            .ok_or_else(|| Error::other("no layout store attached"))?;

        self.autosave.cancel();
        let document = self.document.clone();
        store.save_layout(&self.venue_id, &document).await?;
        Ok(())
    }

    /// Replaces the document with the stored layout and starts a new history.
    pub async fn load(&mut self) -> Result<()> {
        let store = self
            .store
            .clone()
            .ok_or_else(|| Error::other("no layout store attached"))?;

        let mut document = store.load_layout(&self.venue_id).await?;
        let dropped = document.sanitize();
        if dropped > 0 {
            warn!("Sanitized {} invalid items in stored layout", dropped);
        }
        self.replace_document(document);
        Ok(())
    }

    /// Replaces the document wholesale; history restarts from it.
    pub fn replace_document(&mut self, document: LayoutDocument) {
        self.autosave.cancel();
        self.document = document;
        self.history.reset(self.document.snapshot());
        self.state = InteractionState::Idle;
        info!(
            "Opened layout for venue '{}' with {} sections",
            self.venue_id,
            self.document.sections.len()
        );
        self.render();
    }
}
