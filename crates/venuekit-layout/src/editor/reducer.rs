//! The pure interaction reducer.
//!
//! `reduce(state, event, ctx)` maps an input event onto the next
//! interaction state and the document mutations it implies. Malformed
//! gestures (zero-area rectangles, polygons with fewer than 3 points,
//! resizes that violate the seat requirement) produce no actions.

use tracing::debug;
use venuekit_settings::EditorSettings;

use super::handles::{handle_at, resize_shape, Handle};
use super::input::{InputEvent, Key, Modifiers, PointerButton};
use super::state::{Draft, InteractionState, Tool};
use crate::area_fit::required_dimensions;
use crate::model::{LayoutDocument, Point, RectBounds, Section, SectionId, Shape};
use crate::viewport::{snap_to_grid, Viewport};

/// Read-only inputs to the reducer.
#[derive(Debug, Clone, Copy)]
pub struct ReduceContext<'a> {
    pub document: &'a LayoutDocument,
    pub viewport: &'a Viewport,
    pub tool: Tool,
    pub settings: &'a EditorSettings,
}

impl<'a> ReduceContext<'a> {
    fn world(&self, screen: Point) -> Point {
        self.viewport.screen_to_world(screen)
    }

    /// World position of `screen`, snapped to the grid when snapping is on.
    fn placed(&self, screen: Point) -> Point {
        let world = self.world(screen);
        if self.settings.grid.snap_enabled {
            snap_to_grid(world, self.settings.grid.spacing)
        } else {
            world
        }
    }

    fn point_tolerance(&self) -> f64 {
        self.viewport
            .screen_distance_to_world(self.settings.interaction.point_hit_tolerance_px)
    }

    fn handle_tolerance(&self) -> f64 {
        self.viewport
            .screen_distance_to_world(self.settings.interaction.handle_hit_tolerance_px)
    }

    fn section_shape(&self, id: SectionId) -> Option<&'a Shape> {
        self.document.section(id).and_then(|s| s.valid_shape())
    }
}

/// A document mutation requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    AddSection { shape: Shape },
    AddObstruction { section: SectionId, shape: Shape },
    UpdateShape { section: SectionId, shape: Shape },
    DeleteSection { section: SectionId },
    PanBy { dx: f64, dy: f64 },
    ZoomAt { delta: f64, anchor: Point },
    Undo,
    Redo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: InteractionState,
    pub actions: Vec<EditorAction>,
    /// Push a history snapshot once the actions are applied.
    pub commit: bool,
}

impl Transition {
    fn to(next: InteractionState) -> Self {
        Self {
            next,
            actions: Vec::new(),
            commit: false,
        }
    }

    fn stay(state: &InteractionState) -> Self {
        Self::to(state.clone())
    }

    fn with(mut self, action: EditorAction) -> Self {
        self.actions.push(action);
        self
    }

    fn committed(mut self, commit: bool) -> Self {
        self.commit = commit;
        self
    }
}

enum DraftStep {
    Continue(Draft),
    Complete(Shape),
    Abort,
    Ignore,
}

pub fn reduce(state: &InteractionState, event: &InputEvent, ctx: &ReduceContext<'_>) -> Transition {
    // A section removed underneath the state (undo, form delete) ends the gesture.
    if let Some(id) = state.referenced_section() {
        if !ctx.document.contains_section(id) {
            return reduce(&InteractionState::Idle, event, ctx);
        }
    }

    match event {
        InputEvent::Wheel { position, delta_y } => return wheel(state, *position, *delta_y, ctx),
        InputEvent::KeyDown { key, modifiers } if modifiers.ctrl => {
            return shortcut(state, key, modifiers)
        }
        InputEvent::PointerDown {
            position,
            button,
            modifiers,
        } if starts_pan(state, *button, modifiers, ctx.tool) => {
            return Transition::to(InteractionState::PanningViewport {
                last_pointer: *position,
                resume: Box::new(state.clone()),
            });
        }
        _ => {}
    }

    match state {
        InteractionState::Idle => idle(event, ctx),
        InteractionState::Selected { section } => selected(state, *section, event, ctx),
        InteractionState::DrawingRectangle { start, current } => {
            let draft = Draft::Rectangle {
                start: *start,
                current: *current,
            };
            finish_draft(state, draft_step(&draft, event, ctx), section_draft_state, |shape| {
                EditorAction::AddSection { shape }
            })
        }
        InteractionState::DrawingPolygon { points } => {
            let draft = Draft::Polygon {
                points: points.clone(),
            };
            finish_draft(state, draft_step(&draft, event, ctx), section_draft_state, |shape| {
                EditorAction::AddSection { shape }
            })
        }
        InteractionState::DrawingObstruction { section, draft } => {
            let section = *section;
            finish_draft(
                state,
                draft_step(draft, event, ctx),
                |draft| InteractionState::DrawingObstruction { section, draft },
                |shape| EditorAction::AddObstruction { section, shape },
            )
        }
        InteractionState::Dragging {
            section,
            grab_offset,
            moved,
        } => dragging(state, *section, *grab_offset, *moved, event, ctx),
        InteractionState::Resizing {
            section,
            handle,
            original_shape,
            changed,
        } => resizing(state, *section, *handle, original_shape, *changed, event, ctx),
        InteractionState::PanningViewport {
            last_pointer,
            resume,
        } => panning(state, *last_pointer, resume, event),
    }
}

fn starts_pan(
    state: &InteractionState,
    button: PointerButton,
    modifiers: &Modifiers,
    tool: Tool,
) -> bool {
    if matches!(state, InteractionState::PanningViewport { .. }) {
        return false;
    }
    match button {
        PointerButton::Middle => true,
        PointerButton::Left => modifiers.space || tool == Tool::Pan,
        PointerButton::Right => false,
    }
}

fn wheel(
    state: &InteractionState,
    anchor: Point,
    delta_y: f64,
    ctx: &ReduceContext<'_>,
) -> Transition {
    if delta_y == 0.0 || !delta_y.is_finite() {
        return Transition::stay(state);
    }
    let delta = -delta_y.signum() * ctx.settings.viewport.zoom_step;
    Transition::stay(state).with(EditorAction::ZoomAt { delta, anchor })
}

fn shortcut(state: &InteractionState, key: &Key, modifiers: &Modifiers) -> Transition {
    let action = if key.is_char('z') && !modifiers.shift {
        EditorAction::Undo
    } else if key.is_char('y') || (key.is_char('z') && modifiers.shift) {
        EditorAction::Redo
    } else {
        return Transition::stay(state);
    };

    // History moves only between gestures.
    match state {
        InteractionState::Idle | InteractionState::Selected { .. } => {
            Transition::to(InteractionState::Idle).with(action)
        }
        _ => Transition::stay(state),
    }
}

fn idle(event: &InputEvent, ctx: &ReduceContext<'_>) -> Transition {
    match event {
        InputEvent::PointerDown {
            position,
            button: PointerButton::Left,
            ..
        } => begin(*position, None, ctx),
        _ => Transition::to(InteractionState::Idle),
    }
}

/// Starts whatever the active tool does on a left press.
fn begin(position: Point, selected: Option<SectionId>, ctx: &ReduceContext<'_>) -> Transition {
    let world = ctx.world(position);
    match ctx.tool {
        Tool::Select | Tool::Pan => match ctx.document.hit_test(&world) {
            Some(section) => start_drag(section, world, ctx),
            None => Transition::to(InteractionState::Idle),
        },
        Tool::Rectangle => {
            let p = ctx.placed(position);
            Transition::to(InteractionState::DrawingRectangle { start: p, current: p })
        }
        Tool::Polygon => Transition::to(InteractionState::DrawingPolygon {
            points: vec![ctx.placed(position)],
        }),
        Tool::ObstructionRectangle | Tool::ObstructionPolygon => {
            let Some(section) = selected.or_else(|| ctx.document.hit_test(&world)) else {
                debug!("Obstruction needs a parent section; ignoring click");
                return Transition::to(InteractionState::Idle);
            };
            let p = ctx.placed(position);
            let draft = if ctx.tool == Tool::ObstructionRectangle {
                Draft::Rectangle { start: p, current: p }
            } else {
                Draft::Polygon { points: vec![p] }
            };
            Transition::to(InteractionState::DrawingObstruction { section, draft })
        }
    }
}

fn start_drag(section: SectionId, world: Point, ctx: &ReduceContext<'_>) -> Transition {
    let Some(shape) = ctx.section_shape(section) else {
        return Transition::to(InteractionState::Selected { section });
    };
    let reference = shape.reference_point();
    Transition::to(InteractionState::Dragging {
        section,
        grab_offset: Point::new(world.x - reference.x, world.y - reference.y),
        moved: false,
    })
}

fn selected(
    state: &InteractionState,
    section: SectionId,
    event: &InputEvent,
    ctx: &ReduceContext<'_>,
) -> Transition {
    match event {
        InputEvent::PointerDown {
            position,
            button: PointerButton::Left,
            ..
        } => {
            if ctx.tool == Tool::Select {
                if let Some(shape) = ctx.section_shape(section) {
                    let world = ctx.world(*position);
                    if let Some(handle) = handle_at(shape, &world, ctx.handle_tolerance()) {
                        return Transition::to(InteractionState::Resizing {
                            section,
                            handle,
                            original_shape: shape.clone(),
                            changed: false,
                        });
                    }
                }
            }
            begin(*position, Some(section), ctx)
        }
        InputEvent::KeyDown {
            key: Key::Delete | Key::Backspace,
            ..
        } => Transition::to(InteractionState::Idle)
            .with(EditorAction::DeleteSection { section })
            .committed(true),
        InputEvent::KeyDown {
            key: Key::Escape, ..
        } => Transition::to(InteractionState::Idle),
        _ => Transition::stay(state),
    }
}

fn section_draft_state(draft: Draft) -> InteractionState {
    match draft {
        Draft::Rectangle { start, current } => {
            InteractionState::DrawingRectangle { start, current }
        }
        Draft::Polygon { points } => InteractionState::DrawingPolygon { points },
    }
}

fn finish_draft(
    state: &InteractionState,
    step: DraftStep,
    wrap: impl FnOnce(Draft) -> InteractionState,
    emit: impl FnOnce(Shape) -> EditorAction,
) -> Transition {
    match step {
        DraftStep::Continue(draft) => Transition::to(wrap(draft)),
        DraftStep::Complete(shape) => Transition::to(InteractionState::Idle)
            .with(emit(shape))
            .committed(true),
        DraftStep::Abort => Transition::to(InteractionState::Idle),
        DraftStep::Ignore => Transition::stay(state),
    }
}

fn draft_step(draft: &Draft, event: &InputEvent, ctx: &ReduceContext<'_>) -> DraftStep {
    match draft {
        Draft::Rectangle { start, .. } => rectangle_step(*start, event, ctx),
        Draft::Polygon { points } => polygon_step(points, event, ctx),
    }
}

fn rectangle_step(start: Point, event: &InputEvent, ctx: &ReduceContext<'_>) -> DraftStep {
    match event {
        InputEvent::PointerMove { position, .. } => DraftStep::Continue(Draft::Rectangle {
            start,
            current: ctx.placed(*position),
        }),
        InputEvent::PointerUp {
            position,
            button: PointerButton::Left,
            ..
        } => {
            let end = ctx.placed(*position);
            let shape = Shape::Rectangle {
                bounds: RectBounds::from_corners(start, end).normalized(),
            };
            if shape.is_valid() {
                DraftStep::Complete(shape)
            } else {
                debug!("Discarding zero-area rectangle");
                DraftStep::Abort
            }
        }
        InputEvent::KeyDown {
            key: Key::Escape, ..
        } => DraftStep::Abort,
        _ => DraftStep::Ignore,
    }
}

fn polygon_step(points: &[Point], event: &InputEvent, ctx: &ReduceContext<'_>) -> DraftStep {
    match event {
        InputEvent::PointerDown {
            position,
            button: PointerButton::Left,
            ..
        } => {
            let points = toggle_point(
                points,
                ctx.world(*position),
                ctx.placed(*position),
                ctx.point_tolerance(),
            );
            if points.is_empty() {
                DraftStep::Abort
            } else {
                DraftStep::Continue(Draft::Polygon { points })
            }
        }
        InputEvent::DoubleClick { .. }
        | InputEvent::KeyDown {
            key: Key::Enter, ..
        } => {
            let shape = Shape::polygon(points.to_vec());
            if shape.is_valid() {
                DraftStep::Complete(shape)
            } else {
                debug!("Polygon with {} points cannot be completed", points.len());
                DraftStep::Ignore
            }
        }
        InputEvent::KeyDown {
            key: Key::Backspace | Key::Delete,
            ..
        } => {
            let mut points = points.to_vec();
            points.pop();
            if points.is_empty() {
                DraftStep::Abort
            } else {
                DraftStep::Continue(Draft::Polygon { points })
            }
        }
        InputEvent::KeyDown {
            key: Key::Escape, ..
        } => DraftStep::Abort,
        _ => DraftStep::Ignore,
    }
}

/// Removes the point nearest to `world` if it lies within `tolerance`,
/// otherwise appends `placed`.
pub fn toggle_point(points: &[Point], world: Point, placed: Point, tolerance: f64) -> Vec<Point> {
    let hit = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.distance_to(&world)))
        .filter(|(_, d)| *d <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i);

    let mut points = points.to_vec();
    match hit {
        Some(i) => {
            points.remove(i);
        }
        None => points.push(placed),
    }
    points
}

fn dragging(
    state: &InteractionState,
    section: SectionId,
    grab_offset: Point,
    moved: bool,
    event: &InputEvent,
    ctx: &ReduceContext<'_>,
) -> Transition {
    match event {
        InputEvent::PointerMove { position, .. } => {
            let Some(shape) = ctx.section_shape(section) else {
                return Transition::to(InteractionState::Selected { section });
            };
            let world = ctx.world(*position);
            let reference = shape.reference_point();
            let dx = world.x - grab_offset.x - reference.x;
            let dy = world.y - grab_offset.y - reference.y;
            if dx == 0.0 && dy == 0.0 {
                return Transition::stay(state);
            }
            Transition::to(InteractionState::Dragging {
                section,
                grab_offset,
                moved: true,
            })
            .with(EditorAction::UpdateShape {
                section,
                shape: shape.translated(dx, dy),
            })
        }
        InputEvent::PointerUp { .. } => {
            Transition::to(InteractionState::Selected { section }).committed(moved)
        }
        _ => Transition::stay(state),
    }
}

fn resizing(
    state: &InteractionState,
    section: SectionId,
    handle: Handle,
    original_shape: &Shape,
    changed: bool,
    event: &InputEvent,
    ctx: &ReduceContext<'_>,
) -> Transition {
    match event {
        InputEvent::PointerMove { position, .. } => {
            let Some(target) = ctx.document.section(section) else {
                return Transition::to(InteractionState::Idle);
            };
            let Some(candidate) = resize_shape(original_shape, handle, ctx.placed(*position)) else {
                return Transition::stay(state);
            };
            if target.shape.as_ref() == Some(&candidate) {
                return Transition::stay(state);
            }
            if !resize_allowed(&candidate, original_shape, target, ctx.settings) {
                debug!("Rejected resize candidate for section '{}'", target.name);
                return Transition::stay(state);
            }
            Transition::to(InteractionState::Resizing {
                section,
                handle,
                original_shape: original_shape.clone(),
                changed: true,
            })
            .with(EditorAction::UpdateShape {
                section,
                shape: candidate,
            })
        }
        InputEvent::PointerUp { .. } => {
            Transition::to(InteractionState::Selected { section }).committed(changed)
        }
        InputEvent::KeyDown {
            key: Key::Escape, ..
        } => {
            let back = Transition::to(InteractionState::Selected { section });
            if changed {
                back.with(EditorAction::UpdateShape {
                    section,
                    shape: original_shape.clone(),
                })
            } else {
                back
            }
        }
        _ => Transition::stay(state),
    }
}

/// Resize acceptance rules, in order:
/// 1. both bounding dimensions stay at or above the minimum section size;
/// 2. growing both dimensions relative to `original` is always accepted;
/// 3. otherwise the bounding box must still hold the section's seats.
pub fn resize_allowed(
    candidate: &Shape,
    original: &Shape,
    section: &Section,
    settings: &EditorSettings,
) -> bool {
    if !candidate.is_valid() {
        return false;
    }

    let next = candidate.bounding_box();
    let min_size = settings.interaction.min_section_size;
    if next.width() < min_size || next.height() < min_size {
        return false;
    }

    let before = original.bounding_box();
    if next.width() > before.width() && next.height() > before.height() {
        return true;
    }

    match required_dimensions(section, &settings.fit) {
        Some(required) => next.width() >= required.width && next.height() >= required.height,
        None => true,
    }
}

fn panning(
    state: &InteractionState,
    last_pointer: Point,
    resume: &InteractionState,
    event: &InputEvent,
) -> Transition {
    match event {
        InputEvent::PointerMove { position, .. } => {
            let dx = position.x - last_pointer.x;
            let dy = position.y - last_pointer.y;
            Transition::to(InteractionState::PanningViewport {
                last_pointer: *position,
                resume: Box::new(resume.clone()),
            })
            .with(EditorAction::PanBy { dx, dy })
        }
        InputEvent::PointerUp { .. } => Transition::to(resume.clone()),
        _ => Transition::stay(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SeatCapacity;

    #[test]
    fn test_toggle_point_removes_nearest_hit() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ];
        let result = toggle_point(&points, Point::new(98.0, 3.0), Point::new(100.0, 5.0), 8.0);
        assert_eq!(result, vec![Point::new(0.0, 0.0), Point::new(100.0, 100.0)]);
    }

    #[test]
    fn test_toggle_point_appends_outside_tolerance() {
        let points = vec![Point::new(0.0, 0.0)];
        let result = toggle_point(&points, Point::new(51.0, 49.0), Point::new(50.0, 50.0), 8.0);
        assert_eq!(result, vec![Point::new(0.0, 0.0), Point::new(50.0, 50.0)]);
    }

    #[test]
    fn test_resize_allowed_rules() {
        let settings = EditorSettings::default();
        let section = Section::new("Floor", None).with_capacity(SeatCapacity::grid(10, 20));
        let original = Shape::rectangle(0.0, 0.0, 500.0, 300.0);
        let allowed = |w: f64, h: f64| {
            resize_allowed(&Shape::rectangle(0.0, 0.0, w, h), &original, &section, &settings)
        };

        // Below the minimum size floor
        assert!(!allowed(40.0, 40.0));
        // Shrinks below the 400 x 250 seat requirement
        assert!(!allowed(300.0, 300.0));
        // Shrinks but still holds the seats
        assert!(allowed(450.0, 260.0));
        // Grows both dimensions
        assert!(allowed(600.0, 400.0));
    }

    #[test]
    fn test_growth_accepted_even_when_still_short() {
        let settings = EditorSettings::default();
        let section = Section::new("Floor", None).with_capacity(SeatCapacity::grid(10, 20));
        let original = Shape::rectangle(0.0, 0.0, 100.0, 100.0);
        let grown = Shape::rectangle(0.0, 0.0, 120.0, 110.0);
        assert!(resize_allowed(&grown, &original, &section, &settings));
    }
}
