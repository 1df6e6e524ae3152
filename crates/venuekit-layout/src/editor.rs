//! Interaction state machine.
//!
//! Pointer and keyboard input is folded into an [`InteractionState`] by the
//! pure [`reduce`] function. The reducer never touches the document; it
//! returns the next state plus a list of [`EditorAction`]s that the
//! session applies, and says whether the result is a history step.

pub mod handles;
pub mod input;
pub mod reducer;
pub mod state;

pub use handles::{handle_at, handle_positions, resize_shape, Handle, RectHandle};
pub use input::{InputEvent, Key, Modifiers, PointerButton};
pub use reducer::{reduce, EditorAction, ReduceContext, Transition};
pub use state::{Draft, InteractionState, Tool};
