//! Type aliases for wiring the editor to a host.
//!
//! The editor runs on a single logical thread, so hosts share state with
//! their render callbacks through `Rc<RefCell<T>>`.

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// # Example
/// ```rust,ignore
/// let frames: Shared<Vec<RenderSnapshot>> = shared(Vec::new());
/// let sink = frames.clone();
/// session.set_render_callback(move |frame| sink.borrow_mut().push(frame.clone()));
/// ```
pub type Shared<T> = Rc<RefCell<T>>;

/// A render callback invoked with a borrowed, read-only frame.
///
/// Called synchronously from inside the input handler that produced the
/// mutation.
pub type RenderCallback<T> = Box<dyn FnMut(&T)>;

/// Create a new `Shared<T>` from a value.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
