//! Input events dispatched to components.

use crate::element::NodeId;
use crate::scheduler::TimerKey;

/// Keyboard keys the layer cares about. Everything beyond Escape is carried
/// as [`Key::Other`] so handlers can ignore it without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Other,
}

/// One input event from the hosting document.
///
/// Events are plain data: harnesses synthesize them, the app routes them,
/// components match on them. Nothing here mutates the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A click landing on `target`. Components that care about outside
    /// clicks receive every click and test containment themselves.
    Click { target: NodeId },
    /// Text typed into an input control; `value` is the full current value.
    Input { target: NodeId, value: String },
    /// A committed change of a select-style control.
    Change { target: NodeId, value: String },
    KeyDown { key: Key },
    /// The document scrolled to offset `y`.
    Scroll { y: f64 },
    /// An observed element entered the viewport intersection band.
    Visible { node: NodeId },
    /// An image finished loading.
    MediaLoaded { target: NodeId },
    /// A scheduled timer came due.
    Timer { key: TimerKey },
}
