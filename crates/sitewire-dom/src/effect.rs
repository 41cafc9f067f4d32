//! Render instructions, the only output channel of component logic.

use crate::element::{ElementSpec, NodeId};
use crate::scheduler::TimerKey;

/// Viewport-observation parameters, mirroring intersection-observer margins.
///
/// Margins are percentages of the viewport, negative values shrinking the
/// active band inward. The scroll spy observes with `top: -20, bottom: -70`:
/// a section counts as visible once it occupies the region between 20% from
/// the top and 30% from the bottom of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    pub top_margin_pct: i32,
    pub bottom_margin_pct: i32,
    pub threshold: f32,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            top_margin_pct: 0,
            bottom_margin_pct: 0,
            threshold: 0.0,
        }
    }
}

impl ObserveOptions {
    pub fn with_margins(top_margin_pct: i32, bottom_margin_pct: i32) -> Self {
        Self {
            top_margin_pct,
            bottom_margin_pct,
            ..Self::default()
        }
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

/// A single render instruction.
///
/// Component logic is a function from (event, state) to a handful of these;
/// [`Host::apply`](crate::Host::apply) is the thin adapter that carries them
/// out. Instructions naming a node that no longer exists are silent no-ops.
#[derive(Debug, Clone)]
pub enum Effect {
    SetAttr { node: NodeId, name: String, value: String },
    RemoveAttr { node: NodeId, name: String },
    SetStyle { node: NodeId, name: String, value: String },
    RemoveStyle { node: NodeId, name: String },
    SetText { node: NodeId, text: String },
    AddClass { node: NodeId, class: String },
    RemoveClass { node: NodeId, class: String },
    /// Creates an element. Creators re-find their node by html id afterwards.
    Create(ElementSpec),
    /// Detaches the node and its subtree.
    Remove(NodeId),
    ScrollTo { y: f64, smooth: bool },
    ScrollIntoView { node: NodeId },
    /// Write-only clipboard access, assumed to resolve.
    CopyToClipboard(String),
    Navigate(String),
    Print,
    /// Schedules (or deterministically reschedules) the keyed timer.
    Schedule { key: TimerKey, after_ms: u64 },
    CancelTimer { key: TimerKey },
    Observe { node: NodeId, opts: ObserveOptions },
    Unobserve { node: NodeId },
}
