//! Headless page model for the sitewire interactivity layer.
//!
//! `sitewire-dom` provides the substrate every sitewire component runs on:
//! an in-memory element tree standing in for a rendered document, the input
//! events components react to, and the render instructions they emit.
//!
//! # Design
//!
//! Components never touch a live rendering environment. Their only output
//! channel is the [`Effect`] enum, small render instructions (set an
//! attribute, create an overlay, schedule a timer). A thin adapter,
//! [`Host::apply`], applies each instruction to the [`Page`] model and
//! records outward actions (clipboard writes, navigations, print requests)
//! so tests can assert on them.
//!
//! Three injected capabilities keep component logic deterministic:
//!
//! - [`Page`]: the element arena plus the page environment (viewport width,
//!   scroll offset, URL, today's date).
//! - [`Scheduler`]: simulated-clock timers, keyed by component/element
//!   identity. Scheduling an already-pending key replaces it, so a component
//!   re-triggered mid-animation deterministically restarts its window
//!   instead of racing a stale timer.
//! - Viewport observation: components register interest in an element's
//!   visibility via [`Effect::Observe`]; the host only routes
//!   [`Event::Visible`] for currently-observed nodes.
//!
//! # Missing nodes are no-ops
//!
//! Applying an instruction to a node that no longer exists does nothing,
//! silently. Components are written against a degrade-gracefully contract:
//! an absent element means an absent feature, never an error.

mod effect;
mod element;
mod event;
mod host;
mod page;
mod scheduler;

pub use effect::{Effect, ObserveOptions};
pub use element::{Element, ElementSpec, NodeId};
pub use event::{Event, Key};
pub use host::{Host, ScrollRequest};
pub use page::{Environment, Page, PageBuilder};
pub use scheduler::{Debouncer, Scheduler, TimerKey};
