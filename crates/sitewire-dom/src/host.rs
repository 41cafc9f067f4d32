//! The host adapter: applies render instructions to the page model.

use std::collections::HashMap;

use crate::effect::{Effect, ObserveOptions};
use crate::element::NodeId;
use crate::page::Page;
use crate::scheduler::{Scheduler, TimerKey};

/// A scroll the layer asked the host for.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollRequest {
    To { y: f64, smooth: bool },
    IntoView { node: NodeId },
}

/// Owns the page, the scheduler, and the viewport-observation registry, and
/// carries out [`Effect`]s.
///
/// Outward actions with no in-page representation (clipboard writes,
/// navigations, print requests, scrolls) are recorded so harnesses can
/// assert on them. The clipboard is write-only and assumed to resolve.
#[derive(Debug)]
pub struct Host {
    page: Page,
    scheduler: Scheduler,
    observed: HashMap<NodeId, ObserveOptions>,
    clipboard: Vec<String>,
    navigations: Vec<String>,
    scrolls: Vec<ScrollRequest>,
    print_requests: usize,
}

impl Host {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            scheduler: Scheduler::new(),
            observed: HashMap::new(),
            clipboard: Vec::new(),
            navigations: Vec::new(),
            scrolls: Vec::new(),
            print_requests: 0,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Direct page access for harness setup. Component code never calls
    /// this; it mutates through [`apply`](Host::apply) only.
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Pops the earliest timer due at or before `target`, moving the clock
    /// to its deadline. Dispatch loops alternate this with event routing so
    /// follow-up timers scheduled by handlers anchor at the fired deadline.
    pub fn pop_due_timer(&mut self, target: u64) -> Option<TimerKey> {
        self.scheduler.pop_due(target)
    }

    /// Settles the clock at `target` once every due timer has been popped.
    pub fn settle_clock(&mut self, target: u64) {
        self.scheduler.settle(target);
    }

    /// Updates the environment's scroll offset. Dispatching the matching
    /// scroll event is the caller's job.
    pub fn set_scroll(&mut self, y: f64) {
        self.page.set_scroll_y(y);
    }

    pub fn is_observed(&self, node: NodeId) -> bool {
        self.observed.contains_key(&node)
    }

    pub fn observe_options(&self, node: NodeId) -> Option<ObserveOptions> {
        self.observed.get(&node).copied()
    }

    pub fn clipboard(&self) -> &[String] {
        &self.clipboard
    }

    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    pub fn scrolls(&self) -> &[ScrollRequest] {
        &self.scrolls
    }

    pub fn print_requests(&self) -> usize {
        self.print_requests
    }

    /// Applies one render instruction. Instructions naming missing nodes do
    /// nothing; components never learn whether their target still existed.
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::SetAttr { node, name, value } => self.page.set_attr(node, &name, &value),
            Effect::RemoveAttr { node, name } => self.page.remove_attr(node, &name),
            Effect::SetStyle { node, name, value } => self.page.set_style(node, &name, &value),
            Effect::RemoveStyle { node, name } => self.page.remove_style(node, &name),
            Effect::SetText { node, text } => self.page.set_text(node, &text),
            Effect::AddClass { node, class } => self.page.add_class(node, &class),
            Effect::RemoveClass { node, class } => self.page.remove_class(node, &class),
            Effect::Create(spec) => {
                self.page.create(spec);
            }
            Effect::Remove(node) => {
                self.observed.remove(&node);
                self.page.remove(node);
            }
            Effect::ScrollTo { y, smooth } => {
                self.page.set_scroll_y(y);
                self.scrolls.push(ScrollRequest::To { y, smooth });
            }
            Effect::ScrollIntoView { node } => {
                if let Some(el) = self.page.element(node) {
                    let top = el.top();
                    self.page.set_scroll_y(top);
                    self.scrolls.push(ScrollRequest::IntoView { node });
                }
            }
            Effect::CopyToClipboard(text) => self.clipboard.push(text),
            Effect::Navigate(url) => self.navigations.push(url),
            Effect::Print => self.print_requests += 1,
            Effect::Schedule { key, after_ms } => self.scheduler.schedule(key, after_ms),
            Effect::CancelTimer { key } => self.scheduler.cancel(&key),
            Effect::Observe { node, opts } => {
                if self.page.element(node).is_some() {
                    self.observed.insert(node, opts);
                }
            }
            Effect::Unobserve { node } => {
                self.observed.remove(&node);
            }
        }
    }
}
