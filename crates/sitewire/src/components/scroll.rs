//! Smooth in-page anchor navigation with header-height compensation.

use sitewire_dom::{Effect, Event, NodeId};

use crate::app::{AppEvent, Component, Ctx};

/// Extra breathing room below the fixed header.
const HEADER_GAP: f64 = 20.0;

/// Intercepts clicks on `href="#..."` anchors and scrolls to the target
/// offset by the fixed header's height.
pub struct SmoothScroll {
    anchors: Vec<NodeId>,
}

impl SmoothScroll {
    pub fn new() -> Self {
        Self { anchors: Vec::new() }
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SmoothScroll {
    fn name(&self) -> &'static str {
        "smooth-scroll"
    }

    fn mount(&mut self, ctx: &mut Ctx<'_>) -> bool {
        self.anchors = ctx
            .page()
            .all_nodes()
            .into_iter()
            .filter(|&n| {
                ctx.page()
                    .attr(n, "href")
                    .is_some_and(|href| href.starts_with('#'))
            })
            .collect();
        !self.anchors.is_empty()
    }

    fn handle(&mut self, event: &AppEvent, ctx: &mut Ctx<'_>) {
        let AppEvent::Dom(Event::Click { target }) = event else {
            return;
        };
        if !self.anchors.contains(target) {
            return;
        }
        let Some(href) = ctx.page().attr(*target, "href").map(str::to_string) else {
            return;
        };
        // A bare "#" is a no-destination link; leave it alone.
        let Some(fragment) = href.strip_prefix('#').filter(|f| !f.is_empty()) else {
            return;
        };
        let Some(dest) = ctx.page().by_id(fragment) else {
            return;
        };
        let top = ctx.page().element(dest).map(|el| el.top()).unwrap_or(0.0);
        let y = top - ctx.page().header_height() - HEADER_GAP;
        ctx.apply(Effect::ScrollTo { y, smooth: true });
    }
}
