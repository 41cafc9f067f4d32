//! Floating back-to-top control, visibility gated by scroll offset.

use sitewire_dom::{Effect, ElementSpec, Event, NodeId};

use crate::app::{AppEvent, Component, Ctx};

/// Scroll offset past which the control shows.
const SHOW_THRESHOLD: f64 = 300.0;

/// Always created; invisible until the page scrolls past the threshold and
/// invisible again once it scrolls back. Repeated crossings are idempotent,
/// the styles are simply re-applied.
pub struct BackToTop {
    button: Option<NodeId>,
}

impl BackToTop {
    pub fn new() -> Self {
        Self { button: None }
    }

    fn set_visible(&self, ctx: &mut Ctx<'_>, visible: bool) {
        let Some(button) = self.button else {
            return;
        };
        ctx.apply(Effect::SetStyle {
            node: button,
            name: "opacity".to_string(),
            value: if visible { "1" } else { "0" }.to_string(),
        });
        ctx.apply(Effect::SetStyle {
            node: button,
            name: "visibility".to_string(),
            value: if visible { "visible" } else { "hidden" }.to_string(),
        });
    }
}

impl Default for BackToTop {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for BackToTop {
    fn name(&self) -> &'static str {
        "back-to-top"
    }

    fn mount(&mut self, ctx: &mut Ctx<'_>) -> bool {
        ctx.apply(Effect::Create(
            ElementSpec::new("button")
                .id("backToTop")
                .text("↑")
                .style("position", "fixed")
                .style("bottom", "90px")
                .style("right", "20px")
                .style("border-radius", "50%")
                .style("opacity", "0")
                .style("visibility", "hidden")
                .style("transition", "all 0.3s")
                .style("z-index", "999"),
        ));
        self.button = ctx.page().by_id("backToTop");
        self.button.is_some()
    }

    fn handle(&mut self, event: &AppEvent, ctx: &mut Ctx<'_>) {
        match event {
            AppEvent::Dom(Event::Scroll { y }) => {
                self.set_visible(ctx, *y > SHOW_THRESHOLD);
            }
            AppEvent::Dom(Event::Click { target }) if Some(*target) == self.button => {
                ctx.apply(Effect::ScrollTo { y: 0.0, smooth: true });
            }
            _ => {}
        }
    }
}
