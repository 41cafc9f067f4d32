//! Mobile navigation toggle: a floating button that opens the sidebar as a
//! fixed drawer.

use sitewire_dom::{Effect, ElementSpec, Event, NodeId};

use crate::app::{AppEvent, Component, Ctx};

/// Widest viewport that still counts as mobile, in logical pixels. Checked
/// once at mount; a window resized afterwards keeps its init-time decision.
const MOBILE_BREAKPOINT: u32 = 768;

pub struct MobileMenu {
    button: Option<NodeId>,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self { button: None }
    }

    fn toggle_sidebar(&self, ctx: &mut Ctx<'_>) {
        let Some(sidebar) = ctx.page().by_class("sidebar").first().copied() else {
            return;
        };
        let Some(button) = self.button else {
            return;
        };
        let open = ctx.page().style(sidebar, "display") == Some("block");
        if open {
            ctx.apply(Effect::SetStyle {
                node: sidebar,
                name: "display".to_string(),
                value: "none".to_string(),
            });
            ctx.apply(Effect::SetText {
                node: button,
                text: "☰".to_string(),
            });
        } else {
            for (name, value) in [
                ("display", "block"),
                ("position", "fixed"),
                ("top", "var(--header-height)"),
                ("left", "0"),
                ("width", "80%"),
                ("max-width", "320px"),
                ("z-index", "998"),
            ] {
                ctx.apply(Effect::SetStyle {
                    node: sidebar,
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
            ctx.apply(Effect::SetText {
                node: button,
                text: "✕".to_string(),
            });
        }
    }
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MobileMenu {
    fn name(&self) -> &'static str {
        "mobile-menu"
    }

    fn mount(&mut self, ctx: &mut Ctx<'_>) -> bool {
        if ctx.page().viewport_width() > MOBILE_BREAKPOINT {
            return false;
        }
        if ctx.page().by_class("header-left").is_empty()
            || ctx.page().by_class("main-nav").is_empty()
        {
            return false;
        }
        ctx.apply(Effect::Create(
            ElementSpec::new("button")
                .id("mobileMenuToggle")
                .text("☰")
                .style("position", "fixed")
                .style("bottom", "20px")
                .style("right", "20px")
                .style("width", "60px")
                .style("height", "60px")
                .style("border-radius", "50%")
                .style("z-index", "999"),
        ));
        self.button = ctx.page().by_id("mobileMenuToggle");
        self.button.is_some()
    }

    fn handle(&mut self, event: &AppEvent, ctx: &mut Ctx<'_>) {
        if let AppEvent::Dom(Event::Click { target }) = event {
            if Some(*target) == self.button {
                self.toggle_sidebar(ctx);
            }
        }
    }
}
