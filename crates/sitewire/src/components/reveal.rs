//! Scroll-triggered entrance animations.

use sitewire_dom::{Effect, Event, NodeId, ObserveOptions};

use crate::app::{AppEvent, Component, Ctx};

/// The animation classes page authors opt elements into.
const ANIMATION_CLASSES: [&str; 3] = ["fade-in", "slide-in-left", "slide-in-right"];

/// Fraction of the element that must be visible before it reveals.
const REVEAL_THRESHOLD: f32 = 0.1;

/// Hides flagged elements at mount and reveals each as it enters the
/// viewport. Nodes stay observed after revealing; re-entering does nothing
/// visible since the styles are already in place.
pub struct ScrollReveal {
    targets: Vec<NodeId>,
}

impl ScrollReveal {
    pub fn new() -> Self {
        Self { targets: Vec::new() }
    }
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ScrollReveal {
    fn name(&self) -> &'static str {
        "scroll-reveal"
    }

    fn mount(&mut self, ctx: &mut Ctx<'_>) -> bool {
        self.targets = ctx
            .page()
            .all_nodes()
            .into_iter()
            .filter(|&n| {
                ANIMATION_CLASSES
                    .iter()
                    .any(|class| ctx.page().has_class(n, class))
            })
            .collect();
        if self.targets.is_empty() {
            return false;
        }
        for &node in &self.targets {
            ctx.apply(Effect::SetStyle {
                node,
                name: "opacity".to_string(),
                value: "0".to_string(),
            });
            ctx.apply(Effect::Observe {
                node,
                opts: ObserveOptions::with_threshold(REVEAL_THRESHOLD),
            });
        }
        true
    }

    fn handle(&mut self, event: &AppEvent, ctx: &mut Ctx<'_>) {
        let AppEvent::Dom(Event::Visible { node }) = event else {
            return;
        };
        if !self.targets.contains(node) {
            return;
        }
        ctx.apply(Effect::SetStyle {
            node: *node,
            name: "opacity".to_string(),
            value: "1".to_string(),
        });
        ctx.apply(Effect::SetStyle {
            node: *node,
            name: "transform".to_string(),
            value: "translateX(0) translateY(0)".to_string(),
        });
    }
}
