//! Toast notifications: slide in, linger, fade out, vanish.

use sitewire_dom::{Effect, ElementSpec, Event, NodeId, TimerKey};

use crate::app::{AppEvent, Component, Ctx};

/// Default display window before the fade starts.
pub const DEFAULT_TOAST_MS: u64 = 3000;

/// Fade-out duration before removal.
const FADE_MS: u64 = 300;

/// Gap between the fixed header and the toast anchor.
const HEADER_GAP: f64 = 20.0;

/// Creates and retires toast elements.
///
/// Concurrent toasts are independent nodes anchored at the same point below
/// the header; overlapping toasts visually overlap. Known limitation, kept.
pub struct Notifications {
    counter: u64,
}

impl Notifications {
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    fn show(&mut self, ctx: &mut Ctx<'_>, message: &str, duration_ms: u64) {
        self.counter += 1;
        let toast_id = format!("toast-{}", self.counter);
        let top = ctx.page().header_height() + HEADER_GAP;
        ctx.apply(Effect::Create(
            ElementSpec::new("div")
                .id(toast_id.clone())
                .class("toast")
                .style("position", "fixed")
                .style("top", format!("{top}px"))
                .style("right", "20px")
                .style("z-index", "10000")
                .style("animation", "slideInRight 0.3s ease-out")
                .text(message),
        ));
        if let Some(node) = ctx.page().by_id(&toast_id) {
            ctx.apply(Effect::Schedule {
                key: TimerKey::new("notify", Some(node), "fade"),
                after_ms: duration_ms,
            });
        }
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Notifications {
    fn name(&self) -> &'static str {
        "notify"
    }

    fn mount(&mut self, _ctx: &mut Ctx<'_>) -> bool {
        true
    }

    fn handle(&mut self, event: &AppEvent, ctx: &mut Ctx<'_>) {
        match event {
            AppEvent::Notify { message, duration_ms } => {
                self.show(ctx, message, *duration_ms);
            }
            AppEvent::Dom(Event::Timer { key }) if key.owner == "notify" => match key.action {
                "fade" => {
                    if let Some(node) = key.node {
                        ctx.apply(Effect::SetStyle {
                            node,
                            name: "animation".to_string(),
                            value: "fadeOut 0.3s ease-out".to_string(),
                        });
                        ctx.apply(Effect::Schedule {
                            key: TimerKey::new("notify", Some(node), "remove"),
                            after_ms: FADE_MS,
                        });
                    }
                }
                "remove" => {
                    if let Some(node) = key.node {
                        ctx.apply(Effect::Remove(node));
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }
}
