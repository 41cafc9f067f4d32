//! Inline reference markers: jump to the references list and flash it.

use once_cell::sync::Lazy;
use regex::Regex;
use sitewire_dom::{Effect, Event, NodeId, TimerKey};

use crate::app::{AppEvent, Component, Ctx};

/// How long the jumped-to entry stays highlighted.
const HIGHLIGHT_MS: u64 = 2000;

/// First run of digits in a marker like `[3]`.
static ORDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("ordinal pattern compiles"));

/// Cross-links `.reference` markers to the nth entry of `.references-list`,
/// keyed by the ordinal in the marker text (1-based).
pub struct RefJumps {
    markers: Vec<NodeId>,
}

impl RefJumps {
    pub fn new() -> Self {
        Self { markers: Vec::new() }
    }

    fn jump(&self, ctx: &mut Ctx<'_>, marker: NodeId) {
        let Some(ordinal) = ORDINAL
            .find(ctx.page().text(marker))
            .and_then(|m| m.as_str().parse::<usize>().ok())
            .filter(|&n| n > 0)
        else {
            return;
        };
        let Some(list) = ctx.page().by_class("references-list").first().copied() else {
            return;
        };
        let Some(entry) = ctx
            .page()
            .children(list)
            .iter()
            .filter(|&&n| ctx.page().element(n).is_some_and(|el| el.tag() == "li"))
            .nth(ordinal - 1)
            .copied()
        else {
            return;
        };
        ctx.apply(Effect::ScrollIntoView { node: entry });
        for (name, value) in [
            ("background-color", "var(--primary-light)"),
            ("padding", "0.5rem"),
            ("border-radius", "0.25rem"),
            ("transition", "all 0.3s"),
        ] {
            ctx.apply(Effect::SetStyle {
                node: entry,
                name: name.to_string(),
                value: value.to_string(),
            });
        }
        ctx.apply(Effect::Schedule {
            key: TimerKey::new("references", Some(entry), "fade"),
            after_ms: HIGHLIGHT_MS,
        });
    }
}

impl Default for RefJumps {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for RefJumps {
    fn name(&self) -> &'static str {
        "references"
    }

    fn mount(&mut self, ctx: &mut Ctx<'_>) -> bool {
        self.markers = ctx.page().by_class("reference");
        !self.markers.is_empty()
    }

    fn handle(&mut self, event: &AppEvent, ctx: &mut Ctx<'_>) {
        match event {
            AppEvent::Dom(Event::Click { target }) if self.markers.contains(target) => {
                self.jump(ctx, *target);
            }
            AppEvent::Dom(Event::Timer { key }) if key.owner == "references" => {
                if let Some(entry) = key.node {
                    ctx.apply(Effect::SetStyle {
                        node: entry,
                        name: "background-color".to_string(),
                        value: "transparent".to_string(),
                    });
                    ctx.apply(Effect::SetStyle {
                        node: entry,
                        name: "padding".to_string(),
                        value: "0".to_string(),
                    });
                }
            }
            _ => {}
        }
    }
}
