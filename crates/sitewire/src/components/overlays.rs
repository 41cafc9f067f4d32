//! Blanket Escape handling for transient overlays.
//!
//! Pressing Escape removes every element whose inline style says
//! `position: fixed`, matching on positioning style rather than tracking
//! open instances, so the citation modal, in-flight toasts, and any future
//! overlay all go away without registering anywhere. The floating buttons
//! are fixed-position too and get swept with the rest; components treat
//! their vanished nodes as silent no-ops afterwards.

use sitewire_dom::{Effect, Event, Key};

use crate::app::{AppEvent, Component, Ctx};

pub struct EscapeSweep;

impl EscapeSweep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EscapeSweep {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for EscapeSweep {
    fn name(&self) -> &'static str {
        "overlays"
    }

    fn mount(&mut self, _ctx: &mut Ctx<'_>) -> bool {
        true
    }

    fn handle(&mut self, event: &AppEvent, ctx: &mut Ctx<'_>) {
        let AppEvent::Dom(Event::KeyDown { key: Key::Escape }) = event else {
            return;
        };
        let fixed: Vec<_> = ctx
            .page()
            .all_nodes()
            .into_iter()
            .filter(|&n| ctx.page().style(n, "position") == Some("fixed"))
            .collect();
        for node in fixed {
            ctx.apply(Effect::Remove(node));
        }
    }
}
