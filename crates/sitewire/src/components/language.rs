//! Language selector: persists the tag, confirms with a toast.
//!
//! No actual translation happens: the selection stores a language tag and
//! tells the user about it. Real internationalization is out of scope.

use sitewire_dom::{Effect, Event, NodeId};
use sitewire_store::PrefKey;

use crate::app::{AppEvent, Component, Ctx};

pub struct LanguageSelect {
    control: Option<NodeId>,
}

impl LanguageSelect {
    pub fn new() -> Self {
        Self { control: None }
    }
}

impl Default for LanguageSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LanguageSelect {
    fn name(&self) -> &'static str {
        "language"
    }

    fn mount(&mut self, ctx: &mut Ctx<'_>) -> bool {
        let Some(control) = ctx.page().by_id("langSelector") else {
            return false;
        };
        self.control = Some(control);
        let current = ctx.store().get(PrefKey::Language);
        ctx.apply(Effect::SetAttr {
            node: control,
            name: "value".to_string(),
            value: current,
        });
        true
    }

    fn handle(&mut self, event: &AppEvent, ctx: &mut Ctx<'_>) {
        let AppEvent::Dom(Event::Change { target, value }) = event else {
            return;
        };
        if Some(*target) != self.control {
            return;
        }
        ctx.store_mut().set(PrefKey::Language, value);
        ctx.apply(Effect::SetAttr {
            node: *target,
            name: "value".to_string(),
            value: value.clone(),
        });
        // The option's human-readable label, authored as a data attribute on
        // the control; the raw tag stands in when no label exists.
        let label = ctx
            .page()
            .attr(*target, &format!("data-label-{value}"))
            .unwrap_or(value)
            .to_string();
        ctx.notify(format!("Limba schimbată în: {label}"));
    }
}
