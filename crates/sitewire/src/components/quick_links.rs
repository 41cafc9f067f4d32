//! Quick links: print, permalink copy, citation trigger, history stub.

use sitewire_dom::{Effect, Event, NodeId};

use crate::app::{AppEvent, Component, Ctx};

pub struct QuickLinks {
    print: Option<NodeId>,
    permalink: Option<NodeId>,
    cite: Option<NodeId>,
    history: Option<NodeId>,
}

impl QuickLinks {
    pub fn new() -> Self {
        Self {
            print: None,
            permalink: None,
            cite: None,
            history: None,
        }
    }
}

impl Default for QuickLinks {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for QuickLinks {
    fn name(&self) -> &'static str {
        "quick-links"
    }

    fn mount(&mut self, ctx: &mut Ctx<'_>) -> bool {
        self.print = ctx.page().by_id("printPage");
        self.permalink = ctx.page().by_id("permalink");
        self.cite = ctx.page().by_id("citeThis");
        self.history = ctx.page().by_id("pageHistory");
        // Each trigger is independently optional; mount if any exists.
        [self.print, self.permalink, self.cite, self.history]
            .iter()
            .any(Option::is_some)
    }

    fn handle(&mut self, event: &AppEvent, ctx: &mut Ctx<'_>) {
        let AppEvent::Dom(Event::Click { target }) = event else {
            return;
        };
        let target = Some(*target);
        if target == self.print {
            ctx.apply(Effect::Print);
        } else if target == self.permalink {
            let url = ctx.page().url().to_string();
            ctx.apply(Effect::CopyToClipboard(url));
            ctx.notify("Link copiat în clipboard!");
        } else if target == self.cite {
            ctx.emit(AppEvent::CiteRequested);
        } else if target == self.history {
            // Page history is not built yet; the toast says so.
            ctx.notify("Funcția de istoric va fi disponibilă în curând");
        }
    }
}
