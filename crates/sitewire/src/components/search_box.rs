//! Search UI: binds the global input to the index, renders the result panel.
//!
//! Matching re-runs on every input event, un-debounced. The `Debouncer`
//! utility exists in `sitewire-dom` but is deliberately not wired here; a
//! flat scan over a few dozen records costs less than the bookkeeping.

use sitewire_dom::{Effect, ElementSpec, Event, NodeId};
use sitewire_search::{QueryOutcome, SearchIndex};

use crate::app::{AppEvent, Component, Ctx};

/// Localized empty-result message, rendered only for queries long enough to
/// have been computed.
const NO_RESULTS: &str = "Nu s-au găsit rezultate";

pub struct SearchBox {
    index: SearchIndex,
    input: Option<NodeId>,
    panel: Option<NodeId>,
    /// Rendered result entries and the page each navigates to.
    rendered: Vec<(NodeId, String)>,
}

impl SearchBox {
    pub fn new(index: SearchIndex) -> Self {
        Self {
            index,
            input: None,
            panel: None,
            rendered: Vec::new(),
        }
    }

    fn render(&mut self, outcome: QueryOutcome, ctx: &mut Ctx<'_>) {
        let Some(panel) = self.panel else {
            return;
        };
        match outcome {
            QueryOutcome::TooShort => {
                // Hide without re-rendering; stale entries stay behind the
                // inactive panel until the next long-enough query.
                ctx.apply(Effect::RemoveClass {
                    node: panel,
                    class: "active".to_string(),
                });
            }
            QueryOutcome::Matches(hits) => {
                self.clear_panel(ctx, panel);
                if hits.is_empty() {
                    ctx.apply(Effect::Create(
                        ElementSpec::new("div")
                            .class("search-result-empty")
                            .text(NO_RESULTS)
                            .child_of(panel),
                    ));
                } else {
                    for (i, hit) in hits.iter().enumerate() {
                        let entry_id = format!("searchResult-{i}");
                        ctx.apply(Effect::Create(
                            ElementSpec::new("div")
                                .id(entry_id.clone())
                                .class("search-result-item")
                                .child_of(panel),
                        ));
                        let Some(entry) = ctx.page().by_id(&entry_id) else {
                            continue;
                        };
                        ctx.apply(Effect::Create(
                            ElementSpec::new("div")
                                .class("search-result-title")
                                .text(hit.title.clone())
                                .child_of(entry),
                        ));
                        ctx.apply(Effect::Create(
                            ElementSpec::new("div")
                                .class("search-result-page")
                                .text(hit.page.clone())
                                .child_of(entry),
                        ));
                        self.rendered.push((entry, hit.page.clone()));
                    }
                }
                ctx.apply(Effect::AddClass {
                    node: panel,
                    class: "active".to_string(),
                });
            }
        }
    }

    fn clear_panel(&mut self, ctx: &mut Ctx<'_>, panel: NodeId) {
        for child in ctx.page().children(panel).to_vec() {
            ctx.apply(Effect::Remove(child));
        }
        self.rendered.clear();
    }
}

impl Component for SearchBox {
    fn name(&self) -> &'static str {
        "search"
    }

    fn mount(&mut self, ctx: &mut Ctx<'_>) -> bool {
        let (Some(input), Some(panel)) = (
            ctx.page().by_id("globalSearch"),
            ctx.page().by_id("searchResults"),
        ) else {
            return false;
        };
        self.input = Some(input);
        self.panel = Some(panel);
        true
    }

    fn handle(&mut self, event: &AppEvent, ctx: &mut Ctx<'_>) {
        match event {
            AppEvent::Dom(Event::Input { target, value }) if Some(*target) == self.input => {
                let outcome = self.index.query(value);
                self.render(outcome, ctx);
            }
            AppEvent::Dom(Event::Click { target }) => {
                // A click on a rendered entry navigates to its page.
                if let Some((_, page)) = self
                    .rendered
                    .iter()
                    .find(|(entry, _)| ctx.page().contains(*entry, *target))
                {
                    let page = page.clone();
                    ctx.apply(Effect::Navigate(page));
                    return;
                }
                // Any click outside both the input and the panel dismisses.
                let (Some(input), Some(panel)) = (self.input, self.panel) else {
                    return;
                };
                if !ctx.page().contains(input, *target) && !ctx.page().contains(panel, *target) {
                    ctx.apply(Effect::RemoveClass {
                        node: panel,
                        class: "active".to_string(),
                    });
                }
            }
            _ => {}
        }
    }
}
