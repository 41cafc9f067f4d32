//! Table-of-contents generation and the scroll spy.
//!
//! An authored outline wins: when the container already has entries, only
//! the spy attaches. Otherwise the outline derives 1:1 from `h2` headings
//! carrying an id, in document order.

use sitewire_dom::{Effect, ElementSpec, Event, NodeId, ObserveOptions};

use crate::app::{AppEvent, Component, Ctx};

/// The spy's active band: a section counts once it occupies the region
/// between 20% from the top and 30% from the bottom of the viewport.
const SPY_MARGINS: (i32, i32) = (-20, -70);

pub struct TocOutline {
    /// Outline links paired with the fragment (id, no `#`) they point at.
    links: Vec<(NodeId, String)>,
    /// Observed content sections, by node.
    sections: Vec<NodeId>,
}

impl TocOutline {
    pub fn new() -> Self {
        Self {
            links: Vec::new(),
            sections: Vec::new(),
        }
    }

    fn generate(&self, ctx: &mut Ctx<'_>, toc: NodeId, content: NodeId) {
        let headings: Vec<NodeId> = ctx
            .page()
            .descendants(content)
            .into_iter()
            .filter(|&n| {
                ctx.page().element(n).is_some_and(|el| el.tag() == "h2" && el.html_id().is_some())
            })
            .collect();
        for (i, heading) in headings.into_iter().enumerate() {
            let Some(el) = ctx.page().element(heading) else {
                continue;
            };
            let fragment = el.html_id().unwrap_or_default().to_string();
            let label = el.text().to_string();
            let item_id = format!("tocItem-{i}");
            ctx.apply(Effect::Create(
                ElementSpec::new("li").id(item_id.clone()).child_of(toc),
            ));
            if let Some(item) = ctx.page().by_id(&item_id) {
                ctx.apply(Effect::Create(
                    ElementSpec::new("a")
                        .attr("href", format!("#{fragment}"))
                        .text(label)
                        .child_of(item),
                ));
            }
        }
    }

    /// Gathers spy inputs and registers observation interest. The spy needs
    /// both outline links and tracked sections; with either missing there is
    /// nothing to highlight and nothing gets observed.
    fn attach_spy(&mut self, ctx: &mut Ctx<'_>, toc: NodeId) -> bool {
        self.links = ctx
            .page()
            .descendants(toc)
            .into_iter()
            .filter_map(|n| {
                let el = ctx.page().element(n)?;
                if el.tag() != "a" {
                    return None;
                }
                let fragment = el.attr("href")?.strip_prefix('#')?.to_string();
                Some((n, fragment))
            })
            .collect();
        self.sections = ctx
            .page()
            .by_class("content-section")
            .into_iter()
            .filter(|&n| ctx.page().html_id(n).is_some())
            .collect();
        if self.links.is_empty() || self.sections.is_empty() {
            return false;
        }
        let opts = ObserveOptions::with_margins(SPY_MARGINS.0, SPY_MARGINS.1);
        for &section in &self.sections {
            ctx.apply(Effect::Observe { node: section, opts });
        }
        true
    }

    fn highlight(&self, ctx: &mut Ctx<'_>, section: NodeId) {
        let Some(active) = ctx.page().html_id(section).map(str::to_string) else {
            return;
        };
        for (link, fragment) in self.links.clone() {
            let matches = fragment == active;
            ctx.apply(Effect::SetStyle {
                node: link,
                name: "font-weight".to_string(),
                value: if matches { "600" } else { "400" }.to_string(),
            });
            ctx.apply(Effect::SetStyle {
                node: link,
                name: "color".to_string(),
                value: if matches {
                    "var(--primary-color)"
                } else {
                    "var(--text-secondary)"
                }
                .to_string(),
            });
        }
    }
}

impl Default for TocOutline {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TocOutline {
    fn name(&self) -> &'static str {
        "toc"
    }

    fn mount(&mut self, ctx: &mut Ctx<'_>) -> bool {
        let Some(toc) = ctx.page().by_id("tocList") else {
            return false;
        };
        let Some(content) = ctx.page().by_class("content-main").first().copied() else {
            return false;
        };
        if ctx.page().children(toc).is_empty() {
            self.generate(ctx, toc, content);
        }
        self.attach_spy(ctx, toc)
    }

    fn handle(&mut self, event: &AppEvent, ctx: &mut Ctx<'_>) {
        let AppEvent::Dom(Event::Visible { node }) = event else {
            return;
        };
        if self.sections.contains(node) {
            self.highlight(ctx, *node);
        }
    }
}
