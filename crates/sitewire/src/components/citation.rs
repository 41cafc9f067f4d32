//! Citation modal: formatted citation string plus the copy/close overlay.

use chrono::{Datelike, NaiveDate};
use sitewire_dom::{Effect, ElementSpec, Event, NodeId, Page};

use crate::app::{AppEvent, Component, Ctx};

/// Fallback page title when the page carries no `.page-title` element.
const DEFAULT_TITLE: &str = "Pagină";

/// Romanian month names for the long localized date form.
const MONTHS_RO: [&str; 12] = [
    "ianuarie",
    "februarie",
    "martie",
    "aprilie",
    "mai",
    "iunie",
    "iulie",
    "august",
    "septembrie",
    "octombrie",
    "noiembrie",
    "decembrie",
];

/// Long localized date, e.g. `30 august 2026`.
pub fn format_date_ro(date: NaiveDate) -> String {
    let month = MONTHS_RO[date.month0() as usize];
    format!("{} {} {}", date.day(), month, date.year())
}

/// Builds the citation for the current page. Every field is always present:
/// a missing title element falls back to [`DEFAULT_TITLE`], date and URL
/// come from the page environment.
pub fn build_citation(page: &Page) -> String {
    let title = page
        .by_class("page-title")
        .first()
        .map(|&node| page.text(node).to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    format!(
        "Encyclopedia China. \"{}\". Accesat {}. {}",
        title,
        format_date_ro(page.today()),
        page.url()
    )
}

/// Renders and drives the citation overlay. Always mounted; it only acts on
/// [`AppEvent::CiteRequested`] and on clicks inside its own overlay.
pub struct CitationModal {
    overlay: Option<NodeId>,
    textarea: Option<NodeId>,
    close: Option<NodeId>,
    copy: Option<NodeId>,
}

impl CitationModal {
    pub fn new() -> Self {
        Self {
            overlay: None,
            textarea: None,
            close: None,
            copy: None,
        }
    }

    fn open(&mut self, ctx: &mut Ctx<'_>) {
        // A request while the modal is already open replaces it; stacking
        // would leave the older overlay unreachable behind the new one.
        self.dismiss(ctx);
        let citation = build_citation(ctx.page());
        ctx.apply(Effect::Create(
            ElementSpec::new("div")
                .id("citationModal")
                .style("position", "fixed")
                .style("top", "0")
                .style("left", "0")
                .style("right", "0")
                .style("bottom", "0")
                .style("background", "rgba(0, 0, 0, 0.7)")
                .style("z-index", "10000")
                .style("animation", "fadeIn 0.3s"),
        ));
        let Some(overlay) = ctx.page().by_id("citationModal") else {
            return;
        };
        ctx.apply(Effect::Create(
            ElementSpec::new("div")
                .id("citationPanel")
                .style("background", "var(--bg-primary)")
                .style("padding", "2rem")
                .style("border-radius", "1rem")
                .style("max-width", "600px")
                .child_of(overlay),
        ));
        let Some(panel) = ctx.page().by_id("citationPanel") else {
            return;
        };
        ctx.apply(Effect::Create(
            ElementSpec::new("h3")
                .text("Citează această pagină")
                .child_of(panel),
        ));
        ctx.apply(Effect::Create(
            ElementSpec::new("textarea")
                .id("citationText")
                .attr("readonly", "readonly")
                .text(citation)
                .child_of(panel),
        ));
        ctx.apply(Effect::Create(
            ElementSpec::new("button")
                .id("citationClose")
                .text("Închide")
                .child_of(panel),
        ));
        ctx.apply(Effect::Create(
            ElementSpec::new("button")
                .id("citationCopy")
                .text("Copiază")
                .child_of(panel),
        ));
        self.overlay = Some(overlay);
        self.textarea = ctx.page().by_id("citationText");
        self.close = ctx.page().by_id("citationClose");
        self.copy = ctx.page().by_id("citationCopy");
    }

    fn dismiss(&mut self, ctx: &mut Ctx<'_>) {
        if let Some(overlay) = self.overlay.take() {
            ctx.apply(Effect::Remove(overlay));
        }
        self.textarea = None;
        self.close = None;
        self.copy = None;
    }
}

impl Default for CitationModal {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for CitationModal {
    fn name(&self) -> &'static str {
        "citation"
    }

    fn mount(&mut self, _ctx: &mut Ctx<'_>) -> bool {
        true
    }

    fn handle(&mut self, event: &AppEvent, ctx: &mut Ctx<'_>) {
        match event {
            AppEvent::CiteRequested => self.open(ctx),
            AppEvent::Dom(Event::Click { target }) => {
                let target = Some(*target);
                if target == self.close {
                    self.dismiss(ctx);
                } else if target == self.copy {
                    let citation = self
                        .textarea
                        .map(|n| ctx.page().text(n).to_string())
                        .unwrap_or_default();
                    ctx.apply(Effect::CopyToClipboard(citation));
                    ctx.notify("Citare copiată!");
                    self.dismiss(ctx);
                } else if target == self.overlay {
                    // The dimmed backdrop itself, not the inner panel.
                    self.dismiss(ctx);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitewire_dom::ElementSpec;

    #[test]
    fn date_formats_in_long_romanian_form() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(format_date_ro(date), "30 august 2026");
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date_ro(date), "5 ianuarie 2024");
    }

    #[test]
    fn citation_includes_every_field() {
        let mut b = Page::builder()
            .url("https://encyclopedia.example/istorie.html")
            .today(NaiveDate::from_ymd_opt(2026, 8, 30).unwrap());
        let body = b.element(ElementSpec::new("body"));
        b.element(
            ElementSpec::new("h1")
                .class("page-title")
                .text("Dinastia Han")
                .child_of(body),
        );
        assert_eq!(
            build_citation(&b.build()),
            "Encyclopedia China. \"Dinastia Han\". Accesat 30 august 2026. \
             https://encyclopedia.example/istorie.html"
        );
    }

    #[test]
    fn missing_title_falls_back() {
        let mut b = Page::builder()
            .url("https://encyclopedia.example/")
            .today(NaiveDate::from_ymd_opt(2026, 8, 30).unwrap());
        b.element(ElementSpec::new("body"));
        assert_eq!(
            build_citation(&b.build()),
            "Encyclopedia China. \"Pagină\". Accesat 30 august 2026. https://encyclopedia.example/"
        );
    }
}
