//! Shared page fixture: a representative encyclopedia article with every
//! anchor the layer recognizes.

use chrono::NaiveDate;
use sitewire::dom::{ElementSpec, Page};
use sitewire::{App, MemoryStore};

pub const FIXTURE_URL: &str = "https://encyclopedia-china.example/istorie.html";

pub fn fixture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
}

/// Builds the standard article page. Sections carry the same ids as their
/// headings, the convention the scroll spy depends on.
pub fn article_page() -> Page {
    article_page_with_width(1280)
}

pub fn article_page_with_width(viewport_width: u32) -> Page {
    let mut b = Page::builder()
        .url(FIXTURE_URL)
        .today(fixture_date())
        .viewport_width(viewport_width);

    let html = b.element(ElementSpec::new("html"));
    let body = b.element(ElementSpec::new("body").child_of(html));

    let header = b.element(
        ElementSpec::new("header")
            .class("header-fixed")
            .style("height", "64px")
            .child_of(body),
    );
    let header_left = b.element(ElementSpec::new("div").class("header-left").child_of(header));
    b.element(ElementSpec::new("nav").class("main-nav").child_of(header_left));
    let toggle = b.element(ElementSpec::new("button").id("themeToggle").child_of(header));
    b.element(ElementSpec::new("span").class("theme-icon").child_of(toggle));
    b.element(
        ElementSpec::new("select")
            .id("langSelector")
            .attr("data-label-ro", "Română")
            .attr("data-label-en", "English")
            .child_of(header),
    );
    b.element(ElementSpec::new("input").id("globalSearch").child_of(header));
    b.element(ElementSpec::new("div").id("searchResults").child_of(header));

    let sidebar = b.element(ElementSpec::new("aside").class("sidebar").child_of(body));
    b.element(ElementSpec::new("ul").id("tocList").child_of(sidebar));
    for id in ["printPage", "permalink", "citeThis", "pageHistory"] {
        b.element(ElementSpec::new("a").id(id).attr("href", "#").child_of(sidebar));
    }

    let main = b.element(ElementSpec::new("main").class("content-main").child_of(body));
    b.element(
        ElementSpec::new("h1")
            .class("page-title")
            .text("Dinastia Han")
            .child_of(main),
    );
    for (i, (id, title)) in [
        ("origini", "Originile dinastiei"),
        ("drumul-matasii", "Drumurile mătăsii"),
    ]
    .into_iter()
    .enumerate()
    {
        let top = 400.0 + 800.0 * i as f64;
        let section = b.element(
            ElementSpec::new("section")
                .class("content-section")
                .id(id)
                .top(top)
                .child_of(main),
        );
        b.element(ElementSpec::new("h2").id(id).text(title).top(top).child_of(section));
        let para = b.element(
            ElementSpec::new("p")
                .class("fade-in")
                .text("Text despre dinastia Han.")
                .child_of(section),
        );
        b.element(
            ElementSpec::new("span")
                .class("reference")
                .text(format!("[{}]", i + 1))
                .child_of(para),
        );
    }

    b.element(
        ElementSpec::new("img")
            .class("content-image")
            .attr("loading", "lazy")
            .child_of(main),
    );
    b.element(
        ElementSpec::new("img")
            .attr("loading", "lazy")
            .attr("complete", "true")
            .child_of(main),
    );

    let refs = b.element(ElementSpec::new("ol").class("references-list").top(2400.0).child_of(main));
    for source in [
        "Sima Qian, Însemnări istorice",
        "Ban Gu, Cartea dinastiei Han",
    ] {
        b.element(ElementSpec::new("li").text(source).child_of(refs));
    }

    b.build()
}

/// An initialized app over the standard article and a fresh memory store.
pub fn article_app() -> App {
    let mut app = App::builder().store(MemoryStore::new()).build(article_page());
    app.init();
    app
}
