//! Outline generation, the scroll spy, anchor scrolling, reference jumps,
//! viewport-driven reveals, and the mobile drawer.

mod common;

use common::{article_app, article_page_with_width, fixture_date};
use proptest::prelude::*;
use sitewire::dom::{ElementSpec, ObserveOptions, Page, ScrollRequest};
use sitewire::{App, MemoryStore, NodeId};

fn toc_links(app: &App) -> Vec<NodeId> {
    let toc = app.page().by_id("tocList").unwrap();
    app.page()
        .descendants(toc)
        .into_iter()
        .filter(|&n| app.page().element(n).is_some_and(|el| el.tag() == "a"))
        .collect()
}

// ----------------------------------------------------------------------
// Table of contents and the scroll spy
// ----------------------------------------------------------------------

#[test]
fn outline_derives_from_headings_in_order() {
    let app = article_app();
    let toc = app.page().by_id("tocList").unwrap();
    assert_eq!(app.page().children(toc).len(), 2);
    let links = toc_links(&app);
    assert_eq!(app.page().attr(links[0], "href"), Some("#origini"));
    assert_eq!(app.page().text(links[0]), "Originile dinastiei");
    assert_eq!(app.page().attr(links[1], "href"), Some("#drumul-matasii"));
}

#[test]
fn authored_outlines_are_left_alone() {
    let mut b = Page::builder().today(fixture_date());
    let body = b.element(ElementSpec::new("body"));
    let main = b.element(ElementSpec::new("main").class("content-main").child_of(body));
    let section = b.element(
        ElementSpec::new("section")
            .class("content-section")
            .id("custom")
            .top(500.0)
            .child_of(main),
    );
    b.element(ElementSpec::new("h2").id("custom").text("Custom").child_of(section));
    let toc = b.element(ElementSpec::new("ul").id("tocList").child_of(body));
    let item = b.element(ElementSpec::new("li").child_of(toc));
    b.element(
        ElementSpec::new("a")
            .attr("href", "#custom")
            .text("Hand-written entry")
            .child_of(item),
    );

    let mut app = App::builder().store(MemoryStore::new()).build(b.build());
    app.init();
    let toc = app.page().by_id("tocList").unwrap();
    assert_eq!(app.page().children(toc).len(), 1);
    assert!(app.page().by_id("tocItem-0").is_none());
}

#[test]
fn sections_are_observed_with_the_spy_band() {
    let app = article_app();
    let section = app.page().by_id("origini").unwrap();
    assert_eq!(
        app.host().observe_options(section),
        Some(ObserveOptions::with_margins(-20, -70))
    );
}

#[test]
fn the_visible_sections_link_gets_the_active_styles() {
    let mut app = article_app();
    let section = app.page().by_id("drumul-matasii").unwrap();
    app.enters_viewport(section);
    let links = toc_links(&app);
    assert_eq!(app.page().style(links[1], "font-weight"), Some("600"));
    assert_eq!(app.page().style(links[1], "color"), Some("var(--primary-color)"));
    assert_eq!(app.page().style(links[0], "font-weight"), Some("400"));
    assert_eq!(app.page().style(links[0], "color"), Some("var(--text-secondary)"));
}

#[test]
fn the_highlight_moves_with_the_reader() {
    let mut app = article_app();
    let first = app.page().by_id("origini").unwrap();
    let second = app.page().by_id("drumul-matasii").unwrap();
    app.enters_viewport(second);
    app.enters_viewport(first);
    let links = toc_links(&app);
    assert_eq!(app.page().style(links[0], "font-weight"), Some("600"));
    assert_eq!(app.page().style(links[1], "font-weight"), Some("400"));
}

#[test]
fn unobserved_visibility_goes_nowhere() {
    let mut app = article_app();
    let title = app.page().by_class("page-title")[0];
    app.enters_viewport(title);
    let links = toc_links(&app);
    assert!(app.page().style(links[0], "font-weight").is_none());
}

// ----------------------------------------------------------------------
// Smooth anchor scrolling
// ----------------------------------------------------------------------

#[test]
fn outline_clicks_scroll_below_the_header() {
    let mut app = article_app();
    let links = toc_links(&app);
    app.click(links[1]);
    // Section top 1200, minus the 64px header and the 20px gap.
    assert_eq!(
        app.host().scrolls().last(),
        Some(&ScrollRequest::To { y: 1116.0, smooth: true })
    );
}

#[test]
fn bare_hash_anchors_do_not_scroll() {
    let mut app = article_app();
    app.click_id("printPage");
    assert!(app.host().scrolls().is_empty());
}

// ----------------------------------------------------------------------
// Back to top
// ----------------------------------------------------------------------

#[test]
fn the_floating_control_tracks_the_threshold() {
    let mut app = article_app();
    let button = app.page().by_id("backToTop").unwrap();
    assert_eq!(app.page().style(button, "opacity"), Some("0"));

    app.scroll(400.0);
    assert_eq!(app.page().style(button, "opacity"), Some("1"));
    assert_eq!(app.page().style(button, "visibility"), Some("visible"));

    // Exactly at the threshold still counts as near the top.
    app.scroll(300.0);
    assert_eq!(app.page().style(button, "opacity"), Some("0"));
    assert_eq!(app.page().style(button, "visibility"), Some("hidden"));

    // Re-crossing just re-applies the same styles.
    app.scroll(400.0);
    app.scroll(500.0);
    assert_eq!(app.page().style(button, "opacity"), Some("1"));
}

proptest! {
    #[test]
    fn visibility_always_matches_the_last_offset(
        ys in prop::collection::vec(0.0f64..1000.0, 1..12),
    ) {
        let mut app = article_app();
        for &y in &ys {
            app.scroll(y);
        }
        let button = app.page().by_id("backToTop").unwrap();
        let expected = if ys.last().is_some_and(|&y| y > 300.0) { "1" } else { "0" };
        prop_assert_eq!(app.page().style(button, "opacity"), Some(expected));
    }
}

#[test]
fn clicking_the_control_scrolls_home() {
    let mut app = article_app();
    app.scroll(400.0);
    app.click_id("backToTop");
    assert_eq!(
        app.host().scrolls().last(),
        Some(&ScrollRequest::To { y: 0.0, smooth: true })
    );
    assert_eq!(app.page().scroll_y(), 0.0);
}

// ----------------------------------------------------------------------
// Reference jumps
// ----------------------------------------------------------------------

#[test]
fn markers_jump_to_their_list_entry_and_flash() {
    let mut app = article_app();
    let marker = app.page().by_class("reference")[1];
    assert_eq!(app.page().text(marker), "[2]");
    let list = app.page().by_class("references-list")[0];
    let entry = app.page().children(list)[1];

    app.click(marker);
    assert_eq!(
        app.host().scrolls().last(),
        Some(&ScrollRequest::IntoView { node: entry })
    );
    assert_eq!(
        app.page().style(entry, "background-color"),
        Some("var(--primary-light)")
    );

    app.advance(1999);
    assert_eq!(
        app.page().style(entry, "background-color"),
        Some("var(--primary-light)")
    );
    app.advance(1);
    assert_eq!(app.page().style(entry, "background-color"), Some("transparent"));
    assert_eq!(app.page().style(entry, "padding"), Some("0"));
}

// ----------------------------------------------------------------------
// Lazy images and scroll reveals
// ----------------------------------------------------------------------

fn images(app: &App) -> Vec<NodeId> {
    app.page()
        .all_nodes()
        .into_iter()
        .filter(|&n| app.page().element(n).is_some_and(|el| el.tag() == "img"))
        .collect()
}

#[test]
fn a_loading_image_waits_for_its_load_event() {
    let mut app = article_app();
    let img = images(&app)[0];
    assert!(app.host().is_observed(img));

    app.enters_viewport(img);
    assert_eq!(app.page().style(img, "opacity"), Some("0"));
    assert_eq!(app.page().style(img, "transition"), Some("opacity 0.5s"));
    assert!(!app.host().is_observed(img));

    app.media_loaded(img);
    assert_eq!(app.page().style(img, "opacity"), Some("1"));
}

#[test]
fn an_already_loaded_image_reveals_immediately() {
    let mut app = article_app();
    let img = images(&app)[1];
    app.enters_viewport(img);
    assert_eq!(app.page().style(img, "opacity"), Some("1"));
    assert!(!app.host().is_observed(img));
}

#[test]
fn reveal_targets_hide_at_mount_and_show_on_entry() {
    let mut app = article_app();
    let para = app.page().by_class("fade-in")[0];
    assert_eq!(app.page().style(para, "opacity"), Some("0"));
    assert!(app.host().is_observed(para));

    app.enters_viewport(para);
    assert_eq!(app.page().style(para, "opacity"), Some("1"));
    assert_eq!(
        app.page().style(para, "transform"),
        Some("translateX(0) translateY(0)")
    );
    // Reveals stay observed; a second entry changes nothing.
    assert!(app.host().is_observed(para));
}

// ----------------------------------------------------------------------
// Mobile drawer
// ----------------------------------------------------------------------

#[test]
fn desktop_viewports_get_no_mobile_toggle() {
    let app = article_app();
    assert!(app.page().by_id("mobileMenuToggle").is_none());
}

#[test]
fn narrow_viewports_get_a_working_drawer() {
    let mut app = App::builder()
        .store(MemoryStore::new())
        .build(article_page_with_width(600));
    app.init();

    let button = app.page().by_id("mobileMenuToggle").unwrap();
    assert_eq!(app.page().text(button), "☰");
    let sidebar = app.page().by_class("sidebar")[0];

    app.click(button);
    assert_eq!(app.page().style(sidebar, "display"), Some("block"));
    assert_eq!(app.page().style(sidebar, "position"), Some("fixed"));
    assert_eq!(app.page().text(button), "✕");

    app.click(button);
    assert_eq!(app.page().style(sidebar, "display"), Some("none"));
    assert_eq!(app.page().text(button), "☰");
}

// ----------------------------------------------------------------------
// Degrading on a page with no anchors
// ----------------------------------------------------------------------

#[test]
fn a_bare_page_initializes_without_panicking() {
    let mut b = Page::builder().today(fixture_date());
    let html = b.element(ElementSpec::new("html"));
    b.element(ElementSpec::new("body").child_of(html));
    let mut app = App::builder().store(MemoryStore::new()).build(b.build());
    app.init();

    // The floating control is created unconditionally; everything else
    // skipped its mount.
    assert!(app.page().by_id("backToTop").is_some());
    assert!(!app.click_id("themeToggle"));
    assert!(!app.input_id("globalSearch", "qin"));
    app.scroll(1000.0);
    app.press(sitewire::Key::Escape);
    app.advance(5000);
}
