//! The component roster.
//!
//! Each submodule is one isolated feature. They share no runtime state
//! beyond the injected preference store. Mount order runs feature
//! components first and the always-on service components (toasts, citation
//! modal, the Escape overlay sweep) at the end.

pub mod back_to_top;
pub mod citation;
pub mod language;
pub mod lazy;
pub mod mobile;
pub mod notify;
pub mod overlays;
pub mod quick_links;
pub mod references;
pub mod reveal;
pub mod scroll;
pub mod search_box;
pub mod theme;
pub mod toc;

use sitewire_search::SearchIndex;

use crate::app::Component;

/// Every component this layer ships, in mount order. Mount guards decide
/// which of them survive on a given page.
pub fn roster(index: SearchIndex) -> Vec<Box<dyn Component>> {
    vec![
        Box::new(theme::ThemeToggle::new()),
        Box::new(language::LanguageSelect::new()),
        Box::new(search_box::SearchBox::new(index)),
        Box::new(toc::TocOutline::new()),
        Box::new(quick_links::QuickLinks::new()),
        Box::new(scroll::SmoothScroll::new()),
        Box::new(references::RefJumps::new()),
        Box::new(lazy::LazyImages::new()),
        Box::new(reveal::ScrollReveal::new()),
        Box::new(mobile::MobileMenu::new()),
        Box::new(back_to_top::BackToTop::new()),
        Box::new(notify::Notifications::new()),
        Box::new(citation::CitationModal::new()),
        Box::new(overlays::EscapeSweep::new()),
    ]
}
