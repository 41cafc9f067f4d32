//! Client-side interactivity layer for a static, multi-page encyclopedia
//! site, rebuilt as headless components.
//!
//! Server-rendered pages arrive with their markup already in place; this
//! layer adds theme persistence, a language selector, in-memory keyword
//! search, outline generation with scroll-linked highlighting, citation and
//! permalink utilities, toast notifications, lazy image loading,
//! scroll-triggered reveals, a mobile navigation toggle, and a back-to-top
//! control.
//!
//! # Architecture
//!
//! Every feature is an isolated [`Component`] wired up once at
//! [`App::init`]. Components hold no reference to each other; the only
//! shared state is the injected [`PreferenceStore`], and the only output
//! channel is the render-instruction stream applied by the host adapter
//! (see `sitewire-dom`). A component whose required page anchors are
//! missing simply declines to mount: absent feature, no error, by
//! contract.
//!
//! # Example
//!
//! ```
//! use sitewire::{App, MemoryStore};
//! use sitewire::dom::{ElementSpec, Page};
//!
//! let mut b = Page::builder();
//! let body = b.element(ElementSpec::new("body"));
//! b.element(ElementSpec::new("button").id("themeToggle").child_of(body));
//!
//! let mut app = App::builder().store(MemoryStore::new()).build(b.build());
//! app.init();
//! app.click_id("themeToggle");
//! assert_eq!(app.store().get(sitewire::PrefKey::Theme), "dark");
//! ```

mod app;
pub mod components;

pub use app::{App, AppBuilder, AppEvent, Component, Ctx};

pub use sitewire_dom as dom;
pub use sitewire_search as search;
pub use sitewire_store as store;

// The working vocabulary, re-exported flat the way callers use it.
pub use sitewire_dom::{Effect, Event, Host, Key, NodeId, Page, PageBuilder, TimerKey};
pub use sitewire_search::{QueryOutcome, SearchHit, SearchIndex};
pub use sitewire_store::{JsonFileStore, MemoryStore, PrefKey, PreferenceStore};

pub use components::citation::build_citation;
pub use components::theme::ThemeMode;
