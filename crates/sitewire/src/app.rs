//! App wiring: component roster, event routing, and the simulated clock.

use sitewire_dom::{Effect, Event, Host, Key, NodeId, Page};
use sitewire_search::SearchIndex;
use sitewire_store::{MemoryStore, PreferenceStore};

use crate::components;
use crate::components::notify::DEFAULT_TOAST_MS;

/// Events as components see them: document input plus the layer's own
/// cross-component requests.
///
/// Quick links do not render toasts and the citation trigger does not build
/// the modal; they emit requests that the owning component picks up on the
/// same dispatch pass.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Dom(Event),
    /// Show a transient toast.
    Notify { message: String, duration_ms: u64 },
    /// Open the citation modal for the current page.
    CiteRequested,
}

/// What a component gets to work with while handling an event: read access
/// to the page, the instruction channel, the injected preference store, and
/// the request queue.
pub struct Ctx<'a> {
    host: &'a mut Host,
    store: &'a mut dyn PreferenceStore,
    requests: &'a mut Vec<AppEvent>,
}

impl<'a> Ctx<'a> {
    pub fn page(&self) -> &Page {
        self.host.page()
    }

    /// Applies one render instruction through the host adapter.
    pub fn apply(&mut self, effect: Effect) {
        self.host.apply(effect);
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        &*self.store
    }

    pub fn store_mut(&mut self) -> &mut dyn PreferenceStore {
        self.store
    }

    /// Queues an internal request, routed after the current event finishes.
    pub fn emit(&mut self, event: AppEvent) {
        self.requests.push(event);
    }

    /// Shorthand for the common toast request.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.emit(AppEvent::Notify {
            message: message.into(),
            duration_ms: DEFAULT_TOAST_MS,
        });
    }
}

/// One interactivity feature.
///
/// `mount` runs exactly once, at init; returning `false` means the page
/// lacks the component's required anchors and the component is dropped for
/// the page's lifetime, the explicit degrade-gracefully contract. Mounted
/// components then see every routed [`AppEvent`].
pub trait Component {
    fn name(&self) -> &'static str;

    fn mount(&mut self, ctx: &mut Ctx<'_>) -> bool;

    fn handle(&mut self, event: &AppEvent, ctx: &mut Ctx<'_>);
}

/// Builder for [`App`]; the preference store is injected here rather than
/// reached for as ambient state.
pub struct AppBuilder {
    store: Box<dyn PreferenceStore>,
    index: SearchIndex,
}

impl AppBuilder {
    pub fn store(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.store = Box::new(store);
        self
    }

    /// Overrides the built-in search dataset, mainly for tests.
    pub fn search_index(mut self, index: SearchIndex) -> Self {
        self.index = index;
        self
    }

    pub fn build(self, page: Page) -> App {
        App {
            host: Host::new(page),
            store: self.store,
            index: self.index,
            components: Vec::new(),
            requests: Vec::new(),
            initialized: false,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self {
            store: Box::new(MemoryStore::new()),
            index: SearchIndex::builtin(),
        }
    }
}

/// The page-lifetime owner: host, store, and the mounted component roster.
pub struct App {
    host: Host,
    store: Box<dyn PreferenceStore>,
    index: SearchIndex,
    components: Vec<Box<dyn Component>>,
    requests: Vec<AppEvent>,
    initialized: bool,
}

impl App {
    pub fn builder() -> AppBuilder {
        AppBuilder::default()
    }

    /// Mounts the full component roster. Each mount is independently
    /// guarded; a skipped component is logged and dropped, never retried.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        let candidates = components::roster(self.index);
        for mut component in candidates {
            let mut ctx = Ctx {
                host: &mut self.host,
                store: self.store.as_mut(),
                requests: &mut self.requests,
            };
            if component.mount(&mut ctx) {
                self.components.push(component);
            } else {
                tracing::debug!(component = component.name(), "anchors missing, skipped");
            }
        }
        self.drain_requests();
        tracing::info!(components = self.components.len(), "encyclopedia layer initialized");
    }

    /// Routes one document event to every mounted component, then any
    /// requests the pass produced, until quiescent.
    pub fn dispatch(&mut self, event: Event) {
        self.route(AppEvent::Dom(event));
        self.drain_requests();
    }

    fn route(&mut self, event: AppEvent) {
        for component in &mut self.components {
            let mut ctx = Ctx {
                host: &mut self.host,
                store: self.store.as_mut(),
                requests: &mut self.requests,
            };
            component.handle(&event, &mut ctx);
        }
    }

    fn drain_requests(&mut self) {
        while !self.requests.is_empty() {
            let batch: Vec<AppEvent> = self.requests.drain(..).collect();
            for event in batch {
                self.route(event);
            }
        }
    }

    /// Advances the simulated clock, dispatching every timer that comes due.
    ///
    /// Timers fire one at a time at their own deadlines, so a handler that
    /// schedules a follow-up (a toast's fade scheduling its removal) anchors
    /// it at the fired timer's logical time. Cascades due inside the window
    /// fire within this same call.
    pub fn advance(&mut self, ms: u64) {
        let target = self.host.scheduler().now() + ms;
        while let Some(key) = self.host.pop_due_timer(target) {
            self.dispatch(Event::Timer { key });
        }
        self.host.settle_clock(target);
    }

    pub fn page(&self) -> &Page {
        self.host.page()
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }

    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    // ------------------------------------------------------------------
    // Harness shorthands: synthesize document events by html id.
    // ------------------------------------------------------------------

    /// Clicks the element with the given html id. Returns `false` (and
    /// dispatches nothing) when no such element exists.
    pub fn click_id(&mut self, id: &str) -> bool {
        match self.host.page().by_id(id) {
            Some(target) => {
                self.dispatch(Event::Click { target });
                true
            }
            None => false,
        }
    }

    pub fn click(&mut self, target: NodeId) {
        self.dispatch(Event::Click { target });
    }

    pub fn input_id(&mut self, id: &str, value: &str) -> bool {
        match self.host.page().by_id(id) {
            Some(target) => {
                self.dispatch(Event::Input { target, value: value.to_string() });
                true
            }
            None => false,
        }
    }

    pub fn change_id(&mut self, id: &str, value: &str) -> bool {
        match self.host.page().by_id(id) {
            Some(target) => {
                self.dispatch(Event::Change { target, value: value.to_string() });
                true
            }
            None => false,
        }
    }

    pub fn press(&mut self, key: Key) {
        self.dispatch(Event::KeyDown { key });
    }

    /// Scrolls the document to `y` and dispatches the scroll event.
    pub fn scroll(&mut self, y: f64) {
        self.host.set_scroll(y);
        self.dispatch(Event::Scroll { y });
    }

    /// Reports `node` as entering the viewport. Only observed nodes produce
    /// an event; unobserved visibility is invisible to the layer.
    pub fn enters_viewport(&mut self, node: NodeId) {
        if self.host.is_observed(node) {
            self.dispatch(Event::Visible { node });
        }
    }

    /// Reports an image as finished loading.
    pub fn media_loaded(&mut self, target: NodeId) {
        self.dispatch(Event::MediaLoaded { target });
    }
}
