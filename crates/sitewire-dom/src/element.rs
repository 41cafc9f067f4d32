//! Elements and element creation specs.

use std::collections::{BTreeMap, BTreeSet};

/// Opaque handle to an element in a [`Page`](crate::Page).
///
/// Handles are monotonic and never reused within a page, so a stale handle
/// held by a component after its element was removed can never alias a newer
/// element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u64);

/// One element in the page tree.
///
/// Fields are read through accessors; all mutation goes through
/// [`Page`](crate::Page) so the instruction channel stays the only write
/// path.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) node: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) tag: String,
    pub(crate) html_id: Option<String>,
    pub(crate) classes: BTreeSet<String>,
    pub(crate) attrs: BTreeMap<String, String>,
    pub(crate) styles: BTreeMap<String, String>,
    pub(crate) text: String,
    pub(crate) top: f64,
    pub(crate) children: Vec<NodeId>,
}

impl Element {
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The element's `id` attribute, when authored.
    pub fn html_id(&self) -> Option<&str> {
        self.html_id.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Inline style value, e.g. `style("position") == Some("fixed")`.
    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Layout offset from the document origin, in logical pixels.
    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Specification for creating an element, used both by
/// [`PageBuilder`](crate::PageBuilder) and by [`Effect::Create`](crate::Effect).
///
/// Components that need to find their created element afterwards give it a
/// well-known html id and look it up with [`Page::by_id`](crate::Page::by_id)
/// once the instruction has been applied.
///
/// # Example
///
/// ```
/// use sitewire_dom::ElementSpec;
///
/// let spec = ElementSpec::new("button")
///     .id("backToTop")
///     .style("position", "fixed")
///     .style("bottom", "90px")
///     .text("↑");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    pub(crate) parent: Option<NodeId>,
    pub(crate) tag: String,
    pub(crate) html_id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) styles: Vec<(String, String)>,
    pub(crate) text: String,
    pub(crate) top: f64,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Attaches the new element under `parent`. Without this the element
    /// becomes a document root.
    pub fn child_of(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.html_id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((name.into(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Layout offset from the document origin, used by scroll math.
    pub fn top(mut self, top: f64) -> Self {
        self.top = top;
        self
    }
}
