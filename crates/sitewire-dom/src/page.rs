//! The page: element arena plus runtime environment.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::element::{Element, ElementSpec, NodeId};

/// Runtime facts about the hosting document that components read but never
/// own: viewport geometry, scroll offset, the current URL, and today's date.
///
/// Injecting the date here keeps citation strings deterministic under test.
#[derive(Debug, Clone)]
pub struct Environment {
    pub viewport_width: u32,
    pub scroll_y: f64,
    pub url: String,
    pub today: NaiveDate,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            viewport_width: 1280,
            scroll_y: 0.0,
            url: "https://example.org/".to_string(),
            today: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
        }
    }
}

/// The headless document: an element arena with document-order traversal,
/// id/class lookup, and the page environment.
///
/// All structural mutation happens through [`create`](Page::create) and
/// [`remove`](Page::remove); attribute/style/class/text mutation through the
/// dedicated setters. [`Host::apply`](crate::Host::apply) is the only caller
/// outside page construction.
#[derive(Debug, Clone)]
pub struct Page {
    nodes: HashMap<NodeId, Element>,
    roots: Vec<NodeId>,
    next: u64,
    env: Environment,
}

impl Page {
    pub fn new(env: Environment) -> Self {
        Self {
            nodes: HashMap::new(),
            roots: Vec::new(),
            next: 1,
            env,
        }
    }

    pub fn builder() -> PageBuilder {
        PageBuilder::new()
    }

    // ------------------------------------------------------------------
    // Environment
    // ------------------------------------------------------------------

    pub fn url(&self) -> &str {
        &self.env.url
    }

    pub fn today(&self) -> NaiveDate {
        self.env.today
    }

    pub fn viewport_width(&self) -> u32 {
        self.env.viewport_width
    }

    pub fn scroll_y(&self) -> f64 {
        self.env.scroll_y
    }

    pub(crate) fn set_scroll_y(&mut self, y: f64) {
        self.env.scroll_y = y;
    }

    /// Rendered height of the fixed header (class `header-fixed`), read from
    /// its inline `height` style. 0 when the header is absent, so callers
    /// degrade to an unadjusted offset rather than failing.
    pub fn header_height(&self) -> f64 {
        self.by_class("header-fixed")
            .first()
            .and_then(|&node| self.element(node))
            .and_then(|el| el.style("height"))
            .and_then(parse_px)
            .unwrap_or(0.0)
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(&node)
    }

    /// First document root, standing in for the document element. The theme
    /// mode attribute lives here.
    pub fn root(&self) -> Option<NodeId> {
        self.roots.first().copied()
    }

    /// First element with the given html id, in document order.
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.walk()
            .into_iter()
            .find(|&n| self.nodes.get(&n).and_then(|e| e.html_id()) == Some(id))
    }

    /// All elements carrying the given class, in document order.
    pub fn by_class(&self, class: &str) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|n| self.nodes.get(n).is_some_and(|e| e.has_class(class)))
            .collect()
    }

    /// Every element in document order.
    pub fn all_nodes(&self) -> Vec<NodeId> {
        self.walk()
    }

    /// Descendants of `node` in document order, excluding `node` itself.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.nodes.get(&node) {
            Some(el) => el.children.iter().rev().copied().collect(),
            None => return out,
        };
        while let Some(n) = stack.pop() {
            if let Some(el) = self.nodes.get(&n) {
                out.push(n);
                stack.extend(el.children.iter().rev().copied());
            }
        }
        out
    }

    /// True when `node` is `ancestor` or sits anywhere beneath it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if n == ancestor {
                return true;
            }
            cur = self.nodes.get(&n).and_then(|e| e.parent);
        }
        false
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes.get(&node).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    pub fn text(&self, node: NodeId) -> &str {
        self.nodes.get(&node).map(|e| e.text()).unwrap_or("")
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(&node).and_then(|e| e.attr(name))
    }

    pub fn style(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(&node).and_then(|e| e.style(name))
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes.get(&node).is_some_and(|e| e.has_class(class))
    }

    pub fn html_id(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).and_then(|e| e.html_id())
    }

    // ------------------------------------------------------------------
    // Mutation (called by Host::apply and PageBuilder)
    // ------------------------------------------------------------------

    /// Creates an element from `spec`. A spec naming a missing parent is a
    /// silent no-op and returns `None`.
    pub fn create(&mut self, spec: ElementSpec) -> Option<NodeId> {
        if let Some(parent) = spec.parent {
            if !self.nodes.contains_key(&parent) {
                return None;
            }
        }
        let node = NodeId(self.next);
        self.next += 1;
        let element = Element {
            node,
            parent: spec.parent,
            tag: if spec.tag.is_empty() { "div".to_string() } else { spec.tag },
            html_id: spec.html_id,
            classes: spec.classes.into_iter().collect(),
            attrs: spec.attrs.into_iter().collect(),
            styles: spec.styles.into_iter().collect(),
            text: spec.text,
            top: spec.top,
            children: Vec::new(),
        };
        self.nodes.insert(node, element);
        match spec.parent {
            Some(parent) => {
                if let Some(p) = self.nodes.get_mut(&parent) {
                    p.children.push(node);
                }
            }
            None => self.roots.push(node),
        }
        Some(node)
    }

    /// Detaches `node` and drops its whole subtree. Missing nodes are a
    /// silent no-op.
    pub fn remove(&mut self, node: NodeId) {
        let Some(el) = self.nodes.get(&node) else {
            return;
        };
        match el.parent {
            Some(parent) => {
                if let Some(p) = self.nodes.get_mut(&parent) {
                    p.children.retain(|&c| c != node);
                }
            }
            None => self.roots.retain(|&r| r != node),
        }
        let mut doomed = vec![node];
        doomed.extend(self.descendants(node));
        for n in doomed {
            self.nodes.remove(&n);
        }
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.nodes.get_mut(&node) {
            el.attrs.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove_attr(&mut self, node: NodeId, name: &str) {
        if let Some(el) = self.nodes.get_mut(&node) {
            el.attrs.remove(name);
        }
    }

    pub fn set_style(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.nodes.get_mut(&node) {
            el.styles.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove_style(&mut self, node: NodeId, name: &str) {
        if let Some(el) = self.nodes.get_mut(&node) {
            el.styles.remove(name);
        }
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(el) = self.nodes.get_mut(&node) {
            el.text = text.to_string();
        }
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.nodes.get_mut(&node) {
            el.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.nodes.get_mut(&node) {
            el.classes.remove(class);
        }
    }

    fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            if let Some(el) = self.nodes.get(&n) {
                out.push(n);
                stack.extend(el.children.iter().rev().copied());
            }
        }
        out
    }
}

/// Fluent page construction for tests and demos.
///
/// # Example
///
/// ```
/// use sitewire_dom::{ElementSpec, Page};
///
/// let mut builder = Page::builder().url("https://encyclopedia.example/istorie.html");
/// let body = builder.element(ElementSpec::new("body"));
/// builder.element(ElementSpec::new("header").class("header-fixed").style("height", "64px").child_of(body));
/// let page = builder.build();
/// assert_eq!(page.header_height(), 64.0);
/// ```
#[derive(Debug)]
pub struct PageBuilder {
    page: Page,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            page: Page::new(Environment::default()),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.page.env.url = url.into();
        self
    }

    pub fn today(mut self, today: NaiveDate) -> Self {
        self.page.env.today = today;
        self
    }

    pub fn viewport_width(mut self, width: u32) -> Self {
        self.page.env.viewport_width = width;
        self
    }

    pub fn scroll_y(mut self, y: f64) -> Self {
        self.page.env.scroll_y = y;
        self
    }

    /// Adds an element and returns its handle for parenting further specs.
    pub fn element(&mut self, spec: ElementSpec) -> NodeId {
        // Specs handed to the builder always name live parents.
        self.page.create(spec).unwrap_or(NodeId(0))
    }

    pub fn build(self) -> Page {
        self.page
    }
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_px(value: &str) -> Option<f64> {
    value.trim().trim_end_matches("px").trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page() -> (Page, NodeId, NodeId) {
        let mut b = Page::builder();
        let body = b.element(ElementSpec::new("body"));
        let main = b.element(ElementSpec::new("main").class("content-main").child_of(body));
        b.element(
            ElementSpec::new("h2")
                .id("istorie-antica")
                .text("Istoria antică")
                .child_of(main),
        );
        (b.build(), body, main)
    }

    #[test]
    fn by_id_finds_nested_elements() {
        let (page, _, main) = sample_page();
        let heading = page.by_id("istorie-antica").unwrap();
        assert!(page.contains(main, heading));
        assert_eq!(page.text(heading), "Istoria antică");
    }

    #[test]
    fn contains_is_reflexive_and_transitive() {
        let (page, body, _main) = sample_page();
        let heading = page.by_id("istorie-antica").unwrap();
        assert!(page.contains(body, body));
        assert!(page.contains(body, heading));
        assert!(!page.contains(heading, body));
    }

    #[test]
    fn remove_drops_whole_subtree() {
        let (mut page, _, main) = sample_page();
        page.remove(main);
        assert!(page.by_id("istorie-antica").is_none());
        assert!(page.element(main).is_none());
    }

    #[test]
    fn removed_node_mutations_are_no_ops() {
        let (mut page, _, main) = sample_page();
        let heading = page.by_id("istorie-antica").unwrap();
        page.remove(main);
        page.set_text(heading, "gone");
        page.set_style(heading, "color", "red");
        assert!(page.element(heading).is_none());
    }

    #[test]
    fn header_height_defaults_to_zero_without_header() {
        let (page, _, _) = sample_page();
        assert_eq!(page.header_height(), 0.0);
    }

    #[test]
    fn header_height_reads_inline_style() {
        let mut b = Page::builder();
        b.element(
            ElementSpec::new("header")
                .class("header-fixed")
                .style("height", "72px"),
        );
        assert_eq!(b.build().header_height(), 72.0);
    }

    #[test]
    fn document_order_follows_insertion() {
        let mut b = Page::builder();
        let body = b.element(ElementSpec::new("body"));
        let first = b.element(ElementSpec::new("p").class("note").child_of(body));
        let second = b.element(ElementSpec::new("p").class("note").child_of(body));
        let page = b.build();
        assert_eq!(page.by_class("note"), vec![first, second]);
    }
}
