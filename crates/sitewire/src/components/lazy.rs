//! Lazy image loading: fade in on first visibility, observe once.

use sitewire_dom::{Effect, Event, NodeId, ObserveOptions};

use crate::app::{AppEvent, Component, Ctx};

/// Fades images in as they enter the viewport.
///
/// An image still loading gets opacity 0 and waits for its load event; an
/// already-loaded image (attribute `complete`) shows immediately. Either
/// way the node is unobserved after its first visibility.
pub struct LazyImages {
    images: Vec<NodeId>,
    /// Visible but still loading; waiting on [`Event::MediaLoaded`].
    pending: Vec<NodeId>,
}

impl LazyImages {
    pub fn new() -> Self {
        Self {
            images: Vec::new(),
            pending: Vec::new(),
        }
    }

    fn reveal(&mut self, ctx: &mut Ctx<'_>, node: NodeId) {
        ctx.apply(Effect::SetStyle {
            node,
            name: "opacity".to_string(),
            value: "1".to_string(),
        });
    }
}

impl Default for LazyImages {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LazyImages {
    fn name(&self) -> &'static str {
        "lazy-images"
    }

    fn mount(&mut self, ctx: &mut Ctx<'_>) -> bool {
        self.images = ctx
            .page()
            .all_nodes()
            .into_iter()
            .filter(|&n| {
                ctx.page().element(n).is_some_and(|el| {
                    el.tag() == "img"
                        && (el.attr("loading") == Some("lazy") || el.has_class("content-image"))
                })
            })
            .collect();
        if self.images.is_empty() {
            return false;
        }
        for &img in &self.images {
            ctx.apply(Effect::Observe {
                node: img,
                opts: ObserveOptions::default(),
            });
        }
        true
    }

    fn handle(&mut self, event: &AppEvent, ctx: &mut Ctx<'_>) {
        match event {
            AppEvent::Dom(Event::Visible { node }) if self.images.contains(node) => {
                let node = *node;
                if ctx.page().attr(node, "complete").is_some() {
                    self.reveal(ctx, node);
                } else {
                    ctx.apply(Effect::SetStyle {
                        node,
                        name: "opacity".to_string(),
                        value: "0".to_string(),
                    });
                    ctx.apply(Effect::SetStyle {
                        node,
                        name: "transition".to_string(),
                        value: "opacity 0.5s".to_string(),
                    });
                    self.pending.push(node);
                }
                ctx.apply(Effect::Unobserve { node });
            }
            AppEvent::Dom(Event::MediaLoaded { target }) => {
                if let Some(pos) = self.pending.iter().position(|&n| n == *target) {
                    let node = self.pending.swap_remove(pos);
                    self.reveal(ctx, node);
                }
            }
            _ => {}
        }
    }
}
