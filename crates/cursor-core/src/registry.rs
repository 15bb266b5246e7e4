//! Live set of elements matching the interactive contract.

use crate::error::SurfaceError;
use crate::geometry::Rect;
use crate::magnetic::MagneticTarget;
use std::fmt::Debug;

/// Host document seen through the interactive contract.
///
/// The registry never inspects markup; it asks the surface which nodes match
/// the selector, hooks hover notifications onto them, and reads their layout
/// boxes on demand.
pub trait InteractiveSurface {
    type Node: Clone + PartialEq + Debug;
    /// Handle keeping a node's hover hooks alive until passed back to
    /// [`InteractiveSurface::detach_hover`].
    type Listener;

    fn interactive_nodes(&self, selector: &str) -> Vec<Self::Node>;
    fn attach_hover(&self, node: &Self::Node) -> Result<Self::Listener, SurfaceError>;
    fn detach_hover(&self, listener: Self::Listener);
    /// Current layout box, `None` once the node has left the document.
    fn bounds(&self, node: &Self::Node) -> Option<Rect>;
}

struct Tracked<S: InteractiveSurface> {
    node: S::Node,
    listener: S::Listener,
}

pub struct InteractiveRegistry<S: InteractiveSurface> {
    selector: String,
    entries: Vec<Tracked<S>>,
    hovered: Option<S::Node>,
    target: Option<MagneticTarget>,
}

impl<S: InteractiveSurface> InteractiveRegistry<S> {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            entries: Vec::new(),
            hovered: None,
            target: None,
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, node: &S::Node) -> bool {
        self.entries.iter().any(|e| &e.node == node)
    }

    pub fn hovered(&self) -> Option<&S::Node> {
        self.hovered.as_ref()
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn target(&self) -> Option<&MagneticTarget> {
        self.target.as_ref()
    }

    /// Rescan after a structural change. Every previously attached listener is
    /// detached before the fresh set is attached. Returns the tracked count.
    pub fn update(&mut self, surface: &S) -> usize {
        self.detach_all(surface);
        for node in surface.interactive_nodes(&self.selector) {
            if self.contains(&node) {
                continue;
            }
            match surface.attach_hover(&node) {
                Ok(listener) => self.entries.push(Tracked { node, listener }),
                Err(e) => log::warn!("[registry] skipping {:?}: {}", node, e),
            }
        }
        if let Some(h) = &self.hovered {
            if !self.contains(h) {
                log::debug!("[registry] hovered node left the contract; clearing");
                self.hovered = None;
                self.target = None;
            }
        }
        log::debug!("[registry] tracking {} interactive nodes", self.entries.len());
        self.entries.len()
    }

    /// Hover entered `node` whose layout box is `bounds`. The most recent
    /// enter replaces any previous target. Untracked nodes, or nodes without
    /// usable geometry, install nothing. Returns whether a target is active.
    pub fn hover_enter(&mut self, node: &S::Node, bounds: Option<Rect>) -> bool {
        let target = if self.contains(node) {
            bounds.and_then(MagneticTarget::from_bounds)
        } else {
            None
        };
        match target {
            Some(t) => {
                self.hovered = Some(node.clone());
                self.target = Some(t);
                true
            }
            None => {
                log::debug!("[registry] hover on {:?} without geometry; ignoring", node);
                self.hovered = None;
                self.target = None;
                false
            }
        }
    }

    /// Leaves of nodes other than the current hover are stale and ignored.
    pub fn hover_leave(&mut self, node: &S::Node) {
        if self.hovered.as_ref() == Some(node) {
            self.hovered = None;
            self.target = None;
        }
    }

    /// Re-read the hovered node's geometry. A node that has left the document
    /// clears the hover instead of failing.
    pub fn refresh_target(&mut self, surface: &S) -> Option<MagneticTarget> {
        let hovered = self.hovered.as_ref()?;
        match surface.bounds(hovered).and_then(MagneticTarget::from_bounds) {
            Some(t) => {
                self.target = Some(t);
                Some(t)
            }
            None => {
                self.hovered = None;
                self.target = None;
                None
            }
        }
    }

    /// Detach everything and forget the hover; used on unmount.
    pub fn clear(&mut self, surface: &S) {
        self.detach_all(surface);
        self.hovered = None;
        self.target = None;
    }

    fn detach_all(&mut self, surface: &S) {
        for entry in self.entries.drain(..) {
            surface.detach_hover(entry.listener);
        }
    }
}
