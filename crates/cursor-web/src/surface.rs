use crate::dom::{element_bounds, EventListener};
use cursor_core::{InteractiveSurface, Rect, SurfaceError};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hover {
    Enter,
    Leave,
}

pub type HoverSink = Rc<dyn Fn(&web::Element, Hover)>;

/// The live document as an interactive surface. Hover hooks forward to `sink`.
pub struct DomSurface {
    document: web::Document,
    sink: HoverSink,
}

/// Enter/leave listeners for one element; dropping them detaches both.
pub struct HoverHooks {
    _enter: EventListener,
    _leave: EventListener,
}

impl DomSurface {
    pub fn new(document: web::Document, sink: HoverSink) -> Self {
        Self { document, sink }
    }
}

impl InteractiveSurface for DomSurface {
    type Node = web::Element;
    type Listener = HoverHooks;

    fn interactive_nodes(&self, selector: &str) -> Vec<web::Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("[surface] bad selector {:?}: {:?}", selector, e);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .collect()
    }

    fn attach_hover(&self, node: &web::Element) -> Result<HoverHooks, SurfaceError> {
        let target: &web::EventTarget = node.as_ref();
        let hook = |hover: Hover| {
            let sink = self.sink.clone();
            let el = node.clone();
            move |_ev: web::Event| sink(&el, hover)
        };
        let enter = EventListener::new(target, "pointerenter", hook(Hover::Enter))
            .map_err(|e| SurfaceError::Attach(e.to_string()))?;
        let leave = EventListener::new(target, "pointerleave", hook(Hover::Leave))
            .map_err(|e| SurfaceError::Attach(e.to_string()))?;
        Ok(HoverHooks {
            _enter: enter,
            _leave: leave,
        })
    }

    fn detach_hover(&self, listener: HoverHooks) {
        drop(listener);
    }

    fn bounds(&self, node: &web::Element) -> Option<Rect> {
        element_bounds(node)
    }
}
