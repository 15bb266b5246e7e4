use crate::dom::{element_bounds, float_config_from, viewport_size};
use crate::frame::FrameLoop;
use cursor_core::{FloatingElement, PointerTracker};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const FLOATING_SELECTOR: &str = "[data-float]";

/// One animated node with its own frame loop. Nothing is shared with other
/// instances except read access to the tracker.
pub struct FloatingMount {
    element: web::HtmlElement,
    frame: FrameLoop,
}

impl FloatingMount {
    pub fn unmount(self) {
        self.frame.cancel();
        let _ = self.element.style().remove_property("transform");
    }
}

pub fn mount_floating(
    element: web::HtmlElement,
    tracker: Rc<RefCell<PointerTracker>>,
) -> anyhow::Result<FloatingMount> {
    let config = float_config_from(&element);
    let mut motion = FloatingElement::new(config, &mut rand::thread_rng())
        .map_err(|e| anyhow::anyhow!(e))?;

    let frame = {
        let element = element.clone();
        let mut reported = false;
        FrameLoop::start(move |_timestamp_ms| {
            // a busy tracker means an input handler is mid-update; skip a frame
            let Ok(pointer) = tracker.try_borrow().map(|t| t.raw()) else {
                return;
            };
            let bounds = element_bounds(&element);
            match motion.tick(Instant::now(), pointer, bounds, viewport_size()) {
                Ok(transform) => {
                    reported = false;
                    let _ = element.style().set_property("transform", &transform.to_css());
                }
                Err(e) if !reported => {
                    reported = true;
                    log::warn!("[floating] tick failed: {}", e);
                }
                Err(_) => {}
            }
        })?
    };
    Ok(FloatingMount { element, frame })
}

/// Mount every `[data-float]` element; failures are logged per element.
pub fn mount_all_floating(
    document: &web::Document,
    tracker: &Rc<RefCell<PointerTracker>>,
) -> Vec<FloatingMount> {
    let Ok(list) = document.query_selector_all(FLOATING_SELECTOR) else {
        return Vec::new();
    };
    let mut mounts = Vec::new();
    for i in 0..list.length() {
        let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) else {
            continue;
        };
        match mount_floating(el, tracker.clone()) {
            Ok(m) => mounts.push(m),
            Err(e) => log::warn!("[floating] mount failed: {:?}", e),
        }
    }
    log::info!("[floating] mounted {} elements", mounts.len());
    mounts
}
