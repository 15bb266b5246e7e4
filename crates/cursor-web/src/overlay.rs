use crate::dom::{element_bounds, set_style};
use crate::frame::FrameLoop;
use crate::surface::{DomSurface, Hover, HoverSink};
use anyhow::Context;
use cursor_core::{CursorOverlay, OverlayFrame, PointerTracker};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type SharedOverlay = Rc<RefCell<CursorOverlay<DomSurface>>>;

/// Indicator + trail nodes created inside the overlay root.
struct OverlayNodes {
    indicator: web::HtmlElement,
    trail: Vec<web::HtmlElement>,
}

impl OverlayNodes {
    fn create(
        document: &web::Document,
        root: &web::HtmlElement,
        trail_len: usize,
    ) -> anyhow::Result<Self> {
        let make = |class: &str| -> anyhow::Result<web::HtmlElement> {
            let el = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            el.set_class_name(class);
            root.append_child(&el)
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            Ok(el)
        };
        let trail = (0..trail_len)
            .map(|_| make("cursor-trail"))
            .collect::<anyhow::Result<Vec<_>>>()?;
        // indicator last so it paints above the trail
        let indicator = make("cursor-dot")?;
        Ok(Self { indicator, trail })
    }

    fn apply(&self, frame: &OverlayFrame) {
        set_style(&self.indicator, &frame.indicator.to_css());
        let _ = self
            .indicator
            .set_attribute("data-state", frame.indicator.color_state.as_str());
        for (i, el) in self.trail.iter().enumerate() {
            match frame.trail.get(i) {
                Some(seg) => set_style(el, &seg.to_css()),
                None => set_style(el, "opacity:0;"),
            }
        }
    }

    fn remove(&self) {
        self.indicator.remove();
        for el in &self.trail {
            el.remove();
        }
    }
}

/// A mounted overlay: hover registry kept current by a mutation observer and
/// a frame loop writing render records into the indicator/trail nodes.
pub struct OverlayMount {
    overlay: SharedOverlay,
    tracker: Rc<RefCell<PointerTracker>>,
    surface: Rc<DomSurface>,
    nodes: Rc<OverlayNodes>,
    observer: web::MutationObserver,
    _on_mutation: Closure<dyn FnMut(js_sys::Array, web::MutationObserver)>,
    frame: FrameLoop,
}

pub fn mount_overlay(
    document: &web::Document,
    root: &web::HtmlElement,
    overlay: CursorOverlay<DomSurface>,
    tracker: Rc<RefCell<PointerTracker>>,
) -> anyhow::Result<OverlayMount> {
    let nodes = Rc::new(OverlayNodes::create(
        document,
        root,
        overlay.config().trail_capacity,
    )?);
    let overlay: SharedOverlay = Rc::new(RefCell::new(overlay));
    let surface = Rc::new(DomSurface::new(
        document.clone(),
        hover_sink(Rc::downgrade(&overlay), Rc::downgrade(&tracker)),
    ));

    let count = overlay
        .borrow_mut()
        .rescan(&mut tracker.borrow_mut(), &surface);
    log::info!("[overlay] mounted; {} interactive nodes", count);

    let on_mutation = {
        let overlay = overlay.clone();
        let tracker = tracker.clone();
        let surface = surface.clone();
        Closure::wrap(Box::new(move |_records: js_sys::Array, _obs: web::MutationObserver| {
            let (Ok(mut o), Ok(mut t)) = (overlay.try_borrow_mut(), tracker.try_borrow_mut()) else {
                log::warn!("[overlay] mutation during tick; rescan skipped");
                return;
            };
            o.rescan(&mut t, &surface);
        }) as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>)
    };
    let observer = web::MutationObserver::new(on_mutation.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let init = web::MutationObserverInit::new();
    init.set_child_list(true);
    init.set_subtree(true);
    let observed = document
        .document_element()
        .context("document has no root element")?;
    observer
        .observe_with_options(&observed, &init)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let frame = {
        let overlay = overlay.clone();
        let tracker = tracker.clone();
        let surface = surface.clone();
        let nodes = nodes.clone();
        FrameLoop::start(move |_timestamp_ms| {
            let frame = overlay
                .borrow_mut()
                .tick(&mut tracker.borrow_mut(), &surface, Instant::now());
            nodes.apply(&frame);
        })?
    };

    Ok(OverlayMount {
        overlay,
        tracker,
        surface,
        nodes,
        observer,
        _on_mutation: on_mutation,
        frame,
    })
}

impl OverlayMount {
    /// Cancel the frame loop, stop observing, detach hover hooks and remove
    /// the nodes created at mount.
    pub fn unmount(self) {
        self.frame.cancel();
        self.observer.disconnect();
        self.overlay
            .borrow_mut()
            .teardown(&mut self.tracker.borrow_mut(), &self.surface);
        self.nodes.remove();
    }
}

fn hover_sink(
    overlay: Weak<RefCell<CursorOverlay<DomSurface>>>,
    tracker: Weak<RefCell<PointerTracker>>,
) -> HoverSink {
    Rc::new(move |el: &web::Element, hover: Hover| {
        let (Some(overlay), Some(tracker)) = (overlay.upgrade(), tracker.upgrade()) else {
            return;
        };
        let (Ok(mut o), Ok(mut t)) = (overlay.try_borrow_mut(), tracker.try_borrow_mut()) else {
            return;
        };
        match hover {
            Hover::Enter => o.hover_enter(&mut t, el, element_bounds(el)),
            Hover::Leave => o.hover_leave(&mut t, el),
        }
    })
}
