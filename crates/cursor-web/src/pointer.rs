use crate::dom::{client_position, EventListener};
use crate::frame::Timeout;
use anyhow::Context;
use cursor_core::PointerTracker;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Document-scope input listeners plus the idle-hide timer feeding one tracker.
pub struct PointerWiring {
    listeners: Vec<EventListener>,
    idle: Rc<Timeout>,
}

impl PointerWiring {
    pub fn unwire(mut self) {
        self.idle.clear();
        self.listeners.clear();
        log::debug!("[pointer] listeners detached");
    }
}

pub fn wire_pointer_handlers(
    document: &web::Document,
    tracker: Rc<RefCell<PointerTracker>>,
) -> anyhow::Result<PointerWiring> {
    let idle_window = tracker.borrow().idle_timer().window();
    let idle = {
        let tracker = tracker.clone();
        Rc::new(Timeout::new(move || {
            if let Ok(mut t) = tracker.try_borrow_mut() {
                t.poll_idle(Instant::now());
            }
        }))
    };

    let doc_target: &web::EventTarget = document.as_ref();
    let root = document
        .document_element()
        .context("document has no root element")?;
    let root_target: &web::EventTarget = root.as_ref();

    let mut listeners = Vec::with_capacity(5);
    {
        let tracker = tracker.clone();
        let idle = idle.clone();
        listeners.push(EventListener::new(doc_target, "pointermove", move |ev| {
            let Some(pos) = client_position(&ev) else {
                return;
            };
            tracker.borrow_mut().on_move(pos, Instant::now());
            idle.schedule(idle_window);
        })?);
    }
    {
        let tracker = tracker.clone();
        listeners.push(EventListener::new(doc_target, "pointerdown", move |_| {
            tracker.borrow_mut().on_down();
        })?);
    }
    {
        let tracker = tracker.clone();
        listeners.push(EventListener::new(doc_target, "pointerup", move |_| {
            tracker.borrow_mut().on_up();
        })?);
    }
    {
        let tracker = tracker.clone();
        let idle = idle.clone();
        listeners.push(EventListener::new(root_target, "pointerleave", move |_| {
            tracker.borrow_mut().on_leave();
            idle.clear();
        })?);
    }
    {
        let tracker = tracker.clone();
        listeners.push(EventListener::new(root_target, "pointerenter", move |_| {
            tracker.borrow_mut().on_enter();
        })?);
    }

    log::debug!("[pointer] wired {} listeners", listeners.len());
    Ok(PointerWiring { listeners, idle })
}
