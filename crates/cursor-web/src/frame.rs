use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopInner {
    closure: Option<Closure<dyn FnMut(f64)>>,
    handle: Option<i32>,
    cancelled: bool,
}

/// `requestAnimationFrame` loop re-armed every frame until cancelled.
///
/// The closure only holds a weak reference to its own slot, so dropping the
/// loop releases it.
pub struct FrameLoop {
    inner: Rc<RefCell<LoopInner>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> anyhow::Result<Self> {
        let inner = Rc::new(RefCell::new(LoopInner {
            closure: None,
            handle: None,
            cancelled: false,
        }));
        let weak: Weak<RefCell<LoopInner>> = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            on_frame(timestamp_ms);
            if let Some(inner) = weak.upgrade() {
                request_next(&mut inner.borrow_mut());
            }
        }) as Box<dyn FnMut(f64)>);
        {
            let mut guard = inner.borrow_mut();
            guard.closure = Some(closure);
            request_next(&mut guard);
            if guard.handle.is_none() {
                anyhow::bail!("requestAnimationFrame unavailable");
            }
        }
        Ok(Self { inner })
    }

    pub fn is_running(&self) -> bool {
        !self.inner.borrow().cancelled
    }

    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.cancelled {
            return;
        }
        inner.cancelled = true;
        if let (Some(id), Some(w)) = (inner.handle.take(), web::window()) {
            let _ = w.cancel_animation_frame(id);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_next(inner: &mut LoopInner) {
    inner.handle = None;
    if inner.cancelled {
        return;
    }
    let (Some(closure), Some(w)) = (inner.closure.as_ref(), web::window()) else {
        return;
    };
    match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => inner.handle = Some(id),
        Err(e) => log::error!("requestAnimationFrame error: {:?}", e),
    }
}

/// Re-armable `setTimeout`; scheduling again replaces the pending timer.
pub struct Timeout {
    closure: Closure<dyn FnMut()>,
    handle: Rc<Cell<Option<i32>>>,
}

impl Timeout {
    pub fn new(mut callback: impl FnMut() + 'static) -> Self {
        let handle = Rc::new(Cell::new(None));
        let fired = handle.clone();
        let closure = Closure::wrap(Box::new(move || {
            fired.set(None);
            callback();
        }) as Box<dyn FnMut()>);
        Self { closure, handle }
    }

    pub fn schedule(&self, delay: Duration) {
        self.clear();
        let Some(w) = web::window() else {
            return;
        };
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.closure.as_ref().unchecked_ref(),
            ms,
        ) {
            Ok(id) => self.handle.set(Some(id)),
            Err(e) => log::error!("setTimeout error: {:?}", e),
        }
    }

    pub fn clear(&self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            w.clear_timeout_with_handle(id);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.get().is_some()
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.clear();
    }
}
