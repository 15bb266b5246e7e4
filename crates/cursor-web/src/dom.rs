use cursor_core::{ConfigError, CursorConfig, FloatConfig, Rect};
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Layout box of a connected element; `None` once it has left the document.
#[inline]
pub fn element_bounds(el: &web::Element) -> Option<Rect> {
    if !el.is_connected() {
        return None;
    }
    let r = el.get_bounding_client_rect();
    let rect = Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    );
    rect.is_valid().then_some(rect)
}

#[inline]
pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(width as f32, height as f32)
}

#[inline]
pub fn client_position(ev: &web::Event) -> Option<Vec2> {
    let ev = ev.dyn_ref::<web::MouseEvent>()?;
    Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32))
}

pub fn set_style(el: &web::HtmlElement, css: &str) {
    el.style().set_css_text(css);
}

/// DOM listener removed from its target when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Overlay config from `data-cursor-<key>` attributes on `el`. Invalid
/// attributes are logged and skipped.
pub fn cursor_config_from(el: &web::Element) -> CursorConfig {
    let mut config = CursorConfig::default();
    apply_attrs(el, "data-cursor-", CursorConfig::KEYS, |k, v| {
        config.apply_override(k, v)
    });
    config
}

/// Floating config from `data-float-<key>` attributes on `el`.
pub fn float_config_from(el: &web::Element) -> FloatConfig {
    let mut config = FloatConfig::default();
    apply_attrs(el, "data-float-", FloatConfig::KEYS, |k, v| {
        config.apply_override(k, v)
    });
    config
}

fn apply_attrs(
    el: &web::Element,
    prefix: &str,
    keys: &[&str],
    mut apply: impl FnMut(&str, &str) -> Result<(), ConfigError>,
) {
    for key in keys {
        if let Some(value) = el.get_attribute(&format!("{prefix}{key}")) {
            if let Err(e) = apply(key, &value) {
                log::warn!("[config] {}{}: {}", prefix, key, e);
            }
        }
    }
}
