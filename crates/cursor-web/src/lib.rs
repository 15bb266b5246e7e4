#![cfg(target_arch = "wasm32")]
mod dom;
mod floating;
mod frame;
mod overlay;
mod pointer;
mod surface;

use anyhow::Context;
use cursor_core::{CursorConfig, CursorOverlay, PointerTracker, Teardown};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const DEFAULT_ROOT_ID: &str = "cursor-overlay";

thread_local! {
    static RUNTIME: RefCell<Option<Teardown>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cursor-web starting");

    if let Err(e) = init(DEFAULT_ROOT_ID) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Mount (or remount) the overlay under the element with id `root_id`, plus
/// every `[data-float]` element.
#[wasm_bindgen]
pub fn mount(root_id: Option<String>) -> Result<(), JsValue> {
    init(root_id.as_deref().unwrap_or(DEFAULT_ROOT_ID))
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Synchronously detach every listener, timer, observer and frame loop.
#[wasm_bindgen]
pub fn unmount() {
    let previous = RUNTIME.with(|rt| rt.borrow_mut().take());
    if let Some(mut teardown) = previous {
        teardown.run();
        log::info!("cursor-web unmounted");
    }
}

fn init(root_id: &str) -> anyhow::Result<()> {
    unmount();

    let document = dom::window_document().context("no document")?;
    let root = document
        .get_element_by_id(root_id)
        .map(|el| el.dyn_into::<web::HtmlElement>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = root
        .as_ref()
        .map(|el| dom::cursor_config_from(el))
        .unwrap_or_else(CursorConfig::default);
    let overlay = CursorOverlay::new(config).map_err(|e| anyhow::anyhow!(e))?;
    let tracker: Rc<RefCell<PointerTracker>> = Rc::new(RefCell::new(overlay.new_tracker()));

    let mut teardown = Teardown::new();

    let wiring = pointer::wire_pointer_handlers(&document, tracker.clone())?;
    teardown.push("pointer", move || wiring.unwire());

    match root {
        Some(root) => {
            let mount = overlay::mount_overlay(&document, &root, overlay, tracker.clone())?;
            teardown.push("overlay", move || mount.unmount());
        }
        None => log::info!("#{} not found; overlay disabled", root_id),
    }

    for mount in floating::mount_all_floating(&document, &tracker) {
        teardown.push("floating", move || mount.unmount());
    }

    RUNTIME.with(|rt| *rt.borrow_mut() = Some(teardown));
    Ok(())
}
