#![cfg(target_arch = "wasm32")]
//! Scroll-driven grid backdrop for a single-page portfolio.
//!
//! Attaches to a page that provides `#grid-canvas` and `#scroll-root` (plus
//! optional `#shape-triangle`, `#shape-hexagon`, `#shape-lines` and the
//! `#about`, `#projects`, `#contact` sections). Scrolling the root repaints a
//! grid of rotating, pulsing rectangles at most once per animation frame.
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod constants;
mod dom;
mod frame;
pub mod grid;
pub mod lifecycle;
pub mod scroll;
pub mod shapes;
pub mod viewport;

thread_local! {
    static PAGE: RefCell<Option<frame::Page>> = const { RefCell::new(None) };
}

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-grid starting");

    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let page = frame::Page::attach(window.clone(), document)?;
    if let Some(previous) = PAGE.with(|slot| slot.borrow_mut().replace(page)) {
        previous.dispose();
    }

    wire_pagehide(&window);
    Ok(())
}

// Tear down when navigating away. Pages entering the back/forward cache stay
// attached so they keep working when restored. This listener outlives the page
// it disposes.
fn wire_pagehide(window: &web::Window) {
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        let hide = lifecycle::PageHide::from_persisted(ev.persisted());
        if hide.releases_page() {
            dispose();
        } else {
            log::debug!("[grid] page cached, keeping listeners");
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Detach the grid: cancel any pending frame and unregister listeners.
#[wasm_bindgen]
pub fn dispose() {
    if let Some(page) = PAGE.with(|slot| slot.borrow_mut().take()) {
        page.dispose();
    }
}
