#![cfg(target_arch = "wasm32")]
use backdrop_core::{BackdropError, EngineConfig, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod countdown;
mod dom;
mod events;
mod frame;
mod overrides;

use canvas::CanvasSurface;
use constants::CANVAS_ID;

/// Everything started by [`start`], kept so the page can tear it down.
struct Runtime {
    text: countdown::TextTimers,
    backdrop: Option<BackdropRuntime>,
}

struct BackdropRuntime {
    sched: Rc<RefCell<FrameScheduler<CanvasSurface>>>,
    frame: frame::FrameLoop,
    listeners: events::Listeners,
}

impl Runtime {
    fn stop(&mut self) {
        self.text.stop();
        if let Some(mut b) = self.backdrop.take() {
            b.frame.stop();
            b.listeners.detach_all();
            b.sched.borrow_mut().teardown();
        }
    }
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

fn engine_config(window: &web::Window, canvas: &web::HtmlCanvasElement) -> EngineConfig {
    let reduced = dom::prefers_reduced_motion(window);
    let profile = EngineConfig::for_motion(reduced);
    match overrides::apply_overrides(profile.clone(), |name| canvas.get_attribute(name)) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::error!("[config] ignoring canvas overrides: {}", e);
            profile
        }
    }
}

fn init_backdrop(window: &web::Window, document: &web::Document) -> anyhow::Result<BackdropRuntime> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| BackdropError::SurfaceUnavailable(format!("missing #{CANVAS_ID}")))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = engine_config(window, &canvas);
    let surface = CanvasSurface::new(&canvas)?;
    let viewport = dom::read_viewport(window);
    let sched = Rc::new(RefCell::new(FrameScheduler::new(surface, viewport, config)?));
    sched.borrow_mut().set_paused(document.hidden());

    let listeners = events::wire_input(window, document, &sched);
    let frame = match frame::start_loop(window, sched.clone()) {
        Ok(f) => f,
        Err(e) => {
            let mut l = listeners;
            l.detach_all();
            return Err(e.into());
        }
    };
    Ok(BackdropRuntime {
        sched,
        frame,
        listeners,
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let text = countdown::wire_text(&window, &document);
    // Start-up failure is reported once; the text animations keep running.
    let backdrop = match init_backdrop(&window, &document) {
        Ok(b) => Some(b),
        Err(e) => {
            log::error!("backdrop init error: {:?}", e);
            None
        }
    };

    RUNTIME.with(|r| {
        if let Some(mut old) = r.borrow_mut().replace(Runtime { text, backdrop }) {
            old.stop();
        }
    });
    Ok(())
}

/// Teardown hook for hosts that remove the backdrop without unloading the
/// page: cancels the pending frame, detaches listeners and clears timers.
#[wasm_bindgen]
pub fn stop_backdrop() {
    RUNTIME.with(|r| {
        if let Some(mut rt) = r.borrow_mut().take() {
            rt.stop();
            log::info!("backdrop stopped");
        }
    });
}
