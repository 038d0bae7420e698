use crate::constants::*;
use crate::dom;
use backdrop_core::text::{Countdown, Typewriter};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Interval timers driving the page text. Dropping the closures without
/// clearing the intervals first would leave dangling callbacks, so
/// [`TextTimers::stop`] does both.
#[derive(Default)]
pub struct TextTimers {
    intervals: Vec<(i32, Closure<dyn FnMut()>)>,
}

impl TextTimers {
    fn every(&mut self, window: &web::Window, ms: i32, f: impl FnMut() + 'static) -> Option<i32> {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        ) {
            Ok(id) => {
                self.intervals.push((id, closure));
                Some(id)
            }
            Err(e) => {
                log::warn!("[text] setInterval failed: {:?}", e);
                None
            }
        }
    }

    pub fn stop(&mut self) {
        if let Some(w) = web::window() {
            for (id, _) in &self.intervals {
                w.clear_interval_with_handle(*id);
            }
        }
        self.intervals.clear();
    }
}

fn render_countdown(document: &web::Document, countdown: &Countdown) {
    let now = js_sys::Date::now();
    let parts = countdown.parts(now).padded();
    for (id, text) in COUNTDOWN_IDS.iter().zip(parts.iter()) {
        dom::set_text_by_id(document, id, text);
    }
    dom::set_text_by_selector(document, LAUNCH_NOTE_SELECTOR, &countdown.note(now));
}

fn write_footer_year(document: &web::Document) {
    let year = js_sys::Date::new_0().get_full_year();
    dom::set_text_by_id(document, YEAR_ID, &year.to_string());
}

fn typewriter_from(el: &web::Element) -> Typewriter {
    let text = el
        .get_attribute(ATTR_TYPE_TEXT)
        .or_else(|| el.text_content())
        .unwrap_or_default();
    let cps = el
        .get_attribute(ATTR_TYPE_CPS)
        .and_then(|v| v.trim().parse::<f32>().ok())
        .unwrap_or(TYPEWRITER_DEFAULT_CPS);
    Typewriter::new(text.trim(), cps)
}

/// Footer year, launch countdown and (when the page has one) the typewriter
/// line. The countdown target is per page load.
pub fn wire_text(window: &web::Window, document: &web::Document) -> TextTimers {
    let mut timers = TextTimers::default();
    write_footer_year(document);

    let has_countdown = COUNTDOWN_IDS
        .iter()
        .any(|id| document.get_element_by_id(id).is_some());
    if has_countdown {
        let countdown = Countdown::launching_from(js_sys::Date::now());
        render_countdown(document, &countdown);
        let doc = document.clone();
        timers.every(window, COUNTDOWN_INTERVAL_MS, move || {
            render_countdown(&doc, &countdown);
        });
    }

    if let Some(el) = document.get_element_by_id(TYPEWRITER_ID) {
        let mut tw = typewriter_from(&el);
        el.set_text_content(Some(""));
        let step = TYPEWRITER_INTERVAL_MS as f32 / 1000.0;
        let handle: Rc<Cell<Option<i32>>> = Rc::default();
        let own_handle = handle.clone();
        let win = window.clone();
        let id = timers.every(window, TYPEWRITER_INTERVAL_MS, move || {
            tw.advance(step);
            el.set_text_content(Some(&tw.with_caret(TYPEWRITER_CARET)));
            if tw.is_done() {
                if let Some(id) = own_handle.take() {
                    win.clear_interval_with_handle(id);
                }
            }
        });
        handle.set(id);
    }

    timers
}
