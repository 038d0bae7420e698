use crate::canvas::CanvasSurface;
use crate::dom;
use backdrop_core::FrameScheduler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Shared = Rc<RefCell<FrameScheduler<CanvasSurface>>>;

/// Attached DOM listeners, kept alive here (instead of `forget`) so teardown
/// can detach them.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(web::EventTarget, &'static str, Closure<dyn FnMut(web::Event)>)>,
}

impl Listeners {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .is_ok()
        {
            self.entries.push((target.clone(), kind, closure));
        } else {
            log::warn!("[events] could not attach {kind} listener");
        }
    }

    pub fn detach_all(&mut self) {
        for (target, kind, closure) in self.entries.drain(..) {
            _ = target.remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
    }
}

/// Wire pointer, resize and visibility input into the scheduler.
///
/// Handlers only mutate scheduler state. `try_borrow_mut` guards against a
/// host that dispatches an event while a frame is in progress.
pub fn wire_input(window: &web::Window, document: &web::Document, sched: &Shared) -> Listeners {
    let mut listeners = Listeners::default();
    let win_target: &web::EventTarget = window.as_ref();
    let doc_target: &web::EventTarget = document.as_ref();

    let s = sched.clone();
    listeners.add(win_target, "pointermove", move |ev| {
        if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
            if let Ok(mut sched) = s.try_borrow_mut() {
                sched.pointer_move(pe.client_x() as f32, pe.client_y() as f32);
            }
        }
    });

    let s = sched.clone();
    listeners.add(win_target, "pointerdown", move |ev| {
        if let Some(pe) = ev.dyn_ref::<web::PointerEvent>() {
            if let Ok(mut sched) = s.try_borrow_mut() {
                sched.pointer_down(pe.client_x() as f32, pe.client_y() as f32);
            }
        }
    });

    let s = sched.clone();
    let win = window.clone();
    listeners.add(win_target, "resize", move |_| {
        let vp = dom::read_viewport(&win);
        if let Ok(mut sched) = s.try_borrow_mut() {
            sched.resize(vp.width, vp.height, vp.dpr);
        }
    });

    let s = sched.clone();
    let doc = document.clone();
    listeners.add(doc_target, "visibilitychange", move |_| {
        let hidden = doc.hidden();
        if let Ok(mut sched) = s.try_borrow_mut() {
            sched.set_paused(hidden);
        }
    });

    log::info!("[events] {} listeners attached", listeners.entries.len());
    listeners
}
