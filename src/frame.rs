use crate::canvas::CanvasSurface;
use backdrop_core::{BackdropError, FrameScheduler};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type RafClosure = Closure<dyn FnMut(f64)>;

/// Handle to the running requestAnimationFrame loop.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<RafClosure>>>,
}

impl FrameLoop {
    /// Stop requesting frames and cancel the one already queued.
    pub fn stop(&self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference cycle through `tick`.
        self.tick.borrow_mut().take();
    }
}

fn request(window: &web::Window, tick: &Rc<RefCell<Option<RafClosure>>>) -> Option<i32> {
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

/// Start the loop. Every callback ticks the scheduler (a no-op while paused)
/// and then requests the next frame, so a hidden page resumes immediately.
pub fn start_loop(
    window: &web::Window,
    sched: Rc<RefCell<FrameScheduler<CanvasSurface>>>,
) -> Result<FrameLoop, BackdropError> {
    let running = Rc::new(Cell::new(true));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<RafClosure>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let raf_tick = raf_id.clone();
    let win = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if !running_tick.get() {
            return;
        }
        if let Ok(mut s) = sched.try_borrow_mut() {
            s.tick(ts);
        }
        raf_tick.set(request(&win, &tick_clone));
    }) as Box<dyn FnMut(f64)>));

    let first = request(window, &tick).ok_or(BackdropError::AnimationUnavailable)?;
    raf_id.set(Some(first));
    Ok(FrameLoop {
        running,
        raf_id,
        tick,
    })
}
