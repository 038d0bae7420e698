use crate::config::EngineConfig;
use crate::error::BackdropError;
use crate::particles::ParticleStore;
use crate::render::Renderer;
use crate::simulate::{normalize_dt, Simulator};
use crate::state::{PointerState, Viewport, WheelAngles};
use crate::surface::Surface;
use glam::Vec2;

/// One backdrop instance: every piece of mutable animation state plus the
/// simulator and renderer that act on it.
pub struct Backdrop {
    pub config: EngineConfig,
    pub viewport: Viewport,
    pub store: ParticleStore,
    pub pointer: PointerState,
    pub wheels: WheelAngles,
    pub simulator: Simulator,
    pub renderer: Renderer,
}

impl Backdrop {
    pub fn new(viewport: Viewport, config: EngineConfig) -> Result<Self, BackdropError> {
        config.validate()?;
        let store = ParticleStore::initialize(&viewport, &config);
        Ok(Self {
            simulator: Simulator::new(&config),
            renderer: Renderer::new(&config),
            pointer: PointerState::at(viewport.center()),
            wheels: WheelAngles::default(),
            viewport,
            store,
            config,
        })
    }

    pub fn advance(&mut self, dt: f32) {
        self.simulator.advance(
            dt,
            &mut self.store,
            &mut self.pointer,
            &mut self.wheels,
            &self.viewport,
        );
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.renderer
            .render(surface, &self.store, &self.wheels, &self.viewport);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.moved_to(Vec2::new(x, y));
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let n = self.config.sparkle_burst.max(1);
        self.store.spawn_sparkles(x, y, n);
    }
}

/// Drives a [`Backdrop`] from the host's per-frame callback.
///
/// The host calls [`FrameScheduler::tick`] once per display refresh and
/// always requests the next frame afterwards, paused or not. Input handlers
/// call the `pointer_*` methods, which only mutate state and never draw.
pub struct FrameScheduler<S: Surface> {
    pub backdrop: Backdrop,
    surface: S,
    paused: bool,
    last_ts: Option<f64>,
}

impl<S: Surface> FrameScheduler<S> {
    pub fn new(surface: S, viewport: Viewport, config: EngineConfig) -> Result<Self, BackdropError> {
        let backdrop = Backdrop::new(viewport, config)?;
        let mut sched = Self {
            backdrop,
            surface,
            paused: false,
            last_ts: None,
        };
        sched.apply_viewport();
        log::info!(
            "[scheduler] started {}x{} dpr={} reduced_motion={}",
            viewport.width,
            viewport.height,
            viewport.dpr,
            sched.backdrop.config.reduced_motion
        );
        Ok(sched)
    }

    /// Advance and paint one frame. Returns whether any work was done.
    pub fn tick(&mut self, timestamp_ms: f64) -> bool {
        if self.paused {
            return false;
        }
        let elapsed = match self.last_ts {
            Some(prev) => timestamp_ms - prev,
            None => 0.0,
        };
        self.last_ts = Some(timestamp_ms);
        let dt = normalize_dt(elapsed);
        self.backdrop.advance(dt);
        self.backdrop.render(&mut self.surface);
        true
    }

    /// Visibility hook: hidden pages stop simulating and drawing.
    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.paused {
            log::debug!("[scheduler] paused={}", paused);
        }
        self.paused = paused;
        if paused {
            // The first frame after resuming takes a nominal step.
            self.last_ts = None;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) {
        self.backdrop.viewport = Viewport::new(width, height, dpr);
        self.apply_viewport();
        log::debug!(
            "[scheduler] resize {}x{} dpr={}",
            self.backdrop.viewport.width,
            self.backdrop.viewport.height,
            self.backdrop.viewport.dpr
        );
    }

    fn apply_viewport(&mut self) {
        let vp = self.backdrop.viewport;
        let (w_px, h_px) = vp.backing_size();
        self.surface.resize_backing(w_px, h_px);
        // Draw in logical pixels regardless of the ratio.
        self.surface.set_transform(vp.dpr, 0.0, 0.0, vp.dpr, 0.0, 0.0);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.backdrop.pointer_move(x, y);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.backdrop.pointer_down(x, y);
    }

    pub fn viewport(&self) -> Viewport {
        self.backdrop.viewport
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Drop every particle and leave the scheduler paused. The host is still
    /// responsible for cancelling its pending frame request.
    pub fn teardown(&mut self) {
        self.paused = true;
        self.last_ts = None;
        self.backdrop.store.clear();
        let vp = self.backdrop.viewport;
        self.surface.clear(vp.width, vp.height);
        log::info!("[scheduler] torn down");
    }
}

