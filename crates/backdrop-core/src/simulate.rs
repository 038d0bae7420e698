use crate::config::EngineConfig;
use crate::constants::*;
use crate::particles::ParticleStore;
use crate::state::{PointerState, Viewport, WheelAngles};

/// Convert a wall-clock frame gap into 60 fps ticks.
///
/// Gaps are capped at [`FRAME_MS_CAP`] so a long stall (hidden tab, debugger)
/// becomes one ordinary step rather than a teleport. A zero or missing gap
/// uses [`FRAME_MS_FALLBACK`].
#[inline]
pub fn normalize_dt(elapsed_ms: f64) -> f32 {
    let ms = if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
        elapsed_ms.min(FRAME_MS_CAP)
    } else {
        FRAME_MS_FALLBACK
    };
    (ms / FRAME_MS_NOMINAL) as f32
}

/// Per-frame physics. Holds only tuning; all mutable state lives in the
/// store, the pointer and the wheel angles passed to [`Simulator::advance`].
#[derive(Clone, Debug)]
pub struct Simulator {
    pub repel_radius: f32,
    pub repel_gain: f32,
    pub wheel_deltas: [f32; 2],
    pub reduced_motion: bool,
}

impl Simulator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            repel_radius: config.repel_radius,
            repel_gain: config.repel_gain,
            wheel_deltas: config.wheel_deltas,
            reduced_motion: config.reduced_motion,
        }
    }

    pub fn advance(
        &self,
        dt: f32,
        store: &mut ParticleStore,
        pointer: &mut PointerState,
        wheels: &mut WheelAngles,
        viewport: &Viewport,
    ) {
        let dt = dt.max(0.0);
        let r2 = self.repel_radius * self.repel_radius;
        let repelling = pointer.is_repelling();

        for t in &mut store.tokens {
            if repelling {
                let away = t.pos - pointer.pos;
                let d2 = away.length_squared();
                if d2 < r2 {
                    // Tokens sitting on the pointer still get a finite push.
                    let d = d2.max(1.0).sqrt();
                    t.vel += away / d * self.repel_gain;
                }
            }
            t.pos += t.vel * dt * TOKEN_SPEED_SCALE;
            if !self.reduced_motion {
                t.rot += t.spin * dt;
            }
            viewport.wrap(&mut t.pos);
        }
        pointer.decay();

        let age_step = dt / TICKS_PER_SECOND;
        for s in &mut store.sparkles {
            s.age += age_step;
            s.pos += s.vel * dt * SPARKLE_SPEED_SCALE;
        }
        store.prune_expired_sparkles();

        wheels.advance(self.wheel_deltas, dt);
    }
}
