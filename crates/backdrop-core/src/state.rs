//! Small value types shared by the simulator, renderer and scheduler.
//!
//! None of these reference browser APIs; the web front end only feeds them
//! coordinates and sizes.

use crate::constants::{DPR_MAX, REPEL_DECAY, WRAP_MARGIN};
use glam::Vec2;

/// Logical (CSS pixel) drawing area plus the device pixel ratio used for the
/// backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            dpr: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32, dpr: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            dpr: clamp_dpr(dpr),
        }
    }

    /// Backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).floor() as u32,
            (self.height * self.dpr).floor() as u32,
        )
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Denormalize a `[0, 1]` fraction pair into logical pixels.
    pub fn at_fraction(&self, fx: f32, fy: f32) -> Vec2 {
        Vec2::new(self.width * fx, self.height * fy)
    }

    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Toroidal wrap inside the viewport inflated by [`WRAP_MARGIN`].
    #[inline]
    pub fn wrap(&self, p: &mut Vec2) {
        let m = WRAP_MARGIN;
        if p.x < -m {
            p.x = self.width + m;
        }
        if p.x > self.width + m {
            p.x = -m;
        }
        if p.y < -m {
            p.y = self.height + m;
        }
        if p.y > self.height + m {
            p.y = -m;
        }
    }
}

/// Missing or nonsensical ratios fall back to 1; the cap keeps backing stores
/// small on very dense screens.
#[inline]
pub fn clamp_dpr(dpr: f32) -> f32 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(DPR_MAX)
    } else {
        1.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub repel: f32,
}

impl PointerState {
    pub fn at(pos: Vec2) -> Self {
        Self { pos, repel: 0.0 }
    }

    /// Pointer moved: full repel strength at the new position.
    pub fn moved_to(&mut self, pos: Vec2) {
        self.pos = pos;
        self.repel = 1.0;
    }

    pub fn decay(&mut self) {
        self.repel *= REPEL_DECAY;
    }

    /// Decay is geometric, so once moved the pointer never stops repelling.
    pub fn is_repelling(&self) -> bool {
        self.repel > 0.0
    }
}

/// Rotation phases of the two wheel ghosts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WheelAngles {
    pub cw: f32,
    pub ccw: f32,
}

impl WheelAngles {
    pub fn advance(&mut self, deltas: [f32; 2], dt: f32) {
        self.cw += deltas[0] * dt;
        self.ccw += deltas[1] * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dpr_is_capped_and_sanitized() {
        assert_eq!(clamp_dpr(3.0), 2.0);
        assert_eq!(clamp_dpr(1.5), 1.5);
        assert_eq!(clamp_dpr(0.0), 1.0);
        assert_eq!(clamp_dpr(f32::NAN), 1.0);
    }

    #[test]
    fn backing_size_floors() {
        let vp = Viewport::new(801.0, 601.0, 1.5);
        assert_eq!(vp.backing_size(), (1201, 901));
    }

    #[test]
    fn wrap_teleports_to_opposite_margin() {
        let vp = Viewport::new(100.0, 50.0, 1.0);
        let mut p = Vec2::new(-61.0, 111.0);
        vp.wrap(&mut p);
        assert_eq!(p, Vec2::new(160.0, -60.0));
    }

    #[test]
    fn repel_fades_but_stays_active() {
        let mut p = PointerState::at(Vec2::ZERO);
        assert!(!p.is_repelling());
        p.moved_to(Vec2::new(3.0, 4.0));
        assert!(p.is_repelling());
        for _ in 0..300 {
            p.decay();
        }
        assert!(p.repel < 0.01);
        assert!(p.is_repelling());
    }
}
