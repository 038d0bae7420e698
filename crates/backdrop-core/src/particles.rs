use crate::config::EngineConfig;
use crate::constants::*;
use crate::rng::{self, TAU};
use crate::state::Viewport;
use glam::Vec2;
use rand::rngs::StdRng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    Gold,
    Ruby,
}

#[derive(Clone, Debug)]
pub struct Token {
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
    pub rot: f32,
    pub spin: f32,
    pub palette: Palette,
    /// 1.0 sits on the focal plane; anything else is drawn softened.
    pub depth: f32,
}

#[derive(Clone, Debug)]
pub struct Sparkle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Approximate seconds since spawn.
    pub age: f32,
    pub life: f32,
    pub size: f32,
    pub palette: Palette,
}

impl Sparkle {
    #[inline]
    pub fn alpha(&self) -> f32 {
        (1.0 - self.age / self.life).max(0.0)
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age >= self.life
    }
}

/// Static background glow; position is a fraction of the viewport.
#[derive(Clone, Copy, Debug)]
pub struct GlowSpot {
    pub fx: f32,
    pub fy: f32,
    pub radius: f32,
    pub alpha: f32,
    pub palette: Palette,
}

/// Owns every live entity. Randomness is only drawn here, at creation.
pub struct ParticleStore {
    pub tokens: Vec<Token>,
    pub sparkles: Vec<Sparkle>,
    pub glows: SmallVec<[GlowSpot; 4]>,
    rng: StdRng,
    gold_probability: f32,
    sparkle_cap: usize,
}

impl ParticleStore {
    /// Populate the token and glow pools for `viewport`.
    pub fn initialize(viewport: &Viewport, config: &EngineConfig) -> Self {
        let mut store = Self {
            tokens: Vec::with_capacity(config.token_count),
            sparkles: Vec::new(),
            glows: SmallVec::new(),
            rng: rng::make_rng(config.seed),
            gold_probability: config.gold_probability,
            sparkle_cap: config.sparkle_cap,
        };
        for _ in 0..config.token_count {
            let t = store.create_token(viewport);
            store.tokens.push(t);
        }
        for _ in 0..config.glow_count {
            let g = store.create_glow();
            store.glows.push(g);
        }
        log::debug!(
            "[store] tokens={} glows={} viewport={}x{} reduced={}",
            store.tokens.len(),
            store.glows.len(),
            viewport.width,
            viewport.height,
            config.reduced_motion
        );
        store
    }

    fn pick_palette(&mut self, gold_p: f32) -> Palette {
        if rng::chance(&mut self.rng, gold_p) {
            Palette::Gold
        } else {
            Palette::Ruby
        }
    }

    fn create_token(&mut self, vp: &Viewport) -> Token {
        let r = &mut self.rng;
        let pos = Vec2::new(
            rng::range(r, -SPAWN_MARGIN, vp.width + SPAWN_MARGIN),
            rng::range(r, -SPAWN_MARGIN, vp.height + SPAWN_MARGIN),
        );
        let radius = rng::range(r, TOKEN_RADIUS_MIN, TOKEN_RADIUS_MAX);
        let vel = Vec2::new(
            rng::range(r, -TOKEN_VX_MAX, TOKEN_VX_MAX),
            rng::range(r, -TOKEN_VY_MAX, TOKEN_VY_MAX),
        );
        let rot = rng::range(r, 0.0, TAU);
        let spin = rng::range(r, -TOKEN_SPIN_MAX, TOKEN_SPIN_MAX);
        let depth = rng::range(r, TOKEN_DEPTH_MIN, TOKEN_DEPTH_MAX);
        let palette = self.pick_palette(self.gold_probability);
        Token {
            pos,
            radius,
            vel,
            rot,
            spin,
            palette,
            depth,
        }
    }

    fn create_glow(&mut self) -> GlowSpot {
        let r = &mut self.rng;
        let fx = rng::range(r, 0.0, 1.0);
        let fy = rng::range(r, 0.0, 1.0);
        let radius = rng::range(r, GLOW_RADIUS_MIN, GLOW_RADIUS_MAX);
        let alpha = rng::range(r, GLOW_ALPHA_MIN, GLOW_ALPHA_MAX);
        let palette = self.pick_palette(self.gold_probability);
        GlowSpot {
            fx,
            fy,
            radius,
            alpha,
            palette,
        }
    }

    fn create_sparkle(&mut self, at: Vec2) -> Sparkle {
        let r = &mut self.rng;
        let life = rng::range(r, SPARKLE_LIFE_MIN, SPARKLE_LIFE_MAX);
        let size = rng::range(r, SPARKLE_SIZE_MIN, SPARKLE_SIZE_MAX);
        let vel = Vec2::new(
            rng::range(r, -SPARKLE_VX_MAX, SPARKLE_VX_MAX),
            rng::range(r, SPARKLE_VY_MIN, SPARKLE_VY_MAX),
        );
        let palette = self.pick_palette(SPARKLE_GOLD_PROBABILITY);
        Sparkle {
            pos: at,
            vel,
            age: 0.0,
            life,
            size,
            palette,
        }
    }

    /// Append a burst of `count` fresh sparkles at `(x, y)`.
    ///
    /// If the store would exceed its sparkle cap, the oldest sparkles are
    /// dropped first so a held-down pointer cannot grow memory without bound.
    pub fn spawn_sparkles(&mut self, x: f32, y: f32, count: usize) {
        let at = Vec2::new(x, y);
        self.sparkles.reserve(count);
        for _ in 0..count {
            let s = self.create_sparkle(at);
            self.sparkles.push(s);
        }
        if self.sparkles.len() > self.sparkle_cap {
            let excess = self.sparkles.len() - self.sparkle_cap;
            self.sparkles.drain(..excess);
            log::debug!("[store] sparkle cap reached, evicted {}", excess);
        }
    }

    pub fn prune_expired_sparkles(&mut self) {
        self.sparkles.retain(|s| !s.is_expired());
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
        self.sparkles.clear();
        self.glows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(seed: u64) -> ParticleStore {
        let vp = Viewport::new(800.0, 600.0, 1.0);
        ParticleStore::initialize(&vp, &EngineConfig::default().with_seed(seed))
    }

    #[test]
    fn same_seed_same_pool() {
        let a = store(9);
        let b = store(9);
        for (ta, tb) in a.tokens.iter().zip(&b.tokens) {
            assert_eq!(ta.pos, tb.pos);
            assert_eq!(ta.palette, tb.palette);
        }
    }

    #[test]
    fn zero_viewport_does_not_fault() {
        let vp = Viewport::new(0.0, 0.0, 1.0);
        let mut s = ParticleStore::initialize(&vp, &EngineConfig::default().with_seed(3));
        s.spawn_sparkles(0.0, 0.0, 5);
        assert_eq!(s.sparkles.len(), 5);
        assert!(s.tokens.iter().all(|t| t.pos.x.abs() <= SPAWN_MARGIN));
    }

    #[test]
    fn cap_evicts_oldest() {
        let mut s = store(4);
        s.spawn_sparkles(1.0, 1.0, SPARKLE_CAP);
        s.spawn_sparkles(2.0, 2.0, 10);
        assert_eq!(s.sparkles.len(), SPARKLE_CAP);
        assert_eq!(s.sparkles.last().map(|sp| sp.pos), Some(Vec2::new(2.0, 2.0)));
    }

    #[test]
    fn sparkle_alpha_fades_to_zero() {
        let mut s = store(5);
        s.spawn_sparkles(0.0, 0.0, 1);
        let sp = &mut s.sparkles[0];
        assert_eq!(sp.alpha(), 1.0);
        sp.age = sp.life;
        assert_eq!(sp.alpha(), 0.0);
        assert!(sp.is_expired());
    }
}
