//! Paints the particle state onto a [`Surface`].
//!
//! Draw order, back to front: glow spots, wheel ghosts, tokens, sparkles.
//! Each entity is bracketed by `save`/`restore`, so transforms, alpha,
//! compositing and blur never leak into whatever is drawn next.

use crate::config::EngineConfig;
use crate::constants::*;
use crate::particles::{GlowSpot, Palette, ParticleStore, Sparkle, Token};
use crate::rng::TAU;
use crate::state::{Viewport, WheelAngles};
use crate::surface::{stops, Color, Composite, Paint, Surface};

pub const ACCENT_GOLD: Color = Color::rgb(0xFF, 0xD7, 0x00);
pub const ACCENT_RUBY: Color = Color::rgb(0xB2, 0x22, 0x22);

const ENGRAVE_RING: Color = Color::rgba(0, 0, 0, 0.35);
const SPECULAR: Color = Color::rgba(255, 255, 255, 0.35);

#[inline]
pub fn accent(p: Palette) -> Color {
    match p {
        Palette::Gold => ACCENT_GOLD,
        Palette::Ruby => ACCENT_RUBY,
    }
}

// Face shades per palette: main, darker edge, lighter rim.
// Gold is hsl(50 100% 55%) and ruby hsl(0 80% 45%).
const GOLD_FACE: [Color; 3] = [
    Color::rgb(255, 217, 26),
    Color::rgb(161, 137, 18),
    Color::rgb(255, 230, 102),
];
const RUBY_FACE: [Color; 3] = [
    Color::rgb(207, 23, 23),
    Color::rgb(114, 29, 29),
    Color::rgb(235, 71, 71),
];

/// Face and rim colors per palette: (main, edge, rim highlight).
fn token_colors(p: Palette) -> (Color, Color, Color) {
    let [main, edge, rim] = match p {
        Palette::Gold => GOLD_FACE,
        Palette::Ruby => RUBY_FACE,
    };
    (main, edge, rim)
}

#[derive(Clone, Debug)]
pub struct Renderer {
    pub wheel_alpha: f32,
}

impl Renderer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            wheel_alpha: config.wheel_alpha,
        }
    }

    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        store: &ParticleStore,
        wheels: &WheelAngles,
        viewport: &Viewport,
    ) {
        surface.clear(viewport.width, viewport.height);

        for g in &store.glows {
            draw_glow(surface, g, viewport);
        }

        let r = viewport.min_side() * WHEEL_SPAN;
        let a = viewport.at_fraction(WHEEL_A_ANCHOR[0], WHEEL_A_ANCHOR[1]);
        let b = viewport.at_fraction(WHEEL_B_ANCHOR[0], WHEEL_B_ANCHOR[1]);
        self.draw_wheel_ghost(surface, a.x, a.y, r * WHEEL_A_SCALE, wheels.cw);
        self.draw_wheel_ghost(surface, b.x, b.y, r * WHEEL_B_SCALE, wheels.ccw);

        let blur_ok = surface.supports_blur();
        for t in &store.tokens {
            draw_token(surface, t, blur_ok);
        }

        for s in &store.sparkles {
            draw_sparkle(surface, s);
        }
    }

    fn draw_wheel_ghost<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        x: f32,
        y: f32,
        r: f32,
        angle: f32,
    ) {
        surface.save();
        surface.translate(x, y);
        surface.rotate(angle);
        surface.set_alpha(self.wheel_alpha);
        let n = WHEEL_SEGMENTS as f32;
        for i in 0..WHEEL_SEGMENTS {
            let color = if i % 2 == 0 { ACCENT_GOLD } else { ACCENT_RUBY };
            surface.begin_path();
            surface.move_to(0.0, 0.0);
            surface.set_fill(&Paint::Solid(color));
            surface.arc(0.0, 0.0, r, i as f32 * TAU / n, (i + 1) as f32 * TAU / n);
            surface.close_path();
            surface.fill();
        }
        surface.restore();
    }
}

fn draw_glow<S: Surface + ?Sized>(surface: &mut S, g: &GlowSpot, viewport: &Viewport) {
    let c = viewport.at_fraction(g.fx, g.fy);
    let base = accent(g.palette);
    surface.save();
    surface.set_composite(Composite::Lighter);
    surface.set_fill(&Paint::Radial {
        inner: [c.x, c.y, 0.0],
        outer: [c.x, c.y, g.radius],
        stops: stops(&[(0.0, base.with_alpha(g.alpha)), (1.0, base.with_alpha(0.0))]),
    });
    surface.begin_path();
    surface.arc(c.x, c.y, g.radius, 0.0, TAU);
    surface.fill();
    surface.restore();
}

/// Blur radius and alpha for a token off the focal plane, or `None` when it
/// should be drawn sharp.
pub fn depth_of_field(depth: f32) -> Option<(f32, f32)> {
    let dev = (depth - 1.0).abs();
    if dev < DOF_MIN_DEVIATION {
        return None;
    }
    let blur = dev * DOF_BLUR_PER_UNIT;
    let alpha = (1.0 - dev * DOF_ALPHA_PER_UNIT).max(DOF_ALPHA_FLOOR);
    Some((blur, alpha))
}

fn draw_token<S: Surface + ?Sized>(surface: &mut S, t: &Token, blur_ok: bool) {
    let r = t.radius;
    let (main, edge, rim) = token_colors(t.palette);

    surface.save();
    surface.translate(t.pos.x, t.pos.y);
    surface.rotate(t.rot);
    if blur_ok {
        if let Some((blur, alpha)) = depth_of_field(t.depth) {
            surface.set_blur(blur);
            surface.set_alpha(alpha);
        }
    }

    // bevel
    surface.set_fill(&Paint::Linear {
        from: [-r, 0.0],
        to: [r, 0.0],
        stops: stops(&[(0.0, rim), (0.5, edge), (1.0, rim)]),
    });
    surface.begin_path();
    surface.arc(0.0, 0.0, r, 0.0, TAU);
    surface.fill();

    // glossy face, lit from the upper left
    let face_r = r * 0.82;
    surface.set_fill(&Paint::Radial {
        inner: [-0.3 * r, -0.3 * r, 0.1 * r],
        outer: [0.0, 0.0, face_r],
        stops: stops(&[(0.0, main), (1.0, edge)]),
    });
    surface.begin_path();
    surface.arc(0.0, 0.0, face_r, 0.0, TAU);
    surface.fill();

    // engraving
    surface.set_stroke(ENGRAVE_RING, 2.0);
    surface.begin_path();
    surface.arc(0.0, 0.0, r * 0.65, 0.0, TAU);
    surface.stroke();
    surface.set_fill(&Paint::Solid(Color::rgba(0, 0, 0, TOKEN_LABEL_ALPHA)));
    surface.fill_text(
        TOKEN_LABEL,
        0.0,
        0.0,
        (r * 0.9).floor(),
        TOKEN_FONT_FAMILY,
    );

    surface.set_composite(Composite::Screen);
    surface.set_fill(&Paint::Solid(SPECULAR));
    surface.begin_path();
    surface.ellipse(-0.35 * r, -0.4 * r, 0.35 * r, 0.18 * r, -0.6);
    surface.fill();

    surface.restore();
}

fn draw_sparkle<S: Surface + ?Sized>(surface: &mut S, s: &Sparkle) {
    surface.save();
    surface.set_alpha(s.alpha());
    surface.set_fill(&Paint::Solid(accent(s.palette)));
    surface.begin_path();
    surface.arc(s.pos.x, s.pos.y, s.size, 0.0, TAU);
    surface.fill();
    surface.restore();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focal_plane_is_sharp() {
        assert_eq!(depth_of_field(1.0), None);
        assert_eq!(depth_of_field(1.03), None);
    }

    #[test]
    fn off_plane_is_softened() {
        let (blur, alpha) = depth_of_field(0.75).unwrap();
        assert!(blur > 0.0);
        assert!((DOF_ALPHA_FLOOR..1.0).contains(&alpha));
    }

    #[test]
    fn face_shades_order_by_lightness() {
        let lum = |c: Color| c.r as u32 + c.g as u32 + c.b as u32;
        for p in [Palette::Gold, Palette::Ruby] {
            let (main, edge, rim) = token_colors(p);
            assert!(lum(edge) < lum(main), "{p:?}");
            assert!(lum(main) < lum(rim), "{p:?}");
            assert_eq!(main.a, 1.0);
        }
    }
}
