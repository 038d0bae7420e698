use backdrop_core::{BackdropError, Color, Composite, Paint, Stops, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] over a canvas element's 2D context.
///
/// Canvas calls that can throw are discarded: a failed arc or transform
/// costs one entity for one frame, never the loop.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    blur_supported: bool,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> Result<Self, BackdropError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| BackdropError::SurfaceUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| BackdropError::SurfaceUnavailable("no 2d context".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| BackdropError::SurfaceUnavailable(format!("{:?}", e)))?;
        let blur_supported = probe_filter(&ctx);
        if !blur_supported {
            log::info!("[canvas] filter unsupported; tokens drawn without depth blur");
        }
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            blur_supported,
        })
    }
}

// Browsers without canvas filters ignore the assignment, so reading it back
// tells us whether blur will show.
fn probe_filter(ctx: &web::CanvasRenderingContext2d) -> bool {
    ctx.set_filter("blur(1px)");
    let ok = ctx.filter() == "blur(1px)";
    ctx.set_filter("none");
    ok
}

fn add_stops(g: &web::CanvasGradient, stops: &Stops) {
    for s in stops {
        _ = g.add_color_stop(s.offset, &s.color.css());
    }
}

impl Surface for CanvasSurface {
    fn resize_backing(&mut self, width_px: u32, height_px: u32) {
        self.canvas.set_width(width_px.max(1));
        self.canvas.set_height(height_px.max(1));
    }

    fn set_transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        _ = self.ctx.set_transform(
            a as f64, b as f64, c as f64, d as f64, e as f64, f as f64,
        );
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        _ = self.ctx.translate(x as f64, y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        _ = self.ctx.rotate(radians as f64);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
    }

    fn set_composite(&mut self, op: Composite) {
        _ = self.ctx.set_global_composite_operation(op.as_css());
    }

    fn supports_blur(&self) -> bool {
        self.blur_supported
    }

    fn set_blur(&mut self, px: f32) {
        if self.blur_supported {
            self.ctx.set_filter(&format!("blur({:.2}px)", px));
        }
    }

    fn set_fill(&mut self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_fill_style_str(&c.css()),
            Paint::Linear { from, to, stops } => {
                let g = self.ctx.create_linear_gradient(
                    from[0] as f64,
                    from[1] as f64,
                    to[0] as f64,
                    to[1] as f64,
                );
                add_stops(&g, stops);
                self.ctx.set_fill_style_canvas_gradient(&g);
            }
            Paint::Radial {
                inner,
                outer,
                stops,
            } => {
                match self.ctx.create_radial_gradient(
                    inner[0] as f64,
                    inner[1] as f64,
                    inner[2].max(0.0) as f64,
                    outer[0] as f64,
                    outer[1] as f64,
                    outer[2].max(0.0) as f64,
                ) {
                    Ok(g) => {
                        add_stops(&g, stops);
                        self.ctx.set_fill_style_canvas_gradient(&g);
                    }
                    // Degenerate radii: flat fill with the center color.
                    Err(_) => {
                        let c = stops.first().map(|s| s.color).unwrap_or(Color::rgba(0, 0, 0, 0.0));
                        self.ctx.set_fill_style_str(&c.css());
                    }
                }
            }
        }
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ctx.move_to(x as f64, y as f64);
    }

    fn arc(&mut self, x: f32, y: f32, r: f32, start: f32, end: f32) {
        _ = self
            .ctx
            .arc(x as f64, y as f64, r.max(0.0) as f64, start as f64, end as f64);
    }

    fn ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32, rotation: f32) {
        _ = self.ctx.ellipse(
            x as f64,
            y as f64,
            rx.max(0.0) as f64,
            ry.max(0.0) as f64,
            rotation as f64,
            0.0,
            TAU,
        );
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: f32, family: &str) {
        self.ctx.set_font(&format!("{}px {}", font_px.max(1.0), family));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        _ = self.ctx.fill_text(text, x as f64, y as f64);
    }
}
