//! The 2D drawing seam between the renderer and the host.
//!
//! [`Surface`] mirrors the subset of the canvas 2D API the renderer needs.
//! The web front end implements it over `CanvasRenderingContext2d`; tests use
//! [`RecordingSurface`], which logs every call and tracks the save/restore
//! state stack.

use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn css(&self) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Color,
}

pub type Stops = SmallVec<[ColorStop; 4]>;

pub fn stops(pairs: &[(f32, Color)]) -> Stops {
    pairs
        .iter()
        .map(|&(offset, color)| ColorStop { offset, color })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear {
        from: [f32; 2],
        to: [f32; 2],
        stops: Stops,
    },
    Radial {
        inner: [f32; 3], // x, y, r
        outer: [f32; 3],
        stops: Stops,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Composite {
    #[default]
    SourceOver,
    Lighter,
    Screen,
}

impl Composite {
    pub fn as_css(&self) -> &'static str {
        match self {
            Composite::SourceOver => "source-over",
            Composite::Lighter => "lighter",
            Composite::Screen => "screen",
        }
    }
}

/// Immediate-mode 2D drawing target.
///
/// Coordinates are logical pixels once the scheduler has installed the
/// device-pixel-ratio transform. Calls never fail: an adapter swallows host
/// errors so a single bad draw cannot stop the frame loop.
pub trait Surface {
    /// Resize the backing store in device pixels.
    fn resize_backing(&mut self, width_px: u32, height_px: u32);
    fn set_transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32);
    fn clear(&mut self, width: f32, height: f32);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, radians: f32);

    fn set_alpha(&mut self, alpha: f32);
    fn set_composite(&mut self, op: Composite);
    /// Whether `set_blur` has any visible effect on this host.
    fn supports_blur(&self) -> bool;
    fn set_blur(&mut self, px: f32);

    fn set_fill(&mut self, paint: &Paint);
    fn set_stroke(&mut self, color: Color, width: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn arc(&mut self, x: f32, y: f32, r: f32, start: f32, end: f32);
    fn ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32, rotation: f32);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
    /// Centered text, baseline middle.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_px: f32, family: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    ResizeBacking(u32, u32),
    SetTransform([f32; 6]),
    Clear(f32, f32),
    Save,
    Restore,
    Translate(f32, f32),
    Rotate(f32),
    Alpha(f32),
    Composite(Composite),
    Blur(f32),
    Fill(Paint),
    Stroke(Color, f32),
    BeginPath,
    MoveTo(f32, f32),
    Arc { x: f32, y: f32, r: f32 },
    Ellipse { x: f32, y: f32, rx: f32, ry: f32 },
    ClosePath,
    FillPath,
    StrokePath,
    Text(String),
}

/// Scoped draw state, saved and restored like the canvas state stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawState {
    pub alpha: f32,
    pub composite: Composite,
    pub blur: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            composite: Composite::SourceOver,
            blur: 0.0,
        }
    }
}

/// Headless surface that records calls; used by tests and for debugging
/// draw order without a browser.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    pub state: DrawState,
    pub backing: (u32, u32),
    blur_supported: bool,
    stack: Vec<DrawState>,
    max_depth: usize,
}

impl RecordingSurface {
    pub fn new(blur_supported: bool) -> Self {
        Self {
            ops: Vec::new(),
            state: DrawState::default(),
            backing: (0, 0),
            blur_supported,
            stack: Vec::new(),
            max_depth: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn resize_backing(&mut self, width_px: u32, height_px: u32) {
        self.backing = (width_px, height_px);
        // Resizing a canvas resets its whole state.
        self.stack.clear();
        self.state = DrawState::default();
        self.ops.push(DrawOp::ResizeBacking(width_px, height_px));
    }
    fn set_transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.ops.push(DrawOp::SetTransform([a, b, c, d, e, f]));
    }
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(DrawOp::Clear(width, height));
    }
    fn save(&mut self) {
        self.stack.push(self.state);
        self.max_depth = self.max_depth.max(self.stack.len());
        self.ops.push(DrawOp::Save);
    }
    fn restore(&mut self) {
        if let Some(s) = self.stack.pop() {
            self.state = s;
        }
        self.ops.push(DrawOp::Restore);
    }
    fn translate(&mut self, x: f32, y: f32) {
        self.ops.push(DrawOp::Translate(x, y));
    }
    fn rotate(&mut self, radians: f32) {
        self.ops.push(DrawOp::Rotate(radians));
    }
    fn set_alpha(&mut self, alpha: f32) {
        self.state.alpha = alpha;
        self.ops.push(DrawOp::Alpha(alpha));
    }
    fn set_composite(&mut self, op: Composite) {
        self.state.composite = op;
        self.ops.push(DrawOp::Composite(op));
    }
    fn supports_blur(&self) -> bool {
        self.blur_supported
    }
    fn set_blur(&mut self, px: f32) {
        if self.blur_supported {
            self.state.blur = px;
        }
        self.ops.push(DrawOp::Blur(px));
    }
    fn set_fill(&mut self, paint: &Paint) {
        self.ops.push(DrawOp::Fill(paint.clone()));
    }
    fn set_stroke(&mut self, color: Color, width: f32) {
        self.ops.push(DrawOp::Stroke(color, width));
    }
    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }
    fn move_to(&mut self, x: f32, y: f32) {
        self.ops.push(DrawOp::MoveTo(x, y));
    }
    fn arc(&mut self, x: f32, y: f32, r: f32, _start: f32, _end: f32) {
        self.ops.push(DrawOp::Arc { x, y, r });
    }
    fn ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32, _rotation: f32) {
        self.ops.push(DrawOp::Ellipse { x, y, rx, ry });
    }
    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }
    fn fill(&mut self) {
        self.ops.push(DrawOp::FillPath);
    }
    fn stroke(&mut self) {
        self.ops.push(DrawOp::StrokePath);
    }
    fn fill_text(&mut self, text: &str, _x: f32, _y: f32, _font_px: f32, _family: &str) {
        self.ops.push(DrawOp::Text(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_string() {
        assert_eq!(
            Color::rgb(255, 215, 0).with_alpha(0.5).css(),
            "rgba(255,215,0,0.500)"
        );
    }

    #[test]
    fn recording_restores_state() {
        let mut s = RecordingSurface::new(true);
        s.save();
        s.set_alpha(0.2);
        s.set_blur(3.0);
        s.set_composite(Composite::Lighter);
        s.restore();
        assert_eq!(s.state, DrawState::default());
        assert_eq!(s.depth(), 0);
        assert_eq!(s.max_depth(), 1);
    }
}
