//! Simulation and drawing tuning constants.
//!
//! Velocities and deltas are expressed per 60 fps tick; the scheduler scales
//! them by the normalized frame delta.

// Frame timing
pub const FRAME_MS_NOMINAL: f64 = 16.67;
pub const FRAME_MS_CAP: f64 = 33.0; // clamp after tab-resume stalls
pub const FRAME_MS_FALLBACK: f64 = 16.0; // used for the very first frame

// Viewport
pub const DPR_MAX: f32 = 2.0;
pub const WRAP_MARGIN: f32 = 60.0;
pub const SPAWN_MARGIN: f32 = 50.0;

// Token pool
pub const TOKEN_COUNT_NORMAL: usize = 26;
pub const TOKEN_COUNT_REDUCED: usize = 14;
pub const TOKEN_RADIUS_MIN: f32 = 9.0;
pub const TOKEN_RADIUS_MAX: f32 = 18.0;
pub const TOKEN_VX_MAX: f32 = 0.2;
pub const TOKEN_VY_MAX: f32 = 0.15;
pub const TOKEN_SPIN_MAX: f32 = 0.01;
pub const TOKEN_DEPTH_MIN: f32 = 0.75;
pub const TOKEN_DEPTH_MAX: f32 = 1.25;
pub const GOLD_PROBABILITY: f32 = 0.62;
pub const TOKEN_SPEED_SCALE: f32 = 1.2;

// Glow spots
pub const GLOW_COUNT_NORMAL: usize = 4;
pub const GLOW_COUNT_REDUCED: usize = 2;
pub const GLOW_RADIUS_MIN: f32 = 160.0;
pub const GLOW_RADIUS_MAX: f32 = 340.0;
pub const GLOW_ALPHA_MIN: f32 = 0.06;
pub const GLOW_ALPHA_MAX: f32 = 0.14;

// Pointer repel
pub const REPEL_RADIUS: f32 = 120.0;
pub const REPEL_GAIN: f32 = 0.06;
pub const REPEL_DECAY: f32 = 0.98;

// Sparkles
pub const SPARKLE_BURST: usize = 20;
pub const SPARKLE_CAP: usize = 600;
pub const SPARKLE_LIFE_MIN: f32 = 0.6;
pub const SPARKLE_LIFE_MAX: f32 = 1.2;
pub const SPARKLE_SIZE_MIN: f32 = 1.0;
pub const SPARKLE_SIZE_MAX: f32 = 2.5;
pub const SPARKLE_VX_MAX: f32 = 0.4;
pub const SPARKLE_VY_MIN: f32 = -0.6;
pub const SPARKLE_VY_MAX: f32 = -0.1;
pub const SPARKLE_GOLD_PROBABILITY: f32 = 0.7;
pub const SPARKLE_SPEED_SCALE: f32 = 3.0;
pub const TICKS_PER_SECOND: f32 = 60.0;

// Wheel ghosts (radians per tick)
pub const WHEEL_DELTA_CW: f32 = 0.01;
pub const WHEEL_DELTA_CCW: f32 = -0.008;
pub const WHEEL_DELTA_CW_REDUCED: f32 = 0.006;
pub const WHEEL_DELTA_CCW_REDUCED: f32 = -0.005;
pub const WHEEL_SEGMENTS: usize = 8;
pub const WHEEL_ALPHA: f32 = 0.08;
pub const WHEEL_ALPHA_REDUCED: f32 = 0.05;
pub const WHEEL_SPAN: f32 = 0.4; // fraction of min(width, height)
pub const WHEEL_A_ANCHOR: [f32; 2] = [0.25, 0.25];
pub const WHEEL_B_ANCHOR: [f32; 2] = [0.75, 0.75];
pub const WHEEL_A_SCALE: f32 = 0.6;
pub const WHEEL_B_SCALE: f32 = 0.5;

// Depth of field
pub const DOF_MIN_DEVIATION: f32 = 0.05;
pub const DOF_BLUR_PER_UNIT: f32 = 6.0; // px of blur per unit of depth deviation
pub const DOF_ALPHA_PER_UNIT: f32 = 1.2;
pub const DOF_ALPHA_FLOOR: f32 = 0.55;

// Token face
pub const TOKEN_LABEL: &str = "SLT";
pub const TOKEN_LABEL_ALPHA: f32 = 0.45;
pub const TOKEN_FONT_FAMILY: &str = "Orbitron, Inter, sans-serif";
