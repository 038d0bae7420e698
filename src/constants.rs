/// Page hooks and browser-facing tuning for the web front end.
///
/// Engine tuning lives in `backdrop_core::constants`; this file only holds
/// what the DOM glue needs.

// Element ids
pub const CANVAS_ID: &str = "bg-canvas";
pub const COUNTDOWN_IDS: [&str; 4] = ["dd", "hh", "mm", "ss"];
pub const YEAR_ID: &str = "year";
pub const TYPEWRITER_ID: &str = "typewriter";
pub const LAUNCH_NOTE_SELECTOR: &str = ".launch-note";

// Canvas data attributes read as config overrides
pub const ATTR_SEED: &str = "data-seed";
pub const ATTR_TOKENS: &str = "data-tokens";
pub const ATTR_BURST: &str = "data-burst";

// Typewriter element attributes
pub const ATTR_TYPE_TEXT: &str = "data-text";
pub const ATTR_TYPE_CPS: &str = "data-cps";

// Media query for the platform motion preference (read once at startup)
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Timers
pub const COUNTDOWN_INTERVAL_MS: i32 = 1000;
pub const TYPEWRITER_INTERVAL_MS: i32 = 50;
pub const TYPEWRITER_DEFAULT_CPS: f32 = 18.0;
pub const TYPEWRITER_CARET: char = '▍';
