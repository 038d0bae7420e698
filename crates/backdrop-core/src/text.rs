//! Text animations shown next to the backdrop: a launch countdown and a
//! typewriter reveal. Both are pure; the front end owns the clock and the DOM.

pub const DAY_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;
pub const LAUNCH_DURATION_DAYS: f64 = 15.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownParts {
    /// Split a remaining duration; anything at or below zero is all zeros.
    pub fn from_remaining_ms(remaining_ms: f64) -> Self {
        if remaining_ms.is_nan() || remaining_ms <= 0.0 {
            return Self::default();
        }
        let total = (remaining_ms / 1000.0).floor() as u64;
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    /// Zero-padded `[dd, hh, mm, ss]`.
    pub fn padded(&self) -> [String; 4] {
        [
            format!("{:02}", self.days),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

/// Countdown toward a fixed wall-clock target, in epoch milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Countdown {
    pub target_ms: f64,
}

impl Countdown {
    pub fn new(target_ms: f64) -> Self {
        Self { target_ms }
    }

    /// Target [`LAUNCH_DURATION_DAYS`] after `now_ms`.
    pub fn launching_from(now_ms: f64) -> Self {
        Self::new(now_ms + LAUNCH_DURATION_DAYS * DAY_MS)
    }

    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        self.target_ms - now_ms
    }

    pub fn parts(&self, now_ms: f64) -> CountdownParts {
        CountdownParts::from_remaining_ms(self.remaining_ms(now_ms))
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.remaining_ms(now_ms) <= 0.0
    }

    /// "Launching in N days", counting partial days up so the note reads
    /// 15, 14, 13, ... from the first visit.
    pub fn note(&self, now_ms: f64) -> String {
        let t = self.remaining_ms(now_ms);
        if t <= 0.0 {
            return "Launching today".to_string();
        }
        let days = (t / DAY_MS).ceil().max(0.0) as u64;
        let plural = if days == 1 { "" } else { "s" };
        format!("Launching in {days} day{plural}")
    }
}

/// Reveals `text` one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    chars_per_sec: f32,
    elapsed: f32,
    shown: usize, // chars, not bytes
    total: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, chars_per_sec: f32) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self {
            text,
            chars_per_sec: chars_per_sec.max(0.0),
            elapsed: 0.0,
            shown: 0,
            total,
        }
    }

    /// Advance by `dt_sec` and return the visible prefix.
    pub fn advance(&mut self, dt_sec: f32) -> &str {
        if dt_sec > 0.0 {
            self.elapsed += dt_sec;
        }
        let want = if self.chars_per_sec > 0.0 {
            (self.elapsed * self.chars_per_sec).floor() as usize
        } else {
            self.total
        };
        self.shown = want.min(self.total);
        self.visible()
    }

    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    /// Visible prefix plus a caret while typing is still in progress.
    pub fn with_caret(&self, caret: char) -> String {
        let mut s = self.visible().to_string();
        if !self.is_done() {
            s.push(caret);
        }
        s
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.shown = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_split() {
        let ms = ((2 * 86_400 + 3 * 3600 + 4 * 60 + 5) * 1000) as f64 + 999.0;
        let p = CountdownParts::from_remaining_ms(ms);
        assert_eq!(
            p,
            CountdownParts {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
        assert_eq!(p.padded(), ["02", "03", "04", "05"].map(String::from));
    }

    #[test]
    fn finished_countdown_reads_today() {
        let c = Countdown::new(1000.0);
        assert!(c.is_finished(1000.0));
        assert_eq!(c.parts(5000.0), CountdownParts::default());
        assert_eq!(c.note(5000.0), "Launching today");
    }

    #[test]
    fn note_rounds_days_up() {
        let c = Countdown::launching_from(0.0);
        assert_eq!(c.note(0.0), "Launching in 15 days");
        assert_eq!(c.note(1.0), "Launching in 15 days");
        assert_eq!(c.note(14.0 * DAY_MS + 1.0), "Launching in 1 day");
    }

    #[test]
    fn typewriter_respects_char_boundaries() {
        let mut tw = Typewriter::new("¡Hola!", 10.0);
        assert_eq!(tw.advance(0.0), "");
        assert_eq!(tw.advance(0.1), "¡");
        assert_eq!(tw.with_caret('|'), "¡|");
        assert_eq!(tw.advance(1.0), "¡Hola!");
        assert!(tw.is_done());
        assert_eq!(tw.with_caret('|'), "¡Hola!");
        tw.reset();
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn typewriter_finishes_at_fixed_steps() {
        // 12 chars at 18 cps with 50 ms steps: done on tick 14, not before.
        let mut tw = Typewriter::new("Coming soon.", 18.0);
        let mut ticks = 0;
        while !tw.is_done() {
            tw.advance(0.05);
            ticks += 1;
            assert!(ticks <= 14, "still typing after {ticks} ticks");
        }
        assert_eq!(ticks, 14);
        assert_eq!(tw.with_caret('|'), "Coming soon.");
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut tw = Typewriter::new("", 18.0);
        assert!(tw.is_done());
        assert_eq!(tw.advance(0.05), "");
    }
}
