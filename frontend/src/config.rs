use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose wizard tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How long the mock analysis pretends to work before showing results.
pub const ANALYSIS_DELAY_MS: u32 = 3_000;

pub const WORD_INTERVAL_MS: u32 = 3_000;
pub const WORD_TRANSITION_MS: u32 = 500;

/// Vertical offset in pixels past which the nav switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 20.0;

pub const HERO_WORDS: &[&str] = &["Safe", "Informed", "Protected", "Confident", "Secure"];
