use log::LevelFilter;
use std::time::Duration;

/// Compiled-in settings. Nothing at runtime changes them.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Glyph drawn on both sides of the prompt.
    pub prompt_glyph: &'static str,
    /// Pause between frames of the shutdown bar, interactive sessions only.
    pub shutdown_frame_delay: Duration,
    pub log_level: LevelFilter,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt_glyph: "🦠",
            shutdown_frame_delay: Duration::from_micros(421_337),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Info
            } else {
                LevelFilter::Warn
            },
        }
    }
}
