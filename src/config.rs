//! Screen configuration.

use embassy_time::Duration;

/// Poll interval while a slide is on screen
pub const TRANSITION_TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Poll interval while the current frame is settled
pub const IDLE_TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Poll interval when no panel is attached
pub const NO_DISPLAY_TICK_INTERVAL: Duration = Duration::from_millis(30 * 1000);

/// Default time a settled frame stays before auto-advance (151 ticks at 30 FPS)
pub const DEFAULT_FRAME_DWELL: Duration = Duration::from_millis(5_000);

/// Default slide duration (15 ticks at 30 FPS)
pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(500);

/// Configuration for frame transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTimings {
    /// How long a frame stays settled before auto-advance slides on
    pub frame_dwell: Duration,
    /// Duration of the slide between two frames
    pub slide: Duration,
}

impl Default for TransitionTimings {
    fn default() -> Self {
        Self {
            frame_dwell: DEFAULT_FRAME_DWELL,
            slide: DEFAULT_SLIDE_DURATION,
        }
    }
}

/// XBM image shown on the boot splash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootLogo {
    pub width: u16,
    pub height: u16,
    pub bits: &'static [u8],
}

/// Configuration for the screen
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    pub timings: TransitionTimings,
    /// Name printed under the boot logo
    pub app_name: &'static str,
    /// Version printed next to the name
    pub app_version: &'static str,
    pub logo: Option<BootLogo>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            timings: TransitionTimings::default(),
            app_name: env!("CARGO_PKG_NAME"),
            app_version: env!("CARGO_PKG_VERSION"),
            logo: None,
        }
    }
}
