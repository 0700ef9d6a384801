use embassy_time::{Duration, Instant};

use crate::math8::{ease_in_out_quad, portion_of, progress8};
use crate::surface::SCREEN_WIDTH;

/// Whether the displayed frame is settled or sliding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    Fixed,
    InTransition,
}

/// Slide-left animation between two frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTransition {
    /// Frame sliding out
    from: usize,
    /// Frame sliding in
    to: usize,
    /// Time at which the slide started
    started: Instant,
    /// Total slide duration
    duration: Duration,
}

impl SlideTransition {
    pub const fn new(from: usize, to: usize, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    pub const fn from(&self) -> usize {
        self.from
    }

    pub const fn to(&self) -> usize {
        self.to
    }

    /// Check if the slide has run its full duration
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// Eased progress (0-255)
    pub fn progress(&self, now: Instant) -> u8 {
        let elapsed = now.saturating_duration_since(self.started);
        ease_in_out_quad(progress8(elapsed, self.duration))
    }

    /// Horizontal offsets of the outgoing and incoming frame
    pub fn offsets(&self, now: Instant) -> (i16, i16) {
        let shift = portion_of(SCREEN_WIDTH, self.progress(now));
        (-shift, SCREEN_WIDTH - shift)
    }

    /// Point both ends back at the first frame if they no longer exist
    pub(crate) fn clamp(&mut self, len: usize) {
        if self.from >= len {
            self.from = 0;
        }
        if self.to >= len {
            self.to = 0;
        }
    }
}
