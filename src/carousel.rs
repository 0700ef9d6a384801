//! Frame carousel
//!
//! Tracks which frame is on screen, runs the dwell timer for auto-advance
//! and the slide between frames. The frame list itself lives in the
//! registry; the carousel only knows its length.

use embassy_time::Instant;

use crate::config::TransitionTimings;
use crate::transition::{FrameState, SlideTransition};

#[derive(Debug, Clone)]
pub struct Carousel {
    timings: TransitionTimings,
    /// Number of frames in the registry
    len: usize,
    /// Index of the settled (or outgoing) frame
    current: usize,
    transition: Option<SlideTransition>,
    /// When the current frame settled; starts on the first update
    settled_at: Option<Instant>,
    auto_advance: bool,
}

impl Carousel {
    pub const fn new(timings: TransitionTimings) -> Self {
        Self {
            timings,
            len: 0,
            current: 0,
            transition: None,
            settled_at: None,
            auto_advance: true,
        }
    }

    /// Adopt a new frame count after the registry was rebuilt
    ///
    /// Indices that fall outside the new list are reset to the first frame.
    pub fn set_frame_count(&mut self, len: usize) {
        self.len = len;
        if self.current >= len {
            self.current = 0;
        }
        if let Some(transition) = &mut self.transition {
            transition.clamp(len);
        }
    }

    /// Advance animation and timers
    ///
    /// Returns `true` when the settled frame index changed.
    pub fn update(&mut self, now: Instant) -> bool {
        if let Some(transition) = self.transition {
            if !transition.is_complete(now) {
                return false;
            }
            self.transition = None;
            self.settled_at = Some(now);
            let changed = self.current != transition.to();
            self.current = transition.to();
            return changed;
        }

        let settled_at = *self.settled_at.get_or_insert(now);
        if self.auto_advance
            && now.saturating_duration_since(settled_at) >= self.timings.frame_dwell
        {
            self.begin(now);
        }
        false
    }

    /// Start sliding to the next frame
    ///
    /// Ignored while a slide is running or when there is nothing to slide to.
    pub fn next_frame(&mut self, now: Instant) -> bool {
        if self.transition.is_some() || self.len < 2 {
            return false;
        }
        self.begin(now);
        true
    }

    fn begin(&mut self, now: Instant) {
        if self.len < 2 {
            return;
        }
        let to = (self.current + 1) % self.len;
        self.transition = Some(SlideTransition::new(
            self.current,
            to,
            now,
            self.timings.slide,
        ));
    }

    /// Show `index` without animation, or the first frame if it does not exist
    pub fn jump_to(&mut self, index: usize) {
        self.current = if index < self.len { index } else { 0 };
    }

    /// Stop timer-driven advancing; only [`Carousel::next_frame`] moves frames afterwards
    pub fn disable_auto_advance(&mut self) {
        self.auto_advance = false;
    }

    pub const fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub const fn current(&self) -> usize {
        self.current
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn transition(&self) -> Option<&SlideTransition> {
        self.transition.as_ref()
    }

    pub const fn state(&self) -> FrameState {
        if self.transition.is_some() {
            FrameState::InTransition
        } else {
            FrameState::Fixed
        }
    }
}
