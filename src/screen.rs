//! Scheduling interface for the host loop.
//!
//! Provides the tick entry point and the event entry points without async or
//! platform-specific timers. The caller is responsible for sleeping between
//! ticks.

use embassy_time::{Duration, Instant};
use log::{debug, info};

use crate::config::{NO_DISPLAY_TICK_INTERVAL, ScreenConfig};
use crate::engine::{Mode, PresentationEngine};
use crate::node::NodeRegistry;
use crate::signal::{ScreenEvent, ScreenSignals};
use crate::surface::Surface;
use crate::transition::FrameState;

/// Snapshot of what the screen is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationState {
    pub mode: Mode,
    pub current_frame: usize,
    pub frame_state: FrameState,
    pub auto_advance: bool,
    pub wake_requested: bool,
}

/// Panel and the engine drawing on it
struct Attached<S: Surface, const FRAMES: usize> {
    surface: S,
    engine: PresentationEngine<FRAMES>,
}

/// Status screen
///
/// A screen created without a surface stays inert: every call is a no-op and
/// [`Screen::tick`] asks to be called again in 30 seconds.
///
/// # Usage
///
/// ```ignore
/// static SIGNALS: ScreenSignals<4> = ScreenSignals::new();
///
/// let mut screen: Screen<'_, _, { registry_capacity(32) }, 4> =
///     Screen::new(Some(panel), &SIGNALS, ScreenConfig::default());
/// let buttons = SIGNALS.handle();
///
/// loop {
///     let sleep = screen.tick(Instant::now(), &node_db);
///     Timer::after(sleep).await;
/// }
/// ```
pub struct Screen<'a, S: Surface, const FRAMES: usize, const EVENTS: usize> {
    display: Option<Attached<S, FRAMES>>,
    signals: &'a ScreenSignals<EVENTS>,
}

impl<'a, S: Surface, const FRAMES: usize, const EVENTS: usize> Screen<'a, S, FRAMES, EVENTS> {
    pub fn new(surface: Option<S>, signals: &'a ScreenSignals<EVENTS>, config: ScreenConfig) -> Self {
        let display = match surface {
            Some(surface) => Some(Attached {
                surface,
                engine: PresentationEngine::new(config),
            }),
            None => {
                info!("no display present, screen disabled");
                None
            }
        };
        Self { display, signals }
    }

    /// Run one tick and return how long to wait before the next one
    pub fn tick<N: NodeRegistry + ?Sized>(&mut self, now: Instant, nodes: &N) -> Duration {
        let Some(display) = &mut self.display else {
            // Keep the queue from filling up with events nobody will see
            while self.signals.poll().is_some() {}
            self.signals.take_wake();
            return NO_DISPLAY_TICK_INTERVAL;
        };

        while let Some(event) = self.signals.poll() {
            debug!("screen event {event:?}");
            match event {
                ScreenEvent::ButtonPress => display.engine.advance(now),
                ScreenEvent::PairingStarted(pin) => {
                    display.engine.start_pairing(pin);
                    self.signals.request_wake();
                }
                ScreenEvent::PairingEnded => display.engine.end_pairing(nodes),
            }
        }

        if self.signals.take_wake() {
            display.surface.display_on();
        }

        display.engine.tick(now, &mut display.surface, nodes)
    }

    /// Button pressed: manual browsing from now on
    pub fn on_button_press(&mut self, now: Instant) {
        if let Some(display) = &mut self.display {
            display.engine.advance(now);
        }
    }

    /// Show the bluetooth pairing code and wake the panel
    pub fn on_pairing_start(&mut self, pin: u32) {
        if let Some(display) = &mut self.display {
            display.engine.start_pairing(pin);
            self.signals.request_wake();
        }
    }

    /// Back to the standard frames, built for the nodes known right now
    pub fn on_pairing_end<N: NodeRegistry + ?Sized>(&mut self, nodes: &N) {
        if let Some(display) = &mut self.display {
            display.engine.end_pairing(nodes);
        }
    }

    /// Make sure the panel is powered before the next paint
    pub fn wake(&self) {
        if self.display.is_some() {
            self.signals.request_wake();
        }
    }

    pub fn display_on(&mut self) {
        if let Some(display) = &mut self.display {
            display.surface.display_on();
        }
    }

    pub fn display_off(&mut self) {
        if let Some(display) = &mut self.display {
            display.surface.display_off();
        }
    }

    /// Append a line to the log shown on the debug frame
    pub fn print(&mut self, text: &str) {
        debug!("screen: {text}");
        if let Some(display) = &mut self.display {
            display.surface.print(text);
        }
    }

    /// Replace the message shown on the text message frame
    pub fn show_text_message(&mut self, sender: &str, body: &str) {
        if let Some(display) = &mut self.display {
            display.engine.set_text_message(sender, body);
        }
    }

    pub const fn is_present(&self) -> bool {
        self.display.is_some()
    }

    /// Current state, `None` without a panel
    pub fn state(&self) -> Option<PresentationState> {
        let engine = &self.display.as_ref()?.engine;
        Some(PresentationState {
            mode: engine.mode(),
            current_frame: engine.current_frame_index(),
            frame_state: engine.frame_state(),
            auto_advance: engine.auto_advance(),
            wake_requested: self.signals.wake_requested(),
        })
    }

    pub fn engine(&self) -> Option<&PresentationEngine<FRAMES>> {
        self.display.as_ref().map(|display| &display.engine)
    }

    pub fn surface(&self) -> Option<&S> {
        self.display.as_ref().map(|display| &display.surface)
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.display.as_mut().map(|display| &mut display.surface)
    }
}
