use core::fmt::Write;

use embassy_time::{Duration, Instant};
use heapless::String;
use log::{debug, error, info};

use crate::carousel::Carousel;
use crate::config::{IDLE_TICK_INTERVAL, ScreenConfig, TRANSITION_TICK_INTERVAL};
use crate::cursor::NodeCursor;
use crate::frame::{Frame, FrameContext, TextMessage};
use crate::node::NodeRegistry;
use crate::registry::{FrameRegistry, RegistryError};
use crate::surface::Surface;
use crate::transition::FrameState;

/// Room for any `u32` printed as a zero padded code
const PIN_LEN: usize = 16;

/// Presentation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Boot splash rotation, left for good after the first frame change
    Boot,
    /// Text message, debug info and node info frames
    Normal,
    /// Pairing code only; frames move on button presses alone
    BluetoothPairing,
}

/// Presentation Engine - owns the frame list and decides what is on screen
///
/// `FRAMES` is the registry capacity, see [`crate::registry_capacity`].
pub struct PresentationEngine<const FRAMES: usize> {
    // Configuration
    config: ScreenConfig,

    // Internal state
    mode: Mode,
    registry: FrameRegistry<FRAMES>,
    carousel: Carousel,
    cursor: NodeCursor,
    /// Frame index the cursor last reacted to
    prev_frame: usize,
    /// Node count the frame list was last checked against
    observed_nodes: Option<usize>,
    pin: String<PIN_LEN>,
    message: TextMessage,
}

impl<const FRAMES: usize> PresentationEngine<FRAMES> {
    /// Create an engine showing the boot frames
    pub fn new(config: ScreenConfig) -> Self {
        let mut engine = Self {
            carousel: Carousel::new(config.timings),
            config,
            mode: Mode::Boot,
            registry: FrameRegistry::new(),
            cursor: NodeCursor::new(),
            prev_frame: 0,
            observed_nodes: None,
            pin: String::new(),
            message: TextMessage::new(),
        };
        let _ = engine.rebuild_with(FrameRegistry::rebuild_boot);
        engine
    }

    /// Process one tick
    ///
    /// Advances the animation, reacts to mode and population changes, paints
    /// and returns how long the caller may sleep before the next tick.
    pub fn tick<S, N>(&mut self, now: Instant, surface: &mut S, nodes: &N) -> Duration
    where
        S: Surface + ?Sized,
        N: NodeRegistry + ?Sized,
    {
        self.update(now, nodes);
        self.paint(now, surface, nodes);
        self.next_tick_interval()
    }

    /// Advance state without painting
    pub fn update<N: NodeRegistry + ?Sized>(&mut self, now: Instant, nodes: &N) {
        self.carousel.update(now);

        let node_count = nodes.node_count();
        if self.mode == Mode::Boot {
            // A failed exit is only retried once the population changes
            if self.carousel.current() != 0 && self.observed_nodes != Some(node_count) {
                self.observed_nodes = Some(node_count);
                self.finish_boot(node_count);
            }
        } else if self.observed_nodes != Some(node_count) {
            self.observed_nodes = Some(node_count);
            if self.mode == Mode::Normal {
                info!("node count is now {node_count}, rebuilding frames");
                let _ = self.rebuild_with(|registry| registry.rebuild_normal(node_count));
            }
        }

        self.track_frame_change(nodes);
    }

    /// Leave the boot rotation, keeping the frame that is on screen
    ///
    /// Stays in [`Mode::Boot`] if the standard frames do not fit.
    fn finish_boot(&mut self, node_count: usize) {
        let shown = self.registry.get(self.carousel.current());
        if self
            .rebuild_with(|registry| registry.rebuild_normal(node_count))
            .is_err()
        {
            return;
        }

        info!("boot screen done, showing standard frames");
        self.mode = Mode::Normal;
        let index = shown
            .and_then(|frame| self.registry.position(frame))
            .unwrap_or(0);
        self.carousel.jump_to(index);
        self.prev_frame = self.carousel.current();
    }

    /// Move the node cursor when a different frame came on screen
    fn track_frame_change<N: NodeRegistry + ?Sized>(&mut self, nodes: &N) {
        let current = self.carousel.current();
        if current != self.prev_frame {
            self.prev_frame = current;
            let frame = self.registry.get(current);
            debug!(
                "frame {current} is now {}",
                frame.map_or("none", Frame::as_str)
            );
            if frame == Some(Frame::NodeInfo) {
                self.cursor.advance(nodes);
            }
        }
        self.cursor.settle(nodes);
    }

    /// Replace the frame list and keep the carousel in range
    fn rebuild_with(
        &mut self,
        build: impl FnOnce(&mut FrameRegistry<FRAMES>) -> Result<(), RegistryError>,
    ) -> Result<(), RegistryError> {
        build(&mut self.registry).inspect_err(|err| error!("frame list rejected: {err}"))?;
        self.carousel.set_frame_count(self.registry.len());
        Ok(())
    }

    fn paint<S, N>(&self, now: Instant, surface: &mut S, nodes: &N)
    where
        S: Surface + ?Sized,
        N: NodeRegistry + ?Sized,
    {
        surface.clear();

        let ctx = FrameContext {
            nodes,
            node_index: self.cursor.index(nodes),
            pin: self.pin.as_str(),
            message: &self.message,
            config: &self.config,
            now,
        };
        match self.carousel.transition() {
            Some(slide) => {
                let (outgoing_x, incoming_x) = slide.offsets(now);
                self.draw_frame(surface, &ctx, slide.from(), outgoing_x);

                // The cursor only moves once the slide settles, so show the
                // node it is about to move to
                let incoming = if slide.to() == self.carousel.current() {
                    ctx
                } else {
                    ctx.with_node(self.cursor.peek_next(nodes))
                };
                self.draw_frame(surface, &incoming, slide.to(), incoming_x);
            }
            None => self.draw_frame(surface, &ctx, self.carousel.current(), 0),
        }

        surface.flush();
    }

    fn draw_frame<S, N>(&self, surface: &mut S, ctx: &FrameContext<'_, N>, index: usize, x: i16)
    where
        S: Surface + ?Sized,
        N: NodeRegistry + ?Sized,
    {
        if let Some(frame) = self.registry.get(index) {
            frame.draw(surface, ctx, x, 0);
        }
    }

    /// Fast polling while sliding, relaxed otherwise
    pub fn next_tick_interval(&self) -> Duration {
        match self.carousel.state() {
            FrameState::InTransition => TRANSITION_TICK_INTERVAL,
            FrameState::Fixed => IDLE_TICK_INTERVAL,
        }
    }

    /// Button press: stop auto-advance for good and slide to the next frame
    pub fn advance(&mut self, now: Instant) {
        self.carousel.disable_auto_advance();
        if !self.carousel.next_frame(now) {
            debug!("button press ignored, frame is busy or alone");
        }
    }

    /// Show the pairing code until [`PresentationEngine::end_pairing`]
    ///
    /// Auto-advance is switched off and is not switched back on afterwards.
    pub fn start_pairing(&mut self, pin: u32) {
        self.pin.clear();
        let _ = write!(self.pin, "{pin:06}");

        if self.mode != Mode::BluetoothPairing {
            info!("showing bluetooth screen");
            self.mode = Mode::BluetoothPairing;
        }
        self.carousel.disable_auto_advance();
        let _ = self.rebuild_with(FrameRegistry::rebuild_bluetooth);
    }

    /// Return to the standard frames built for the current node count
    ///
    /// Stays in [`Mode::BluetoothPairing`] if the standard frames do not fit.
    pub fn end_pairing<N: NodeRegistry + ?Sized>(&mut self, nodes: &N) {
        if self.mode != Mode::BluetoothPairing {
            debug!("pairing ended while not pairing");
            return;
        }

        let node_count = nodes.node_count();
        self.observed_nodes = Some(node_count);
        if self
            .rebuild_with(|registry| registry.rebuild_normal(node_count))
            .is_err()
        {
            return;
        }
        info!("bluetooth pairing done, showing standard frames");
        self.mode = Mode::Normal;
        self.prev_frame = self.carousel.current();
        self.cursor.settle(nodes);
    }

    /// Replace the message shown on the text message frame
    pub fn set_text_message(&mut self, sender: &str, body: &str) {
        self.message.set(sender, body);
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn frame_state(&self) -> FrameState {
        self.carousel.state()
    }

    pub const fn current_frame_index(&self) -> usize {
        self.carousel.current()
    }

    pub fn current_frame(&self) -> Option<Frame> {
        self.registry.get(self.carousel.current())
    }

    pub const fn auto_advance(&self) -> bool {
        self.carousel.auto_advance()
    }

    pub const fn registry(&self) -> &FrameRegistry<FRAMES> {
        &self.registry
    }

    /// Index of the node shown by node info frames
    pub const fn node_index(&self) -> usize {
        self.cursor.position()
    }

    /// Pairing code as displayed
    pub fn pin(&self) -> &str {
        self.pin.as_str()
    }

    pub const fn message(&self) -> &TextMessage {
        &self.message
    }

    pub const fn config(&self) -> &ScreenConfig {
        &self.config
    }
}
