//! Hand-off between event sources and the tick loop.
//!
//! Button and bluetooth callbacks may run in interrupt context, while the
//! screen is only touched from the periodic tick. Events are queued in a
//! fixed-size `heapless::Deque` and the wake request is a single flag, both
//! guarded by `critical-section`.

use core::cell::{Cell, RefCell};

use critical_section::Mutex;
use heapless::Deque;

/// Something that happened outside the tick loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// User pressed the button
    ButtonPress,
    /// Phone asked to pair; carries the code to show
    PairingStarted(u32),
    /// Pairing finished or was abandoned
    PairingEnded,
}

/// Shared state between event sources and the screen
///
/// Place it in a `static` and hand [`ScreenHandle`]s to the event sources.
pub struct ScreenSignals<const SIZE: usize> {
    events: Mutex<RefCell<Deque<ScreenEvent, SIZE>>>,
    wake: Mutex<Cell<bool>>,
}

impl<const SIZE: usize> ScreenSignals<SIZE> {
    pub const fn new() -> Self {
        Self {
            events: Mutex::new(RefCell::new(Deque::new())),
            wake: Mutex::new(Cell::new(false)),
        }
    }

    /// Get a handle for an event source
    pub const fn handle(&self) -> ScreenHandle<'_, SIZE> {
        ScreenHandle { signals: self }
    }

    /// Queue an event for the next tick
    ///
    /// Returns the event back if the queue is full.
    pub fn post(&self, event: ScreenEvent) -> Result<(), ScreenEvent> {
        critical_section::with(|cs| self.events.borrow(cs).borrow_mut().push_back(event))
    }

    /// Take the oldest pending event
    pub fn poll(&self) -> Option<ScreenEvent> {
        critical_section::with(|cs| self.events.borrow(cs).borrow_mut().pop_front())
    }

    /// Ask for the panel to be powered before the next paint
    pub fn request_wake(&self) {
        critical_section::with(|cs| self.wake.borrow(cs).set(true));
    }

    /// Read and clear the wake request in one step
    pub fn take_wake(&self) -> bool {
        critical_section::with(|cs| self.wake.borrow(cs).replace(false))
    }

    /// Check the wake request without clearing it
    pub fn wake_requested(&self) -> bool {
        critical_section::with(|cs| self.wake.borrow(cs).get())
    }
}

impl<const SIZE: usize> Default for ScreenSignals<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight handle used by button and bluetooth callbacks
#[derive(Clone, Copy)]
pub struct ScreenHandle<'a, const SIZE: usize> {
    signals: &'a ScreenSignals<SIZE>,
}

impl<const SIZE: usize> ScreenHandle<'_, SIZE> {
    /// Returns `false` if the event was dropped because the queue is full
    pub fn press_button(&self) -> bool {
        self.signals.post(ScreenEvent::ButtonPress).is_ok()
    }

    /// Returns `false` if the event was dropped because the queue is full
    pub fn start_pairing(&self, pin: u32) -> bool {
        self.signals.post(ScreenEvent::PairingStarted(pin)).is_ok()
    }

    /// Returns `false` if the event was dropped because the queue is full
    pub fn end_pairing(&self) -> bool {
        self.signals.post(ScreenEvent::PairingEnded).is_ok()
    }

    pub fn wake(&self) {
        self.signals.request_wake();
    }
}
