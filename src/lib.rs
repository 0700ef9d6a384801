#![no_std]

pub mod carousel;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod frame;
pub mod math8;
pub mod node;
pub mod registry;
pub mod screen;
pub mod signal;
pub mod surface;
pub mod transition;
pub mod vector;

pub use config::{
    BootLogo, IDLE_TICK_INTERVAL, NO_DISPLAY_TICK_INTERVAL, ScreenConfig,
    TRANSITION_TICK_INTERVAL, TransitionTimings,
};
pub use cursor::NodeCursor;
pub use engine::{Mode, PresentationEngine};
pub use frame::{Frame, FrameContext, TextMessage};
pub use node::{NodeEntry, NodeId, NodeRegistry};
pub use registry::{EXTRA_FRAMES, FrameRegistry, RegistryError, registry_capacity};
pub use screen::{PresentationState, Screen};
pub use signal::{ScreenEvent, ScreenHandle, ScreenSignals};
pub use surface::{Font, Surface, TextAlign};
pub use transition::{FrameState, SlideTransition};
pub use vector::Vector2D;
pub use embassy_time::{Duration, Instant};

/// Route `log` output to the ESP32 serial console
#[cfg(feature = "esp32-log")]
pub fn init_logger(level: log::LevelFilter) {
    esp_println::logger::init_logger(level);
}
