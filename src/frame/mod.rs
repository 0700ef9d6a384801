//! Frame system with compile-time known frame variants
//!
//! Frames are plain tags; drawing dispatches on the tag and reads everything
//! else from a [`FrameContext`]. This keeps the registry a flat array of
//! `Copy` values with no callbacks stored anywhere.

mod bluetooth;
mod boot;
mod compass;
mod debug_info;
mod layout;
mod node_info;
mod text_message;

use embassy_time::Instant;

pub use compass::{COMPASS_DIAMETER, CompassNeedle};
pub use layout::{draw_columns, draw_rows};
pub use text_message::{MAX_BODY_LEN, MAX_SENDER_LEN, TextMessage};

use crate::config::ScreenConfig;
use crate::node::NodeRegistry;
use crate::surface::Surface;

const FRAME_NAME_BOOT_SPLASH: &str = "boot_splash";
const FRAME_NAME_TEXT_MESSAGE: &str = "text_message";
const FRAME_NAME_DEBUG_INFO: &str = "debug_info";
const FRAME_NAME_NODE_INFO: &str = "node_info";
const FRAME_NAME_BLUETOOTH_PIN: &str = "bluetooth_pin";

/// One full-screen view in the rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Logo with application name and version
    BootSplash,
    /// Last received text message
    TextMessage,
    /// Node count, uptime and the scrolling log
    DebugInfo,
    /// One remote node, picked by the node cursor
    NodeInfo,
    /// Pairing code to type on the phone
    BluetoothPin,
}

impl Frame {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BootSplash => FRAME_NAME_BOOT_SPLASH,
            Self::TextMessage => FRAME_NAME_TEXT_MESSAGE,
            Self::DebugInfo => FRAME_NAME_DEBUG_INFO,
            Self::NodeInfo => FRAME_NAME_NODE_INFO,
            Self::BluetoothPin => FRAME_NAME_BLUETOOTH_PIN,
        }
    }

    /// Draw the frame with its top-left corner at `(x, y)`
    ///
    /// Everything must be positioned relative to `x` and `y` so the frame
    /// can be slid across the panel.
    pub fn draw<S, N>(self, surface: &mut S, ctx: &FrameContext<'_, N>, x: i16, y: i16)
    where
        S: Surface + ?Sized,
        N: NodeRegistry + ?Sized,
    {
        match self {
            Self::BootSplash => boot::draw(surface, ctx.config, x, y),
            Self::TextMessage => text_message::draw(surface, ctx.message, x, y),
            Self::DebugInfo => debug_info::draw(surface, ctx.nodes, ctx.now, x, y),
            Self::NodeInfo => node_info::draw(surface, ctx.nodes, ctx.node_index, x, y),
            Self::BluetoothPin => bluetooth::draw(surface, ctx.pin, x, y),
        }
    }
}

/// Everything a frame may read while drawing
pub struct FrameContext<'a, N: NodeRegistry + ?Sized> {
    pub nodes: &'a N,
    /// Node shown by a [`Frame::NodeInfo`]
    pub node_index: Option<usize>,
    pub pin: &'a str,
    pub message: &'a TextMessage,
    pub config: &'a ScreenConfig,
    pub now: Instant,
}

impl<N: NodeRegistry + ?Sized> FrameContext<'_, N> {
    /// Same context showing a different node
    #[must_use]
    pub fn with_node(&self, node_index: Option<usize>) -> Self {
        Self { node_index, ..*self }
    }
}

impl<N: NodeRegistry + ?Sized> Clone for FrameContext<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: NodeRegistry + ?Sized> Copy for FrameContext<'_, N> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_names() {
        assert_eq!(Frame::BootSplash.as_str(), "boot_splash");
        assert_eq!(Frame::NodeInfo.as_str(), "node_info");
        assert_eq!(Frame::BluetoothPin.as_str(), "bluetooth_pin");
    }
}
