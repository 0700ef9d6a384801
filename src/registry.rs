//! Ordered, fixed-capacity list of frames for the active mode.

use core::fmt;

use heapless::Vec;

use crate::frame::Frame;

/// Frames in the normal rotation that are not node info frames
pub const EXTRA_FRAMES: usize = 2;

/// Registry capacity needed to show `max_nodes` nodes
///
/// The local node never gets a frame of its own, but the spare slot keeps the
/// arithmetic obvious.
pub const fn registry_capacity(max_nodes: usize) -> usize {
    max_nodes + EXTRA_FRAMES
}

/// Error returned when a frame list cannot be built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The list would not fit; the previous list is kept
    CapacityExceeded { requested: usize, capacity: usize },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                capacity,
            } => write!(
                f,
                "{requested} frames requested but the registry holds {capacity}"
            ),
        }
    }
}

/// Frame registry
///
/// `CAPACITY` is the maximum number of frames; see [`registry_capacity`].
#[derive(Debug, Clone, Default)]
pub struct FrameRegistry<const CAPACITY: usize> {
    frames: Vec<Frame, CAPACITY>,
}

impl<const CAPACITY: usize> FrameRegistry<CAPACITY> {
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Text message, debug info and one node info frame per remote node
    ///
    /// The local node is counted in `node_count` but gets no frame.
    pub fn rebuild_normal(&mut self, node_count: usize) -> Result<(), RegistryError> {
        let remote = node_count.saturating_sub(1);
        self.replace(
            [Frame::TextMessage, Frame::DebugInfo]
                .into_iter()
                .chain(core::iter::repeat_n(Frame::NodeInfo, remote)),
            EXTRA_FRAMES + remote,
        )
    }

    /// Boot splash followed by the first two normal frames
    pub fn rebuild_boot(&mut self) -> Result<(), RegistryError> {
        let frames = [Frame::BootSplash, Frame::TextMessage, Frame::DebugInfo];
        self.replace(frames.into_iter(), frames.len())
    }

    /// Only the pairing code
    pub fn rebuild_bluetooth(&mut self) -> Result<(), RegistryError> {
        self.replace(core::iter::once(Frame::BluetoothPin), 1)
    }

    /// Swap in a new list, or leave the current one untouched if it does not fit
    fn replace(
        &mut self,
        frames: impl Iterator<Item = Frame>,
        requested: usize,
    ) -> Result<(), RegistryError> {
        if requested > CAPACITY {
            return Err(RegistryError::CapacityExceeded {
                requested,
                capacity: CAPACITY,
            });
        }

        let mut next = Vec::new();
        for frame in frames {
            next.push(frame).map_err(|_| RegistryError::CapacityExceeded {
                requested,
                capacity: CAPACITY,
            })?;
        }
        self.frames = next;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        CAPACITY
    }

    pub fn get(&self, index: usize) -> Option<Frame> {
        self.frames.get(index).copied()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Index of the first occurrence of `frame`
    pub fn position(&self, frame: Frame) -> Option<usize> {
        self.frames.iter().position(|&f| f == frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_frame_count() {
        let mut registry = FrameRegistry::<{ registry_capacity(8) }>::new();
        for nodes in 0..=9 {
            registry.rebuild_normal(nodes).unwrap();
            assert_eq!(registry.len(), 2 + nodes.saturating_sub(1));
        }
    }

    #[test]
    fn test_display_message() {
        let err = RegistryError::CapacityExceeded {
            requested: 7,
            capacity: 4,
        };
        let mut text: heapless::String<64> = heapless::String::new();
        core::fmt::write(&mut text, format_args!("{err}")).unwrap();
        assert_eq!(text.as_str(), "7 frames requested but the registry holds 4");
    }
}
