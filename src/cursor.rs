//! Rotating pointer into the node registry.

use crate::node::NodeRegistry;

/// Picks the node shown by node info frames
///
/// The cursor walks the registry one node per frame change and never rests
/// on this device's own entry while another node exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeCursor {
    index: usize,
}

impl NodeCursor {
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Current node, `None` when the registry is empty
    pub fn index<N: NodeRegistry + ?Sized>(&self, nodes: &N) -> Option<usize> {
        (nodes.node_count() > 0).then_some(self.index)
    }

    /// Position [`NodeCursor::advance`] would move to
    pub fn peek_next<N: NodeRegistry + ?Sized>(&self, nodes: &N) -> Option<usize> {
        let count = nodes.node_count();
        if count == 0 {
            return None;
        }
        let mut next = (self.index + 1) % count;
        if nodes.is_local(next) {
            next = (next + 1) % count;
        }
        Some(next)
    }

    /// Move to the next remote node
    pub fn advance<N: NodeRegistry + ?Sized>(&mut self, nodes: &N) {
        if let Some(next) = self.peek_next(nodes) {
            self.index = next;
        }
    }

    /// Bring the cursor back into range and off the local node
    ///
    /// Needed after the registry shrank or reordered under the cursor. The
    /// cursor steps back from the local node, so the next
    /// [`NodeCursor::advance`] lands on the node right after it.
    pub fn settle<N: NodeRegistry + ?Sized>(&mut self, nodes: &N) {
        let count = nodes.node_count();
        if count == 0 {
            self.index = 0;
            return;
        }
        self.index %= count;
        if count > 1 && nodes.is_local(self.index) {
            self.index = (self.index + count - 1) % count;
        }
    }

    /// Raw position, meaningful only while the registry is not empty
    pub const fn position(&self) -> usize {
        self.index
    }
}
