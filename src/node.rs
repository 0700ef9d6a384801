//! Node registry interface.
//!
//! The mesh stack owns the node database; the screen only reads it.

/// Mesh node number
pub type NodeId = u32;

/// What the screen needs to know about one node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeEntry<'a> {
    pub id: NodeId,
    /// User supplied long name, if the node has announced one
    pub long_name: Option<&'a str>,
    /// Bearing towards the node in radians, clockwise from north
    pub heading: Option<f32>,
}

impl<'a> NodeEntry<'a> {
    pub const fn new(id: NodeId) -> Self {
        Self {
            id,
            long_name: None,
            heading: None,
        }
    }

    #[must_use]
    pub const fn with_name(mut self, name: &'a str) -> Self {
        self.long_name = Some(name);
        self
    }

    #[must_use]
    pub const fn with_heading(mut self, radians: f32) -> Self {
        self.heading = Some(radians);
        self
    }
}

/// Read access to the node database
pub trait NodeRegistry {
    /// Number of known nodes, including the local one
    fn node_count(&self) -> usize;

    /// Node at `index`, `None` when out of range
    fn node_at(&self, index: usize) -> Option<NodeEntry<'_>>;

    /// Node number of this device
    fn local_node_id(&self) -> NodeId;

    /// Check if the node at `index` is this device
    fn is_local(&self, index: usize) -> bool {
        self.node_at(index)
            .is_some_and(|node| node.id == self.local_node_id())
    }
}
