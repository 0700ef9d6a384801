#![allow(dead_code)]

use embassy_time::Duration;
use mesh_screen_composer::{
    Font, NodeEntry, NodeId, NodeRegistry, ScreenConfig, Surface, TextAlign, TransitionTimings,
};

pub(crate) const DWELL_MS: u64 = 1_000;
pub(crate) const SLIDE_MS: u64 = 100;

pub(crate) fn config() -> ScreenConfig {
    ScreenConfig {
        timings: TransitionTimings {
            frame_dwell: Duration::from_millis(DWELL_MS),
            slide: Duration::from_millis(SLIDE_MS),
        },
        app_name: "Meshtastic",
        app_version: "0.0.5",
        logo: None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawCall {
    Clear,
    Flush,
    DisplayOn,
    DisplayOff,
    Font(Font),
    Align(TextAlign),
    Text { x: i16, y: i16, text: String },
    Wrapped { x: i16, y: i16, max_width: u16, text: String },
    Line(i16, i16, i16, i16),
    Circle(i16, i16, u16),
    Bitmap { x: i16, y: i16, width: u16, height: u16 },
    LogBuffer(i16, i16),
    Print(String),
}

/// Surface that remembers every call
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub(crate) fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn count(&self, wanted: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|call| wanted(call)).count()
    }

    pub(crate) fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn flush(&mut self) {
        self.calls.push(DrawCall::Flush);
    }

    fn display_on(&mut self) {
        self.calls.push(DrawCall::DisplayOn);
    }

    fn display_off(&mut self) {
        self.calls.push(DrawCall::DisplayOff);
    }

    fn set_font(&mut self, font: Font) {
        self.calls.push(DrawCall::Font(font));
    }

    fn set_alignment(&mut self, align: TextAlign) {
        self.calls.push(DrawCall::Align(align));
    }

    fn draw_string(&mut self, x: i16, y: i16, text: &str) {
        self.calls.push(DrawCall::Text {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn draw_wrapped_text(&mut self, x: i16, y: i16, max_width: u16, text: &str) {
        self.calls.push(DrawCall::Wrapped {
            x,
            y,
            max_width,
            text: text.to_string(),
        });
    }

    fn draw_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16) {
        self.calls.push(DrawCall::Line(x0, y0, x1, y1));
    }

    fn draw_circle(&mut self, x: i16, y: i16, radius: u16) {
        self.calls.push(DrawCall::Circle(x, y, radius));
    }

    fn draw_bitmap(&mut self, x: i16, y: i16, width: u16, height: u16, _bits: &[u8]) {
        self.calls.push(DrawCall::Bitmap {
            x,
            y,
            width,
            height,
        });
    }

    fn draw_log_buffer(&mut self, x: i16, y: i16) {
        self.calls.push(DrawCall::LogBuffer(x, y));
    }

    fn print(&mut self, text: &str) {
        self.calls.push(DrawCall::Print(text.to_string()));
    }
}

/// Node database backed by a plain list
#[derive(Debug, Clone)]
pub(crate) struct MockNodes {
    pub(crate) nodes: Vec<(NodeId, String, Option<f32>)>,
    pub(crate) local: NodeId,
}

impl MockNodes {
    /// `count` nodes named "Node 0", "Node 1", ..., the one at `local_index` being us
    pub(crate) fn with_count(count: usize, local_index: usize) -> Self {
        let nodes = (0..count)
            .map(|i| (100 + i as NodeId, format!("Node {i}"), Some(0.5)))
            .collect();
        Self {
            nodes,
            local: 100 + local_index as NodeId,
        }
    }
}

impl NodeRegistry for MockNodes {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_at(&self, index: usize) -> Option<NodeEntry<'_>> {
        self.nodes.get(index).map(|(id, name, heading)| NodeEntry {
            id: *id,
            long_name: Some(name.as_str()),
            heading: *heading,
        })
    }

    fn local_node_id(&self) -> NodeId {
        self.local
    }
}
