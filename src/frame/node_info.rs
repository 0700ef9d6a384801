use core::fmt::Write;

use heapless::String;

use super::compass::{self, COMPASS_DIAMETER};
use super::layout::draw_columns;
use crate::node::NodeRegistry;
use crate::surface::{Font, SCREEN_HEIGHT, SCREEN_WIDTH, Surface};

const UNKNOWN_NAME: &str = "Unknown Name";

pub(super) fn draw<S, N>(surface: &mut S, nodes: &N, node_index: Option<usize>, x: i16, y: i16)
where
    S: Surface + ?Sized,
    N: NodeRegistry + ?Sized,
{
    let Some(node) = node_index.and_then(|index| nodes.node_at(index)) else {
        return;
    };

    let mut id: String<12> = String::new();
    let _ = write!(id, "!{:08x}", node.id);
    let name = node.long_name.unwrap_or(UNKNOWN_NAME);

    surface.set_font(Font::Plain10);
    draw_columns(surface, x, y, &[name, id.as_str()]);

    let center = (
        x + SCREEN_WIDTH - COMPASS_DIAMETER / 2 - 1,
        y + SCREEN_HEIGHT / 2,
    );
    compass::draw(surface, center, node.heading);
}
