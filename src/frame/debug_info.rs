use core::fmt::Write;

use embassy_time::Instant;
use heapless::String;

use super::layout::draw_rows;
use crate::node::NodeRegistry;
use crate::surface::{Font, Surface};

type Field = String<16>;

pub(super) fn draw<S, N>(surface: &mut S, nodes: &N, now: Instant, x: i16, y: i16)
where
    S: Surface + ?Sized,
    N: NodeRegistry + ?Sized,
{
    let mut count = Field::new();
    let _ = write!(count, "Nodes {}", nodes.node_count());
    let uptime = format_uptime(now.as_secs());

    surface.set_font(Font::Plain10);
    let log_y = draw_rows(surface, x, y, &[count.as_str(), uptime.as_str()]);
    surface.draw_log_buffer(x, log_y);
}

fn format_uptime(secs: u64) -> Field {
    let mut field = Field::new();
    let (hours, minutes, seconds) = (secs / 3600, (secs / 60) % 60, secs % 60);
    let _ = if hours > 0 {
        write!(field, "Up {hours}h{minutes:02}m")
    } else {
        write!(field, "Up {minutes}m{seconds:02}s")
    };
    field
}
