//! Heading indicator drawn on the node info frame.

use crate::surface::Surface;
use crate::vector::Vector2D;

/// Diameter of the compass ring in pixels
pub const COMPASS_DIAMETER: i16 = 44;

/// Needle length relative to the ring diameter
const NEEDLE_SCALE: f32 = 0.9;

/// Half width and depth of the arrow head, in template units
const BARB_OFFSET: f32 = 0.1;

/// Needle end points in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassNeedle {
    pub tip: Vector2D,
    pub tail: Vector2D,
    pub left_barb: Vector2D,
    pub right_barb: Vector2D,
}

impl CompassNeedle {
    /// Needle pointing at `heading` radians clockwise from up, centred on `center`
    pub fn new(heading: f32, center: (i16, i16)) -> Self {
        // Template one unit long centred on the origin, screen y grows downwards
        let mut tip = Vector2D::up();
        tip.scale(0.5);
        let tail = Vector2D::new(tip.x, -tip.y);
        let left_barb = Vector2D::new(tip.x - BARB_OFFSET, tip.y + BARB_OFFSET);
        let right_barb = Vector2D::new(tip.x + BARB_OFFSET, tip.y + BARB_OFFSET);

        let scale = f32::from(COMPASS_DIAMETER) * NEEDLE_SCALE;
        let map = |v: Vector2D| v.to_screen(heading, scale, center);
        Self {
            tip: map(tip),
            tail: map(tail),
            left_barb: map(left_barb),
            right_barb: map(right_barb),
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let tip = self.tip.to_pixel();
        for from in [self.tail, self.left_barb, self.right_barb] {
            let from = from.to_pixel();
            surface.draw_line(from.0, from.1, tip.0, tip.1);
        }
    }
}

/// Draw the ring, and the needle when the heading is known
pub(super) fn draw<S: Surface + ?Sized>(surface: &mut S, center: (i16, i16), heading: Option<f32>) {
    if let Some(heading) = heading {
        CompassNeedle::new(heading, center).draw(surface);
    }
    surface.draw_circle(center.0, center.1, COMPASS_DIAMETER.unsigned_abs() / 2);
}
