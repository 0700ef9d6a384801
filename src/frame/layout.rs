//! Text field layout shared by the information frames.

use crate::surface::{FONT_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH, Surface, TextAlign};

/// Draw fields top to bottom, continuing in a second column when the first
/// one is full
pub fn draw_columns<S: Surface + ?Sized>(surface: &mut S, x: i16, y: i16, fields: &[&str]) {
    surface.set_alignment(TextAlign::Left);

    let (mut xo, mut yo) = (x, y);
    for field in fields {
        surface.draw_string(xo, yo, field);
        yo += FONT_HEIGHT;
        if yo > y + SCREEN_HEIGHT - FONT_HEIGHT {
            xo += SCREEN_WIDTH / 2;
            yo = y;
        }
    }
}

/// Draw fields two per row, left to right
///
/// Returns the y coordinate just below the last row drawn.
pub fn draw_rows<S: Surface + ?Sized>(surface: &mut S, x: i16, y: i16, fields: &[&str]) -> i16 {
    surface.set_alignment(TextAlign::Left);

    let (mut xo, mut yo) = (x, y);
    for field in fields {
        surface.draw_string(xo, yo, field);
        xo += SCREEN_WIDTH / 2;
        if xo >= x + SCREEN_WIDTH {
            xo = x;
            yo += FONT_HEIGHT;
        }
    }

    // An unfinished row still takes up a line
    if xo != x {
        yo += FONT_HEIGHT;
    }
    yo
}
