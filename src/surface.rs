//! Drawing collaborator interface.
//!
//! The engine never touches pixels. Everything it shows goes through these
//! coordinate-parameterized calls, so any monochrome panel driver with a font
//! renderer can back it.

/// Width of the panel in pixels
pub const SCREEN_WIDTH: i16 = 128;

/// Height of the panel in pixels
pub const SCREEN_HEIGHT: i16 = 64;

/// Line height used for text layout
///
/// The small font is 13 px tall; one extra pixel keeps rows apart.
pub const FONT_HEIGHT: i16 = 14;

/// Fonts the surface is expected to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Small proportional font, 10 pt
    Plain10,
    /// Medium proportional font, 16 pt
    Plain16,
    /// Large proportional font, 24 pt
    Plain24,
}

/// Horizontal anchor of a string relative to its x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Abstract drawing surface
///
/// Implement this trait on top of the display driver and font renderer.
pub trait Surface {
    /// Clear the back buffer
    fn clear(&mut self);

    /// Push the back buffer to the panel
    fn flush(&mut self);

    /// Power the panel up
    fn display_on(&mut self);

    /// Power the panel down
    fn display_off(&mut self);

    fn set_font(&mut self, font: Font);

    fn set_alignment(&mut self, align: TextAlign);

    /// Draw a single line of text anchored at `(x, y)`
    fn draw_string(&mut self, x: i16, y: i16, text: &str);

    /// Draw text wrapped at `max_width` pixels
    fn draw_wrapped_text(&mut self, x: i16, y: i16, max_width: u16, text: &str);

    fn draw_line(&mut self, x0: i16, y0: i16, x1: i16, y1: i16);

    fn draw_circle(&mut self, x: i16, y: i16, radius: u16);

    /// Draw a 1-bit XBM bitmap
    fn draw_bitmap(&mut self, x: i16, y: i16, width: u16, height: u16, bits: &[u8]);

    /// Draw the scrolling log buffer with its top-left corner at `(x, y)`
    fn draw_log_buffer(&mut self, x: i16, y: i16);

    /// Append text to the scrolling log buffer
    fn print(&mut self, text: &str);
}
