//! Last received text message.

use heapless::String;

use crate::surface::{Font, SCREEN_WIDTH, Surface, TextAlign};

/// Maximum bytes kept from the sender name
pub const MAX_SENDER_LEN: usize = 16;

/// Maximum bytes kept from the message body
pub const MAX_BODY_LEN: usize = 200;

const NO_MESSAGE: &str = "No messages";
const BODY_OFFSET_Y: i16 = 18;

/// Sender and body of the message shown on the text message frame
#[derive(Debug, Clone, Default)]
pub struct TextMessage {
    sender: String<MAX_SENDER_LEN>,
    body: String<MAX_BODY_LEN>,
}

impl TextMessage {
    pub const fn new() -> Self {
        Self {
            sender: String::new(),
            body: String::new(),
        }
    }

    /// Replace the message, cutting both parts down to their capacity
    pub fn set(&mut self, sender: &str, body: &str) {
        copy_truncated(&mut self.sender, sender);
        copy_truncated(&mut self.body, body);
    }

    pub fn sender(&self) -> &str {
        self.sender.as_str()
    }

    pub fn body(&self) -> &str {
        self.body.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.sender.is_empty() && self.body.is_empty()
    }
}

/// Copy as many whole characters of `text` as fit
fn copy_truncated<const N: usize>(target: &mut String<N>, text: &str) {
    target.clear();
    for ch in text.chars() {
        if target.push(ch).is_err() {
            break;
        }
    }
}

pub(super) fn draw<S: Surface + ?Sized>(surface: &mut S, message: &TextMessage, x: i16, y: i16) {
    surface.set_alignment(TextAlign::Left);

    if message.is_empty() {
        surface.set_font(Font::Plain16);
        surface.draw_string(x, y, NO_MESSAGE);
        return;
    }

    surface.set_font(Font::Plain16);
    let mut sender: String<{ MAX_SENDER_LEN + 1 }> = String::new();
    let _ = sender.push_str(message.sender());
    let _ = sender.push(':');
    surface.draw_string(x, y, &sender);

    surface.set_font(Font::Plain10);
    surface.draw_wrapped_text(
        x,
        y + BODY_OFFSET_Y,
        SCREEN_WIDTH.unsigned_abs(),
        message.body(),
    );
}
