use crate::surface::{FONT_HEIGHT, Font, SCREEN_HEIGHT, SCREEN_WIDTH, Surface, TextAlign};

pub(super) fn draw<S: Surface + ?Sized>(surface: &mut S, pin: &str, x: i16, y: i16) {
    let center = x + SCREEN_WIDTH / 2;
    surface.set_alignment(TextAlign::Center);

    surface.set_font(Font::Plain16);
    surface.draw_string(center, y + 2, "Bluetooth");

    surface.set_font(Font::Plain10);
    surface.draw_string(center, y + SCREEN_HEIGHT - FONT_HEIGHT, "Enter this code");

    surface.set_font(Font::Plain24);
    surface.draw_string(center, y + 22, pin);
}
