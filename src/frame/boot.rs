use core::fmt::Write;

use heapless::String;

use crate::config::ScreenConfig;
use crate::surface::{FONT_HEIGHT, Font, SCREEN_HEIGHT, SCREEN_WIDTH, Surface, TextAlign};

pub(super) fn draw<S: Surface + ?Sized>(surface: &mut S, config: &ScreenConfig, x: i16, y: i16) {
    if let Some(logo) = config.logo {
        let logo_x = (SCREEN_WIDTH - i16::try_from(logo.width).unwrap_or(SCREEN_WIDTH)) / 2;
        surface.draw_bitmap(x + logo_x, y, logo.width, logo.height, logo.bits);
    }

    let mut title: String<48> = String::new();
    let _ = write!(title, "{} {}", config.app_name, config.app_version);

    surface.set_font(Font::Plain10);
    surface.set_alignment(TextAlign::Center);
    surface.draw_string(x + SCREEN_WIDTH / 2, y + SCREEN_HEIGHT - FONT_HEIGHT, &title);
}
