//! 8-bit fixed point helpers for animation progress.

use embassy_time::Duration;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Progress (0-255) of `elapsed` through `duration`
///
/// A zero duration counts as already complete.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn progress8(elapsed: Duration, duration: Duration) -> u8 {
    let total = duration.as_millis();
    let done = elapsed.as_millis();
    if total == 0 || done >= total {
        return 255;
    }

    ((done * 255) / total) as u8
}

/// Quadratic ease-in-out on the 0-255 range
pub const fn ease_in_out_quad(i: u8) -> u8 {
    let upper = i & 0x80 != 0;
    let j = if upper { 255 - i } else { i };
    let doubled = scale8(j, j) << 1;
    if upper { 255 - doubled } else { doubled }
}

/// Portion of `distance` covered at `progress` (0-255)
#[allow(clippy::cast_possible_truncation)]
pub const fn portion_of(distance: i16, progress: u8) -> i16 {
    ((distance as i32 * progress as i32) / 255) as i16
}
