//! Planar vector math for the compass needle.
//!
//! Rotation and scaling are defined around the origin, so a template vector
//! must be rotated, then scaled, then translated onto the screen.

/// 2D vector with `f32` components
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing up on the screen
    pub const fn up() -> Self {
        Self::new(0.0, -1.0)
    }

    /// Apply the standard rotation matrix around the origin
    pub fn rotate(&mut self, radians: f32) -> &mut Self {
        let cos = libm::cosf(radians);
        let sin = libm::sinf(radians);
        let rx = self.x * cos - self.y * sin;
        let ry = self.x * sin + self.y * cos;

        self.x = rx;
        self.y = ry;
        self
    }

    /// Multiply both components by `factor`
    pub fn scale(&mut self, factor: f32) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self
    }

    /// Offset by whole pixels
    pub fn translate(&mut self, dx: i16, dy: i16) -> &mut Self {
        self.x += f32::from(dx);
        self.y += f32::from(dy);
        self
    }

    /// Map a template vector onto the screen: rotate, scale, then translate
    #[must_use]
    pub fn to_screen(self, radians: f32, factor: f32, origin: (i16, i16)) -> Self {
        let mut mapped = self;
        mapped
            .rotate(radians)
            .scale(factor)
            .translate(origin.0, origin.1);
        mapped
    }

    /// Round to the nearest pixel
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_pixel(self) -> (i16, i16) {
        (libm::roundf(self.x) as i16, libm::roundf(self.y) as i16)
    }

    /// Euclidean length
    pub fn length(self) -> f32 {
        libm::sqrtf(self.x * self.x + self.y * self.y)
    }
}
