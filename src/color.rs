//! RGBA8 colors and brightness scaling.

/// An opaque RGB color; the canvas always writes alpha as 255.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Color = Color::new(0, 0, 0);
pub const WHITE: Color = Color::new(255, 255, 255);
pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);
pub const YELLOW: Color = Color::new(255, 255, 0);
pub const CYAN: Color = Color::new(0, 255, 255);
pub const MAGENTA: Color = Color::new(255, 0, 255);

/// Scales a color channel-wise by a brightness factor, clamping to [0, 255].
///
/// Kept as a pure function, independent of the rasterizers, so shading can
/// be tested in isolation.
#[inline]
pub fn shade(color: Color, brightness: f32) -> Color {
    let scale = |channel: u8| (channel as f32 * brightness).clamp(0.0, 255.0) as u8;
    Color::new(scale(color.r), scale(color.g), scale(color.b))
}
