//! Segment rasterization.
//!
//! All three entry points walk the same Bresenham stepper, so the plain,
//! depth-tested, and shaded variants light up the same pixels for the same
//! endpoints; they differ only in the attributes carried to each pixel.
//!
//! A segment is "steep" when its vertical extent exceeds its horizontal
//! extent; the stepper then transposes x/y so the loop always advances
//! along the dominant axis, and un-transposes when emitting pixels.

use crate::canvas::Canvas;
use crate::color::{shade, Color};
use crate::interpolate::interpolate;
use crate::math::vec2::Vec2;

/// Integer Bresenham stepper over the dominant axis of a segment.
///
/// Yields logical canvas coordinates, already un-transposed for steep
/// segments. The error term accumulates `dy + 1` per step and wraps at
/// `dx + 1`, where dx/dy are the (possibly transposed) axis extents.
struct Stepper {
    x: i32,
    x_end: i32,
    y: i32,
    dir_y: i32,
    error: i32,
    delta_error: i32,
    threshold: i32,
    steep: bool,
}

impl Stepper {
    /// Builds the stepper. The second return value reports whether the
    /// endpoints were swapped to make the dominant axis run low-to-high;
    /// callers must swap paired attributes (depth, brightness) to match.
    fn new(p0: Vec2, p1: Vec2) -> (Self, bool) {
        let (mut x0, mut y0) = (p0.x as i32, p0.y as i32);
        let (mut x1, mut y1) = (p1.x as i32, p1.y as i32);

        let mut dx = (x1 - x0).abs();
        let mut dy = (y1 - y0).abs();
        let mut steep = false;
        if dy > dx {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
            std::mem::swap(&mut dx, &mut dy);
            steep = true;
        }

        let mut swapped = false;
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
            swapped = true;
        }

        (
            Self {
                x: x0,
                x_end: x1,
                y: y0,
                dir_y: (y1 - y0).signum(),
                error: 0,
                delta_error: dy + 1,
                threshold: dx + 1,
                steep,
            },
            swapped,
        )
    }

    /// Dominant-axis range, inclusive. Valid before iteration starts.
    fn span(&self) -> (i32, i32) {
        (self.x, self.x_end)
    }
}

impl Iterator for Stepper {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x > self.x_end {
            return None;
        }
        let pixel = if self.steep {
            (self.y, self.x)
        } else {
            (self.x, self.y)
        };

        self.error += self.delta_error;
        if self.error >= self.threshold {
            self.y += self.dir_y;
            self.error -= self.threshold;
        }
        self.x += 1;
        Some(pixel)
    }
}

/// Draws a segment without depth testing, for overlay drawing.
pub fn draw_line(canvas: &mut Canvas, p0: Vec2, p1: Vec2, color: Color) {
    let (stepper, _) = Stepper::new(p0, p1);
    for (x, y) in stepper {
        canvas.put_pixel(x, y, color);
    }
}

/// Draws a segment carrying a per-pixel 1/z value, depth testing each pixel.
///
/// `z0`/`z1` are the 1/z values at `p0`/`p1`; they are interpolated along
/// the dominant axis in lock-step with the Bresenham walk.
pub fn draw_line_depth(canvas: &mut Canvas, p0: Vec2, p1: Vec2, z0: f32, z1: f32, color: Color) {
    let (stepper, swapped) = Stepper::new(p0, p1);
    let (mut z0, mut z1) = (z0, z1);
    if swapped {
        std::mem::swap(&mut z0, &mut z1);
    }

    let (start, end) = stepper.span();
    let zs = interpolate(z0, start as f32, z1, end as f32);
    for ((x, y), (inv_z, _)) in stepper.zip(zs) {
        canvas.put_pixel_depth(x, y, inv_z, color);
    }
}

/// Depth-tested segment with a brightness scalar interpolated alongside
/// depth; each pixel writes `shade(color, brightness)`.
#[allow(clippy::too_many_arguments)]
pub fn draw_shaded_line(
    canvas: &mut Canvas,
    p0: Vec2,
    p1: Vec2,
    z0: f32,
    z1: f32,
    h0: f32,
    h1: f32,
    color: Color,
) {
    let (stepper, swapped) = Stepper::new(p0, p1);
    let (mut z0, mut z1) = (z0, z1);
    let (mut h0, mut h1) = (h0, h1);
    if swapped {
        std::mem::swap(&mut z0, &mut z1);
        std::mem::swap(&mut h0, &mut h1);
    }

    let (start, end) = stepper.span();
    let zs = interpolate(z0, start as f32, z1, end as f32);
    let hs = interpolate(h0, start as f32, h1, end as f32);
    for (((x, y), (inv_z, _)), (h, _)) in stepper.zip(zs).zip(hs) {
        canvas.put_pixel_depth(x, y, inv_z, shade(color, h));
    }
}
