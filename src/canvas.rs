//! Center-origin pixel buffer with a 1/z depth buffer.
//!
//! The canvas stores an RGBA8 raster row-major with a top-left origin (the
//! layout presentation expects) but is addressed through logical
//! coordinates whose origin is the middle pixel, with +x right and +y up.
//! The conversion is
//!
//! ```text
//! raster_x = WIDTH / 2 + x
//! raster_y = (HEIGHT + 1) / 2 - (y + 1)
//! ```
//!
//! so logical x spans `[-WIDTH/2, (WIDTH-1)/2]` and logical y spans
//! `[-HEIGHT/2, (HEIGHT-1)/2]`. Writes outside those bounds are silently
//! dropped; that is the uniform clipping policy for every rasterization
//! path, not an error.
//!
//! # Depth buffer
//!
//! Each pixel stores the reciprocal of camera-space depth (1/z) of the
//! nearest fragment written so far. Larger means nearer, so the test is a
//! plain greater-than. Cleared to 0.0, which reads as "infinitely far".

use std::path::Path;

use crate::color::Color;

pub struct Canvas {
    pixels: Vec<u8>,
    depth: Vec<f32>,
    width: u32,
    height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            pixels: vec![0; size * 4],
            depth: vec![0.0; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maps a logical coordinate to a raster index, or `None` if it lies
    /// outside the logical bounds.
    #[inline]
    fn raster_index(&self, x: i32, y: i32) -> Option<usize> {
        let w = self.width as i32;
        let h = self.height as i32;
        if x < -(w / 2) || x > (w - 1) / 2 || y < -(h / 2) || y > (h - 1) / 2 {
            return None;
        }
        let raster_x = w / 2 + x;
        let raster_y = (h + 1) / 2 - (y + 1);
        Some((raster_y * w + raster_x) as usize)
    }

    /// Writes a pixel without depth testing (wireframe overlays).
    /// Out-of-bounds coordinates are silently dropped.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.raster_index(x, y) {
            self.write_color(idx, color);
        }
    }

    /// Writes a pixel if its 1/z value beats the stored depth.
    ///
    /// The test is strictly greater-than: at equal depth the stored
    /// fragment wins, so among coincident fragments the first one drawn
    /// keeps the pixel. That tie-break is deliberate, not accidental.
    #[inline]
    pub fn put_pixel_depth(&mut self, x: i32, y: i32, inv_z: f32, color: Color) {
        if let Some(idx) = self.raster_index(x, y) {
            if inv_z > self.depth[idx] {
                self.depth[idx] = inv_z;
                self.write_color(idx, color);
            }
        }
    }

    #[inline]
    fn write_color(&mut self, idx: usize, color: Color) {
        let byte = idx * 4;
        self.pixels[byte] = color.r;
        self.pixels[byte + 1] = color.g;
        self.pixels[byte + 2] = color.b;
        self.pixels[byte + 3] = 255;
    }

    /// Reads back the color at a logical coordinate, or `None` out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.raster_index(x, y).map(|idx| {
            let byte = idx * 4;
            Color::new(
                self.pixels[byte],
                self.pixels[byte + 1],
                self.pixels[byte + 2],
            )
        })
    }

    /// Fills the color buffer with `color` and resets the depth buffer,
    /// preparing the canvas for a new frame.
    pub fn clear(&mut self, color: Color) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk[0] = color.r;
            chunk[1] = color.g;
            chunk[2] = color.b;
            chunk[3] = 255;
        }
        self.clear_depth();
    }

    /// Resets every depth entry to 0.0 (infinitely far).
    #[inline]
    pub fn clear_depth(&mut self) {
        self.depth.fill(0.0);
    }

    /// The finished frame as RGBA8 bytes, row-major, top-left origin.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Saves the current frame as a PNG, for headless inspection.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        image::save_buffer(
            path,
            &self.pixels,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )
    }
}
