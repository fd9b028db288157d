//! Line and triangle rasterization.
//!
//! The line module owns the Bresenham stepper; the triangle module builds
//! scanline fills on top of it. Both write through the depth-tested canvas.

mod line;
mod triangle;

pub use line::{draw_line, draw_line_depth, draw_shaded_line};
pub use triangle::{draw_wireframe, fill_shaded_triangle, fill_triangle};
