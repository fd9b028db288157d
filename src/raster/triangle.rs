//! Scanline triangle fill.
//!
//! The fill sorts the three vertices by y, interpolates x down the two
//! short edges (concatenated into one boundary, `x012`) and down the long
//! edge (`x02`), then draws one depth-tested horizontal span per row
//! between the two boundaries. Depth (and brightness, for the shaded
//! variant) is interpolated down the same edges in lock-step so each span
//! endpoint carries its own attributes.
//!
//! Which boundary is geometrically left or right is never determined: for
//! a simple convex triangle the two boundaries have the same row count and
//! y-range by construction, so each pair still bounds the correct span.
//!
//! After the fill, the three raw edges are redrawn. The outline pass is an
//! explicit second pass, kept separate from the fill on purpose: it
//! guarantees crisp triangle borders regardless of fill rounding.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::interpolate::interpolate;
use crate::math::vec2::Vec2;
use crate::raster::line::{draw_line_depth, draw_shaded_line};

/// Per-row attribute values down the long edge (`a02`) and down the
/// concatenated short edges (`a012`) of a y-sorted triangle.
///
/// The last sample of the first short edge is dropped before
/// concatenation; the middle vertex's row belongs to the second edge.
/// Both returned vectors have one entry per row of the triangle.
fn edge_attributes(
    (a0, y0): (f32, f32),
    (a1, y1): (f32, f32),
    (a2, y2): (f32, f32),
) -> (Vec<f32>, Vec<f32>) {
    let mut a01 = interpolate(a0, y0, a1, y1);
    a01.pop();
    let a12 = interpolate(a1, y1, a2, y2);
    let a02 = interpolate(a0, y0, a2, y2);

    let mut a012: Vec<f32> = a01.into_iter().map(|(a, _)| a).collect();
    a012.extend(a12.into_iter().map(|(a, _)| a));
    (a02.into_iter().map(|(a, _)| a).collect(), a012)
}

/// Sorts vertex/attribute triples ascending by the vertex y coordinate.
fn sort_by_y<A: Copy>(mut v: [(Vec2, A); 3]) -> [(Vec2, A); 3] {
    if v[1].0.y < v[0].0.y {
        v.swap(0, 1);
    }
    if v[2].0.y < v[0].0.y {
        v.swap(0, 2);
    }
    if v[2].0.y < v[1].0.y {
        v.swap(1, 2);
    }
    v
}

/// Fills a triangle with a flat color, depth testing every pixel, then
/// redraws the three edges for a crisp border.
///
/// `depths` are the 1/z values of the corresponding vertices.
pub fn fill_triangle(canvas: &mut Canvas, pts: [Vec2; 3], depths: [f32; 3], color: Color) {
    let [(v0, z0), (v1, z1), (v2, z2)] = sort_by_y([
        (pts[0], depths[0]),
        (pts[1], depths[1]),
        (pts[2], depths[2]),
    ]);

    let (x02, x012) = edge_attributes((v0.x, v0.y), (v1.x, v1.y), (v2.x, v2.y));
    let (z02, z012) = edge_attributes((z0, v0.y), (z1, v1.y), (z2, v2.y));

    let y_top = v0.y.floor() as i32;
    for (i, (&xa, &xb)) in x02.iter().zip(&x012).enumerate() {
        let y = (y_top + i as i32) as f32;
        draw_line_depth(
            canvas,
            Vec2::new(xa, y),
            Vec2::new(xb, y),
            z02[i],
            z012[i],
            color,
        );
    }

    // Outline pass.
    draw_line_depth(canvas, v0, v1, z0, z1, color);
    draw_line_depth(canvas, v1, v2, z1, z2, color);
    draw_line_depth(canvas, v2, v0, z2, z0, color);
}

/// Fills a triangle with per-vertex brightness, interpolated across the
/// fill in lock-step with depth, then redraws the three shaded edges.
pub fn fill_shaded_triangle(
    canvas: &mut Canvas,
    pts: [Vec2; 3],
    depths: [f32; 3],
    brightness: [f32; 3],
    color: Color,
) {
    let [(v0, (z0, h0)), (v1, (z1, h1)), (v2, (z2, h2))] = sort_by_y([
        (pts[0], (depths[0], brightness[0])),
        (pts[1], (depths[1], brightness[1])),
        (pts[2], (depths[2], brightness[2])),
    ]);

    let (x02, x012) = edge_attributes((v0.x, v0.y), (v1.x, v1.y), (v2.x, v2.y));
    let (z02, z012) = edge_attributes((z0, v0.y), (z1, v1.y), (z2, v2.y));
    let (h02, h012) = edge_attributes((h0, v0.y), (h1, v1.y), (h2, v2.y));

    let y_top = v0.y.floor() as i32;
    for (i, (&xa, &xb)) in x02.iter().zip(&x012).enumerate() {
        let y = (y_top + i as i32) as f32;
        draw_shaded_line(
            canvas,
            Vec2::new(xa, y),
            Vec2::new(xb, y),
            z02[i],
            z012[i],
            h02[i],
            h012[i],
            color,
        );
    }

    draw_shaded_line(canvas, v0, v1, z0, z1, h0, h1, color);
    draw_shaded_line(canvas, v1, v2, z1, z2, h1, h2, color);
    draw_shaded_line(canvas, v2, v0, z2, z0, h2, h0, color);
}

/// Draws only the three edges of a triangle, depth tested.
pub fn draw_wireframe(canvas: &mut Canvas, pts: [Vec2; 3], depths: [f32; 3], color: Color) {
    draw_line_depth(canvas, pts[0], pts[1], depths[0], depths[1], color);
    draw_line_depth(canvas, pts[1], pts[2], depths[1], depths[2], color);
    draw_line_depth(canvas, pts[2], pts[0], depths[2], depths[0], color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    fn tri(ax: f32, ay: f32, bx: f32, by: f32, cx: f32, cy: f32) -> [Vec2; 3] {
        [Vec2::new(ax, ay), Vec2::new(bx, by), Vec2::new(cx, cy)]
    }

    #[test]
    fn fill_covers_interior_and_leaves_exterior() {
        let mut canvas = Canvas::new(64, 64);
        canvas.clear(color::BLACK);
        fill_triangle(
            &mut canvas,
            tri(-10.0, -10.0, 10.0, -10.0, 0.0, 10.0),
            [0.5; 3],
            color::RED,
        );
        assert_eq!(canvas.pixel(0, 0), Some(color::RED));
        assert_eq!(canvas.pixel(0, -9), Some(color::RED));
        assert_eq!(canvas.pixel(-20, 0), Some(color::BLACK));
        assert_eq!(canvas.pixel(0, 12), Some(color::BLACK));
    }

    #[test]
    fn vertex_order_does_not_change_fill() {
        let a = tri(-8.0, -5.0, 9.0, -2.0, 1.0, 7.0);
        let b = tri(1.0, 7.0, -8.0, -5.0, 9.0, -2.0);

        let mut first = Canvas::new(64, 64);
        first.clear(color::BLACK);
        fill_triangle(&mut first, a, [0.5; 3], color::GREEN);

        let mut second = Canvas::new(64, 64);
        second.clear(color::BLACK);
        fill_triangle(&mut second, b, [0.5; 3], color::GREEN);

        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn nearer_triangle_wins_overlap_pixels() {
        // Two triangles with overlapping footprints at different depths.
        let mut canvas = Canvas::new(64, 64);
        canvas.clear(color::BLACK);
        let far = tri(-12.0, -8.0, 12.0, -8.0, 0.0, 12.0);
        let near = tri(-6.0, -4.0, 6.0, -4.0, 0.0, 6.0);
        fill_triangle(&mut canvas, far, [0.1; 3], color::RED);
        fill_triangle(&mut canvas, near, [0.2; 3], color::BLUE);

        // Overlap region shows only the nearer triangle.
        assert_eq!(canvas.pixel(0, 0), Some(color::BLUE));
        // Outside the overlap the farther triangle is untouched.
        assert_eq!(canvas.pixel(-10, -7), Some(color::RED));
    }

    #[test]
    fn draw_order_is_irrelevant_at_distinct_depths() {
        let far = tri(-12.0, -8.0, 12.0, -8.0, 0.0, 12.0);
        let near = tri(-6.0, -4.0, 6.0, -4.0, 0.0, 6.0);

        let mut near_last = Canvas::new(64, 64);
        near_last.clear(color::BLACK);
        fill_triangle(&mut near_last, far, [0.1; 3], color::RED);
        fill_triangle(&mut near_last, near, [0.2; 3], color::BLUE);

        let mut near_first = Canvas::new(64, 64);
        near_first.clear(color::BLACK);
        fill_triangle(&mut near_first, near, [0.2; 3], color::BLUE);
        fill_triangle(&mut near_first, far, [0.1; 3], color::RED);

        assert_eq!(near_last.as_bytes(), near_first.as_bytes());
    }

    #[test]
    fn equal_depth_keeps_first_drawn_triangle() {
        let pts = tri(-8.0, -8.0, 8.0, -8.0, 0.0, 8.0);
        let mut canvas = Canvas::new(64, 64);
        canvas.clear(color::BLACK);
        fill_triangle(&mut canvas, pts, [0.5; 3], color::RED);
        fill_triangle(&mut canvas, pts, [0.5; 3], color::BLUE);
        assert_eq!(canvas.pixel(0, 0), Some(color::RED));
    }

    #[test]
    fn shaded_fill_darkens_toward_dark_vertices() {
        let mut canvas = Canvas::new(64, 64);
        canvas.clear(color::BLUE);
        fill_shaded_triangle(
            &mut canvas,
            tri(-10.0, -10.0, 10.0, -10.0, 0.0, 10.0),
            [0.5; 3],
            [0.0, 0.0, 1.0],
            color::WHITE,
        );
        // Apex is fully lit, the base fully dark.
        let apex = canvas.pixel(0, 9).unwrap();
        let base = canvas.pixel(0, -10).unwrap();
        assert!(apex.r > 200);
        assert_eq!(base, color::BLACK);
    }

    #[test]
    fn degenerate_flat_triangle_stays_within_row() {
        let mut canvas = Canvas::new(64, 64);
        canvas.clear(color::BLACK);
        // All three vertices on one row: fill collapses to that row.
        fill_triangle(
            &mut canvas,
            tri(-5.0, 2.0, 0.0, 2.0, 5.0, 2.0),
            [0.5; 3],
            color::RED,
        );
        for y in -10..=10 {
            for x in -10..=10 {
                if canvas.pixel(x, y) == Some(color::RED) {
                    assert_eq!(y, 2);
                }
            }
        }
    }

    #[test]
    fn wireframe_draws_edges_only() {
        let mut canvas = Canvas::new(64, 64);
        canvas.clear(color::BLACK);
        draw_wireframe(
            &mut canvas,
            tri(-10.0, -10.0, 10.0, -10.0, 0.0, 10.0),
            [0.5; 3],
            color::GREEN,
        );
        // Interior stays background.
        assert_eq!(canvas.pixel(0, -2), Some(color::BLACK));
        // Bottom edge is drawn.
        assert_eq!(canvas.pixel(0, -10), Some(color::GREEN));
    }
}
