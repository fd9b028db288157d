//! Per-frame orchestration.
//!
//! One frame is: clear both buffers, then for every scene instance
//! transform its cached world vertices into camera space, project them,
//! and submit every triangle of the instance's model to the scanline
//! rasterizer. Every triangle is submitted unconditionally; visibility is
//! resolved entirely by the depth test. No blending, no back-face
//! elimination.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::math::vec2::Vec2;
use crate::projection::{Projection, NEAR_EPS};
use crate::raster::fill_triangle;
use crate::scene::Scene;

pub struct Renderer {
    canvas: Canvas,
    projection: Projection,
}

impl Renderer {
    pub fn new(width: u32, height: u32, projection: Projection) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            projection,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Renders one full frame of `scene` into the canvas.
    ///
    /// Vertices at or behind the near plane (`z <= NEAR_EPS` in camera
    /// space) are not projected; triangles touching one are skipped for
    /// the frame. That is the near-plane policy: reject rather than
    /// divide by a vanishing z.
    pub fn render(&mut self, scene: &mut Scene, background: Color) {
        self.canvas.clear(background);
        let camera_matrix = scene.camera().matrix();

        for instance in scene.instances_mut() {
            instance.refresh();

            let projected: Vec<Option<(Vec2, f32)>> = instance
                .world_vertices()
                .iter()
                .map(|&v| {
                    let cam = camera_matrix * v;
                    if cam.z <= NEAR_EPS {
                        None
                    } else {
                        Some(self.projection.project_vertex(cam, &self.canvas))
                    }
                })
                .collect();

            for triangle in instance.model().triangles() {
                let [a, b, c] = triangle.indices;
                if let (Some((pa, za)), Some((pb, zb)), Some((pc, zc))) =
                    (projected[a], projected[b], projected[c])
                {
                    fill_triangle(
                        &mut self.canvas,
                        [pa, pb, pc],
                        [za, zb, zc],
                        triangle.color,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::math::vec3::Vec3;
    use crate::model::Model;
    use crate::scene::{Camera, ModelInstance};
    use crate::transform::Transform;
    use std::rc::Rc;

    fn cube_at(z: f32) -> ModelInstance {
        ModelInstance::new(
            Rc::new(Model::cube()),
            Transform::new(Vec3::ONE, Vec3::Y, 0.0, Vec3::new(0.0, 0.0, z)),
        )
    }

    #[test]
    fn single_cube_shows_nearest_face_at_center() {
        // Cube centered at camera-space (0,0,5); its nearest face (local
        // z = -1) is green in the cube model.
        let mut scene = Scene::new(Camera::default());
        scene.add_instance(cube_at(5.0));

        let mut renderer = Renderer::new(500, 500, Projection::default());
        renderer.render(&mut scene, color::BLACK);
        assert_eq!(renderer.canvas().pixel(0, 0), Some(color::GREEN));
    }

    #[test]
    fn cube_silhouette_is_bounded_and_nonempty() {
        let mut scene = Scene::new(Camera::default());
        scene.add_instance(cube_at(5.0));

        let mut renderer = Renderer::new(500, 500, Projection::default());
        renderer.render(&mut scene, color::BLACK);
        let canvas = renderer.canvas();

        // Corners of the frame stay background; the middle is covered.
        assert_eq!(canvas.pixel(-240, 240), Some(color::BLACK));
        assert_eq!(canvas.pixel(240, -240), Some(color::BLACK));
        let mut lit = 0;
        for y in -120..120 {
            for x in -120..120 {
                if canvas.pixel(x, y) != Some(color::BLACK) {
                    lit += 1;
                }
            }
        }
        assert!(lit > 1000, "cube silhouette too small: {lit} pixels");
    }

    #[test]
    fn nearer_cube_occludes_farther_in_overlap() {
        let mut scene = Scene::new(Camera::default());
        scene.add_instance(cube_at(12.0));
        scene.add_instance(cube_at(5.0));

        let mut renderer = Renderer::new(500, 500, Projection::default());
        renderer.render(&mut scene, color::BLACK);
        // The overlap region shows only the nearer cube's near face.
        assert_eq!(renderer.canvas().pixel(0, 0), Some(color::GREEN));
    }

    #[test]
    fn occlusion_is_independent_of_draw_order() {
        let mut near_first = Scene::new(Camera::default());
        near_first.add_instance(cube_at(5.0));
        near_first.add_instance(cube_at(12.0));

        let mut near_last = Scene::new(Camera::default());
        near_last.add_instance(cube_at(12.0));
        near_last.add_instance(cube_at(5.0));

        let mut a = Renderer::new(200, 200, Projection::default());
        a.render(&mut near_first, color::BLACK);
        let mut b = Renderer::new(200, 200, Projection::default());
        b.render(&mut near_last, color::BLACK);

        // Every overlap pixel resolves to the nearer cube either way.
        assert_eq!(a.canvas().pixel(0, 0), b.canvas().pixel(0, 0));
        assert_eq!(a.canvas().pixel(0, 0), Some(color::GREEN));
    }

    #[test]
    fn geometry_behind_camera_is_skipped() {
        let mut scene = Scene::new(Camera::default());
        scene.add_instance(cube_at(-5.0));

        let mut renderer = Renderer::new(100, 100, Projection::default());
        renderer.render(&mut scene, color::BLUE);
        // Nothing rendered, no panic; the frame stays background.
        for chunk in renderer.canvas().as_bytes().chunks_exact(4) {
            assert_eq!(chunk, &[0, 0, 255, 255]);
        }
    }

    #[test]
    fn every_byte_is_written_each_frame() {
        let mut scene = Scene::new(Camera::default());
        scene.add_instance(cube_at(5.0));

        let mut renderer = Renderer::new(64, 64, Projection::default());
        renderer.render(&mut scene, color::MAGENTA);
        for chunk in renderer.canvas().as_bytes().chunks_exact(4) {
            assert_eq!(chunk[3], 255);
        }
    }

    #[test]
    fn animated_instance_moves_between_frames() {
        let mut scene = Scene::new(Camera::default());
        scene.add_instance(cube_at(5.0));

        let mut renderer = Renderer::new(200, 200, Projection::default());
        renderer.render(&mut scene, color::BLACK);
        let before = renderer.canvas().pixel(80, 0);

        scene.instances_mut()[0]
            .transform_mut()
            .set_translation(Vec3::new(3.0, 0.0, 5.0));
        renderer.render(&mut scene, color::BLACK);
        let after = renderer.canvas().pixel(80, 0);
        assert_ne!(before, after);
    }
}
