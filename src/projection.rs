//! Perspective projection onto the canvas.
//!
//! Vertices are projected onto a plane at distance `d` in front of the
//! camera, then mapped from the abstract viewport rectangle to canvas
//! logical coordinates. The depth value carried alongside the projected
//! point is the reciprocal of the *camera-space* z of the unprojected
//! vertex, not a post-projection depth; larger means nearer.

use crate::canvas::Canvas;
use crate::math::{vec2::Vec2, vec3::Vec3};

/// Camera-space z at or below this is treated as behind the near plane.
///
/// The pipeline rejects triangles touching such vertices before
/// projecting, so the perspective divide never sees z near zero.
pub const NEAR_EPS: f32 = 1e-3;

/// Projection-plane distance and viewport dimensions.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    /// Distance from the camera to the projection plane.
    pub d: f32,
    /// Viewport width on the projection plane.
    pub viewport_width: f32,
    /// Viewport height on the projection plane.
    pub viewport_height: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            d: 1.0,
            viewport_width: 1.0,
            viewport_height: 1.0,
        }
    }
}

impl Projection {
    pub fn new(d: f32, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            d,
            viewport_width,
            viewport_height,
        }
    }

    /// Scales a projection-plane point to canvas logical coordinates.
    pub fn viewport_to_canvas(&self, x: f32, y: f32, canvas: &Canvas) -> Vec2 {
        Vec2::new(
            x * canvas.width() as f32 / self.viewport_width,
            y * canvas.height() as f32 / self.viewport_height,
        )
    }

    /// Projects a camera-space vertex to a canvas point and its 1/z depth.
    ///
    /// The perspective divide assumes `v.z` is positive; callers enforce
    /// the near-plane policy (reject `z <= NEAR_EPS`) beforehand.
    pub fn project_vertex(&self, v: Vec3, canvas: &Canvas) -> (Vec2, f32) {
        let point = self.viewport_to_canvas(v.x * self.d / v.z, v.y * self.d / v.z, canvas);
        (point, 1.0 / v.z)
    }
}
