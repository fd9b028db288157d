//! Instance transform: scale, axis-angle rotation, translation.

use crate::math::{mat4::Mat4, vec3::Vec3};

/// A model-to-world transform.
///
/// The combined matrix applies scale first, then rotation, then
/// translation; reversing that order changes the visual result and is not
/// equivalent. Parameters stay mutable so instances can animate; owners of
/// cached derived state (see `ModelInstance`) recompute after mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    scale: Vec3,
    rotation_axis: Vec3,
    angle_degrees: f32,
    translation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            rotation_axis: Vec3::Y,
            angle_degrees: 0.0,
            translation: Vec3::ZERO,
        }
    }
}

impl Transform {
    pub fn new(scale: Vec3, rotation_axis: Vec3, angle_degrees: f32, translation: Vec3) -> Self {
        Self {
            scale,
            rotation_axis,
            angle_degrees,
            translation,
        }
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn rotation_axis(&self) -> Vec3 {
        self.rotation_axis
    }

    pub fn angle_degrees(&self) -> f32 {
        self.angle_degrees
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn set_rotation(&mut self, axis: Vec3, angle_degrees: f32) -> &mut Self {
        self.rotation_axis = axis;
        self.angle_degrees = angle_degrees;
        self
    }

    pub fn set_translation(&mut self, translation: Vec3) -> &mut Self {
        self.translation = translation;
        self
    }

    /// The combined model-to-world matrix: `translation * rotation * scale`.
    pub fn matrix(&self) -> Mat4 {
        Mat4::translation(self.translation.x, self.translation.y, self.translation.z)
            * Mat4::rotation_axis_angle(self.rotation_axis, self.angle_degrees.to_radians())
            * Mat4::scaling(self.scale.x, self.scale.y, self.scale.z)
    }
}
