//! Scene containers: placed model instances and the camera.

use std::rc::Rc;

use crate::math::{mat4::Mat4, vec3::Vec3};
use crate::model::Model;
use crate::transform::Transform;

/// One placed, transformed occurrence of a model within a scene.
///
/// World-space vertex positions are cached at construction so the frame
/// renderer never re-derives them for a static instance. Mutating the
/// transform marks the cache dirty; [`ModelInstance::refresh`] recomputes
/// it and is called by the renderer before projection each frame (a no-op
/// while clean).
pub struct ModelInstance {
    model: Rc<Model>,
    transform: Transform,
    world_vertices: Vec<Vec3>,
    dirty: bool,
}

impl ModelInstance {
    pub fn new(model: Rc<Model>, transform: Transform) -> Self {
        let world_vertices = Self::compute_world_vertices(&model, &transform);
        Self {
            model,
            transform,
            world_vertices,
            dirty: false,
        }
    }

    fn compute_world_vertices(model: &Model, transform: &Transform) -> Vec<Vec3> {
        let matrix = transform.matrix();
        model.vertices().iter().map(|&v| matrix * v).collect()
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable access to the transform; marks the cached world vertices
    /// stale until the next [`refresh`](Self::refresh).
    pub fn transform_mut(&mut self) -> &mut Transform {
        self.dirty = true;
        &mut self.transform
    }

    /// Recomputes the cached world-space vertices if the transform changed.
    pub fn refresh(&mut self) {
        if self.dirty {
            self.world_vertices = Self::compute_world_vertices(&self.model, &self.transform);
            self.dirty = false;
        }
    }

    /// Cached world-space vertex positions, one per model vertex.
    pub fn world_vertices(&self) -> &[Vec3] {
        &self.world_vertices
    }
}

/// Camera placement: position plus an axis-angle rotation.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub rotation_axis: Vec3,
    pub angle_degrees: f32,
}

impl Camera {
    pub fn new(position: Vec3, rotation_axis: Vec3, angle_degrees: f32) -> Self {
        Self {
            position,
            rotation_axis,
            angle_degrees,
        }
    }

    /// The world-to-camera matrix: undoes the camera's own placement by
    /// applying the inverse rotation (its transpose, since rotations are
    /// orthogonal) and then translating by the negated position.
    pub fn matrix(&self) -> Mat4 {
        Mat4::translation(-self.position.x, -self.position.y, -self.position.z)
            * Mat4::rotation_axis_angle(self.rotation_axis, self.angle_degrees.to_radians())
                .transpose()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, 0.0)
    }
}

/// An ordered collection of instances plus the camera.
///
/// Instance order determines draw order but not correctness: the depth
/// test resolves visibility for opaque geometry regardless of order.
pub struct Scene {
    camera: Camera,
    instances: Vec<ModelInstance>,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            instances: Vec::new(),
        }
    }

    pub fn add_instance(&mut self, instance: ModelInstance) {
        self.instances.push(instance);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn instances(&self) -> &[ModelInstance] {
        &self.instances
    }

    pub fn instances_mut(&mut self) -> &mut [ModelInstance] {
        &mut self.instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn instance_caches_world_vertices_at_construction() {
        let cube = Rc::new(Model::cube());
        let transform = Transform::new(
            Vec3::splat(2.0),
            Vec3::Y,
            0.0,
            Vec3::new(0.0, 0.0, 10.0),
        );
        let instance = ModelInstance::new(cube, transform);
        let first = instance.world_vertices()[0];
        assert_relative_eq!(first.x, 2.0);
        assert_relative_eq!(first.y, 2.0);
        assert_relative_eq!(first.z, 12.0);
    }

    #[test]
    fn refresh_recomputes_after_transform_change() {
        let cube = Rc::new(Model::cube());
        let mut instance = ModelInstance::new(cube, Transform::default());
        assert_relative_eq!(instance.world_vertices()[0].x, 1.0);

        instance
            .transform_mut()
            .set_translation(Vec3::new(5.0, 0.0, 0.0));
        // The cache is stale until refresh.
        assert_relative_eq!(instance.world_vertices()[0].x, 1.0);
        instance.refresh();
        assert_relative_eq!(instance.world_vertices()[0].x, 6.0);
    }

    #[test]
    fn unrotated_camera_subtracts_position() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 0.0);
        let p = camera.matrix() * Vec3::new(1.0, 2.0, 8.0);
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 0.0);
        assert_relative_eq!(p.z, 5.0);
    }

    #[test]
    fn camera_rotation_is_inverted() {
        // A camera yawed +90 degrees sees world +X where its own -Z was:
        // the inverse rotation maps (1,0,0) to (0,0,1) for axis +Y.
        let camera = Camera::new(Vec3::ZERO, Vec3::Y, 90.0);
        let p = camera.matrix() * Vec3::X;
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn instances_share_one_model() {
        let cube = Rc::new(Model::cube());
        let mut scene = Scene::new(Camera::default());
        scene.add_instance(ModelInstance::new(Rc::clone(&cube), Transform::default()));
        scene.add_instance(ModelInstance::new(Rc::clone(&cube), Transform::default()));
        assert_eq!(Rc::strong_count(&cube), 3);
    }
}
