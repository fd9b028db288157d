//! Triangle-mesh models.
//!
//! A [`Model`] owns its geometry and is immutable once built; instances
//! share it through `Rc` without copying. The unit cube is compiled in;
//! arbitrary geometry loads from OBJ files via `tobj`.

use std::fmt;

use crate::color::{self, Color};
use crate::math::vec3::Vec3;

/// Three indices into a model's vertex list plus a flat fill color.
///
/// Indices must be in range for the owning model; using an out-of-range
/// index panics during rendering, which is treated as an authoring error.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub indices: [usize; 3],
    pub color: Color,
}

impl Triangle {
    pub const fn new(indices: [usize; 3], color: Color) -> Self {
        Self { indices, color }
    }
}

/// A named, immutable triangle mesh in model-local space.
pub struct Model {
    name: String,
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
}

/// Face colors assigned round-robin to loaded geometry.
const PALETTE: [Color; 6] = [
    color::BLUE,
    color::RED,
    color::GREEN,
    color::YELLOW,
    color::CYAN,
    color::MAGENTA,
];

impl Model {
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, triangles: Vec<Triangle>) -> Self {
        Self {
            name: name.into(),
            vertices,
            triangles,
        }
    }

    /// The unit cube: 8 vertices, 12 triangles, one color per face.
    pub fn cube() -> Self {
        let vertices = vec![
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-1.0, 1.0, 1.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(1.0, 1.0, -1.0),
            Vec3::new(-1.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
        ];
        let triangles = vec![
            // Front
            Triangle::new([0, 1, 2], color::BLUE),
            Triangle::new([0, 2, 3], color::BLUE),
            // Right
            Triangle::new([4, 0, 3], color::RED),
            Triangle::new([4, 3, 7], color::RED),
            // Back
            Triangle::new([5, 4, 7], color::GREEN),
            Triangle::new([5, 7, 6], color::GREEN),
            // Left
            Triangle::new([1, 5, 6], color::YELLOW),
            Triangle::new([1, 6, 2], color::YELLOW),
            // Top
            Triangle::new([4, 5, 1], color::CYAN),
            Triangle::new([4, 1, 0], color::CYAN),
            // Bottom
            Triangle::new([2, 6, 7], color::MAGENTA),
            Triangle::new([2, 7, 3], color::MAGENTA),
        ];
        Self::new("Cube", vertices, triangles)
    }

    /// Loads all meshes of an OBJ file into one model, triangulated, with
    /// face colors cycled from a fixed palette.
    pub fn from_obj(name: impl Into<String>, path: &str) -> Result<Self, LoadError> {
        let (meshes, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                ..Default::default()
            },
        )?;

        let mut vertices = Vec::new();
        let mut triangles = Vec::new();
        for mesh in &meshes {
            let base = vertices.len();
            for xyz in mesh.mesh.positions.chunks_exact(3) {
                vertices.push(Vec3::new(xyz[0], xyz[1], xyz[2]));
            }
            for tri in mesh.mesh.indices.chunks_exact(3) {
                let color = PALETTE[triangles.len() % PALETTE.len()];
                triangles.push(Triangle::new(
                    [
                        base + tri[0] as usize,
                        base + tri[1] as usize,
                        base + tri[2] as usize,
                    ],
                    color,
                ));
            }
        }

        if triangles.is_empty() {
            return Err(LoadError::NoGeometry);
        }
        Ok(Self::new(name, vertices, triangles))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}

/// Errors from loading model geometry.
#[derive(Debug)]
pub enum LoadError {
    /// The OBJ parser rejected the file.
    Obj(tobj::LoadError),
    /// The file parsed but contained no triangles.
    NoGeometry,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Obj(e) => write!(f, "failed to parse OBJ: {e}"),
            LoadError::NoGeometry => write!(f, "OBJ file contains no triangles"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Obj(e) => Some(e),
            LoadError::NoGeometry => None,
        }
    }
}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        LoadError::Obj(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_expected_geometry() {
        let cube = Model::cube();
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.triangles().len(), 12);
    }

    #[test]
    fn cube_indices_are_in_range() {
        let cube = Model::cube();
        for tri in cube.triangles() {
            for &idx in &tri.indices {
                assert!(idx < cube.vertices().len());
            }
        }
    }

    #[test]
    fn cube_faces_are_paired_by_color() {
        let cube = Model::cube();
        for pair in cube.triangles().chunks_exact(2) {
            assert_eq!(pair[0].color, pair[1].color);
        }
    }
}
