//! Linear algebra primitives for the rasterization pipeline.
//!
//! Column-vector convention throughout: matrices multiply vectors on the
//! right (`Mat4 * Vec3`), and transforms chain right-to-left.

pub mod mat4;
pub mod vec2;
pub mod vec3;
