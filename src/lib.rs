//! A CPU-only 3D scanline rasterizer.
//!
//! Transforms a scene of placed triangle meshes into an RGBA8 raster with
//! per-pixel 1/z depth resolution. SDL2 is used only for window management
//! and display; all rendering is done on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use rastly::prelude::*;
//! use std::rc::Rc;
//!
//! let mut scene = Scene::new(Camera::default());
//! scene.add_instance(ModelInstance::new(Rc::new(Model::cube()), Transform::default()));
//!
//! let mut renderer = Renderer::new(500, 500, Projection::default());
//! renderer.render(&mut scene, rastly::color::BLACK);
//! renderer.canvas().save_png("frame.png")?;
//! ```

pub mod canvas;
pub mod color;
pub mod interpolate;
pub mod math;
pub mod model;
pub mod projection;
pub mod raster;
pub mod renderer;
pub mod scene;
pub mod transform;
pub mod window;

pub use model::{LoadError, Model};
pub use renderer::Renderer;
pub use scene::{Camera, ModelInstance, Scene};
pub use transform::Transform;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::canvas::Canvas;
    pub use crate::color::Color;
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::model::{Model, Triangle};
    pub use crate::projection::Projection;
    pub use crate::renderer::Renderer;
    pub use crate::scene::{Camera, ModelInstance, Scene};
    pub use crate::transform::Transform;
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
