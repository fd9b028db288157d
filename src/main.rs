use std::rc::Rc;

use rastly::color;
use rastly::math::vec3::Vec3;
use rastly::prelude::*;

const WIDTH: u32 = 500;
const HEIGHT: u32 = 500;

/// Two cubes in front of a slightly yawed camera.
fn build_scene() -> Scene {
    let cube = Rc::new(Model::cube());
    let camera = Camera::new(Vec3::new(0.0, 0.0, 1.0), Vec3::Y, 10.0);

    let mut scene = Scene::new(camera);
    scene.add_instance(ModelInstance::new(
        Rc::clone(&cube),
        Transform::new(Vec3::splat(1.5), Vec3::Y, 45.0, Vec3::new(-1.5, 0.0, 7.0)),
    ));
    scene.add_instance(ModelInstance::new(
        cube,
        Transform::new(Vec3::ONE, Vec3::ONE, 0.0, Vec3::new(1.25, 2.0, 7.5)),
    ));
    scene
}

fn main() -> Result<(), String> {
    let mut window = Window::new("Rasterizer", WIDTH, HEIGHT)?;
    let mut renderer = Renderer::new(WIDTH, HEIGHT, Projection::default());
    let mut scene = build_scene();
    let mut limiter = FrameLimiter::new(&window);

    let mut angle: f32 = 45.0;
    loop {
        if window.poll_events() == WindowEvent::Quit {
            break;
        }

        renderer.render(&mut scene, color::BLACK);
        window.present(renderer.canvas().as_bytes())?;

        // Spin the first cube; refresh happens inside the next render.
        let delta_ms = limiter.wait_and_get_delta(&window);
        angle = (angle + 0.02 * delta_ms as f32) % 360.0;
        scene.instances_mut()[0]
            .transform_mut()
            .set_rotation(Vec3::Y, angle);
    }

    Ok(())
}
