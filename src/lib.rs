// src/lib.rs
//! Sylva 3D Engine Core
//!
//! A scene-graph engine core: hierarchical transforms, cameras, lights,
//! materials and textures, fixed-function-style frame assembly, OBJ
//! import, and tooling for the Doxygen hierarchy index shipped with the
//! engine documentation.

pub mod camera;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hierarchy;
pub mod light;
pub mod material;
pub mod mesh;
pub mod prelude;
pub mod render;
pub mod scene;
pub mod texture;

// Re-export main types for convenience
pub use engine::Engine;
pub use error::EngineError;

use cgmath::SquareMatrix;

/// Creates a default engine instance: an 800x600 viewport with a
/// perspective camera already attached and active.
pub fn default() -> Engine {
    let mut engine = Engine::new("sylva", 800, 600);
    let camera = scene::SceneNode::camera(
        "main_camera",
        cgmath::Matrix4::identity(),
        camera::Camera::perspective(800, 600, 0.1, 1000.0, camera::DEFAULT_FOV_Y_DEG),
    );
    let id = engine
        .add_to_scene(camera)
        .expect("fresh scene graph always has a root");
    engine
        .set_camera(id)
        .expect("the node just attached is a camera");
    engine
}
