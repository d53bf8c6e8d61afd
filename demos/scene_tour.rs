//! Builds a small lit scene and prints the assembled frame.
//!
//! Run with `cargo run --example scene_tour`.

use anyhow::Result;
use sylva::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut engine = Engine::new("scene tour", 512, 512);

    // Overhead camera looking down the board, like a tabletop setup.
    let camera_transform = Matrix4::from_translation(Vector3::new(0.0, 13.0, 25.0));
    let camera = engine.add_to_scene(SceneNode::camera(
        "table_camera",
        camera_transform,
        Camera::perspective(512, 512, 0.01, 250.0, 70.0),
    ))?;
    engine.set_camera(camera)?;

    // A spot light aimed at the table and a dim fill light.
    engine.add_to_scene(SceneNode::light(
        "spot",
        Matrix4::from_translation(Vector3::new(10.0, -2.5, -45.0)),
        Light::spot(
            Vector3::new(0.1, 0.1, 0.1),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(0.0, -1.0, 0.0),
            Attenuation::default(),
        ),
    ))?;
    engine.add_to_scene(SceneNode::light(
        "fill",
        Matrix4::from_translation(Vector3::new(0.0, 30.0, 0.0)),
        Light::omni(
            Vector3::new(0.2, 0.2, 0.2),
            Vector3::new(0.6, 0.6, 0.6),
            Vector3::new(0.3, 0.3, 0.3),
            Attenuation::new(1.0, 0.05, 0.0),
        ),
    ))?;

    // Table plane, a solid cube and a glass cube on top of it.
    engine.scene.materials.add(
        Material::new("table")
            .with_diffuse(0.4, 0.25, 0.1)
            .with_specular(0.1, 0.1, 0.1),
    );
    engine.scene.materials.add(
        Material::new("glass")
            .with_diffuse(0.6, 0.7, 0.8)
            .with_transparency(0.35),
    );

    engine.add_to_scene(SceneNode::mesh(
        "table",
        Matrix4::identity(),
        Mesh::new(generate_plane(20.0, 20.0, 1, 1)).with_material("table"),
    ))?;
    engine.add_to_scene(SceneNode::mesh(
        "crate",
        Matrix4::from_translation(Vector3::new(-2.0, 1.0, 0.0)),
        Mesh::new(generate_colored_cube(2.0)),
    ))?;
    engine.add_to_scene(SceneNode::mesh(
        "glass_cube",
        Matrix4::from_translation(Vector3::new(2.0, 1.0, 0.0)),
        Mesh::new(generate_cube()).with_material("glass"),
    ))?;

    engine.queue_text("scene tour");
    engine.enable_fps();

    let frame = engine.render_frame()?;

    println!("scene nodes: {}", engine.scene.graph.len());
    println!("lights enabled: {}", frame.lights.len());
    println!("opaque draws:");
    for draw in &frame.opaque {
        println!("  {:?} with material {:?}", draw.node, draw.material);
    }
    println!("blended draws:");
    for draw in &frame.transparent {
        println!("  {:?} with material {:?}", draw.node, draw.material);
    }
    for line in &frame.overlay {
        println!("overlay: {line}");
    }

    Ok(())
}
