//! Render queue and frame assembly.
//!
//! The queue mirrors classic fixed-function submission order: lights are
//! queued ahead of geometry so their state is bound before anything is
//! shaded, opaque geometry draws front-of-line, and translucent geometry
//! is held back for a final blended pass over the finished depth buffer.

use std::collections::VecDeque;

use cgmath::Matrix4;

use crate::light::MAX_ACTIVE_LIGHTS;
use crate::scene::{NodeId, NodeKind, Scene, SceneGraph};

/// One traversal result: a node and its world matrix.
#[derive(Debug, Clone, Copy)]
pub struct RenderEntry {
    pub node: NodeId,
    pub world: Matrix4<f32>,
}

/// A light enabled for the frame, bound to one of the fixed light slots.
#[derive(Debug, Clone, Copy)]
pub struct LightBinding {
    pub node: NodeId,
    /// Slot index in 0..[`MAX_ACTIVE_LIGHTS`].
    pub slot: usize,
    pub model_view: Matrix4<f32>,
}

/// A single mesh draw with its resolved material.
#[derive(Debug, Clone)]
pub struct DrawCall {
    pub node: NodeId,
    /// Name of the material in the scene's library (the default material
    /// when the mesh references none).
    pub material: String,
    pub model_view: Matrix4<f32>,
    /// Whether this draw needs alpha blending.
    pub blend: bool,
}

/// Fully-assembled description of one frame.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Enabled lights, in slot order.
    pub lights: Vec<LightBinding>,
    /// Opaque geometry, drawn first.
    pub opaque: Vec<DrawCall>,
    /// Translucent geometry, blended after every opaque draw.
    pub transparent: Vec<DrawCall>,
    /// Overlay text lines for this frame.
    pub overlay: Vec<String>,
    /// Whether geometry should be rasterized as wireframe.
    pub wireframe: bool,
}

impl Frame {
    /// Total number of mesh draws.
    pub fn draw_count(&self) -> usize {
        self.opaque.len() + self.transparent.len()
    }
}

/// Scene traversal queue feeding frame assembly.
#[derive(Debug, Default)]
pub struct RenderQueue {
    entries: VecDeque<RenderEntry>,
}

impl RenderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every queued entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queued entries, lights first.
    pub fn entries(&self) -> impl Iterator<Item = &RenderEntry> {
        self.entries.iter()
    }

    /// Recursively walks the tree from `node`, composing world matrices
    /// and queueing drawable nodes.
    ///
    /// Lights go to the front of the queue, meshes to the back; cameras
    /// and plain groups contribute only their transforms. Children are
    /// visited in attachment order.
    pub fn pass(&mut self, graph: &SceneGraph, node: NodeId, parent_matrix: Matrix4<f32>) {
        let scene_node = match graph.get(node) {
            Some(scene_node) => scene_node,
            None => return,
        };
        let world = parent_matrix * scene_node.transform;

        match scene_node.kind {
            NodeKind::Light(_) => self.entries.push_front(RenderEntry { node, world }),
            NodeKind::Mesh(_) => self.entries.push_back(RenderEntry { node, world }),
            NodeKind::Camera(_) | NodeKind::Group => {}
        }

        for child in scene_node.children() {
            self.pass(graph, *child, world);
        }
    }

    /// Partitions the queue into an ordered [`Frame`].
    ///
    /// At most [`MAX_ACTIVE_LIGHTS`] lights are enabled, in queue order;
    /// the overflow is reported once per assembly. Mesh entries split into
    /// the opaque pass and the blended pass based on their resolved
    /// material's transparency, preserving queue order within each pass.
    /// Every matrix handed out is `view * world`.
    pub fn assemble(&self, scene: &Scene, view: Matrix4<f32>) -> Frame {
        let mut frame = Frame::default();
        let mut light_total = 0usize;

        for entry in &self.entries {
            let scene_node = match scene.graph.get(entry.node) {
                Some(scene_node) => scene_node,
                None => continue,
            };
            match &scene_node.kind {
                NodeKind::Light(_) => {
                    light_total += 1;
                    if frame.lights.len() < MAX_ACTIVE_LIGHTS {
                        frame.lights.push(LightBinding {
                            node: entry.node,
                            slot: frame.lights.len(),
                            model_view: view * entry.world,
                        });
                    }
                }
                NodeKind::Mesh(mesh) => {
                    let material = scene.materials.resolve(mesh.material());
                    let draw = DrawCall {
                        node: entry.node,
                        material: material.name.clone(),
                        model_view: view * entry.world,
                        blend: !material.is_opaque(),
                    };
                    if draw.blend {
                        frame.transparent.push(draw);
                    } else {
                        frame.opaque.push(draw);
                    }
                }
                NodeKind::Camera(_) | NodeKind::Group => {}
            }
        }

        if light_total > MAX_ACTIVE_LIGHTS {
            log::warn!(
                "{} lights queued, only {} enabled this frame",
                light_total,
                MAX_ACTIVE_LIGHTS
            );
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::generate_cube;
    use crate::light::{Attenuation, Light};
    use crate::material::Material;
    use crate::mesh::Mesh;
    use crate::camera::Camera;
    use crate::scene::SceneNode;
    use cgmath::{SquareMatrix, Vector3};

    fn white_light() -> Light {
        Light::omni(
            Vector3::new(0.1, 0.1, 0.1),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(1.0, 1.0, 1.0),
            Attenuation::default(),
        )
    }

    fn cube_mesh() -> Mesh {
        Mesh::new(generate_cube())
    }

    fn assembled(scene: &Scene) -> Frame {
        let mut queue = RenderQueue::new();
        queue.pass(&scene.graph, scene.graph.root(), Matrix4::identity());
        queue.assemble(scene, Matrix4::identity())
    }

    #[test]
    fn lights_queue_ahead_of_meshes() {
        let mut scene = Scene::new();
        let root = scene.graph.root();
        scene
            .graph
            .attach(root, SceneNode::mesh("cube", Matrix4::identity(), cube_mesh()))
            .unwrap();
        let lamp = scene
            .graph
            .attach(root, SceneNode::light("lamp", Matrix4::identity(), white_light()))
            .unwrap();

        let mut queue = RenderQueue::new();
        queue.pass(&scene.graph, root, Matrix4::identity());
        let first = queue.entries().next().unwrap();
        assert_eq!(first.node, lamp);
    }

    #[test]
    fn cameras_are_never_drawn_but_their_children_are() {
        let mut scene = Scene::new();
        let root = scene.graph.root();
        let camera = scene
            .graph
            .attach(
                root,
                SceneNode::camera(
                    "camera",
                    Matrix4::identity(),
                    Camera::perspective(800, 600, 0.1, 100.0, 45.0),
                ),
            )
            .unwrap();
        scene
            .graph
            .attach(camera, SceneNode::mesh("gizmo", Matrix4::identity(), cube_mesh()))
            .unwrap();

        let frame = assembled(&scene);
        assert_eq!(frame.draw_count(), 1);
        assert_eq!(frame.opaque[0].material, "default_material");
    }

    #[test]
    fn transparent_meshes_draw_after_opaque_ones() {
        let mut scene = Scene::new();
        scene
            .materials
            .add(Material::new("glass").with_transparency(0.4));
        let root = scene.graph.root();
        let glass = scene
            .graph
            .attach(
                root,
                SceneNode::mesh(
                    "window",
                    Matrix4::identity(),
                    cube_mesh().with_material("glass"),
                ),
            )
            .unwrap();
        let solid = scene
            .graph
            .attach(root, SceneNode::mesh("wall", Matrix4::identity(), cube_mesh()))
            .unwrap();

        let frame = assembled(&scene);
        assert_eq!(frame.opaque.len(), 1);
        assert_eq!(frame.opaque[0].node, solid);
        assert_eq!(frame.transparent.len(), 1);
        assert_eq!(frame.transparent[0].node, glass);
        assert!(frame.transparent[0].blend);
        assert!(!frame.opaque[0].blend);
    }

    #[test]
    fn light_slots_cap_at_eight() {
        let mut scene = Scene::new();
        let root = scene.graph.root();
        for i in 0..10 {
            scene
                .graph
                .attach(
                    root,
                    SceneNode::light(&format!("lamp_{}", i), Matrix4::identity(), white_light()),
                )
                .unwrap();
        }

        let frame = assembled(&scene);
        assert_eq!(frame.lights.len(), MAX_ACTIVE_LIGHTS);
        let slots: Vec<usize> = frame.lights.iter().map(|binding| binding.slot).collect();
        assert_eq!(slots, (0..MAX_ACTIVE_LIGHTS).collect::<Vec<_>>());
    }

    #[test]
    fn model_view_composes_view_and_world() {
        let mut scene = Scene::new();
        let root = scene.graph.root();
        scene
            .graph
            .attach(
                root,
                SceneNode::mesh(
                    "cube",
                    Matrix4::from_translation(Vector3::new(1.0, 0.0, 0.0)),
                    cube_mesh(),
                ),
            )
            .unwrap();

        let mut queue = RenderQueue::new();
        queue.pass(&scene.graph, root, Matrix4::identity());
        let view = Matrix4::from_translation(Vector3::new(0.0, 0.0, -5.0));
        let frame = queue.assemble(&scene, view);
        let expected = view * Matrix4::from_translation(Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(frame.opaque[0].model_view, expected);
    }

    #[test]
    fn world_transforms_compose_through_groups() {
        let mut scene = Scene::new();
        let root = scene.graph.root();
        let pivot = scene
            .graph
            .attach(
                root,
                SceneNode::group(
                    "pivot",
                    Matrix4::from_translation(Vector3::new(0.0, 3.0, 0.0)),
                ),
            )
            .unwrap();
        scene
            .graph
            .attach(
                pivot,
                SceneNode::mesh(
                    "cube",
                    Matrix4::from_translation(Vector3::new(1.0, 0.0, 0.0)),
                    cube_mesh(),
                ),
            )
            .unwrap();

        let frame = assembled(&scene);
        let expected = Matrix4::from_translation(Vector3::new(1.0, 3.0, 0.0));
        assert_eq!(frame.opaque[0].model_view, expected);
    }
}
