//! Engine façade.
//!
//! [`Engine`] owns a scene, the active camera and per-frame state (overlay
//! text, wireframe flag, FPS counter), and drives the render queue to turn
//! the scene into [`Frame`]s. It is a plain owned value; create as many
//! engines as you need.

use std::time::Instant;

use cgmath::{Matrix4, SquareMatrix};

use crate::camera::Camera;
use crate::error::EngineError;
use crate::render::{Frame, RenderQueue};
use crate::scene::{NodeId, Scene, SceneNode};

/// Frames-per-second measurement over one-second windows.
#[derive(Debug)]
pub struct FrameCounter {
    last: Instant,
    frames: u32,
    fps: f32,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frames: 0,
            fps: 0.0,
        }
    }

    /// Counts one frame and refreshes the FPS value roughly once per
    /// second.
    pub fn tick(&mut self) {
        self.frames += 1;
        let elapsed = self.last.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            self.fps = self.frames as f32 / elapsed;
            self.frames = 0;
            self.last = Instant::now();
        }
    }

    /// Most recently measured frames per second.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// The engine: scene, active camera, viewport and frame assembly.
pub struct Engine {
    pub scene: Scene,
    title: String,
    width: u32,
    height: u32,
    active_camera: Option<NodeId>,
    overlay: Vec<String>,
    wireframe: bool,
    show_fps: bool,
    queue: RenderQueue,
    counter: FrameCounter,
}

impl Engine {
    /// Creates an engine with an empty scene and the given viewport size.
    pub fn new(title: &str, width: u32, height: u32) -> Self {
        log::info!("engine {:?} initialized at {}x{}", title, width, height);
        Self {
            scene: Scene::new(),
            title: title.to_string(),
            width,
            height,
            active_camera: None,
            overlay: Vec::new(),
            wireframe: false,
            show_fps: false,
            queue: RenderQueue::new(),
            counter: FrameCounter::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Root of the scene tree.
    pub fn root(&self) -> NodeId {
        self.scene.graph.root()
    }

    /// Replaces the whole scene, dropping the previous graph and resource
    /// libraries. Any active camera belonged to the old scene and is
    /// cleared.
    pub fn load_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.active_camera = None;
        self.queue.clear();
    }

    /// Attaches a node under the scene root.
    pub fn add_to_scene(&mut self, node: SceneNode) -> Result<NodeId, EngineError> {
        self.scene.add(node)
    }

    /// Loads an OBJ model and attaches its meshes under the scene root.
    pub fn load_obj_scene(
        &mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Vec<NodeId>, EngineError> {
        let root = self.root();
        self.scene.load_obj(root, path)
    }

    /// Activates the camera node used for rendering.
    ///
    /// The node must exist and carry a camera payload.
    pub fn set_camera(&mut self, id: NodeId) -> Result<(), EngineError> {
        let node = self
            .scene
            .graph
            .get(id)
            .ok_or(EngineError::NodeNotFound(id))?;
        if !node.is_camera() {
            return Err(EngineError::NotACamera(id));
        }
        self.active_camera = Some(id);
        Ok(())
    }

    pub fn active_camera(&self) -> Option<NodeId> {
        self.active_camera
    }

    /// Propagates a viewport resize to the active camera.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        if let Some(id) = self.active_camera {
            if let Some(camera) = self
                .scene
                .graph
                .get_mut(id)
                .and_then(|node| node.as_camera_mut())
            {
                camera.set_viewport(width, height);
            }
        }
    }

    /// Queues a line of overlay text for the next frame.
    pub fn queue_text(&mut self, text: impl Into<String>) {
        self.overlay.push(text.into());
    }

    pub fn enable_wireframe(&mut self) {
        self.wireframe = true;
    }

    pub fn disable_wireframe(&mut self) {
        self.wireframe = false;
    }

    pub fn enable_fps(&mut self) {
        self.show_fps = true;
    }

    pub fn disable_fps(&mut self) {
        self.show_fps = false;
    }

    /// Most recently measured frames per second.
    pub fn fps(&self) -> f32 {
        self.counter.fps()
    }

    /// Assembles one frame from the scene.
    ///
    /// The view matrix is the inverse of the active camera's world
    /// transform. Queued overlay text is drained into the frame; when FPS
    /// display is enabled a counter line is appended.
    pub fn render_frame(&mut self) -> Result<Frame, EngineError> {
        let camera_id = self.active_camera.ok_or(EngineError::NoActiveCamera)?;
        let camera_world = self
            .scene
            .graph
            .world_matrix(camera_id)
            .ok_or(EngineError::NodeNotFound(camera_id))?;
        let view = Camera::view_from_transform(camera_world);

        self.queue.clear();
        let root = self.scene.graph.root();
        self.queue.pass(&self.scene.graph, root, Matrix4::identity());

        let mut frame = self.queue.assemble(&self.scene, view);
        frame.overlay = std::mem::take(&mut self.overlay);
        if self.show_fps {
            frame.overlay.push(format!("fps: {:.1}", self.counter.fps()));
        }
        frame.wireframe = self.wireframe;

        self.counter.tick();
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::generate_cube;
    use crate::mesh::Mesh;

    fn engine_with_camera() -> (Engine, NodeId) {
        let mut engine = Engine::new("test", 800, 600);
        let camera = engine
            .add_to_scene(SceneNode::camera(
                "camera",
                Matrix4::identity(),
                Camera::perspective(800, 600, 0.1, 100.0, 45.0),
            ))
            .unwrap();
        engine.set_camera(camera).unwrap();
        (engine, camera)
    }

    #[test]
    fn set_camera_rejects_non_camera_nodes() {
        let mut engine = Engine::new("test", 800, 600);
        let cube = engine
            .add_to_scene(SceneNode::mesh(
                "cube",
                Matrix4::identity(),
                Mesh::new(generate_cube()),
            ))
            .unwrap();
        assert!(matches!(
            engine.set_camera(cube),
            Err(EngineError::NotACamera(_))
        ));
        assert_eq!(engine.active_camera(), None);
    }

    #[test]
    fn render_frame_needs_a_camera() {
        let mut engine = Engine::new("test", 800, 600);
        assert!(matches!(
            engine.render_frame(),
            Err(EngineError::NoActiveCamera)
        ));
    }

    #[test]
    fn resize_updates_the_active_camera() {
        let (mut engine, camera) = engine_with_camera();
        engine.resize(1280, 720);
        assert_eq!(engine.width(), 1280);
        let camera = engine.scene.graph.get(camera).unwrap().as_camera().unwrap();
        assert_eq!(camera.width(), 1280);
        assert_eq!(camera.height(), 720);
    }

    #[test]
    fn overlay_text_is_drained_per_frame() {
        let (mut engine, _) = engine_with_camera();
        engine.queue_text("hello");
        let frame = engine.render_frame().unwrap();
        assert_eq!(frame.overlay, vec!["hello".to_string()]);
        let next = engine.render_frame().unwrap();
        assert!(next.overlay.is_empty());
    }

    #[test]
    fn fps_line_appears_when_enabled() {
        let (mut engine, _) = engine_with_camera();
        engine.enable_fps();
        let frame = engine.render_frame().unwrap();
        assert_eq!(frame.overlay.len(), 1);
        assert!(frame.overlay[0].starts_with("fps:"));
        engine.disable_fps();
        let frame = engine.render_frame().unwrap();
        assert!(frame.overlay.is_empty());
    }

    #[test]
    fn wireframe_flag_reaches_the_frame() {
        let (mut engine, _) = engine_with_camera();
        engine.enable_wireframe();
        assert!(engine.render_frame().unwrap().wireframe);
        engine.disable_wireframe();
        assert!(!engine.render_frame().unwrap().wireframe);
    }

    #[test]
    fn load_scene_replaces_everything() {
        let (mut engine, _) = engine_with_camera();
        let mut replacement = Scene::new();
        replacement
            .add(SceneNode::mesh(
                "cube",
                Matrix4::identity(),
                Mesh::new(generate_cube()),
            ))
            .unwrap();
        engine.load_scene(replacement);
        assert_eq!(engine.active_camera(), None);
        assert_eq!(engine.scene.graph.len(), 2);
        assert!(matches!(
            engine.render_frame(),
            Err(EngineError::NoActiveCamera)
        ));
    }

    #[test]
    fn frame_sees_scene_content() {
        let (mut engine, _) = engine_with_camera();
        engine
            .add_to_scene(SceneNode::mesh(
                "cube",
                Matrix4::identity(),
                Mesh::new(generate_cube()),
            ))
            .unwrap();
        let frame = engine.render_frame().unwrap();
        assert_eq!(frame.draw_count(), 1);
        assert!(frame.lights.is_empty());
    }
}
