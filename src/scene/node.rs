//! Scene node definition.
//!
//! A node is a named transform in the scene tree plus a kind-specific
//! payload. Cameras, lights and meshes are all nodes; what used to be a
//! class hierarchy in fixed-function engines is a single tagged variant
//! here, dispatched by pattern matching.

use cgmath::{Matrix4, SquareMatrix};

use crate::camera::Camera;
use crate::light::Light;
use crate::mesh::Mesh;

/// Handle to a node stored in a [`SceneGraph`](super::SceneGraph).
///
/// Ids are unique for the lifetime of a graph; slots of removed nodes are
/// never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Kind-specific payload of a scene node.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// A pure transform grouping its children.
    Group,
    /// A viewpoint. Cameras are never enqueued for drawing.
    Camera(Camera),
    /// A light source, drawn before any geometry.
    Light(Light),
    /// Renderable geometry with an optional material reference.
    Mesh(Mesh),
}

/// A named node in the scene tree.
///
/// `transform` is the node's matrix in parent coordinates. World
/// coordinates are obtained by composing transforms root-down, see
/// [`SceneGraph::world_matrix`](super::SceneGraph::world_matrix).
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub transform: Matrix4<f32>,
    pub kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl SceneNode {
    fn with_kind(name: &str, transform: Matrix4<f32>, kind: NodeKind) -> Self {
        Self {
            name: name.to_string(),
            transform,
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Creates a plain grouping node.
    pub fn group(name: &str, transform: Matrix4<f32>) -> Self {
        Self::with_kind(name, transform, NodeKind::Group)
    }

    /// Creates a grouping node with an identity transform.
    pub fn group_at_origin(name: &str) -> Self {
        Self::group(name, Matrix4::identity())
    }

    /// Creates a camera node.
    pub fn camera(name: &str, transform: Matrix4<f32>, camera: Camera) -> Self {
        Self::with_kind(name, transform, NodeKind::Camera(camera))
    }

    /// Creates a light node.
    pub fn light(name: &str, transform: Matrix4<f32>, light: Light) -> Self {
        Self::with_kind(name, transform, NodeKind::Light(light))
    }

    /// Creates a mesh node.
    pub fn mesh(name: &str, transform: Matrix4<f32>, mesh: Mesh) -> Self {
        Self::with_kind(name, transform, NodeKind::Mesh(mesh))
    }

    /// Id of the parent node, `None` for a detached node or the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Ids of the direct children, in attachment order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_camera(&self) -> bool {
        matches!(self.kind, NodeKind::Camera(_))
    }

    pub fn is_light(&self) -> bool {
        matches!(self.kind, NodeKind::Light(_))
    }

    pub fn is_mesh(&self) -> bool {
        matches!(self.kind, NodeKind::Mesh(_))
    }

    /// Camera payload, if this node is a camera.
    pub fn as_camera(&self) -> Option<&Camera> {
        match &self.kind {
            NodeKind::Camera(camera) => Some(camera),
            _ => None,
        }
    }

    /// Mutable camera payload, if this node is a camera.
    pub fn as_camera_mut(&mut self) -> Option<&mut Camera> {
        match &mut self.kind {
            NodeKind::Camera(camera) => Some(camera),
            _ => None,
        }
    }

    /// Light payload, if this node is a light.
    pub fn as_light(&self) -> Option<&Light> {
        match &self.kind {
            NodeKind::Light(light) => Some(light),
            _ => None,
        }
    }

    /// Mesh payload, if this node is a mesh.
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match &self.kind {
            NodeKind::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }
}
