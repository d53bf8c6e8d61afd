//! Error types for the sylva engine.

use std::path::PathBuf;

use crate::hierarchy::HierarchyError;
use crate::scene::NodeId;

/// Errors produced by scene management, model loading and frame assembly.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// An OBJ model could not be loaded from disk.
    #[error("failed to load OBJ model {path:?}")]
    ObjLoad {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    /// A node id does not refer to a live node in the scene graph.
    #[error("node {0:?} not found in scene graph")]
    NodeNotFound(NodeId),

    /// The node handed to `set_camera` is not a camera node.
    #[error("node {0:?} is not a camera")]
    NotACamera(NodeId),

    /// A frame was requested before any camera was activated.
    #[error("no active camera set")]
    NoActiveCamera,

    /// Raw texture data does not match the declared dimensions.
    #[error("texture {name:?}: expected {expected} bytes of RGBA8 data, got {got}")]
    TextureData {
        name: String,
        expected: usize,
        got: usize,
    },

    /// A documentation hierarchy index could not be parsed.
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
}
