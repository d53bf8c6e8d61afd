//! # Sylva Prelude
//!
//! Convenient re-exports of the commonly used types, to reduce
//! boilerplate imports in typical applications.
//!
//! ## Usage
//!
//! ```
//! use sylva::prelude::*;
//!
//! let mut engine = sylva::default();
//! engine.add_to_scene(SceneNode::mesh(
//!     "cube",
//!     Matrix4::identity(),
//!     Mesh::new(generate_cube()),
//! )).unwrap();
//! let frame = engine.render_frame().unwrap();
//! assert_eq!(frame.draw_count(), 1);
//! ```

// Re-export core engine types
pub use crate::default;
pub use crate::engine::{Engine, FrameCounter};
pub use crate::error::EngineError;

// Re-export scene types
pub use crate::scene::{NodeId, NodeKind, Scene, SceneGraph, SceneNode};

// Re-export node payloads and resources
pub use crate::camera::{Camera, Projection, DEFAULT_FOV_Y_DEG};
pub use crate::light::{Attenuation, Light, LightKind, MAX_ACTIVE_LIGHTS};
pub use crate::material::{Material, MaterialLibrary, DEFAULT_MATERIAL};
pub use crate::mesh::Mesh;
pub use crate::texture::{Filter, MipmapMode, Texture2D, TextureLibrary, TextureSettings, WrapMode};

// Re-export geometry helpers
pub use crate::geometry::{
    generate_colored_cube, generate_cube, generate_plane, generate_sphere, GeometryData, Vertex3D,
};

// Re-export frame assembly
pub use crate::render::{DrawCall, Frame, LightBinding, RenderQueue};

// Re-export documentation-index tooling
pub use crate::hierarchy::{engine_hierarchy, Hierarchy, HierarchyNode};

// Re-export common external dependencies
pub use cgmath::{Deg, InnerSpace, Matrix4, SquareMatrix, Vector3, Zero};
