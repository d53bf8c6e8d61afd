//! # Scene Management
//!
//! The scene tree and its supporting libraries.
//!
//! ## Key Components
//!
//! - [`SceneGraph`] - id-indexed tree of nodes with hierarchical transforms
//! - [`SceneNode`] / [`NodeKind`] - a named transform with a camera, light,
//!   mesh or plain grouping payload
//! - [`Scene`] - graph plus the material and texture libraries, with OBJ
//!   import
//!
//! ## Usage
//!
//! ```
//! use cgmath::{Matrix4, SquareMatrix};
//! use sylva::scene::{Scene, SceneNode};
//! use sylva::mesh::Mesh;
//! use sylva::geometry::generate_cube;
//!
//! let mut scene = Scene::new();
//! let root = scene.graph.root();
//! let cube = SceneNode::mesh("cube", Matrix4::identity(), Mesh::new(generate_cube()));
//! let id = scene.graph.attach(root, cube).unwrap();
//! assert!(scene.graph.get(id).unwrap().is_mesh());
//! ```

pub mod graph;
pub mod node;
pub mod scene;

pub use graph::SceneGraph;
pub use node::{NodeId, NodeKind, SceneNode};
pub use scene::Scene;
