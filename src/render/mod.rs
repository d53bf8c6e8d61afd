//! # Frame Assembly
//!
//! Turns a scene tree into an ordered description of one frame: which
//! lights are enabled, which meshes draw in the opaque pass and which are
//! deferred to the blended pass, each with its resolved model-view matrix
//! and material. The queue stops at this description; binding it to a GPU
//! API is a backend concern and lives outside this crate.

pub mod queue;

pub use queue::{DrawCall, Frame, LightBinding, RenderQueue};
