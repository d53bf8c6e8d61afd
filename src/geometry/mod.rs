//! # Procedural Geometry
//!
//! Mesh data containers and generators for common primitive shapes, so
//! basic scenes need no external model files.
//!
//! ## Supported Primitives
//!
//! - **Cube**: unit cube, plus a flat-colored variant with randomized
//!   per-face debug colors
//! - **Sphere**: UV sphere with configurable resolution
//! - **Plane**: flat plane with configurable size and subdivisions

pub mod primitives;

pub use primitives::*;

/// A single vertex with position and normal, laid out for GPU upload.
///
/// `#[repr(C)]` keeps the memory layout C-compatible so slices of vertices
/// can be cast directly to byte buffers.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// Normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
}

/// Generated or imported mesh data.
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Optional per-vertex flat colors (r, g, b); empty when unused
    pub colors: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Flattens positions and normals into the GPU vertex layout.
    ///
    /// Vertices missing a normal get a +Y default.
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        (0..self.vertices.len())
            .map(|i| Vertex3D {
                position: self.vertices[i],
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect()
    }
}

/// Reconstructs smooth per-vertex normals from triangle data.
///
/// For each triangle the face normal is accumulated on its three vertices,
/// then the sums are averaged and normalized. Used when an imported model
/// carries no normals of its own.
pub fn calculate_face_normals(positions: &[f32], indices: &[u32]) -> Vec<f32> {
    let vertex_count = positions.len() / 3;
    let mut normals = vec![0.0; positions.len()];
    let mut counts = vec![0u32; vertex_count];

    for triangle in indices.chunks(3) {
        if triangle.len() < 3 {
            continue;
        }
        let i0 = triangle[0] as usize;
        let i1 = triangle[1] as usize;
        let i2 = triangle[2] as usize;

        let v0 = [positions[i0 * 3], positions[i0 * 3 + 1], positions[i0 * 3 + 2]];
        let v1 = [positions[i1 * 3], positions[i1 * 3 + 1], positions[i1 * 3 + 2]];
        let v2 = [positions[i2 * 3], positions[i2 * 3 + 1], positions[i2 * 3 + 2]];

        let edge1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
        let edge2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];

        let face_normal = [
            edge1[1] * edge2[2] - edge1[2] * edge2[1],
            edge1[2] * edge2[0] - edge1[0] * edge2[2],
            edge1[0] * edge2[1] - edge1[1] * edge2[0],
        ];

        for &vertex_idx in &[i0, i1, i2] {
            normals[vertex_idx * 3] += face_normal[0];
            normals[vertex_idx * 3 + 1] += face_normal[1];
            normals[vertex_idx * 3 + 2] += face_normal[2];
            counts[vertex_idx] += 1;
        }
    }

    for i in 0..vertex_count {
        if counts[i] > 0 {
            normals[i * 3] /= counts[i] as f32;
            normals[i * 3 + 1] /= counts[i] as f32;
            normals[i * 3 + 2] /= counts[i] as f32;

            let length = (normals[i * 3].powi(2)
                + normals[i * 3 + 1].powi(2)
                + normals[i * 3 + 2].powi(2))
            .sqrt();
            if length > 0.0 {
                normals[i * 3] /= length;
                normals[i * 3 + 1] /= length;
                normals[i * 3 + 2] /= length;
            }
        }
    }

    normals
}
