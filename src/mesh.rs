//! Renderable mesh payload.

use crate::geometry::{GeometryData, Vertex3D};

/// Geometry plus an optional material reference.
///
/// The material is looked up by name in the scene's
/// [`MaterialLibrary`](crate::material::MaterialLibrary) at frame-assembly
/// time; a mesh without one renders with the default material.
#[derive(Debug, Clone)]
pub struct Mesh {
    geometry: GeometryData,
    material: Option<String>,
}

impl Mesh {
    pub fn new(geometry: GeometryData) -> Self {
        Self {
            geometry,
            material: None,
        }
    }

    /// Builder pattern: reference a material by library name.
    pub fn with_material(mut self, material: &str) -> Self {
        self.material = Some(material.to_string());
        self
    }

    pub fn set_material(&mut self, material: &str) {
        self.material = Some(material.to_string());
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    pub fn geometry(&self) -> &GeometryData {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut GeometryData {
        &mut self.geometry
    }

    pub fn vertex_count(&self) -> usize {
        self.geometry.vertex_count()
    }

    /// Number of triangle faces.
    pub fn face_count(&self) -> usize {
        self.geometry.triangle_count()
    }

    /// Flattened GPU-ready vertex data.
    pub fn vertices(&self) -> Vec<Vertex3D> {
        self.geometry.to_vertices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::generate_cube;

    #[test]
    fn counts_come_from_geometry() {
        let mesh = Mesh::new(generate_cube());
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.face_count(), 12);
        assert_eq!(mesh.vertices().len(), 24);
    }

    #[test]
    fn material_reference() {
        let mut mesh = Mesh::new(generate_cube()).with_material("marble");
        assert_eq!(mesh.material(), Some("marble"));
        mesh.set_material("wood");
        assert_eq!(mesh.material(), Some("wood"));
    }
}
