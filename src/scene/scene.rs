//! Scene container: graph + resource libraries + model import.

use std::path::Path;

use cgmath::{Matrix4, SquareMatrix};

use crate::error::EngineError;
use crate::geometry::{calculate_face_normals, GeometryData};
use crate::material::{Material, MaterialLibrary};
use crate::mesh::Mesh;
use crate::texture::{Texture2D, TextureLibrary};

use super::graph::SceneGraph;
use super::node::{NodeId, SceneNode};

/// A complete scene: the node tree plus centralized material and texture
/// storage.
#[derive(Debug)]
pub struct Scene {
    pub graph: SceneGraph,
    pub materials: MaterialLibrary,
    pub textures: TextureLibrary,
}

impl Scene {
    /// Creates an empty scene with a root group and the default material.
    pub fn new() -> Self {
        Self {
            graph: SceneGraph::new(),
            materials: MaterialLibrary::new(),
            textures: TextureLibrary::new(),
        }
    }

    /// Attaches a node under the scene root.
    pub fn add(&mut self, node: SceneNode) -> Result<NodeId, EngineError> {
        let root = self.graph.root();
        self.graph.attach(root, node)
    }

    /// Loads a 3D model from an OBJ file and attaches one mesh node per
    /// model under `parent`.
    ///
    /// Materials found in the companion MTL file are loaded into the
    /// material library and assigned to their meshes by name; a missing
    /// MTL file degrades to the default material with a warning. Models
    /// without normals get them reconstructed from the triangle data.
    ///
    /// # Returns
    /// The ids of the attached mesh nodes, in file order.
    pub fn load_obj(
        &mut self,
        parent: NodeId,
        path: impl AsRef<Path>,
    ) -> Result<Vec<NodeId>, EngineError> {
        let path = path.as_ref();
        let (models, materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|source| EngineError::ObjLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let materials = materials.unwrap_or_else(|error| {
            log::warn!("no usable MTL for {:?}: {error}", path);
            Vec::new()
        });

        // Material names as they will be referenced by the meshes below.
        let mut material_names = Vec::with_capacity(materials.len());
        for (i, mtl) in materials.iter().enumerate() {
            let name = if mtl.name.is_empty() {
                format!("material_{}", i)
            } else {
                mtl.name.clone()
            };
            material_names.push(name.clone());

            if self.materials.contains(&name) {
                continue;
            }

            let defaults = Material::default();
            let ambient = mtl.ambient.unwrap_or(defaults.ambient);
            let diffuse = mtl.diffuse.unwrap_or(defaults.diffuse);
            let specular = mtl.specular.unwrap_or(defaults.specular);
            let mut material = Material::new(&name)
                .with_ambient(ambient[0], ambient[1], ambient[2])
                .with_diffuse(diffuse[0], diffuse[1], diffuse[2])
                .with_specular(specular[0], specular[1], specular[2])
                .with_shininess(mtl.shininess.unwrap_or(defaults.shininess))
                .with_transparency(mtl.dissolve.unwrap_or(1.0));
            if let Some(texture) = &mtl.diffuse_texture {
                material = material.with_texture(texture);
                // Image decoding happens outside this crate; until real
                // pixels are registered the name resolves to a placeholder.
                if !self.textures.contains(texture) {
                    self.textures.add(Texture2D::checkerboard(texture, 64));
                }
            }
            self.materials.add(material);
        }

        let mut attached = Vec::with_capacity(models.len());
        for (i, model) in models.iter().enumerate() {
            let mesh = &model.mesh;

            // Use normals from the OBJ if present, otherwise reconstruct.
            let normals = if !mesh.normals.is_empty() && mesh.normals.len() == mesh.positions.len()
            {
                mesh.normals.clone()
            } else {
                calculate_face_normals(&mesh.positions, &mesh.indices)
            };

            let mut geometry = GeometryData::new();
            geometry.vertices = mesh
                .positions
                .chunks_exact(3)
                .map(|p| [p[0], p[1], p[2]])
                .collect();
            geometry.normals = normals
                .chunks_exact(3)
                .map(|n| [n[0], n[1], n[2]])
                .collect();
            geometry.tex_coords = mesh
                .texcoords
                .chunks_exact(2)
                .map(|t| [t[0], t[1]])
                .collect();
            geometry.indices = mesh.indices.clone();

            let mut our_mesh = Mesh::new(geometry);
            if let Some(material_id) = mesh.material_id {
                if let Some(name) = material_names.get(material_id) {
                    our_mesh.set_material(name);
                }
            }

            let name = if model.name.is_empty() {
                format!("mesh_{}", i)
            } else {
                model.name.clone()
            };
            let id = self
                .graph
                .attach(parent, SceneNode::mesh(&name, Matrix4::identity(), our_mesh))?;
            attached.push(id);
        }

        Ok(attached)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn load_obj_builds_mesh_nodes() {
        let path = std::env::temp_dir().join("sylva_scene_load_test.obj");
        fs::write(
            &path,
            "o triangle\nv 0.0 0.0 0.0\nv 1.0 0.0 0.0\nv 0.0 0.0 -1.0\nf 1 2 3\n",
        )
        .unwrap();

        let mut scene = Scene::new();
        let root = scene.graph.root();
        let ids = scene.load_obj(root, &path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(ids.len(), 1);
        let node = scene.graph.get(ids[0]).unwrap();
        assert_eq!(node.name, "triangle");
        let mesh = node.as_mesh().unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
        // No normals in the file, so they are reconstructed (flat +Y here).
        let normal = mesh.geometry().normals[0];
        assert!((normal[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn load_obj_imports_materials_and_texture_placeholders() {
        let dir = std::env::temp_dir();
        let obj_path = dir.join("sylva_scene_mtl_test.obj");
        let mtl_path = dir.join("sylva_scene_mtl_test.mtl");
        fs::write(
            &mtl_path,
            "newmtl painted\nKd 0.2 0.3 0.4\nd 0.5\nmap_Kd bricks.png\n",
        )
        .unwrap();
        fs::write(
            &obj_path,
            "mtllib sylva_scene_mtl_test.mtl\no quad\nv 0.0 0.0 0.0\nv 1.0 0.0 0.0\nv 1.0 1.0 0.0\nusemtl painted\nf 1 2 3\n",
        )
        .unwrap();

        let mut scene = Scene::new();
        let root = scene.graph.root();
        let ids = scene.load_obj(root, &obj_path).unwrap();
        fs::remove_file(&obj_path).ok();
        fs::remove_file(&mtl_path).ok();

        let material = scene.materials.get("painted").expect("material imported");
        assert_eq!(material.diffuse, [0.2, 0.3, 0.4]);
        assert_eq!(material.transparency, 0.5);
        assert_eq!(material.texture.as_deref(), Some("bricks.png"));
        // A placeholder is registered until real pixels arrive.
        assert!(scene.textures.contains("bricks.png"));

        let mesh = scene.graph.get(ids[0]).unwrap().as_mesh().unwrap();
        assert_eq!(mesh.material(), Some("painted"));
    }

    #[test]
    fn load_obj_missing_file_is_an_error() {
        let mut scene = Scene::new();
        let root = scene.graph.root();
        let result = scene.load_obj(root, "definitely_not_here.obj");
        assert!(matches!(result, Err(EngineError::ObjLoad { .. })));
    }
}
