//! Material system.
//!
//! Materials follow the classic emission/ambient/diffuse/specular model
//! with a shininess exponent and a transparency factor (1.0 = fully
//! opaque). Materials are stored centrally in a [`MaterialLibrary`] and
//! meshes reference them by name, so a material edit is picked up by every
//! mesh that uses it.

use std::collections::HashMap;

/// Name of the material every library starts with and falls back to.
pub const DEFAULT_MATERIAL: &str = "default_material";

/// Surface properties of a renderable mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub emission: [f32; 3],
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
    /// 1.0 is fully opaque, 0.0 fully transparent.
    pub transparency: f32,
    /// Name of a texture in the scene's texture library.
    pub texture: Option<String>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: DEFAULT_MATERIAL.to_string(),
            emission: [0.0, 0.0, 0.0],
            ambient: [0.2, 0.2, 0.2],
            diffuse: [0.8, 0.8, 0.8],
            specular: [0.5, 0.5, 0.5],
            shininess: 5.0,
            transparency: 1.0,
            texture: None,
        }
    }
}

impl Material {
    /// Creates a material with the default surface properties and the
    /// given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Builder pattern: set the emission color.
    pub fn with_emission(mut self, r: f32, g: f32, b: f32) -> Self {
        self.emission = [r, g, b];
        self
    }

    /// Builder pattern: set the ambient color.
    pub fn with_ambient(mut self, r: f32, g: f32, b: f32) -> Self {
        self.ambient = [r, g, b];
        self
    }

    /// Builder pattern: set the diffuse color.
    pub fn with_diffuse(mut self, r: f32, g: f32, b: f32) -> Self {
        self.diffuse = [r, g, b];
        self
    }

    /// Builder pattern: set the specular color.
    pub fn with_specular(mut self, r: f32, g: f32, b: f32) -> Self {
        self.specular = [r, g, b];
        self
    }

    /// Builder pattern: set the shininess exponent (floored at zero).
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess.max(0.0);
        self
    }

    /// Builder pattern: set the transparency factor, clamped to [0, 1].
    pub fn with_transparency(mut self, transparency: f32) -> Self {
        self.transparency = transparency.clamp(0.0, 1.0);
        self
    }

    /// Builder pattern: reference a texture by library name.
    pub fn with_texture(mut self, texture: &str) -> Self {
        self.texture = Some(texture.to_string());
        self
    }

    /// Sets the transparency factor, clamped to [0, 1].
    pub fn set_transparency(&mut self, transparency: f32) {
        self.transparency = transparency.clamp(0.0, 1.0);
    }

    /// Whether this material needs no blending pass.
    pub fn is_opaque(&self) -> bool {
        self.transparency >= 1.0
    }
}

/// Centralized, name-keyed material storage.
///
/// Always contains a [`DEFAULT_MATERIAL`] entry, so lookups can degrade to
/// a sensible surface instead of failing.
#[derive(Debug)]
pub struct MaterialLibrary {
    materials: HashMap<String, Material>,
}

impl MaterialLibrary {
    /// Creates a library holding only the default material.
    pub fn new() -> Self {
        let mut materials = HashMap::new();
        materials.insert(DEFAULT_MATERIAL.to_string(), Material::default());
        Self { materials }
    }

    /// Inserts a material under its own name, replacing any previous entry.
    pub fn add(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Material> {
        self.materials.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.materials.contains_key(name)
    }

    /// The default material entry.
    pub fn default_material(&self) -> &Material {
        &self.materials[DEFAULT_MATERIAL]
    }

    /// Resolves an optional material reference, falling back to the
    /// default material for `None` or unknown names.
    pub fn resolve(&self, name: Option<&str>) -> &Material {
        name.and_then(|name| self.materials.get(name))
            .unwrap_or_else(|| self.default_material())
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Iterates material names in arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.materials.keys().map(|name| name.as_str())
    }
}

impl Default for MaterialLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_surface_properties() {
        let material = Material::new("test_material")
            .with_emission(0.0, 0.0, 0.0)
            .with_ambient(1.0, 0.0, 0.0)
            .with_diffuse(0.0, 1.0, 0.0)
            .with_specular(0.0, 0.0, 1.0)
            .with_shininess(1.0);
        assert_eq!(material.emission, [0.0, 0.0, 0.0]);
        assert_eq!(material.ambient, [1.0, 0.0, 0.0]);
        assert_eq!(material.diffuse, [0.0, 1.0, 0.0]);
        assert_eq!(material.specular, [0.0, 0.0, 1.0]);
        assert_eq!(material.shininess, 1.0);
        assert!(material.is_opaque());
    }

    #[test]
    fn transparency_is_clamped() {
        let mut material = Material::new("glass").with_transparency(1.5);
        assert_eq!(material.transparency, 1.0);
        material.set_transparency(-0.5);
        assert_eq!(material.transparency, 0.0);
        assert!(!material.is_opaque());
    }

    #[test]
    fn library_starts_with_default() {
        let library = MaterialLibrary::new();
        assert_eq!(library.len(), 1);
        assert_eq!(library.default_material().name, DEFAULT_MATERIAL);
        assert_eq!(library.default_material().diffuse, [0.8, 0.8, 0.8]);
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let mut library = MaterialLibrary::new();
        library.add(Material::new("marble").with_diffuse(0.9, 0.9, 0.85));
        assert_eq!(library.resolve(Some("marble")).name, "marble");
        assert_eq!(library.resolve(Some("missing")).name, DEFAULT_MATERIAL);
        assert_eq!(library.resolve(None).name, DEFAULT_MATERIAL);
    }
}
