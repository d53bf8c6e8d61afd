//! Texture resources.
//!
//! A [`Texture2D`] owns raw RGBA8 pixel data plus the sampling settings
//! (filtering, mipmaps, wrapping, anisotropy) a renderer would bind it
//! with. When a source image cannot be decoded, callers substitute the
//! generated checkerboard placeholder.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::EngineError;

/// Scaling filter applied when sampling a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Nearest-neighbor sampling, pixelated scaling.
    Nearest,
    /// Linear interpolation, smooth scaling.
    Linear,
}

/// Mipmap usage when minifying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MipmapMode {
    Disabled,
    Nearest,
    Linear,
}

/// Addressing of coordinates outside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    Repeat,
    ClampToEdge,
}

/// Sampler configuration carried by every texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSettings {
    pub filter: Filter,
    pub mipmap: MipmapMode,
    pub wrap: WrapMode,
    pub anisotropy_level: u32,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            filter: Filter::Linear,
            mipmap: MipmapMode::Disabled,
            wrap: WrapMode::Repeat,
            anisotropy_level: 1,
        }
    }
}

/// A named 2D texture with owned RGBA8 pixel data.
#[derive(Debug, Clone)]
pub struct Texture2D {
    name: String,
    /// Original file path, when the pixels came from disk.
    path: Option<PathBuf>,
    settings: TextureSettings,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Texture2D {
    /// Creates a texture from raw RGBA8 data.
    ///
    /// # Arguments
    /// * `name` - Library name of the texture
    /// * `width`, `height` - Dimensions in pixels
    /// * `pixels` - RGBA8 data, 4 bytes per pixel
    pub fn from_rgba(
        name: &str,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> Result<Self, EngineError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(EngineError::TextureData {
                name: name.to_string(),
                expected,
                got: pixels.len(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            path: None,
            settings: TextureSettings::default(),
            width,
            height,
            pixels,
        })
    }

    /// Generates the placeholder used when a texture source cannot be
    /// decoded: a gray checkerboard with 8x8-pixel tiles.
    pub fn checkerboard(name: &str, size: u32) -> Self {
        let size = size.max(1);
        let mut pixels = Vec::with_capacity(size as usize * size as usize * 4);
        for y in 0..size {
            for x in 0..size {
                let light = ((x / 8) + (y / 8)) % 2 == 0;
                let value = if light { 0xcc } else { 0x55 };
                pixels.extend_from_slice(&[value, value, value, 0xff]);
            }
        }
        Self {
            name: name.to_string(),
            path: None,
            settings: TextureSettings::default(),
            width: size,
            height: size,
            pixels,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    /// Records the file the pixel data was decoded from.
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA8 pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn settings(&self) -> TextureSettings {
        self.settings
    }

    /// Configures scaling filter and mipmap mode together.
    pub fn set_filter(&mut self, filter: Filter, mipmap: MipmapMode) {
        self.settings.filter = filter;
        self.settings.mipmap = mipmap;
    }

    pub fn set_wrap(&mut self, wrap: WrapMode) {
        self.settings.wrap = wrap;
    }

    /// Sets the anisotropic filtering level (at least 1).
    pub fn set_anisotropy_level(&mut self, level: u32) {
        self.settings.anisotropy_level = level.max(1);
    }
}

/// Name-keyed texture storage.
#[derive(Debug, Default)]
pub struct TextureLibrary {
    textures: HashMap<String, Texture2D>,
}

impl TextureLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a texture under its own name, replacing any previous entry.
    pub fn add(&mut self, texture: Texture2D) {
        self.textures.insert(texture.name().to_string(), texture);
    }

    pub fn get(&self, name: &str) -> Option<&Texture2D> {
        self.textures.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_validates_length() {
        let ok = Texture2D::from_rgba("white", 2, 2, vec![0xff; 16]);
        assert!(ok.is_ok());
        let err = Texture2D::from_rgba("broken", 2, 2, vec![0xff; 15]);
        assert!(matches!(
            err,
            Err(EngineError::TextureData { expected: 16, got: 15, .. })
        ));
    }

    #[test]
    fn checkerboard_dimensions_and_tiles() {
        let texture = Texture2D::checkerboard("fallback", 32);
        assert_eq!(texture.width(), 32);
        assert_eq!(texture.height(), 32);
        assert_eq!(texture.pixels().len(), 32 * 32 * 4);
        // Opposite corners of adjacent 8x8 tiles differ.
        let first = texture.pixels()[0];
        let neighbor = texture.pixels()[8 * 4];
        assert_ne!(first, neighbor);
    }

    #[test]
    fn settings_roundtrip() {
        let mut texture = Texture2D::checkerboard("t", 8);
        assert_eq!(texture.settings(), TextureSettings::default());
        texture.set_filter(Filter::Nearest, MipmapMode::Linear);
        texture.set_wrap(WrapMode::ClampToEdge);
        texture.set_anisotropy_level(0);
        let settings = texture.settings();
        assert_eq!(settings.filter, Filter::Nearest);
        assert_eq!(settings.mipmap, MipmapMode::Linear);
        assert_eq!(settings.wrap, WrapMode::ClampToEdge);
        // Level is floored at 1.
        assert_eq!(settings.anisotropy_level, 1);
    }

    #[test]
    fn library_stores_by_name() {
        let mut library = TextureLibrary::new();
        library.add(Texture2D::checkerboard("fallback", 8));
        assert!(library.contains("fallback"));
        assert_eq!(library.len(), 1);
        assert_eq!(library.get("fallback").map(|t| t.width()), Some(8));
    }
}
