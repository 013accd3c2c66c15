//! Material types for the scene model.

use glam::{DVec2, DVec3};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A material with a flat, ordered set of named properties.
///
/// Property order is insertion order and is what code generation
/// enumerates, so output stays stable for a given material.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Material name.
    pub name: String,
    /// Which engine material class this maps to.
    #[serde(default)]
    pub kind: MaterialKind,
    /// Named property values.
    #[serde(default)]
    pub properties: IndexMap<String, MaterialValue>,
}

impl Material {
    /// Create an empty material of the given kind.
    pub fn new(name: impl Into<String>, kind: MaterialKind) -> Self {
        Self {
            name: name.into(),
            kind,
            properties: IndexMap::new(),
        }
    }

    /// Create an empty standard material.
    pub fn standard(name: impl Into<String>) -> Self {
        Self::new(name, MaterialKind::Standard)
    }

    /// Create an empty physically-based material.
    pub fn pbr(name: impl Into<String>) -> Self {
        Self::new(name, MaterialKind::Pbr)
    }

    /// Set a property, keeping its original position if it already exists.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<MaterialValue>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Builder form of [`Material::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<MaterialValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Look up a property by name.
    pub fn get(&self, name: &str) -> Option<&MaterialValue> {
        self.properties.get(name)
    }
}

/// Engine material class.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKind {
    /// Blinn-Phong standard material.
    #[default]
    Standard,
    /// Physically-based material.
    Pbr,
    /// Any other material class, kept by name.
    Other(String),
}

/// A material property value.
///
/// The variant is fixed when the material is built, so generators match on
/// it directly instead of inspecting values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaterialValue {
    /// Numeric scalar.
    Number { value: f64 },
    /// Boolean flag.
    Boolean { value: bool },
    /// 2D vector.
    Vector2 { value: DVec2 },
    /// 3D vector.
    Vector3 { value: DVec3 },
    /// RGB color.
    Color3 { value: Color3 },
    /// RGBA color.
    Color4 { value: Color4 },
    /// Reference to a scene texture by name.
    Texture { value: TextureRef },
    /// Objects, arrays, functions, null: not exportable.
    #[serde(other)]
    Unsupported,
}

impl From<f64> for MaterialValue {
    fn from(value: f64) -> Self {
        Self::Number { value }
    }
}

impl From<bool> for MaterialValue {
    fn from(value: bool) -> Self {
        Self::Boolean { value }
    }
}

impl From<DVec2> for MaterialValue {
    fn from(value: DVec2) -> Self {
        Self::Vector2 { value }
    }
}

impl From<DVec3> for MaterialValue {
    fn from(value: DVec3) -> Self {
        Self::Vector3 { value }
    }
}

impl From<Color3> for MaterialValue {
    fn from(value: Color3) -> Self {
        Self::Color3 { value }
    }
}

impl From<Color4> for MaterialValue {
    fn from(value: Color4) -> Self {
        Self::Color4 { value }
    }
}

impl From<TextureRef> for MaterialValue {
    fn from(value: TextureRef) -> Self {
        Self::Texture { value }
    }
}

/// RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color3 {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color3 {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color4 {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color4 {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Reference to a texture, resolved by name in the target scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureRef {
    /// Texture name.
    pub name: String,
}

impl TextureRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Texture known to the scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texture {
    /// Texture name.
    pub name: String,
    /// Source URL, when the texture was loaded from one.
    #[serde(default)]
    pub url: Option<String>,
}

impl Texture {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    /// Set the source URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
