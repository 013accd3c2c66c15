//! Generator configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Id marker carried by editor scaffolding nodes.
pub const DEFAULT_DUMMY_NODE_MARKER: &str = "BABYLON-EDITOR-DUMMY-NODE";

/// Options controlling the shape of generated scripts.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Name of the generated entry-point function.
    pub function_name: String,
    /// Engine namespace prefixed to constructors (`BABYLON.Vector3`).
    pub namespace: String,
    /// Indentation unit for statements inside the function.
    pub indent: String,
    /// Nodes whose id contains this marker are not configured.
    pub dummy_node_marker: String,
    /// Material properties starting with this prefix are internal.
    pub internal_prefix: String,
    /// Emit reflection-probe reconstruction.
    pub export_reflection_probes: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            function_name: "CreateBabylonScene".to_string(),
            namespace: "BABYLON".to_string(),
            indent: "\t".to_string(),
            dummy_node_marker: DEFAULT_DUMMY_NODE_MARKER.to_string(),
            internal_prefix: "_".to_string(),
            export_reflection_probes: true,
        }
    }
}

impl GeneratorOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read options from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Set the entry-point function name.
    pub fn function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    /// Set the engine namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the indentation unit.
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set the dummy-node id marker.
    pub fn dummy_node_marker(mut self, marker: impl Into<String>) -> Self {
        self.dummy_node_marker = marker.into();
        self
    }

    /// Skip reflection-probe export.
    pub fn without_reflection_probes(mut self) -> Self {
        self.export_reflection_probes = false;
        self
    }

    /// Whether a material property is internal and must not be exported.
    pub fn is_internal(&self, property: &str) -> bool {
        !self.internal_prefix.is_empty() && property.starts_with(&self.internal_prefix)
    }
}
