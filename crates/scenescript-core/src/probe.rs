//! Reflection probes.

use serde::{Deserialize, Serialize};

/// Default cube-texture width for new probes.
pub const DEFAULT_PROBE_SIZE: u32 = 512;

/// A reflection probe capturing the environment into a cube texture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionProbe {
    /// Probe name. Empty names mark editor placeholders.
    pub name: String,
    /// Cube-texture width in pixels.
    #[serde(default = "default_size")]
    pub size: u32,
    /// Whether the cube texture generates mip maps.
    #[serde(default)]
    pub generate_mip_maps: bool,
    /// Names of nodes rendered into the probe, in order.
    #[serde(default)]
    pub render_list: Vec<String>,
}

fn default_size() -> u32 {
    DEFAULT_PROBE_SIZE
}

impl ReflectionProbe {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into(),
            size,
            generate_mip_maps: false,
            render_list: Vec::new(),
        }
    }

    /// Enable mip-map generation.
    pub fn with_mip_maps(mut self) -> Self {
        self.generate_mip_maps = true;
        self
    }

    /// Append a node name to the render list.
    pub fn render(mut self, node: impl Into<String>) -> Self {
        self.render_list.push(node.into());
        self
    }

    /// Placeholder probes have no name and are not exported.
    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty()
    }
}
