//! Scene graph nodes.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Category of a scene node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Renderable mesh.
    #[default]
    Mesh,
    /// Instance of another mesh.
    InstancedMesh,
    /// Transform-only node with no geometry.
    TransformNode,
    /// Light source.
    Light,
    /// Camera.
    Camera,
}

impl NodeKind {
    /// Whether nodes of this kind render geometry and carry a material.
    pub fn is_renderable(self) -> bool {
        matches!(self, Self::Mesh | Self::InstancedMesh)
    }

    /// Whether nodes of this kind live in the scene's mesh collection.
    pub fn is_mesh(self) -> bool {
        self.is_renderable()
    }
}

/// A node in the scene graph.
///
/// Transform attributes are optional: a node only carries the ones it
/// actually has, and nothing is defaulted on export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    /// Node name, used for runtime lookup.
    pub name: String,
    /// Unique id. Editor scaffolding nodes carry a marker in here.
    #[serde(default)]
    pub id: String,
    /// Node category.
    #[serde(default)]
    pub kind: NodeKind,
    /// Local position.
    #[serde(default)]
    pub position: Option<DVec3>,
    /// Euler rotation in radians.
    #[serde(default)]
    pub rotation: Option<DVec3>,
    /// Rotation as a quaternion.
    #[serde(default)]
    pub rotation_quaternion: Option<DQuat>,
    /// Local scale.
    #[serde(default)]
    pub scaling: Option<DVec3>,
    /// Parent node index. The child does not own its parent.
    #[serde(default)]
    pub parent: Option<usize>,
    /// Material index into the scene's material list.
    #[serde(default)]
    pub material: Option<usize>,
    /// Child node indices, derived from `parent` links.
    #[serde(skip)]
    pub children: Vec<usize>,
}

impl SceneNode {
    /// Create a named node of the given kind. The id defaults to the name.
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            kind,
            ..Default::default()
        }
    }

    /// Create a mesh node.
    pub fn mesh(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Mesh)
    }

    /// Set the id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the position.
    pub fn with_position(mut self, position: DVec3) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the Euler rotation.
    pub fn with_rotation(mut self, rotation: DVec3) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Set the rotation quaternion.
    pub fn with_rotation_quaternion(mut self, rotation: DQuat) -> Self {
        self.rotation_quaternion = Some(rotation);
        self
    }

    /// Set the scale.
    pub fn with_scaling(mut self, scaling: DVec3) -> Self {
        self.scaling = Some(scaling);
        self
    }

    /// Set the material index.
    pub fn with_material(mut self, material: usize) -> Self {
        self.material = Some(material);
        self
    }

    /// Whether any transform attribute is present.
    pub fn has_transform(&self) -> bool {
        self.position.is_some()
            || self.rotation.is_some()
            || self.rotation_quaternion.is_some()
            || self.scaling.is_some()
    }

    /// Whether this node's id contains the editor scaffolding marker.
    pub fn is_dummy(&self, marker: &str) -> bool {
        !marker.is_empty() && self.id.contains(marker)
    }
}
