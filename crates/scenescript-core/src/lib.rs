//! scenescript-core: scene graph model for SceneScript.
//!
//! A [`Scene`] holds nodes, materials, textures and reflection probes. It is
//! built in code or loaded from a JSON description, and is read-only input
//! to the generators in `scenescript-codegen`.
//!
//! # Quick Start
//!
//! ```
//! use scenescript_core::{Color3, DVec3, Material, Scene, SceneNode};
//!
//! let mut scene = Scene::new();
//! let material = scene.add_material(
//!     Material::standard("red").with("diffuseColor", Color3::new(1.0, 0.0, 0.0)),
//! );
//! scene.add_root(
//!     SceneNode::mesh("Box")
//!         .with_position(DVec3::new(1.0, 2.0, 3.0))
//!         .with_material(material),
//! );
//! assert_eq!(scene.root_meshes(), vec![0]);
//! ```

pub mod error;
pub mod material;
pub mod node;
pub mod probe;
pub mod scene;

pub use error::{Result, SceneError};
pub use material::{Color3, Color4, Material, MaterialKind, MaterialValue, Texture, TextureRef};
pub use node::{NodeKind, SceneNode};
pub use probe::{ReflectionProbe, DEFAULT_PROBE_SIZE};
pub use scene::Scene;

pub use glam::{DQuat, DVec2, DVec3};
