//! Scene: the read-only input to code generation.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneError};
use crate::material::{Material, Texture};
use crate::node::SceneNode;
use crate::probe::ReflectionProbe;

/// A scene graph with its materials, textures and reflection probes.
///
/// Nodes are stored flat; hierarchy is expressed through `parent` indices
/// and the derived `children` lists. Collection order is significant: it is
/// the order generators visit siblings in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// All nodes (meshes, lights, cameras, transform nodes).
    #[serde(default)]
    pub nodes: Vec<SceneNode>,
    /// Materials.
    #[serde(default)]
    pub materials: Vec<Material>,
    /// Textures.
    #[serde(default)]
    pub textures: Vec<Texture>,
    /// Reflection probes, in declaration order.
    #[serde(default)]
    pub reflection_probes: Vec<ReflectionProbe>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON scene description and link its hierarchy.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut scene: Scene = serde_json::from_str(json)?;
        scene.link_hierarchy()?;
        Ok(scene)
    }

    /// Read a JSON scene description from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut scene: Scene = serde_json::from_reader(reader)?;
        scene.link_hierarchy()?;
        Ok(scene)
    }

    /// Read a JSON scene description from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Get the total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Add a root node and return its index.
    pub fn add_root(&mut self, mut node: SceneNode) -> usize {
        let index = self.nodes.len();
        node.parent = None;
        self.nodes.push(node);
        index
    }

    /// Add a child node to a parent and return its index.
    ///
    /// An out-of-range parent is still recorded on the node, so the node is
    /// neither a root nor reachable from one, and `link_hierarchy` rejects it.
    pub fn add_child(&mut self, parent: usize, mut node: SceneNode) -> usize {
        let index = self.nodes.len();
        node.parent = Some(parent);
        self.nodes.push(node);
        if parent < index {
            self.nodes[parent].children.push(index);
        }
        index
    }

    /// Add a material and return its index.
    pub fn add_material(&mut self, material: Material) -> usize {
        let index = self.materials.len();
        self.materials.push(material);
        index
    }

    /// Add a texture and return its index.
    pub fn add_texture(&mut self, texture: Texture) -> usize {
        let index = self.textures.len();
        self.textures.push(texture);
        index
    }

    /// Add a reflection probe and return its index.
    pub fn add_reflection_probe(&mut self, probe: ReflectionProbe) -> usize {
        let index = self.reflection_probes.len();
        self.reflection_probes.push(probe);
        index
    }

    /// Rebuild every node's `children` from the `parent` links and check
    /// material references. Parent chains must end at a root.
    pub fn link_hierarchy(&mut self) -> Result<()> {
        let count = self.nodes.len();
        for node in &mut self.nodes {
            node.children.clear();
        }
        for index in 0..count {
            let node = &self.nodes[index];
            if let Some(material) = node.material {
                if material >= self.materials.len() {
                    return Err(SceneError::InvalidMaterial { node: index, material });
                }
            }
            if let Some(parent) = node.parent {
                if parent >= count || parent == index {
                    return Err(SceneError::InvalidParent { node: index, parent });
                }
                self.nodes[parent].children.push(index);
            }
        }
        self.check_acyclic()
    }

    /// Walk each parent chain once; a chain that revisits a node in progress
    /// is a cycle.
    fn check_acyclic(&self) -> Result<()> {
        #[derive(Clone, Copy, PartialEq, Eq)]
        enum Mark {
            Unvisited,
            InProgress,
            Done,
        }

        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        let mut chain = Vec::new();
        for start in 0..self.nodes.len() {
            let mut current = Some(start);
            while let Some(index) = current {
                match marks[index] {
                    Mark::Done => break,
                    Mark::InProgress => return Err(SceneError::CyclicParent { node: index }),
                    Mark::Unvisited => {
                        marks[index] = Mark::InProgress;
                        chain.push(index);
                        current = self.nodes[index].parent;
                    }
                }
            }
            for index in chain.drain(..) {
                marks[index] = Mark::Done;
            }
        }
        Ok(())
    }

    /// Indices of parentless nodes in the mesh collection, in order.
    ///
    /// Lights, cameras and transform nodes are never roots of an export.
    pub fn root_meshes(&self) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none() && node.kind.is_mesh())
            .map(|(index, _)| index)
            .collect()
    }

    /// Direct children of a node, in collection order.
    pub fn children(&self, index: usize) -> &[usize] {
        self.nodes
            .get(index)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Find a node by exact name.
    pub fn node_by_name(&self, name: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Find a texture by exact name. First match wins.
    pub fn texture_by_name(&self, name: &str) -> Option<&Texture> {
        self.textures.iter().find(|texture| texture.name == name)
    }

    /// Material assigned to a node, if any.
    pub fn material_of(&self, node: &SceneNode) -> Option<&Material> {
        node.material.and_then(|index| self.materials.get(index))
    }

    /// Iterate over a subtree in depth-first pre-order, starting at `root`.
    pub fn traverse_from(&self, root: usize) -> impl Iterator<Item = (usize, &SceneNode)> {
        SceneTraverser::new(self, vec![root])
    }

    /// Iterate over every root mesh subtree in depth-first pre-order.
    pub fn traverse(&self) -> impl Iterator<Item = (usize, &SceneNode)> {
        SceneTraverser::new(self, self.root_meshes())
    }
}

/// Iterator for traversing the scene graph.
struct SceneTraverser<'a> {
    scene: &'a Scene,
    stack: Vec<usize>,
}

impl<'a> SceneTraverser<'a> {
    fn new(scene: &'a Scene, mut roots: Vec<usize>) -> Self {
        roots.retain(|&index| index < scene.nodes.len());
        roots.reverse();
        Self { scene, stack: roots }
    }
}

impl<'a> Iterator for SceneTraverser<'a> {
    type Item = (usize, &'a SceneNode);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.scene.nodes[index];

        // Push children in reverse order so they're processed left-to-right
        for &child in node.children.iter().rev() {
            if child < self.scene.nodes.len() {
                self.stack.push(child);
            }
        }

        Some((index, node))
    }
}
