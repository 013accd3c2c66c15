//! Scene-to-JavaScript generator.

use scenescript_core::{MaterialKind, MaterialValue, Scene, SceneNode};
use tracing::{debug, trace};

use crate::format::{self, ValueFormatter};
use crate::options::GeneratorOptions;
use crate::runtime::RuntimeSnippet;
use crate::surface::CodeSurface;
use crate::writer::ScriptWriter;

/// Generates a JavaScript function that reconfigures a scene.
///
/// The output assumes the target scene already contains nodes with matching
/// names; it looks each one up and restores transform and material state,
/// and rebuilds reflection probes.
///
/// ```
/// use scenescript_codegen::SceneCodeGenerator;
/// use scenescript_core::{DVec3, Scene, SceneNode};
///
/// let mut scene = Scene::new();
/// scene.add_root(SceneNode::mesh("Box").with_position(DVec3::new(1.0, 2.0, 3.0)));
///
/// let code = SceneCodeGenerator::new().generate(&scene);
/// assert!(code.contains("node.position = new BABYLON.Vector3(1, 2, 3);"));
/// ```
#[derive(Debug, Clone)]
pub struct SceneCodeGenerator {
    options: GeneratorOptions,
    texture_lookup: RuntimeSnippet,
}

impl Default for SceneCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneCodeGenerator {
    /// Create a generator with default options.
    pub fn new() -> Self {
        Self::with_options(GeneratorOptions::default())
    }

    /// Create a generator with custom options.
    pub fn with_options(options: GeneratorOptions) -> Self {
        Self {
            options,
            texture_lookup: RuntimeSnippet::texture_lookup(),
        }
    }

    /// Options in use.
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    fn values(&self) -> ValueFormatter<'_> {
        ValueFormatter::new(&self.options.namespace)
    }

    /// Writer positioned inside the generated function body.
    fn body_writer(&self) -> ScriptWriter {
        let mut w = ScriptWriter::new(self.options.indent.clone());
        w.indent();
        w
    }

    /// Generate the complete script for `scene`.
    pub fn generate(&self, scene: &Scene) -> String {
        let mut w = ScriptWriter::new(self.options.indent.clone());

        w.raw(&self.texture_lookup.render());
        w.blank();
        w.line(format!("function {}(scene) {{", self.options.function_name));
        w.indent();
        w.line("var engine = scene.getEngine();");
        w.line("var node = null;");
        w.blank();

        if self.options.export_reflection_probes {
            self.write_reflection_probes(&mut w, scene);
            w.blank();
        }
        self.write_roots(&mut w, scene);

        w.dedent();
        w.line("}");

        debug!(
            nodes = scene.node_count(),
            probes = scene.reflection_probes.len(),
            lines = w.len(),
            "generated scene script"
        );
        w.finish()
    }

    /// Generate the script and push it into `surface` for review.
    pub fn generate_into(&self, scene: &Scene, surface: &mut dyn CodeSurface) -> String {
        let code = self.generate(scene);
        surface.set_code(&code);
        code
    }

    /// Statements rebuilding every named reflection probe.
    pub fn export_reflection_probes(&self, scene: &Scene) -> String {
        let mut w = self.body_writer();
        self.write_reflection_probes(&mut w, scene);
        w.finish()
    }

    fn write_reflection_probes(&self, w: &mut ScriptWriter, scene: &Scene) {
        w.line("// Export reflection probes");
        w.line("var reflectionProbe = null;");

        for probe in &scene.reflection_probes {
            if probe.is_placeholder() {
                trace!("skipping placeholder reflection probe");
                continue;
            }

            w.line(format!(
                "reflectionProbe = new {}.ReflectionProbe({}, {}, scene, {});",
                self.options.namespace,
                format::string_literal(&probe.name),
                probe.size,
                format::boolean(probe.generate_mip_maps),
            ));
            for node in &probe.render_list {
                w.line(format!(
                    "reflectionProbe.renderList.push(scene.getNodeByName({}));",
                    format::string_literal(node)
                ));
            }
        }
    }

    /// Configuration statements for a subtree, or for every root mesh when
    /// `node` is `None`. Output is depth-first pre-order.
    pub fn traverse_nodes(&self, scene: &Scene, node: Option<usize>) -> String {
        let mut w = self.body_writer();
        match node {
            Some(index) => self.write_subtree(&mut w, scene, index),
            None => self.write_roots(&mut w, scene),
        }
        w.finish()
    }

    fn write_roots(&self, w: &mut ScriptWriter, scene: &Scene) {
        for root in scene.root_meshes() {
            self.write_subtree(w, scene, root);
        }
    }

    fn write_subtree(&self, w: &mut ScriptWriter, scene: &Scene, root: usize) {
        for (_, node) in scene.traverse_from(root) {
            // Scaffolding nodes are not configured, but their children are
            if node.is_dummy(&self.options.dummy_node_marker) {
                trace!(node = %node.name, "skipping dummy node");
                continue;
            }
            self.write_node(w, scene, node);
        }
    }

    fn write_node(&self, w: &mut ScriptWriter, scene: &Scene, node: &SceneNode) {
        w.line(format!("// Configure node {}", format::comment_text(&node.name)));
        w.line(format!(
            "node = scene.getNodeByName({});",
            format::string_literal(&node.name)
        ));
        self.write_node_transform(w, node);
        if node.kind.is_renderable() {
            self.write_node_material(w, scene, node);
        }
    }

    /// One assignment per transform attribute the node has.
    pub fn export_node_transform(&self, node: &SceneNode) -> String {
        let mut w = self.body_writer();
        self.write_node_transform(&mut w, node);
        w.finish()
    }

    fn write_node_transform(&self, w: &mut ScriptWriter, node: &SceneNode) {
        if !node.has_transform() {
            return;
        }
        let values = self.values();
        if let Some(position) = node.position {
            w.line(format!("node.position = {};", values.vector3(position)));
        }
        if let Some(rotation) = node.rotation {
            w.line(format!("node.rotation = {};", values.vector3(rotation)));
        }
        if let Some(rotation) = node.rotation_quaternion {
            w.line(format!(
                "node.rotationQuaternion = {};",
                values.quaternion(rotation)
            ));
        }
        if let Some(scaling) = node.scaling {
            w.line(format!("node.scaling = {};", values.vector3(scaling)));
        }
    }

    /// Material constructor and property assignments for a node.
    pub fn export_node_material(&self, scene: &Scene, node: &SceneNode) -> String {
        let mut w = self.body_writer();
        self.write_node_material(&mut w, scene, node);
        w.finish()
    }

    fn write_node_material(&self, w: &mut ScriptWriter, scene: &Scene, node: &SceneNode) {
        let Some(material) = scene.material_of(node) else {
            return;
        };

        let class = match &material.kind {
            MaterialKind::Standard => "StandardMaterial",
            MaterialKind::Pbr => "PBRMaterial",
            MaterialKind::Other(kind) => {
                // Without a constructor there is nothing to assign to
                debug!(node = %node.name, material = %material.name, kind = %kind, "skipping unsupported material kind");
                return;
            }
        };

        w.blank();
        w.line(format!(
            "node.material = new {}.{}({}, scene);",
            self.options.namespace,
            class,
            format::string_literal(&material.name)
        ));

        let values = self.values();
        for (property, value) in &material.properties {
            if self.options.is_internal(property) {
                continue;
            }
            let rendered = match value {
                MaterialValue::Number { value } => format::number(*value),
                MaterialValue::Boolean { value } => format::boolean(*value).to_string(),
                MaterialValue::Vector2 { value } => values.vector2(*value),
                MaterialValue::Vector3 { value } => values.vector3(*value),
                MaterialValue::Color3 { value } => values.color3(*value),
                MaterialValue::Color4 { value } => values.color4(*value),
                MaterialValue::Texture { value } => self.texture_lookup.texture_call(&value.name),
                MaterialValue::Unsupported => {
                    trace!(property = %property, "skipping unsupported material property");
                    continue;
                }
            };
            w.line(format!(
                "{} = {};",
                format::member("node.material", property),
                rendered
            ));
        }
        w.blank();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenescript_core::{Color3, DQuat, DVec3, Material, NodeKind, ReflectionProbe, TextureRef};

    fn box_scene() -> Scene {
        let mut scene = Scene::new();
        let material = scene.add_material(
            Material::standard("red").with("diffuseColor", Color3::new(1.0, 0.0, 0.0)),
        );
        scene.add_root(
            SceneNode::mesh("Box")
                .with_position(DVec3::new(1.0, 2.0, 3.0))
                .with_material(material),
        );
        scene
    }

    #[test]
    fn test_transform_absent_is_empty() {
        let generator = SceneCodeGenerator::new();
        assert_eq!(generator.export_node_transform(&SceneNode::mesh("empty")), "");
    }

    #[test]
    fn test_transform_order() {
        let node = SceneNode::mesh("n")
            .with_scaling(DVec3::splat(2.0))
            .with_rotation_quaternion(DQuat::IDENTITY)
            .with_rotation(DVec3::new(0.0, 1.5, 0.0))
            .with_position(DVec3::ZERO);
        let code = SceneCodeGenerator::new().export_node_transform(&node);
        assert_eq!(
            code,
            "\tnode.position = new BABYLON.Vector3(0, 0, 0);\n\
             \tnode.rotation = new BABYLON.Vector3(0, 1.5, 0);\n\
             \tnode.rotationQuaternion = new BABYLON.Quaternion(0, 0, 0, 1);\n\
             \tnode.scaling = new BABYLON.Vector3(2, 2, 2);\n"
        );
    }

    #[test]
    fn test_single_mesh_statement_sequence() {
        let code = SceneCodeGenerator::new().traverse_nodes(&box_scene(), None);
        assert_eq!(
            code,
            "\t// Configure node Box\n\
             \tnode = scene.getNodeByName(\"Box\");\n\
             \tnode.position = new BABYLON.Vector3(1, 2, 3);\n\
             \n\
             \tnode.material = new BABYLON.StandardMaterial(\"red\", scene);\n\
             \tnode.material.diffuseColor = new BABYLON.Color3(1, 0, 0);\n\
             \n"
        );
    }

    #[test]
    fn test_material_value_kinds() {
        let mut scene = Scene::new();
        let material = scene.add_material(
            Material::pbr("metal")
                .with("alpha", 0.5)
                .with("backFaceCulling", false)
                .with("uvScale", scenescript_core::DVec2::new(2.0, 2.0))
                .with("emissive", DVec3::new(0.0, 0.0, 1.0))
                .with("tint", scenescript_core::Color4::new(1.0, 1.0, 1.0, 0.5))
                .with("albedoTexture", TextureRef::new("steel"))
                .with("_cachedDefines", 3.0)
                .with("onBind", MaterialValue::Unsupported),
        );
        let node = SceneNode::mesh("m").with_material(material);
        let code = SceneCodeGenerator::new().export_node_material(&scene, &node);
        assert_eq!(
            code,
            "\n\
             \tnode.material = new BABYLON.PBRMaterial(\"metal\", scene);\n\
             \tnode.material.alpha = 0.5;\n\
             \tnode.material.backFaceCulling = false;\n\
             \tnode.material.uvScale = new BABYLON.Vector2(2, 2);\n\
             \tnode.material.emissive = new BABYLON.Vector3(0, 0, 1);\n\
             \tnode.material.tint = new BABYLON.Color4(1, 1, 1, 0.5);\n\
             \tnode.material.albedoTexture = getTextureByName(\"steel\", scene);\n\
             \n"
        );
    }

    #[test]
    fn test_no_material_emits_nothing() {
        let scene = Scene::new();
        let code = SceneCodeGenerator::new().export_node_material(&scene, &SceneNode::mesh("bare"));
        assert_eq!(code, "");
    }

    #[test]
    fn test_unknown_material_kind_emits_nothing() {
        let mut scene = Scene::new();
        let material = scene.add_material(
            Material::new("shader", MaterialKind::Other("ShaderMaterial".into())).with("alpha", 1.0),
        );
        let node = SceneNode::mesh("m").with_material(material);
        assert_eq!(SceneCodeGenerator::new().export_node_material(&scene, &node), "");
    }

    #[test]
    fn test_non_identifier_property_uses_brackets() {
        let mut scene = Scene::new();
        let material = scene.add_material(Material::standard("m").with("odd-name", 1.0));
        let node = SceneNode::mesh("n").with_material(material);
        let code = SceneCodeGenerator::new().export_node_material(&scene, &node);
        assert!(code.contains("\tnode.material[\"odd-name\"] = 1;\n"));
    }

    #[test]
    fn test_lights_get_no_material_block() {
        let mut scene = Scene::new();
        let material = scene.add_material(Material::standard("m").with("alpha", 1.0));
        let root = scene.add_root(SceneNode::mesh("root"));
        let mut light = SceneNode::new("lamp", NodeKind::Light).with_position(DVec3::Y);
        light.material = Some(material);
        scene.add_child(root, light);

        let code = SceneCodeGenerator::new().traverse_nodes(&scene, None);
        assert!(code.contains("\t// Configure node lamp\n"));
        assert!(code.contains("\tnode.position = new BABYLON.Vector3(0, 1, 0);\n"));
        assert!(!code.contains("node.material"));
    }

    #[test]
    fn test_two_probes_keep_both_constructors() {
        let mut scene = Scene::new();
        scene.add_reflection_probe(ReflectionProbe::new("first", 256).render("A"));
        scene.add_reflection_probe(ReflectionProbe::new("", 512).render("ignored"));
        scene.add_reflection_probe(ReflectionProbe::new("second", 512).with_mip_maps().render("B").render("C"));

        let code = SceneCodeGenerator::new().export_reflection_probes(&scene);
        assert_eq!(
            code,
            "\t// Export reflection probes\n\
             \tvar reflectionProbe = null;\n\
             \treflectionProbe = new BABYLON.ReflectionProbe(\"first\", 256, scene, false);\n\
             \treflectionProbe.renderList.push(scene.getNodeByName(\"A\"));\n\
             \treflectionProbe = new BABYLON.ReflectionProbe(\"second\", 512, scene, true);\n\
             \treflectionProbe.renderList.push(scene.getNodeByName(\"B\"));\n\
             \treflectionProbe.renderList.push(scene.getNodeByName(\"C\"));\n"
        );
    }

    #[test]
    fn test_generate_wraps_function() {
        let code = SceneCodeGenerator::new().generate(&box_scene());
        assert!(code.starts_with("// scenescript runtime getTextureByName v1\nvar getTextureByName = function (name, scene) {"));
        assert!(code.contains("\nfunction CreateBabylonScene(scene) {\n\tvar engine = scene.getEngine();\n\tvar node = null;\n"));
        assert!(code.ends_with("\n}\n"));

        let probes = code.find("// Export reflection probes").unwrap();
        let nodes = code.find("// Configure node Box").unwrap();
        assert!(probes < nodes);
    }

    #[test]
    fn test_generate_into_surface() {
        let mut surface = String::from("stale");
        let code = SceneCodeGenerator::new().generate_into(&box_scene(), &mut surface);
        assert_eq!(surface, code);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let generator = SceneCodeGenerator::new();
        let scene = box_scene();
        assert_eq!(generator.generate(&scene), generator.generate(&scene));
    }

    #[test]
    fn test_options_shape_output() {
        let options = GeneratorOptions::new()
            .function_name("BuildLevel")
            .namespace("ENGINE")
            .indent("  ")
            .without_reflection_probes();
        let code = SceneCodeGenerator::with_options(options).generate(&box_scene());
        assert!(code.contains("function BuildLevel(scene) {\n  var engine"));
        assert!(code.contains("  node.position = new ENGINE.Vector3(1, 2, 3);\n"));
        assert!(code.contains("new ENGINE.StandardMaterial(\"red\", scene)"));
        assert!(!code.contains("reflectionProbe"));
    }
}
