//! End-to-end generation over scenes built in code and loaded from JSON.

use proptest::prelude::*;
use scenescript_codegen::{generate_file, GeneratorOptions, SceneCodeGenerator};
use scenescript_core::{Material, MaterialValue, Scene, SceneNode};

const COURTYARD: &str = include_str!("fixtures/courtyard.json");

fn configured_nodes(code: &str) -> Vec<&str> {
    code.lines()
        .filter_map(|line| line.trim_start().strip_prefix("// Configure node "))
        .collect()
}

#[test]
fn test_depth_first_pre_order() {
    let mut scene = Scene::new();
    let a = scene.add_root(SceneNode::mesh("A"));
    let b = scene.add_child(a, SceneNode::mesh("B"));
    scene.add_child(a, SceneNode::mesh("C"));
    scene.add_child(b, SceneNode::mesh("D"));

    let code = SceneCodeGenerator::new().generate(&scene);
    assert_eq!(configured_nodes(&code), vec!["A", "B", "D", "C"]);
}

#[test]
fn test_subtree_traversal() {
    let mut scene = Scene::new();
    let a = scene.add_root(SceneNode::mesh("A"));
    let b = scene.add_child(a, SceneNode::mesh("B"));
    scene.add_child(a, SceneNode::mesh("C"));
    scene.add_child(b, SceneNode::mesh("D"));

    let code = SceneCodeGenerator::new().traverse_nodes(&scene, Some(b));
    assert_eq!(configured_nodes(&code), vec!["B", "D"]);
    assert_eq!(SceneCodeGenerator::new().traverse_nodes(&scene, Some(99)), "");
}

#[test]
fn test_dummy_nodes_hide_only_themselves() {
    let mut scene = Scene::new();
    let gizmo = scene.add_root(SceneNode::mesh("gizmo").with_id("BABYLON-EDITOR-DUMMY-NODE"));
    let handle = scene.add_child(gizmo, SceneNode::mesh("handle"));
    scene.add_child(handle, SceneNode::mesh("tip"));

    let code = SceneCodeGenerator::new().generate(&scene);
    assert_eq!(configured_nodes(&code), vec!["handle", "tip"]);
    assert!(!code.contains("getNodeByName(\"gizmo\")"));
}

#[test]
fn test_custom_dummy_marker() {
    let mut scene = Scene::new();
    scene.add_root(SceneNode::mesh("helper").with_id("__scaffold__1"));
    scene.add_root(SceneNode::mesh("real"));

    let options = GeneratorOptions::new().dummy_node_marker("__scaffold__");
    let code = SceneCodeGenerator::with_options(options).generate(&scene);
    assert_eq!(configured_nodes(&code), vec!["real"]);
}

#[test]
fn test_courtyard_fixture() {
    let scene = Scene::from_json(COURTYARD).unwrap();
    let code = SceneCodeGenerator::new().generate(&scene);

    // Lights are never roots; the dummy grid hides but its child shows
    assert_eq!(configured_nodes(&code), vec!["ground", "statue", "fountain"]);

    assert!(code.contains(
        "\treflectionProbe = new BABYLON.ReflectionProbe(\"fountainProbe\", 256, scene, true);\n\
         \treflectionProbe.renderList.push(scene.getNodeByName(\"ground\"));\n\
         \treflectionProbe.renderList.push(scene.getNodeByName(\"statue\"));\n"
    ));
    assert!(code.contains("\tnode.scaling = new BABYLON.Vector3(10, 1, 10);\n"));
    assert!(code.contains("\tnode.rotation = new BABYLON.Vector3(0, 3.14, 0);\n"));
    assert!(code.contains(
        "\tnode.rotationQuaternion = new BABYLON.Quaternion(0, 0.7071067811865476, 0, 0.7071067811865476);\n"
    ));
    assert!(code.contains("\tnode.material.diffuseTexture = getTextureByName(\"grass.png\", scene);\n"));
    assert!(code.contains("\tnode.material.specularColor = new BABYLON.Color3(0, 0, 0);\n"));
    assert!(code.contains("\tnode.material.checkReadyOnEveryCall = true;\n"));
    assert!(code.contains("\tnode.material = new BABYLON.PBRMaterial(\"marble\", scene);\n"));
    assert!(code.contains("\tnode.material.roughness = 0.35;\n"));
    assert!(!code.contains("_uniformBuffer"));
    assert!(!code.contains("animations"));
    assert!(!code.contains("Configure node sun"));
}

#[test]
fn test_generate_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("courtyard.json");
    let output = dir.path().join("courtyard.js");
    std::fs::write(&input, COURTYARD).unwrap();

    let code = generate_file(&input, &output, GeneratorOptions::default()).unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), code);
}

#[test]
fn test_generate_file_reports_bad_scene() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.json");
    std::fs::write(&input, "{ \"nodes\": [ { \"name\": \"a\", \"parent\": 7 } ] }").unwrap();

    let err = generate_file(&input, dir.path().join("out.js"), GeneratorOptions::default()).unwrap_err();
    assert!(err.to_string().contains("invalid parent index 7"));
}

#[test]
fn test_generate_file_rejects_parent_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cycle.json");
    std::fs::write(
        &input,
        "{ \"nodes\": [ { \"name\": \"a\", \"parent\": 1 }, { \"name\": \"b\", \"parent\": 0 } ] }",
    )
    .unwrap();

    let err = generate_file(&input, dir.path().join("out.js"), GeneratorOptions::default()).unwrap_err();
    assert!(err.to_string().contains("parent links form a cycle"));
    assert!(!dir.path().join("out.js").exists());
}

fn property_name() -> impl Strategy<Value = String> {
    prop_oneof!["_[a-zA-Z]{1,8}", "[a-zA-Z][a-zA-Z0-9]{0,8}"]
}

proptest! {
    #[test]
    fn prop_internal_properties_never_emitted(names in proptest::collection::vec(property_name(), 0..12)) {
        let mut material = Material::standard("m");
        for (i, name) in names.iter().enumerate() {
            material.set(name.clone(), MaterialValue::from(i as f64));
        }
        let mut scene = Scene::new();
        let index = scene.add_material(material);
        scene.add_root(SceneNode::mesh("n").with_material(index));

        let code = SceneCodeGenerator::new().generate(&scene);
        for line in code.lines() {
            if let Some(rest) = line.trim_start().strip_prefix("node.material.") {
                prop_assert!(!rest.starts_with('_'), "internal property emitted: {}", line);
            }
        }
        let expected = names.iter().collect::<std::collections::HashSet<_>>()
            .into_iter()
            .filter(|name| !name.starts_with('_'))
            .count();
        let emitted = code.lines().filter(|line| line.trim_start().starts_with("node.material.")).count();
        prop_assert_eq!(emitted, expected);
    }
}
