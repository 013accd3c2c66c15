//! Code generation from SceneScript scenes to JavaScript.
//!
//! [`SceneCodeGenerator`] walks a [`Scene`](scenescript_core::Scene) and
//! emits a single JavaScript function which, run against a fresh engine
//! scene, restores node transforms, materials and reflection probes.
//!
//! Output layout:
//!
//! ```text
//! // scenescript runtime getTextureByName v1
//! var getTextureByName = function (name, scene) { ... };
//!
//! function CreateBabylonScene(scene) {
//!     // Export reflection probes
//!     ...
//!     // Configure node Box
//!     node = scene.getNodeByName("Box");
//!     node.position = new BABYLON.Vector3(1, 2, 3);
//!     ...
//! }
//! ```
//!
//! Generation never fails. Unknown material kinds, unsupported property
//! values and absent transform attributes are left out of the output.

pub mod error;
pub mod format;
pub mod generator;
pub mod options;
pub mod runtime;
pub mod surface;
pub mod writer;

pub use error::{CodegenError, Result};
pub use format::ValueFormatter;
pub use generator::SceneCodeGenerator;
pub use options::{GeneratorOptions, DEFAULT_DUMMY_NODE_MARKER};
pub use runtime::{RuntimeSnippet, RUNTIME_VERSION};
pub use surface::CodeSurface;
pub use writer::ScriptWriter;

use std::path::Path;

/// Load a JSON scene from `input`, generate its script and write it to
/// `output`. Returns the generated code.
pub fn generate_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: GeneratorOptions,
) -> Result<String> {
    let scene = scenescript_core::Scene::from_path(input)?;
    let code = SceneCodeGenerator::with_options(options).generate(&scene);
    std::fs::write(output, &code)?;
    Ok(code)
}
