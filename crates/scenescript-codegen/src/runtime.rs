//! Runtime-support snippets emitted ahead of generated code.
//!
//! Snippets are JavaScript that runs later inside the target program, never
//! inside the generator. Each one carries a version so emitted call sites
//! and the helper they rely on can be matched up when reading output.

use crate::format::string_literal;

/// Version of the runtime-support contract.
pub const RUNTIME_VERSION: u32 = 1;

const TEXTURE_LOOKUP_SOURCE: &str = "\
var getTextureByName = function (name, scene) {
    for (var i = 0; i < scene.textures.length; i++) {
        var texture = scene.textures[i];
        if (texture.name === name) {
            return texture;
        }
    }
    return null;
};";

/// A named, versioned piece of JavaScript support code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSnippet {
    /// Function name call sites use.
    pub name: &'static str,
    /// Contract version.
    pub version: u32,
    /// Parameter names, in call order.
    pub params: &'static [&'static str],
    source: &'static str,
}

impl RuntimeSnippet {
    /// `getTextureByName(name, scene)`: linear search over
    /// `scene.textures` by exact name, returning the first match or `null`.
    pub fn texture_lookup() -> Self {
        Self {
            name: "getTextureByName",
            version: RUNTIME_VERSION,
            params: &["name", "scene"],
            source: TEXTURE_LOOKUP_SOURCE,
        }
    }

    /// Comment line identifying the snippet and its version.
    pub fn header(&self) -> String {
        format!("// scenescript runtime {} v{}", self.name, self.version)
    }

    /// The JavaScript definition, emitted verbatim.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Header and definition together.
    pub fn render(&self) -> String {
        format!("{}\n{}", self.header(), self.source)
    }

    /// Call expression with pre-rendered argument expressions.
    pub fn call(&self, args: &[&str]) -> String {
        debug_assert_eq!(args.len(), self.params.len());
        format!("{}({})", self.name, args.join(", "))
    }

    /// Call site resolving `texture` by name against the `scene` variable.
    pub fn texture_call(&self, texture: &str) -> String {
        let name = string_literal(texture);
        self.call(&[name.as_str(), "scene"])
    }
}
