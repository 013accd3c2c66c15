//! Value formatting: scene values to JavaScript expression text.
//!
//! Everything here is a pure function of its input; none of it looks at
//! scene state.

use scenescript_core::{Color3, Color4, DQuat, DVec2, DVec3};

/// Formats vectors, quaternions and colors as engine constructor calls.
#[derive(Debug, Clone, Copy)]
pub struct ValueFormatter<'a> {
    namespace: &'a str,
}

impl Default for ValueFormatter<'static> {
    fn default() -> Self {
        Self::new("BABYLON")
    }
}

impl<'a> ValueFormatter<'a> {
    /// Create a formatter for the given engine namespace.
    pub fn new(namespace: &'a str) -> Self {
        Self { namespace }
    }

    fn construct(&self, class: &str, components: &[f64]) -> String {
        let args: Vec<String> = components.iter().map(|&c| number(c)).collect();
        format!("new {}.{}({})", self.namespace, class, args.join(", "))
    }

    /// `new BABYLON.Vector2(x, y)`
    pub fn vector2(&self, v: DVec2) -> String {
        self.construct("Vector2", &[v.x, v.y])
    }

    /// `new BABYLON.Vector3(x, y, z)`
    pub fn vector3(&self, v: DVec3) -> String {
        self.construct("Vector3", &[v.x, v.y, v.z])
    }

    /// `new BABYLON.Quaternion(x, y, z, w)`
    pub fn quaternion(&self, q: DQuat) -> String {
        self.construct("Quaternion", &[q.x, q.y, q.z, q.w])
    }

    /// `new BABYLON.Color3(r, g, b)`
    pub fn color3(&self, c: Color3) -> String {
        self.construct("Color3", &[c.r, c.g, c.b])
    }

    /// `new BABYLON.Color4(r, g, b, a)`
    pub fn color4(&self, c: Color4) -> String {
        self.construct("Color4", &[c.r, c.g, c.b, c.a])
    }
}

/// Render a number the way JavaScript's `String(n)` does.
pub fn number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{}", value);
    }

    // JS writes an explicit sign on positive exponents
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

/// Render a boolean literal.
pub fn boolean(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Quote text as a double-quoted JavaScript string literal.
pub fn string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Make text safe to place after `//` on a single line.
pub fn comment_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' | '\u{2028}' | '\u{2029}' => ' ',
            c => c,
        })
        .collect()
}

/// Whether `name` can be used with dot access (`obj.name`).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Member access expression: `obj.name`, or `obj["name"]` when the name
/// is not a plain identifier.
pub fn member(object: &str, name: &str) -> String {
    if is_identifier(name) {
        format!("{}.{}", object, name)
    } else {
        format!("{}[{}]", object, string_literal(name))
    }
}
