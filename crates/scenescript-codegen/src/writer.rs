//! Line-oriented script builder.

/// Accumulates indented lines of generated code and joins them once.
#[derive(Debug, Clone)]
pub struct ScriptWriter {
    lines: Vec<String>,
    indent_unit: String,
    level: usize,
}

impl Default for ScriptWriter {
    fn default() -> Self {
        Self::new("\t")
    }
}

impl ScriptWriter {
    /// Create an empty writer using `indent_unit` per nesting level.
    pub fn new(indent_unit: impl Into<String>) -> Self {
        Self {
            lines: Vec::new(),
            indent_unit: indent_unit.into(),
            level: 0,
        }
    }

    /// Append a line at the current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        self.lines
            .push(format!("{}{}", self.indent_unit.repeat(self.level), text));
        self
    }

    /// Append an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Append pre-rendered lines verbatim.
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.lines.extend(text.lines().map(str::to_string));
        self
    }

    /// Increase indentation by one level.
    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Decrease indentation by one level.
    pub fn dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Number of lines written so far.
    pub(crate) fn len(&self) -> usize {
        self.lines.len()
    }

    /// Join all lines. Non-empty output ends with a newline.
    pub fn finish(self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
