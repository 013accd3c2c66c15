//! Display surfaces that receive generated code.

/// Something that shows generated code to a person, such as an editor pane.
pub trait CodeSurface {
    /// Replace the surface contents with `code`.
    fn set_code(&mut self, code: &str);
}

impl CodeSurface for String {
    fn set_code(&mut self, code: &str) {
        self.clear();
        self.push_str(code);
    }
}

impl<S: CodeSurface + ?Sized> CodeSurface for &mut S {
    fn set_code(&mut self, code: &str) {
        (**self).set_code(code);
    }
}
