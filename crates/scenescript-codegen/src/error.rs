//! Error types for code generation.
//!
//! Generation itself never fails; these cover loading options and scenes
//! and writing generated scripts to disk.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur around code generation.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Malformed generator options.
    #[error("Invalid generator options: {0}")]
    Options(#[from] toml::de::Error),

    /// Scene could not be loaded.
    #[error("Scene error: {0}")]
    Scene(#[from] scenescript_core::SceneError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
