//! Generator option resolution.
//!
//! Options come from an optional `scenescript.toml`, then command-line
//! flags override individual keys.

use anyhow::{Context, Result};
use scenescript_codegen::GeneratorOptions;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "scenescript.toml";

/// Flag values that override file options.
#[derive(Debug, Default)]
pub struct Overrides {
    pub function_name: Option<String>,
    pub namespace: Option<String>,
    pub no_reflection_probes: bool,
}

/// Load options from `config` (or the default file if present) and apply
/// the overrides.
pub fn resolve(config: Option<&Path>, overrides: Overrides) -> Result<GeneratorOptions> {
    let mut options = match config {
        Some(path) => GeneratorOptions::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            GeneratorOptions::from_path(DEFAULT_CONFIG_FILE)
                .with_context(|| format!("Failed to load {}", DEFAULT_CONFIG_FILE))?
        }
        None => GeneratorOptions::default(),
    };

    if let Some(name) = overrides.function_name {
        options = options.function_name(name);
    }
    if let Some(namespace) = overrides.namespace {
        options = options.namespace(namespace);
    }
    if overrides.no_reflection_probes {
        options = options.without_reflection_probes();
    }
    Ok(options)
}
