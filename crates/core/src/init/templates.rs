//! Embedded scaffold files for .checklist-kit initialization.
//!
//! This module uses `rust-embed` to embed the files from the repository
//! root `templates/` directory into the binary at compile time, so a
//! `.checklist-kit/` structure can be generated without external file
//! dependencies.

use rust_embed::RustEmbed;

/// Embedded scaffold files from the `templates/` directory.
///
/// The path is calculated relative to the crate root:
/// - `CARGO_MANIFEST_DIR` = `crates/core`
/// - `../../templates` = repository root `templates/`
///
/// During development with the `debug-embed` feature, files are read from
/// the filesystem at runtime, allowing iteration without recompilation.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
pub struct ScaffoldAssets;

/// Get scaffold file content by path.
///
/// `path` is relative to the templates root, e.g. `"config.toml"` or
/// `"templates/onboarding.yaml"`.
pub fn get_asset(path: &str) -> Option<String> {
    ScaffoldAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

/// List all scaffold files under a directory prefix, e.g. `"templates/"`.
pub fn list_assets(prefix: &str) -> Vec<String> {
    ScaffoldAssets::iter()
        .map(|path| path.to_string())
        .filter(|path| path.starts_with(prefix))
        .collect()
}
