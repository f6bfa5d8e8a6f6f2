//! Loader for the `.checklist-kit/` directory structure.
//!
//! This module loads and parses all definition files from a project's
//! `.checklist-kit/` directory:
//! - `config.toml`: global settings
//! - `templates/*.yaml`: process template definitions
//!
//! Missing files and directories are not errors; the loader falls back to
//! defaults and an empty library. Files that exist and fail to parse
//! or validate surface a [`ConfigError`] naming the offending path.

use std::path::Path;

use ck_protocol::template_models::Template;
use walkdir::WalkDir;

use super::error::{ConfigError, ConfigResult};
use super::models::{GlobalConfig, Library};
use crate::template::validate_template;

/// Load all settings and template definitions below `root`.
///
/// Template ids missing from a definition file are generated at parse time,
/// so a file only needs to pin ids once it participates in revision
/// tracking.
pub async fn load_library(root: &Path) -> ConfigResult<Library> {
    let kit_dir = root.join(".checklist-kit");

    // If .checklist-kit doesn't exist, return an empty default library
    if !kit_dir.exists() {
        return Ok(Library::default());
    }

    let global = load_global_config(&kit_dir)?;
    let templates = load_templates(&kit_dir)?;

    Ok(Library { global, templates })
}

/// Loads global configuration from `config.toml`.
fn load_global_config(kit_dir: &Path) -> ConfigResult<GlobalConfig> {
    let config_path = kit_dir.join("config.toml");

    if !config_path.exists() {
        return Ok(GlobalConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let config: GlobalConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path,
            source,
        })?;

    Ok(config)
}

/// Loads template definitions from `templates/*.yaml`.
fn load_templates(kit_dir: &Path) -> ConfigResult<Vec<Template>> {
    let templates_dir = kit_dir.join("templates");

    if !templates_dir.exists() {
        return Ok(Vec::new());
    }

    let mut templates = Vec::new();

    for entry in WalkDir::new(&templates_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| ConfigError::DirectoryWalk {
            path: templates_dir.clone(),
            source,
        })?;

        let path = entry.path();
        let is_yaml = path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml");
        if !is_yaml {
            continue;
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let template: Template =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
                path: path.to_path_buf(),
                source,
            })?;

        validate_template(&template).map_err(|err| ConfigError::InvalidTemplate {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

        templates.push(template);
    }

    Ok(templates)
}
