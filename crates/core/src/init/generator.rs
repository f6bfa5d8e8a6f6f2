//! Directory structure and file generation for .checklist-kit initialization.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{InitError, InitResult};
use super::templates::{get_asset, list_assets};

/// Options for initializing a .checklist-kit directory.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Target directory where .checklist-kit will be created.
    pub target_dir: PathBuf,

    /// Overwrite an existing .checklist-kit directory.
    pub force: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
        }
    }
}

/// Generate a complete .checklist-kit directory structure.
///
/// Creates:
/// ```text
/// .checklist-kit/
/// ├── config.toml
/// └── templates/
///     └── onboarding.yaml
/// ```
///
/// # Errors
///
/// Returns an `InitError` if the directory already exists (without the
/// force flag), an embedded asset is missing, or a filesystem operation
/// fails.
pub async fn generate_checklist_kit_structure(options: InitOptions) -> InitResult<()> {
    let kit_dir = options.target_dir.join(".checklist-kit");

    if kit_dir.exists() && !options.force {
        return Err(InitError::DirectoryExists(kit_dir));
    }

    create_dir(&kit_dir.join("templates"))?;

    write_asset(&kit_dir, "config.toml")?;
    for asset in list_assets("templates/") {
        write_asset(&kit_dir, &asset)?;
    }

    Ok(())
}

fn create_dir(path: &Path) -> InitResult<()> {
    fs::create_dir_all(path).map_err(|source| InitError::DirectoryCreate {
        path: path.to_path_buf(),
        source,
    })
}

fn write_asset(kit_dir: &Path, asset: &str) -> InitResult<()> {
    let content = get_asset(asset).ok_or_else(|| InitError::AssetNotFound(asset.to_string()))?;
    let path = kit_dir.join(asset);
    fs::write(&path, content).map_err(|source| InitError::FileWrite { path, source })
}
