//! Loading of settings and template definitions from `.checklist-kit/`.

pub mod error;
pub mod loader;
pub mod models;

pub use error::{ConfigError, ConfigResult};
pub use loader::load_library;
pub use models::{GlobalConfig, Library};
