//! Scaffolding of a starter `.checklist-kit/` directory.

pub mod error;
pub mod generator;
pub mod templates;

pub use error::{InitError, InitResult};
pub use generator::{generate_checklist_kit_structure, InitOptions};
