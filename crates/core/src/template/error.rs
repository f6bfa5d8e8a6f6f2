//! Error types for template validation.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while validating a template's item sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A non-empty item sequence does not start with a section.
    #[error("template items must start with a section")]
    InvalidStructure,

    /// An item title exceeds the 200 character limit.
    #[error("title of item {id} exceeds {max} characters")]
    TitleTooLong { id: Uuid, max: usize },
}

/// Type alias for Result with TemplateError.
pub type TemplateResult<T> = Result<T, TemplateError>;
