//! Error types for the process store boundary.

use crate::execution::ExecutionError;
use crate::template::TemplateError;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur at the store boundary.
///
/// Core validation errors pass through transparently; the lookup variants
/// carry the offending id so a caller can render a useful message.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No saved revision exists for this template id.
    #[error("template {id} not found")]
    TemplateNotFound { id: Uuid },

    /// No template revision with this id exists.
    #[error("template revision {revision} not found")]
    RevisionNotFound { revision: Uuid },

    /// No execution with this id exists.
    #[error("execution {id} not found")]
    ExecutionNotFound { id: Uuid },

    /// The template failed validation on save.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A step transition or derivation was rejected.
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

/// Type alias for Result with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
