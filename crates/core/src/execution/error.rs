//! Error types for execution state derivation and transitions.

use crate::template::TemplateError;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while deriving execution state or validating a
/// step transition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// An event or transition references a step id that is not part of the
    /// executed template. This indicates a caller bug and fails loudly.
    #[error("step {id} is not part of the executed template")]
    UnknownStep { id: Uuid },

    /// The requested transition is not allowed for the step's current
    /// state (e.g. starting or completing a step that is already done).
    #[error("invalid transition for step {id}: step is already done")]
    InvalidTransition { id: Uuid },

    /// A step was marked done without ever having been started.
    #[error("step {id} cannot be marked done before it was started")]
    MissingStart { id: Uuid },

    /// The executed template itself is structurally invalid.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Type alias for Result with ExecutionError.
pub type ExecutionResult<T> = Result<T, ExecutionError>;
