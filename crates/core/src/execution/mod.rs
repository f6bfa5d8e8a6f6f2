//! Execution state derivation and transitions.
//!
//! An execution's state is never stored: it is recomputed on demand from the
//! pinned template revision plus the append-only event log. This module
//! holds the pure pieces: [`derive::derive`] for the status reduction and
//! [`transitions`] for validating the two allowed mutations.

pub mod derive;
pub mod error;
pub mod transitions;

pub use derive::derive;
pub use error::{ExecutionError, ExecutionResult};
pub use transitions::{mark_step_done, mark_step_started};
