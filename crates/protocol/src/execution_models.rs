//! Execution state models.
//!
//! An execution is one tracked run-through of a saved template revision. Its
//! state is never stored directly: it is derived from an append-only log of
//! step events. Events are only ever appended, never edited or removed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// The two things that can happen to a step during an execution.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The step was started.
    StepStarted,

    /// The step was marked done.
    StepDone,
}

/// One entry of an execution's append-only event log.
///
/// Multiple events of the same kind for the same step are allowed (a step
/// can be re-started, or two actors can race a mark); the deriver resolves
/// duplicates deterministically by taking the first event in timestamp
/// order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ExecutionEvent {
    pub kind: EventKind,

    /// The step this event refers to.
    #[ts(type = "string")]
    pub step: Uuid,

    /// When the event happened. Stamped by the store at append time.
    #[ts(type = "string")]
    pub at: DateTime<Utc>,

    /// Opaque id of the actor who triggered the event, when known.
    #[serde(default)]
    pub by: Option<String>,
}

/// Overall lifecycle state of an execution, derived from its steps.
///
/// `Done` iff every step has both a start and a done timestamp. An execution
/// of a template with no steps is vacuously `Done`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionState {
    Started,
    Done,
}

/// One tracked run-through of a template revision.
///
/// Immutable after creation: an execution can never change which template
/// revision it targets. There is no terminal "closed" state; completion is
/// derived from every step being done.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct Execution {
    /// Unique identifier of this execution.
    #[ts(type = "string")]
    pub id: Uuid,

    /// Identity of the template this execution runs.
    #[ts(type = "string")]
    pub template_id: Uuid,

    /// The exact revision snapshot this execution was started from.
    #[ts(type = "string")]
    pub template_revision: Uuid,

    /// When the execution was started.
    #[ts(type = "string")]
    pub initiated_at: DateTime<Utc>,

    /// Opaque id of the actor who started it, when known.
    #[serde(default)]
    pub initiated_by: Option<String>,
}
