//! Client-core communication protocol.
//!
//! This module defines the message types exchanged between a presentation
//! layer (web client, CLI, test harness) and the core.
//!
//! The protocol follows an Operation/Event pattern:
//! - `Op`: commands sent from the client to the core
//! - `Event`: state changes pushed from the core to the client
//!
//! Communication is asynchronous and channel-based. Every mutation of an
//! execution triggers a re-derivation of its view, and the resulting
//! `ExecutionUpdated` event fans out to every subscriber of that execution.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::execution_models::{Execution, ExecutionEvent};
use crate::template_models::Template;
use crate::view_models::ExecutionView;

/// Operations sent from a client to the core.
///
/// Uses tagged enum serialization for TypeScript compatibility:
/// ```json
/// {
///   "type": "markStepStarted",
///   "payload": {
///     "execution_id": "uuid-here",
///     "step_id": "uuid-here",
///     "by": "user-42"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Op {
    /// Save a template as a new revision.
    ///
    /// The stored revision id is assigned by the store; whatever the
    /// template carried is replaced.
    SaveTemplate { template: Template },

    /// Fetch the latest saved revision of a template.
    GetTemplate {
        #[ts(type = "string")]
        template_id: Uuid,
    },

    /// Start a new execution of a specific template revision.
    StartExecution {
        #[ts(type = "string")]
        revision: Uuid,
        initiated_by: Option<String>,
    },

    /// Record that a step was started.
    MarkStepStarted {
        #[ts(type = "string")]
        execution_id: Uuid,
        #[ts(type = "string")]
        step_id: Uuid,
        by: Option<String>,
    },

    /// Record that a step was completed.
    MarkStepDone {
        #[ts(type = "string")]
        execution_id: Uuid,
        #[ts(type = "string")]
        step_id: Uuid,
        by: Option<String>,
    },

    /// Fetch the current derived view of an execution.
    GetExecutionView {
        #[ts(type = "string")]
        execution_id: Uuid,
    },
}

/// Events pushed from the core to clients.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Event {
    /// A template revision was saved.
    TemplateSaved { template: Template },

    /// Reply to `Op::GetTemplate`.
    TemplateLoaded { template: Template },

    /// A new execution has been started.
    ExecutionStarted { execution: Execution },

    /// A step event was appended to an execution's log.
    StepEventAppended {
        #[ts(type = "string")]
        execution_id: Uuid,
        event: ExecutionEvent,
    },

    /// An execution's derived view changed.
    ///
    /// Carries the full re-derived view; clients replace their copy rather
    /// than patching it.
    ExecutionUpdated {
        #[ts(type = "string")]
        execution_id: Uuid,
        view: ExecutionView,
    },

    /// Every step of the execution is now done.
    ///
    /// Emitted once, when an appended event first completes the execution.
    ExecutionCompleted {
        #[ts(type = "string")]
        execution_id: Uuid,
    },

    /// An operation could not be carried out.
    OperationFailed { message: String },
}
