//! Rendered execution views.
//!
//! These are the derived, read-only structures a presentation layer renders.
//! They are recomputed from a template plus its event log on every change and
//! never stored. The core has no notion of "editable" vs "read-only"
//! rendering; any number of presentation adapters consume the same view.

use crate::execution_models::ExecutionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Displayed status of a single step or section.
///
/// At most one step in the whole view is `Active`; it is the step the user
/// should act on next. A section is `Active` when it contains the active
/// step, `Done` when every step in it is done (vacuously true for a section
/// with zero steps), and `Pending` otherwise.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Active,
    Done,
}

/// A step enriched with its derived execution state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct StepView {
    #[ts(type = "string")]
    pub id: Uuid,
    pub title: String,
    pub description: String,

    /// Timestamp of the first `step_started` event, if any.
    #[ts(type = "string | null")]
    pub started_at: Option<DateTime<Utc>>,
    pub started_by: Option<String>,

    /// Timestamp of the first `step_done` event, if any.
    #[ts(type = "string | null")]
    pub done_at: Option<DateTime<Utc>>,
    pub done_by: Option<String>,

    pub status: StepStatus,
}

/// A section enriched with its derived status and its steps.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct SectionView {
    #[ts(type = "string")]
    pub id: Uuid,
    pub title: String,
    pub status: StepStatus,
    pub steps: Vec<StepView>,
}

/// The full rendered state of one execution.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct ExecutionView {
    #[ts(type = "string")]
    pub execution_id: Uuid,
    #[ts(type = "string")]
    pub template_id: Uuid,
    #[ts(type = "string")]
    pub template_revision: Uuid,
    pub title: String,
    #[ts(type = "string")]
    pub initiated_at: DateTime<Utc>,

    pub sections: Vec<SectionView>,

    /// The single step eligible to be worked on next, if any. `None` when
    /// the template has no steps or every step is done.
    #[ts(type = "string | null")]
    pub active_step: Option<Uuid>,

    pub state: ExecutionState,
}

impl ExecutionView {
    /// Look up a step view by id across all sections.
    pub fn step(&self, step_id: Uuid) -> Option<&StepView> {
        self.sections
            .iter()
            .flat_map(|section| section.steps.iter())
            .find(|step| step.id == step_id)
    }

    /// True when every step is done and the process is complete.
    pub fn is_complete(&self) -> bool {
        self.state == ExecutionState::Done
    }
}
