//! Custom assertion helpers over derived execution views.

#![allow(dead_code)]

use ck_protocol::view_models::{ExecutionView, StepStatus};
use uuid::Uuid;

/// Status of one step by id; panics when the step is missing from the view.
pub fn step_status(view: &ExecutionView, step_id: Uuid) -> StepStatus {
    view.step(step_id)
        .unwrap_or_else(|| panic!("step {step_id} missing from view"))
        .status
}

/// Section statuses in template order.
pub fn section_statuses(view: &ExecutionView) -> Vec<StepStatus> {
    view.sections.iter().map(|section| section.status).collect()
}

/// Assert that exactly one step is active and that it is `expected`.
pub fn assert_active(view: &ExecutionView, expected: Uuid) {
    assert_eq!(view.active_step, Some(expected), "wrong active step");
    let active: Vec<Uuid> = view
        .sections
        .iter()
        .flat_map(|section| section.steps.iter())
        .filter(|step| step.status == StepStatus::Active)
        .map(|step| step.id)
        .collect();
    assert_eq!(active, vec![expected], "exactly one step must be active");
}

/// Assert that no step is active and the view reports completion.
pub fn assert_complete(view: &ExecutionView) {
    assert_eq!(view.active_step, None, "complete view has no active step");
    assert!(view.is_complete(), "view must report completion");
    assert!(
        view.sections
            .iter()
            .flat_map(|section| section.steps.iter())
            .all(|step| step.status == StepStatus::Done),
        "every step must be done"
    );
}
