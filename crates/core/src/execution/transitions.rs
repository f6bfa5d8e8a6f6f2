//! Step transition validation.
//!
//! The two allowed mutations of an execution are "mark step started" and
//! "mark step done". Both are validated here against the current derived
//! view and produce the event to append; the store stamps the clock and owns
//! the append itself, so these functions stay pure.

use chrono::{DateTime, Utc};
use ck_protocol::execution_models::{EventKind, ExecutionEvent};
use ck_protocol::view_models::{ExecutionView, StepStatus};
use uuid::Uuid;

use super::error::{ExecutionError, ExecutionResult};

/// Validate starting a step and build the event to append.
///
/// Re-starting an already-started step is allowed (the duplicate is absorbed
/// by derivation), and the step does not have to be the active one; the
/// active-step pointer is advisory. Only a step that is already done rejects
/// the transition.
pub fn mark_step_started(
    view: &ExecutionView,
    step_id: Uuid,
    by: Option<String>,
    at: DateTime<Utc>,
) -> ExecutionResult<ExecutionEvent> {
    let step = view
        .step(step_id)
        .ok_or(ExecutionError::UnknownStep { id: step_id })?;

    if step.status == StepStatus::Done {
        return Err(ExecutionError::InvalidTransition { id: step_id });
    }

    Ok(ExecutionEvent {
        kind: EventKind::StepStarted,
        step: step_id,
        at,
        by,
    })
}

/// Validate completing a step and build the event to append.
///
/// A step must have been started before it can be done; there is no
/// auto-implied start. Completing an already-done step is rejected.
pub fn mark_step_done(
    view: &ExecutionView,
    step_id: Uuid,
    by: Option<String>,
    at: DateTime<Utc>,
) -> ExecutionResult<ExecutionEvent> {
    let step = view
        .step(step_id)
        .ok_or(ExecutionError::UnknownStep { id: step_id })?;

    if step.status == StepStatus::Done {
        return Err(ExecutionError::InvalidTransition { id: step_id });
    }
    if step.started_at.is_none() {
        return Err(ExecutionError::MissingStart { id: step_id });
    }

    Ok(ExecutionEvent {
        kind: EventKind::StepDone,
        step: step_id,
        at,
        by,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::derive::derive;
    use chrono::TimeZone;
    use ck_protocol::execution_models::Execution;
    use ck_protocol::template_models::{Section, Step, StepItem, Template};

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + seconds, 0).single().expect("valid timestamp")
    }

    /// A template with a single step, its execution, and that step's id.
    fn one_step_fixture() -> (Template, Execution, Uuid) {
        let step = Step::empty();
        let template = Template {
            steps: vec![
                StepItem::Section(Section::empty()),
                StepItem::Step(step.clone()),
            ],
            ..Template::starter()
        };
        let execution = Execution {
            id: Uuid::new_v4(),
            template_id: template.id,
            template_revision: template.revision,
            initiated_at: at(0),
            initiated_by: None,
        };
        (template, execution, step.id)
    }

    fn view_of(
        template: &Template,
        execution: &Execution,
        events: &[ExecutionEvent],
    ) -> ExecutionView {
        derive(template, execution, events).expect("derivable")
    }

    #[test]
    fn start_builds_a_started_event() {
        let (template, execution, step_id) = one_step_fixture();
        let view = view_of(&template, &execution, &[]);

        let event = mark_step_started(&view, step_id, Some("u1".to_string()), at(5))
            .expect("start allowed");

        assert_eq!(event.kind, EventKind::StepStarted);
        assert_eq!(event.step, step_id);
        assert_eq!(event.by.as_deref(), Some("u1"));
    }

    #[test]
    fn restart_of_started_step_is_allowed() {
        let (template, execution, step_id) = one_step_fixture();
        let started = ExecutionEvent {
            kind: EventKind::StepStarted,
            step: step_id,
            at: at(1),
            by: None,
        };
        let view = view_of(&template, &execution, &[started]);

        assert!(mark_step_started(&view, step_id, None, at(2)).is_ok());
    }

    #[test]
    fn start_of_done_step_is_rejected() {
        let (template, execution, step_id) = one_step_fixture();
        let events = vec![
            ExecutionEvent {
                kind: EventKind::StepStarted,
                step: step_id,
                at: at(1),
                by: None,
            },
            ExecutionEvent {
                kind: EventKind::StepDone,
                step: step_id,
                at: at(2),
                by: None,
            },
        ];
        let view = view_of(&template, &execution, &events);

        let err = mark_step_started(&view, step_id, None, at(3)).expect_err("must fail");

        assert_eq!(err, ExecutionError::InvalidTransition { id: step_id });
    }

    #[test]
    fn done_without_start_is_rejected() {
        let (template, execution, step_id) = one_step_fixture();
        let view = view_of(&template, &execution, &[]);

        let err = mark_step_done(&view, step_id, None, at(5)).expect_err("must fail");

        assert_eq!(err, ExecutionError::MissingStart { id: step_id });
    }

    #[test]
    fn done_after_start_builds_a_done_event() {
        let (template, execution, step_id) = one_step_fixture();
        let started = ExecutionEvent {
            kind: EventKind::StepStarted,
            step: step_id,
            at: at(1),
            by: None,
        };
        let view = view_of(&template, &execution, &[started]);

        let event = mark_step_done(&view, step_id, Some("u2".to_string()), at(9))
            .expect("done allowed");

        assert_eq!(event.kind, EventKind::StepDone);
        assert_eq!(event.by.as_deref(), Some("u2"));
    }

    #[test]
    fn unknown_step_is_rejected() {
        let (template, execution, _) = one_step_fixture();
        let view = view_of(&template, &execution, &[]);
        let stray = Uuid::new_v4();

        let err = mark_step_started(&view, stray, None, at(5)).expect_err("must fail");

        assert_eq!(err, ExecutionError::UnknownStep { id: stray });
    }
}
