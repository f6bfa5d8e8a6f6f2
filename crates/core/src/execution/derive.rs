//! Execution state derivation.
//!
//! The deriver is a pure function from a template plus an event log to a
//! rendered view. It has no hidden state: deriving twice from the same
//! inputs yields identical views, and appending events never retroactively
//! un-does an earlier step's completion.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use ck_protocol::execution_models::{EventKind, Execution, ExecutionEvent, ExecutionState};
use ck_protocol::template_models::Template;
use ck_protocol::view_models::{ExecutionView, SectionView, StepStatus, StepView};
use uuid::Uuid;

use super::error::{ExecutionError, ExecutionResult};
use crate::template::group;

/// The first started/done marks found for one step.
#[derive(Debug, Clone, Default)]
struct StepMarks {
    started: Option<(DateTime<Utc>, Option<String>)>,
    done: Option<(DateTime<Utc>, Option<String>)>,
}

/// Reduce an event log to per-step first-started / first-done marks.
///
/// Events are sorted by timestamp ascending before reducing; the sort is
/// stable, so events with equal timestamps keep their arrival order. Only
/// the first event of each kind per step counts; later duplicates are
/// absorbed, which makes re-marking a step naturally idempotent.
fn collect_marks(
    template: &Template,
    events: &[ExecutionEvent],
) -> ExecutionResult<HashMap<Uuid, StepMarks>> {
    let known: HashSet<Uuid> = template.step_ids().collect();

    let mut ordered: Vec<&ExecutionEvent> = events.iter().collect();
    ordered.sort_by_key(|event| event.at);

    let mut marks: HashMap<Uuid, StepMarks> = HashMap::new();
    for event in ordered {
        if !known.contains(&event.step) {
            return Err(ExecutionError::UnknownStep { id: event.step });
        }
        let entry = marks.entry(event.step).or_default();
        let slot = match event.kind {
            EventKind::StepStarted => &mut entry.started,
            EventKind::StepDone => &mut entry.done,
        };
        if slot.is_none() {
            *slot = Some((event.at, event.by.clone()));
        }
    }

    Ok(marks)
}

/// Derive the rendered view of an execution.
///
/// One left-to-right scan over the template's item sequence:
/// - a step is done iff it has both a start and a done mark; a done event
///   with no preceding start never completes a step;
/// - the first not-done step anywhere becomes the single active step;
/// - a section is done when all of its steps are (vacuously done with zero
///   steps), active when it contains the active step, pending otherwise;
/// - the execution as a whole is done when every step is.
///
/// # Errors
///
/// - `ExecutionError::UnknownStep` if an event references a step id absent
///   from the template.
/// - `ExecutionError::Template` if the template violates the structural
///   invariant.
pub fn derive(
    template: &Template,
    execution: &Execution,
    events: &[ExecutionEvent],
) -> ExecutionResult<ExecutionView> {
    let grouped = group(&template.steps)?;
    let marks = collect_marks(template, events)?;

    let mut active_step: Option<Uuid> = None;
    let mut all_done = true;
    let mut sections = Vec::with_capacity(grouped.len());

    for (section, steps) in grouped {
        let mut step_views = Vec::with_capacity(steps.len());
        let mut section_done = true;
        let mut section_has_active = false;

        for step in steps {
            let mark = marks.get(&step.id).cloned().unwrap_or_default();
            let (started_at, started_by) = mark.started.map_or((None, None), |(at, by)| {
                (Some(at), by)
            });
            let (done_at, done_by) = mark.done.map_or((None, None), |(at, by)| (Some(at), by));

            let is_done = started_at.is_some() && done_at.is_some();
            let status = if is_done {
                StepStatus::Done
            } else if active_step.is_none() {
                active_step = Some(step.id);
                section_has_active = true;
                StepStatus::Active
            } else {
                StepStatus::Pending
            };

            if !is_done {
                section_done = false;
                all_done = false;
            }

            step_views.push(StepView {
                id: step.id,
                title: step.title.clone(),
                description: step.description.clone(),
                started_at,
                started_by,
                done_at,
                done_by,
                status,
            });
        }

        let status = if section_done {
            StepStatus::Done
        } else if section_has_active {
            StepStatus::Active
        } else {
            StepStatus::Pending
        };

        sections.push(SectionView {
            id: section.id,
            title: section.title.clone(),
            status,
            steps: step_views,
        });
    }

    let state = if all_done {
        ExecutionState::Done
    } else {
        ExecutionState::Started
    };

    Ok(ExecutionView {
        execution_id: execution.id,
        template_id: template.id,
        template_revision: template.revision,
        title: template.title.clone(),
        initiated_at: execution.initiated_at,
        sections,
        active_step,
        state,
    })
}
