//! Test fixtures for creating sample templates, executions, and events.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use ck_protocol::execution_models::{EventKind, Execution, ExecutionEvent};
use ck_protocol::template_models::{Section, Step, StepItem, Template};
use uuid::Uuid;

/// A fixed base instant; event fixtures offset from it in seconds.
pub fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + seconds, 0)
        .single()
        .expect("valid timestamp")
}

/// Create a section header item with a fresh id.
pub fn section(title: &str) -> StepItem {
    StepItem::Section(Section {
        title: title.to_string(),
        ..Section::empty()
    })
}

/// Create a step item with a fresh id.
pub fn step(title: &str) -> StepItem {
    StepItem::Step(Step {
        title: title.to_string(),
        ..Step::empty()
    })
}

/// Create a template around the given item sequence.
pub fn template(title: &str, steps: Vec<StepItem>) -> Template {
    Template {
        title: title.to_string(),
        steps,
        ..Template::starter()
    }
}

/// The template used by most derivation scenarios:
/// `[Section "S1", Step "a", Step "b", Section "S2", Step "c"]`.
pub struct Scenario {
    pub template: Template,
    pub s1: Uuid,
    pub a: Uuid,
    pub b: Uuid,
    pub s2: Uuid,
    pub c: Uuid,
}

pub fn scenario() -> Scenario {
    let items = vec![
        section("S1"),
        step("a"),
        step("b"),
        section("S2"),
        step("c"),
    ];
    let ids: Vec<Uuid> = items.iter().map(StepItem::id).collect();
    Scenario {
        template: template("Scenario", items),
        s1: ids[0],
        a: ids[1],
        b: ids[2],
        s2: ids[3],
        c: ids[4],
    }
}

/// Create an execution header for a template.
pub fn execution_of(template: &Template) -> Execution {
    Execution {
        id: Uuid::new_v4(),
        template_id: template.id,
        template_revision: template.revision,
        initiated_at: at(0),
        initiated_by: None,
    }
}

/// A `step_started` event at base + `seconds`.
pub fn started(step: Uuid, seconds: i64) -> ExecutionEvent {
    ExecutionEvent {
        kind: EventKind::StepStarted,
        step,
        at: at(seconds),
        by: None,
    }
}

/// A `step_done` event at base + `seconds`.
pub fn done(step: Uuid, seconds: i64) -> ExecutionEvent {
    ExecutionEvent {
        kind: EventKind::StepDone,
        step,
        at: at(seconds),
        by: None,
    }
}

/// Same as [`started`], attributed to an actor.
pub fn started_by(step: Uuid, seconds: i64, by: &str) -> ExecutionEvent {
    ExecutionEvent {
        by: Some(by.to_string()),
        ..started(step, seconds)
    }
}
