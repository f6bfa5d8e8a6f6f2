use chrono::Utc;
use ck_protocol::*;
use uuid::Uuid;

#[test]
fn test_template_deserialization_from_yaml() {
    // Sample YAML definition as found in .checklist-kit/templates/
    let yaml_str = r#"
title: Release checklist
steps:
  - type: SE
    title: Prepare
  - type: ST
    title: Tag the release
    description: "<p>Create and push the git tag.</p>"
  - type: SE
    title: Publish
  - type: ST
    title: Upload artifacts
"#;

    let template: Template =
        serde_yaml::from_str(yaml_str).expect("Failed to deserialize Template");

    assert_eq!(template.title, "Release checklist");
    assert_eq!(template.steps.len(), 4);
    assert!(matches!(template.steps[0], StepItem::Section(_)));
    assert!(matches!(template.steps[1], StepItem::Step(_)));

    // ids are defaulted at parse time and are unique
    let first = template.steps[0].id();
    let second = template.steps[1].id();
    assert_ne!(first, second);
}

#[test]
fn test_step_item_tagging() {
    let section = StepItem::Section(Section {
        id: Uuid::new_v4(),
        title: "Prepare".to_string(),
    });
    let json = serde_json::to_value(&section).expect("Failed to serialize Section item");
    assert_eq!(json["type"], "SE");

    let step = StepItem::Step(Step {
        id: Uuid::new_v4(),
        title: "Tag".to_string(),
        description: String::new(),
    });
    let json = serde_json::to_value(&step).expect("Failed to serialize Step item");
    assert_eq!(json["type"], "ST");

    let deserialized: StepItem =
        serde_json::from_value(json).expect("Failed to deserialize StepItem");
    assert!(matches!(deserialized, StepItem::Step(_)));
}

#[test]
fn test_event_kind_serialization() {
    let kind = EventKind::StepStarted;
    let json = serde_json::to_value(kind).expect("Failed to serialize EventKind");

    assert_eq!(json, "step_started");

    let deserialized: EventKind =
        serde_json::from_value(json).expect("Failed to deserialize EventKind");
    assert_eq!(deserialized, EventKind::StepStarted);

    let done = serde_json::to_value(EventKind::StepDone).expect("Failed to serialize EventKind");
    assert_eq!(done, "step_done");
}

#[test]
fn test_execution_event_serialization() {
    let event = ExecutionEvent {
        kind: EventKind::StepDone,
        step: Uuid::new_v4(),
        at: Utc::now(),
        by: Some("user-42".to_string()),
    };

    let json = serde_json::to_string(&event).expect("Failed to serialize ExecutionEvent");
    let deserialized: ExecutionEvent =
        serde_json::from_str(&json).expect("Failed to deserialize ExecutionEvent");

    assert_eq!(deserialized, event);
}

#[test]
fn test_execution_event_by_defaults_to_none() {
    let json = r#"{"kind":"step_started","step":"7f6c2f64-1886-44c6-b2af-4d1a2f3a7b11","at":"2024-05-01T12:00:00Z"}"#;

    let event: ExecutionEvent =
        serde_json::from_str(json).expect("Failed to deserialize ExecutionEvent");

    assert_eq!(event.by, None);
}

#[test]
fn test_step_status_serialization() {
    let json = serde_json::to_value(StepStatus::Active).expect("Failed to serialize StepStatus");
    assert_eq!(json, "active");

    let json = serde_json::to_value(ExecutionState::Done)
        .expect("Failed to serialize ExecutionState");
    assert_eq!(json, "done");
}

#[test]
fn test_op_enum_serialization() {
    let op = Op::MarkStepStarted {
        execution_id: Uuid::new_v4(),
        step_id: Uuid::new_v4(),
        by: Some("user-42".to_string()),
    };

    let json = serde_json::to_value(&op).expect("Failed to serialize Op");
    assert_eq!(json["type"], "markStepStarted");
    assert!(json["payload"].is_object());

    let deserialized: Op = serde_json::from_value(json).expect("Failed to deserialize Op");
    match deserialized {
        Op::MarkStepStarted { by, .. } => assert_eq!(by.as_deref(), Some("user-42")),
        _ => panic!("Wrong variant"),
    }

    let start_op = Op::StartExecution {
        revision: Uuid::new_v4(),
        initiated_by: None,
    };
    let json = serde_json::to_value(&start_op).expect("Failed to serialize Op::StartExecution");
    assert_eq!(json["type"], "startExecution");
}

#[test]
fn test_event_enum_serialization() {
    let event = Event::ExecutionCompleted {
        execution_id: Uuid::new_v4(),
    };

    let json = serde_json::to_value(&event).expect("Failed to serialize Event");
    assert_eq!(json["type"], "executionCompleted");
    assert!(json["payload"].is_object());

    let appended = Event::StepEventAppended {
        execution_id: Uuid::new_v4(),
        event: ExecutionEvent {
            kind: EventKind::StepStarted,
            step: Uuid::new_v4(),
            at: Utc::now(),
            by: None,
        },
    };
    let json = serde_json::to_value(&appended).expect("Failed to serialize Event");
    assert_eq!(json["type"], "stepEventAppended");
}

#[test]
fn test_starter_template_shape() {
    let template = Template::starter();

    assert_eq!(template.steps.len(), 2);
    assert!(matches!(template.steps[0], StepItem::Section(_)));
    assert!(matches!(template.steps[1], StepItem::Step(_)));
    assert!(template.title.is_empty());
}
