//! Process template models.
//!
//! A template is a reusable checklist definition: a flat, ordered sequence of
//! items where each item is either a section header or a step. Section
//! membership is positional: a step belongs to the nearest section header
//! before it. Template definitions can be authored as YAML files in
//! `.checklist-kit/templates/*.yaml`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A titled grouping boundary within a template.
///
/// Sections never nest. A section immediately followed by another section
/// has zero steps, which is valid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct Section {
    /// Stable identity of this section across edits and revisions.
    #[serde(default = "Uuid::new_v4")]
    #[ts(type = "string")]
    pub id: Uuid,

    /// Display title, at most 200 characters, stored trimmed.
    #[serde(default)]
    pub title: String,
}

/// A single checklist item with a title and a rich-text description.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct Step {
    /// Stable identity of this step; execution events reference it.
    #[serde(default = "Uuid::new_v4")]
    #[ts(type = "string")]
    pub id: Uuid,

    /// Display title, at most 200 characters, stored trimmed.
    #[serde(default)]
    pub title: String,

    /// Rich-text (HTML) description. Opaque to the core.
    #[serde(default)]
    pub description: String,
}

/// One item of a template's ordered sequence.
///
/// Serialized with a `type` tag of `"SE"` (section) or `"ST"` (step), the
/// wire encoding the web client consumes:
///
/// ```json
/// { "type": "ST", "id": "uuid-here", "title": "Prepare workstation", "description": "" }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(tag = "type")]
pub enum StepItem {
    /// A section header opening a new group of steps.
    #[serde(rename = "SE")]
    Section(Section),

    /// A step belonging to the most recent section header.
    #[serde(rename = "ST")]
    Step(Step),
}

impl StepItem {
    /// The identity of the wrapped section or step.
    pub fn id(&self) -> Uuid {
        match self {
            StepItem::Section(section) => section.id,
            StepItem::Step(step) => step.id,
        }
    }

    /// True for the `Section` variant.
    pub fn is_section(&self) -> bool {
        matches!(self, StepItem::Section(_))
    }
}

impl Section {
    /// A fresh untitled section.
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
        }
    }
}

impl Step {
    /// A fresh untitled step.
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
        }
    }
}

/// A reusable checklist definition.
///
/// `id` is the template identity that survives editing; `revision` names one
/// immutable saved snapshot of it. Saving a template always produces a new
/// revision, and executions pin the revision they were started from.
///
/// INVARIANT: `steps` is either empty or starts with a `Section`. A sequence
/// starting with a bare step is invalid and rejected at the validation
/// boundary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct Template {
    /// Identity shared by all revisions of this template.
    #[serde(default = "Uuid::new_v4")]
    #[ts(type = "string")]
    pub id: Uuid,

    /// Identity of this particular saved snapshot.
    #[serde(default = "Uuid::new_v4")]
    #[ts(type = "string")]
    pub revision: Uuid,

    /// Display title of the whole process.
    #[serde(default)]
    pub title: String,

    /// Ordered sequence of section headers and steps.
    #[serde(default)]
    pub steps: Vec<StepItem>,

    /// When this revision was saved.
    #[serde(default = "Utc::now")]
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

impl Template {
    /// The shape a brand-new template starts from: one empty section
    /// followed by one empty step.
    pub fn starter() -> Self {
        Self {
            id: Uuid::new_v4(),
            revision: Uuid::new_v4(),
            title: String::new(),
            steps: vec![
                StepItem::Section(Section::empty()),
                StepItem::Step(Step::empty()),
            ],
            created_at: Utc::now(),
        }
    }

    /// Iterate over the step ids (sections excluded) in template order.
    pub fn step_ids(&self) -> impl Iterator<Item = Uuid> + '_ {
        self.steps.iter().filter_map(|item| match item {
            StepItem::Step(step) => Some(step.id),
            StepItem::Section(_) => None,
        })
    }
}
