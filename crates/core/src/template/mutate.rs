//! Pure mutation operations for a template's item sequence.
//!
//! Every operation takes the current sequence plus a target id and returns a
//! new sequence, leaving the input untouched. All operations preserve the
//! structural invariant checked by [`super::validate`].
//!
//! Anchor ids that cannot be resolved (stale after a concurrent delete, for
//! example) make the operation a no-op instead of an error, so an editing
//! surface stays resilient to races with its own local state.

use ck_protocol::template_models::{Section, Step, StepItem};
use uuid::Uuid;

use super::MAX_TITLE_LEN;

/// Trim a title and clip it to [`MAX_TITLE_LEN`] characters.
fn clip_title(title: &str) -> String {
    title.trim().chars().take(MAX_TITLE_LEN).collect()
}

fn position_of(steps: &[StepItem], id: Uuid) -> Option<usize> {
    steps.iter().position(|item| item.id() == id)
}

/// Index just past the section that contains (or starts at) `anchor`.
///
/// Scans forward from `anchor` to the next section header or the end of the
/// list; the returned index is the insertion point for an item that should
/// land at the end of the open section.
fn section_end(steps: &[StepItem], anchor: usize) -> usize {
    let mut idx = anchor + 1;
    while idx < steps.len() {
        if steps[idx].is_section() {
            break;
        }
        idx += 1;
    }
    idx
}

/// Replace the title of the section with `id`. No-op when absent.
pub fn rename_section(steps: &[StepItem], id: Uuid, title: &str) -> Vec<StepItem> {
    steps
        .iter()
        .map(|item| match item {
            StepItem::Section(section) if section.id == id => StepItem::Section(Section {
                id: section.id,
                title: clip_title(title),
            }),
            other => other.clone(),
        })
        .collect()
}

/// Replace the title of the step with `id`. No-op when absent.
pub fn rename_step(steps: &[StepItem], id: Uuid, title: &str) -> Vec<StepItem> {
    steps
        .iter()
        .map(|item| match item {
            StepItem::Step(step) if step.id == id => StepItem::Step(Step {
                id: step.id,
                title: clip_title(title),
                description: step.description.clone(),
            }),
            other => other.clone(),
        })
        .collect()
}

/// Replace the rich-text description of the step with `id`. No-op when
/// absent.
pub fn set_step_description(steps: &[StepItem], id: Uuid, description: &str) -> Vec<StepItem> {
    steps
        .iter()
        .map(|item| match item {
            StepItem::Step(step) if step.id == id => StepItem::Step(Step {
                id: step.id,
                title: step.title.clone(),
                description: description.to_string(),
            }),
            other => other.clone(),
        })
        .collect()
}

/// Insert a new empty step immediately after the item with `after_id`.
///
/// When the anchor is a step, the new step lands right behind it. When the
/// anchor is a section header, the new step becomes the first step of that
/// section. Either way the new step can never end up in front of the first
/// section header. Unresolvable anchors are a no-op.
pub fn insert_step_after(steps: &[StepItem], after_id: Uuid) -> Vec<StepItem> {
    let Some(anchor) = position_of(steps, after_id) else {
        return steps.to_vec();
    };

    let mut next = steps.to_vec();
    next.insert(anchor + 1, StepItem::Step(Step::empty()));
    next
}

/// Insert a new empty section after the section containing `id`.
///
/// The insertion point is behind that section's last step, or directly
/// behind the section header if it has none. `id` may name the section
/// itself or any step inside it. Unresolvable anchors are a no-op.
pub fn insert_section_after(steps: &[StepItem], id: Uuid) -> Vec<StepItem> {
    let Some(anchor) = position_of(steps, id) else {
        return steps.to_vec();
    };

    let mut next = steps.to_vec();
    next.insert(section_end(steps, anchor), StepItem::Section(Section::empty()));
    next
}

/// Delete the item with `id`.
///
/// A step is removed alone. A section is removed together with every step
/// belonging to it. The cascade is unconditional here; any confirmation
/// belongs to the calling surface. Unresolvable ids are a no-op.
pub fn delete_item(steps: &[StepItem], id: Uuid) -> Vec<StepItem> {
    let Some(anchor) = position_of(steps, id) else {
        return steps.to_vec();
    };

    let mut next = steps.to_vec();
    match next[anchor] {
        StepItem::Step(_) => {
            next.remove(anchor);
        }
        StepItem::Section(_) => {
            next.drain(anchor..section_end(steps, anchor));
        }
    }
    next
}
