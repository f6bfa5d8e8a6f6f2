//! Template validation and grouping.
//!
//! A template's item sequence is flat; section membership is positional.
//! This module enforces the one structural invariant (a non-empty sequence
//! starts with a section header) and partitions the flat sequence into
//! `(section, steps)` pairs for consumers that render or derive per section.

pub mod error;
pub mod mutate;

pub use error::{TemplateError, TemplateResult};

use ck_protocol::template_models::{Section, Step, StepItem, Template};

/// Maximum length of a section, step, or template title.
pub const MAX_TITLE_LEN: usize = 200;

/// Check the structural invariant of an item sequence.
///
/// A sequence is valid when it is empty or its first element is a section.
/// No other shape constraint exists: a section immediately followed by
/// another section is an intentionally empty section.
///
/// Invalid sequences are rejected, never silently repaired.
pub fn validate(steps: &[StepItem]) -> TemplateResult<()> {
    match steps.first() {
        None | Some(StepItem::Section(_)) => {}
        Some(StepItem::Step(_)) => return Err(TemplateError::InvalidStructure),
    }

    for item in steps {
        let title = match item {
            StepItem::Section(section) => &section.title,
            StepItem::Step(step) => &step.title,
        };
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(TemplateError::TitleTooLong {
                id: item.id(),
                max: MAX_TITLE_LEN,
            });
        }
    }

    Ok(())
}

/// Validate a whole template: its item sequence plus its own title.
pub fn validate_template(template: &Template) -> TemplateResult<()> {
    if template.title.chars().count() > MAX_TITLE_LEN {
        return Err(TemplateError::TitleTooLong {
            id: template.id,
            max: MAX_TITLE_LEN,
        });
    }
    validate(&template.steps)
}

/// Partition a valid item sequence into `(section, steps)` pairs.
///
/// Scans left to right, starting a new pair at each section header and
/// assigning subsequent steps to the most recent pair. Concatenating each
/// section header with its steps reconstructs the input exactly.
///
/// # Errors
///
/// `TemplateError::InvalidStructure` if the sequence is non-empty and does
/// not start with a section.
pub fn group(steps: &[StepItem]) -> TemplateResult<Vec<(&Section, Vec<&Step>)>> {
    let mut grouped: Vec<(&Section, Vec<&Step>)> = Vec::new();

    for item in steps {
        match item {
            StepItem::Section(section) => grouped.push((section, Vec::new())),
            StepItem::Step(step) => match grouped.last_mut() {
                Some((_, section_steps)) => section_steps.push(step),
                None => return Err(TemplateError::InvalidStructure),
            },
        }
    }

    Ok(grouped)
}
