//! Configuration models for the `.checklist-kit/` directory.

use ck_protocol::template_models::Template;
use serde::{Deserialize, Serialize};

use crate::store::memory::DEFAULT_EVENT_CAPACITY;

/// Global settings from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Buffer size of each execution's broadcast channel. A lagging
    /// subscriber that falls more than this many events behind starts
    /// missing updates and must re-fetch the view.
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

fn default_event_capacity() -> usize {
    DEFAULT_EVENT_CAPACITY
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

/// Everything loaded from a `.checklist-kit/` directory.
///
/// Aggregates the global settings with the template definitions found in
/// `templates/*.yaml`.
#[derive(Debug, Clone, Default)]
pub struct Library {
    /// Global settings from `config.toml`.
    pub global: GlobalConfig,

    /// All template definitions loaded from `templates/*.yaml`.
    pub templates: Vec<Template>,
}
