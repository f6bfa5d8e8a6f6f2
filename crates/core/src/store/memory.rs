//! In-memory reference implementation of the process store.
//!
//! State lives in a single registry behind one `RwLock`; every execution
//! carries its own broadcast channel so that any number of observers can
//! follow event appends live, the way the original deployment's snapshot
//! listeners did. Suitable for tests, embedded use, and as the template for
//! persistent backends.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use ck_protocol::execution_models::{EventKind, Execution, ExecutionEvent};
use ck_protocol::ipc::Event;
use ck_protocol::template_models::Template;
use ck_protocol::view_models::ExecutionView;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use super::error::{StoreError, StoreResult};
use super::ProcessStore;
use crate::config::models::GlobalConfig;
use crate::execution::{derive, mark_step_done, mark_step_started};
use crate::template::validate_template;

/// Default capacity of each execution's broadcast channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

#[derive(Default)]
struct Registry {
    /// Every saved revision snapshot, keyed by revision id.
    revisions: HashMap<Uuid, Template>,
    /// Template id -> its newest revision id.
    latest: HashMap<Uuid, Uuid>,
    executions: HashMap<Uuid, Execution>,
    /// Append-only event logs, keyed by execution id.
    events: HashMap<Uuid, Vec<ExecutionEvent>>,
    /// One broadcast channel per execution.
    channels: HashMap<Uuid, broadcast::Sender<Event>>,
}

/// Thread-safe in-memory store.
pub struct MemoryStore {
    registry: Arc<RwLock<Registry>>,
    event_capacity: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_event_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Create a store whose per-execution channels buffer `event_capacity`
    /// undelivered events before lagging subscribers start missing some.
    pub fn with_event_capacity(event_capacity: usize) -> Self {
        Self {
            registry: Arc::new(RwLock::new(Registry::default())),
            event_capacity,
        }
    }

    /// Create a store configured from `.checklist-kit/config.toml` settings.
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::with_event_capacity(config.event_capacity)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    fn execution(&self, execution_id: Uuid) -> StoreResult<&Execution> {
        self.executions
            .get(&execution_id)
            .ok_or(StoreError::ExecutionNotFound { id: execution_id })
    }

    /// Template revision + event log backing one execution.
    fn execution_inputs(
        &self,
        execution_id: Uuid,
    ) -> StoreResult<(&Execution, &Template, &[ExecutionEvent])> {
        let execution = self.execution(execution_id)?;
        let template = self
            .revisions
            .get(&execution.template_revision)
            .ok_or(StoreError::RevisionNotFound {
                revision: execution.template_revision,
            })?;
        let events = self
            .events
            .get(&execution_id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok((execution, template, events))
    }
}

#[async_trait]
impl ProcessStore for MemoryStore {
    async fn save_template_revision(&self, template: Template) -> StoreResult<Template> {
        validate_template(&template)?;

        let stored = Template {
            revision: Uuid::new_v4(),
            created_at: Utc::now(),
            ..template
        };

        let mut registry = self.registry.write().await;
        registry.revisions.insert(stored.revision, stored.clone());
        registry.latest.insert(stored.id, stored.revision);
        Ok(stored)
    }

    async fn fetch_template(&self, template_id: Uuid) -> StoreResult<Template> {
        let registry = self.registry.read().await;
        let revision = registry
            .latest
            .get(&template_id)
            .ok_or(StoreError::TemplateNotFound { id: template_id })?;
        registry
            .revisions
            .get(revision)
            .cloned()
            .ok_or(StoreError::RevisionNotFound {
                revision: *revision,
            })
    }

    async fn fetch_template_revision(&self, revision: Uuid) -> StoreResult<Template> {
        let registry = self.registry.read().await;
        registry
            .revisions
            .get(&revision)
            .cloned()
            .ok_or(StoreError::RevisionNotFound { revision })
    }

    async fn list_templates(&self) -> StoreResult<Vec<Template>> {
        let registry = self.registry.read().await;
        let mut templates: Vec<Template> = registry
            .latest
            .values()
            .filter_map(|revision| registry.revisions.get(revision))
            .cloned()
            .collect();
        templates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(templates)
    }

    async fn start_execution(
        &self,
        revision: Uuid,
        initiated_by: Option<String>,
    ) -> StoreResult<Execution> {
        let mut registry = self.registry.write().await;
        let template = registry
            .revisions
            .get(&revision)
            .ok_or(StoreError::RevisionNotFound { revision })?;

        let execution = Execution {
            id: Uuid::new_v4(),
            template_id: template.id,
            template_revision: revision,
            initiated_at: Utc::now(),
            initiated_by,
        };

        let (sender, _) = broadcast::channel(self.event_capacity);
        registry.executions.insert(execution.id, execution.clone());
        registry.events.insert(execution.id, Vec::new());
        registry.channels.insert(execution.id, sender);
        Ok(execution)
    }

    async fn fetch_execution(&self, execution_id: Uuid) -> StoreResult<Execution> {
        let registry = self.registry.read().await;
        Ok(registry.execution(execution_id)?.clone())
    }

    async fn fetch_events(&self, execution_id: Uuid) -> StoreResult<Vec<ExecutionEvent>> {
        let registry = self.registry.read().await;
        registry.execution(execution_id)?;
        Ok(registry
            .events
            .get(&execution_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn append_event(
        &self,
        execution_id: Uuid,
        kind: EventKind,
        step_id: Uuid,
        by: Option<String>,
    ) -> StoreResult<ExecutionView> {
        let mut registry = self.registry.write().await;

        let (execution, template, events) = registry.execution_inputs(execution_id)?;
        let before = derive(template, execution, events)?;

        // The store owns the clock: events carry append time, not client time.
        let event = match kind {
            EventKind::StepStarted => mark_step_started(&before, step_id, by, Utc::now())?,
            EventKind::StepDone => mark_step_done(&before, step_id, by, Utc::now())?,
        };

        let execution = execution.clone();
        let template = template.clone();
        registry
            .events
            .entry(execution_id)
            .or_default()
            .push(event.clone());

        let events = registry
            .events
            .get(&execution_id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let after = derive(&template, &execution, events)?;

        if let Some(sender) = registry.channels.get(&execution_id) {
            let _ = sender.send(Event::StepEventAppended {
                execution_id,
                event,
            });
            let _ = sender.send(Event::ExecutionUpdated {
                execution_id,
                view: after.clone(),
            });
            if after.is_complete() && !before.is_complete() {
                let _ = sender.send(Event::ExecutionCompleted { execution_id });
            }
        }

        Ok(after)
    }

    async fn derive_view(&self, execution_id: Uuid) -> StoreResult<ExecutionView> {
        let registry = self.registry.read().await;
        let (execution, template, events) = registry.execution_inputs(execution_id)?;
        Ok(derive(template, execution, events)?)
    }

    async fn subscribe(&self, execution_id: Uuid) -> StoreResult<broadcast::Receiver<Event>> {
        let registry = self.registry.read().await;
        registry
            .channels
            .get(&execution_id)
            .map(broadcast::Sender::subscribe)
            .ok_or(StoreError::ExecutionNotFound { id: execution_id })
    }
}
