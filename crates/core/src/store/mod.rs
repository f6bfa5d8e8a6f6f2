//! Storage boundary for templates and executions.
//!
//! The core algorithms are pure; everything stateful lives behind the
//! [`ProcessStore`] trait. A store owns the clock (events are stamped at
//! append time, the server-timestamp analog), the append-only event logs,
//! and the fan-out of change notifications to subscribers.
//!
//! [`memory::MemoryStore`] is the in-process reference implementation.
//! Persistent backends implement the same trait; transport and persistence
//! mechanics never leak into the core error taxonomy.

pub mod error;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;

use async_trait::async_trait;
use ck_protocol::execution_models::{EventKind, Execution, ExecutionEvent};
use ck_protocol::ipc::Event;
use ck_protocol::template_models::Template;
use ck_protocol::view_models::ExecutionView;
use tokio::sync::broadcast;
use uuid::Uuid;

/// The collaborator surface the core exposes to presentation layers.
#[async_trait]
pub trait ProcessStore: Send + Sync {
    /// Validate and store a template as a fresh revision.
    ///
    /// The stored copy gets a new `revision` id and save timestamp; it
    /// becomes the latest revision of its template id (last write wins).
    async fn save_template_revision(&self, template: Template) -> StoreResult<Template>;

    /// Fetch the latest saved revision of a template.
    async fn fetch_template(&self, template_id: Uuid) -> StoreResult<Template>;

    /// Fetch one exact revision snapshot.
    async fn fetch_template_revision(&self, revision: Uuid) -> StoreResult<Template>;

    /// All templates at their latest revision, newest first.
    async fn list_templates(&self) -> StoreResult<Vec<Template>>;

    /// Start a new execution pinned to a template revision.
    async fn start_execution(
        &self,
        revision: Uuid,
        initiated_by: Option<String>,
    ) -> StoreResult<Execution>;

    /// Fetch an execution's immutable header.
    async fn fetch_execution(&self, execution_id: Uuid) -> StoreResult<Execution>;

    /// The raw event log of an execution, in append order.
    async fn fetch_events(&self, execution_id: Uuid) -> StoreResult<Vec<ExecutionEvent>>;

    /// Validate and append a step event, then re-derive.
    ///
    /// This is the only write path into execution state. The event is
    /// stamped with the store's clock, appended (never edited or removed),
    /// and the re-derived view fans out to every subscriber before being
    /// returned.
    async fn append_event(
        &self,
        execution_id: Uuid,
        kind: EventKind,
        step_id: Uuid,
        by: Option<String>,
    ) -> StoreResult<ExecutionView>;

    /// Derive the current view of an execution.
    async fn derive_view(&self, execution_id: Uuid) -> StoreResult<ExecutionView>;

    /// Subscribe to live change events of an execution.
    async fn subscribe(&self, execution_id: Uuid) -> StoreResult<broadcast::Receiver<Event>>;
}
