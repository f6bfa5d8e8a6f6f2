//! Headless core service.
//!
//! `ProcessService` dispatches client [`Op`]s against a [`ProcessStore`] and
//! answers with [`Event`]s. A presentation layer talks to it over channels:
//! operations in, reply events out, with live per-execution updates flowing
//! separately through [`ProcessService::watch_execution`]. The service has
//! no notion of editable vs read-only rendering; that distinction belongs
//! entirely to the adapters driving it.

use std::sync::Arc;

use anyhow::Result;
use ck_protocol::execution_models::EventKind;
use ck_protocol::ipc::{Event, Op};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio_stream::wrappers::BroadcastStream;
use uuid::Uuid;

use crate::store::{ProcessStore, StoreResult};

/// Dispatches operations against a store.
pub struct ProcessService<S: ProcessStore> {
    store: Arc<S>,
}

impl<S: ProcessStore> ProcessService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Handle one operation, mapping failures to `Event::OperationFailed`.
    pub async fn handle(&self, op: Op) -> Event {
        match self.dispatch(op).await {
            Ok(event) => event,
            Err(err) => Event::OperationFailed {
                message: err.to_string(),
            },
        }
    }

    async fn dispatch(&self, op: Op) -> StoreResult<Event> {
        match op {
            Op::SaveTemplate { template } => {
                let template = self.store.save_template_revision(template).await?;
                Ok(Event::TemplateSaved { template })
            }
            Op::GetTemplate { template_id } => {
                let template = self.store.fetch_template(template_id).await?;
                Ok(Event::TemplateLoaded { template })
            }
            Op::StartExecution {
                revision,
                initiated_by,
            } => {
                let execution = self.store.start_execution(revision, initiated_by).await?;
                Ok(Event::ExecutionStarted { execution })
            }
            Op::MarkStepStarted {
                execution_id,
                step_id,
                by,
            } => {
                let view = self
                    .store
                    .append_event(execution_id, EventKind::StepStarted, step_id, by)
                    .await?;
                Ok(Event::ExecutionUpdated { execution_id, view })
            }
            Op::MarkStepDone {
                execution_id,
                step_id,
                by,
            } => {
                let view = self
                    .store
                    .append_event(execution_id, EventKind::StepDone, step_id, by)
                    .await?;
                Ok(Event::ExecutionUpdated { execution_id, view })
            }
            Op::GetExecutionView { execution_id } => {
                let view = self.store.derive_view(execution_id).await?;
                Ok(Event::ExecutionUpdated { execution_id, view })
            }
        }
    }

    /// Live event stream of one execution, as a `Stream` adapter over the
    /// store's broadcast channel.
    pub async fn watch_execution(
        &self,
        execution_id: Uuid,
    ) -> StoreResult<BroadcastStream<Event>> {
        let receiver = self.store.subscribe(execution_id).await?;
        Ok(BroadcastStream::new(receiver))
    }

    /// Run the service loop: receive operations, send back reply events.
    ///
    /// Returns when the operation channel closes or the reply channel is
    /// dropped by the client.
    pub async fn run(
        &self,
        mut op_rx: UnboundedReceiver<Op>,
        event_tx: UnboundedSender<Event>,
    ) -> Result<()> {
        while let Some(op) = op_rx.recv().await {
            let event = self.handle(op).await;
            event_tx.send(event)?;
        }
        Ok(())
    }
}
