//! Task management types for structured concurrency.
//!
//! - `TaskId`: identifies a dispatched command by its `TypeId` plus a generation counter
//! - `TaskHandle`: wraps a `CancellationToken` from `tokio_util` for cooperative cancellation
//! - `spawn_task`: runs a future on the platform executor (Tokio natively, the JS event loop
//!   on wasm)
//!
//! Dispatching a command again cancels the token of its previous run, so a slow response
//! from an older request can never overwrite newer state.

use std::{any::TypeId, collections::BTreeMap, future::Future};

use tokio_util::sync::CancellationToken;

/// Unique identifier for a dispatched command run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher generation values indicate more recently dispatched runs.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a command run with cooperative cancellation support.
///
/// Cancelling does not abort anything by force: the task must check `is_cancelled()` or
/// await `cancelled()` before publishing results.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

/// Latest task handle per command type.
#[derive(Debug, Default)]
pub(crate) struct TaskRegistry {
    generation: u64,
    running: BTreeMap<TypeId, TaskHandle>,
}

impl TaskRegistry {
    /// Start a new run for `type_id`, cancelling the previous one.
    pub(crate) fn start(&mut self, type_id: TypeId) -> TaskHandle {
        self.generation += 1;
        let handle = TaskHandle::new(
            TaskId::new(type_id, self.generation),
            CancellationToken::new(),
        );
        if let Some(previous) = self.running.insert(type_id, handle.clone()) {
            previous.cancel();
        }
        handle
    }

    pub(crate) fn cancel(&mut self, type_id: TypeId) {
        if let Some(handle) = self.running.remove(&type_id) {
            handle.cancel();
        }
    }

    pub(crate) fn cancel_all(&mut self) {
        for (_, handle) in std::mem::take(&mut self.running) {
            handle.cancel();
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, type_id: TypeId) -> Option<&TaskHandle> {
        self.running.get(&type_id)
    }
}

/// Run `future` in the background on the platform executor.
///
/// Natively this uses the ambient Tokio runtime when there is one, and otherwise a
/// dedicated thread with a current-thread runtime.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_task<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(future);
        }
        Err(_) => {
            std::thread::spawn(move || {
                match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(runtime) => runtime.block_on(future),
                    Err(err) => log::error!("spawn_task: failed to build runtime: {err}"),
                }
            });
        }
    }
}

/// Run `future` in the background on the platform executor.
#[cfg(target_arch = "wasm32")]
pub fn spawn_task<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
