//! Reactive state container shared by the business layer and the UI.
//!
//! - [`State`]: plain values registered once per type
//! - [`Compute`]: cached values derived from states, refreshed when a dependency is dirty
//! - [`Command`]: manually dispatched mutations, the only place side effects may start
//! - [`Updater`]: channel handle used by async work to publish results back

mod basic_state;
mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod runtime;
mod state;
mod state_sync_status;
mod task;

pub use basic_state::Time;
pub use command::Command;
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use runtime::{StateRuntime, Updater};
pub use state::{State, state_assign_impl};
pub use state_sync_status::StateSyncStatus;
pub use task::{TaskHandle, TaskId, spawn_task};

pub use tokio_util::sync::CancellationToken;
