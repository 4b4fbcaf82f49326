use std::any::Any;

use tokio_util::sync::CancellationToken;

use crate::{Dep, Updater};

/// A manually dispatched unit of work.
///
/// Commands never run implicitly: they only execute through
/// [`crate::StateCtx::dispatch`]. The synchronous part gets mutable access to the
/// registered states through [`Dep`]; asynchronous work spawned from `run` reports back
/// through the [`Updater`] and should stop publishing once `cancel` fires.
///
/// Arguments are passed the same way everywhere: the caller writes an input state with
/// `ctx.update::<SomeInput>(...)` and the command reads it from `deps`.
pub trait Command: Any + Send {
    fn run(&self, deps: Dep<'_>, updater: Updater, cancel: CancellationToken);
}
