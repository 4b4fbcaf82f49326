use std::{
    any::{Any, TypeId, type_name},
    fmt::{Debug, Formatter},
};

use flume::{Receiver, Sender};
use log::warn;

type Modify = Box<dyn FnOnce(&mut dyn Any) + Send>;

/// A pending write to a state or compute, delivered through the runtime channel.
pub(crate) enum Update {
    /// Replace the whole value.
    Set(TypeId, Box<dyn Any + Send>),
    /// Mutate the value in place.
    Modify(TypeId, Modify),
}

impl Update {
    pub(crate) fn target(&self) -> TypeId {
        match self {
            Self::Set(id, _) | Self::Modify(id, _) => *id,
        }
    }
}

/// Send-able handle that publishes new values back to the [`crate::StateCtx`].
///
/// Updates are queued and applied on the UI thread by
/// [`crate::StateCtx::sync_computes`], which makes it safe to hand an `Updater` to
/// async tasks or other threads.
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Debug for Updater {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("pending", &self.send.len())
            .finish()
    }
}

impl Updater {
    /// Replace the registered value of type `T`.
    pub fn set<T: Any + Send>(&self, value: T) {
        let update = Update::Set(TypeId::of::<T>(), Box::new(value));
        if self.send.send(update).is_err() {
            warn!("Updater::set<{}>: state context dropped", type_name::<T>());
        }
    }

    /// Mutate the registered value of type `T` in place.
    pub fn update<T: Any + Send>(&self, f: impl FnOnce(&mut T) + Send + 'static) {
        let modify: Modify = Box::new(move |value| match value.downcast_mut::<T>() {
            Some(value) => f(value),
            None => warn!("Updater::update: slot is not a {}", type_name::<T>()),
        });
        let update = Update::Modify(TypeId::of::<T>(), modify);
        if self.send.send(update).is_err() {
            warn!("Updater::update<{}>: state context dropped", type_name::<T>());
        }
    }
}

pub struct StateRuntime {
    send: Sender<Update>,
    recv: Receiver<Update>,
}

impl Debug for StateRuntime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateRuntime")
            .field("pending", &self.recv.len())
            .finish()
    }
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self { send, recv }
    }

    pub fn updater(&self) -> Updater {
        Updater {
            send: self.send.clone(),
        }
    }

    /// Take every update queued so far without blocking.
    pub(crate) fn drain(&self) -> Vec<Update> {
        self.recv.try_iter().collect()
    }
}
