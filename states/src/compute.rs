use std::any::{Any, TypeId, type_name};

use log::error;

use crate::{Dep, Updater};

/// `(state dependencies, compute dependencies)` of a [`Compute`].
pub type ComputeDeps = (&'static [TypeId], &'static [TypeId]);

/// A cached value derived from other states or computes.
///
/// `compute()` runs when one of the dependencies was marked dirty, and publishes the new
/// value through the [`Updater`]. Computes must not perform side effects: they can run
/// implicitly (first frame, dirty propagation), so network IO belongs in a [`crate::Command`].
pub trait Compute: Any + Send {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for [`Compute`] implementations.
pub fn assign_impl<T: Compute>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => error!(
            "assign_impl: received a value that is not a {}",
            type_name::<T>()
        ),
    }
}
