use std::any::{Any, type_name};

use log::error;

/// A piece of application state stored in [`crate::StateCtx`].
///
/// States are addressed by their concrete type, so every type is registered at most once.
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a boxed value of the same type.
    ///
    /// Used by [`crate::Updater::set`] when the value arrives through the update channel.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for [`State`] implementations.
pub fn state_assign_impl<T: State>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => error!(
            "state_assign_impl: received a value that is not a {}",
            type_name::<T>()
        ),
    }
}
