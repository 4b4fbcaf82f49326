use std::{
    any::{TypeId, type_name},
    collections::BTreeMap,
};

use crate::{Compute, Error, State, StateSyncStatus, ctx::Slot};

/// Borrowed view over the registered states and computes, handed to
/// [`crate::Command::run`] and [`crate::Compute::compute`].
///
/// Writing through [`Dep::state_mut`] marks the state dirty so computes depending on it
/// refresh on the next [`crate::StateCtx::run_computed`].
pub struct Dep<'a> {
    states: &'a mut BTreeMap<TypeId, Slot<dyn State>>,
    computes: &'a BTreeMap<TypeId, Slot<dyn Compute>>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a mut BTreeMap<TypeId, Slot<dyn State>>,
        computes: &'a BTreeMap<TypeId, Slot<dyn Compute>>,
    ) -> Self {
        Self { states, computes }
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "Dep::state"))
    }

    /// Get a state by type.
    ///
    /// # Panics
    /// Panics if the state type is not registered.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Get a mutable reference to a state by type and mark it dirty.
    ///
    /// # Panics
    /// Panics if the state type is not registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        let slot = self
            .states
            .get_mut(&TypeId::of::<T>())
            .unwrap_or_else(|| {
                panic!(
                    "{}",
                    Error::state_not_found(type_name::<T>(), "Dep::state_mut")
                )
            });
        slot.status = StateSyncStatus::Dirty;
        slot.value
            .as_any_mut()
            .downcast_mut::<T>()
            .unwrap_or_else(|| panic!("state slot does not hold a {}", type_name::<T>()))
    }

    pub fn compute<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.as_any().downcast_ref::<T>())
    }
}
