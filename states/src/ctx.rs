use std::any::{TypeId, type_name};
use std::collections::{BTreeMap, BTreeSet};

use log::{debug, error, warn};

use crate::runtime::Update;
use crate::task::TaskRegistry;
use crate::{Command, Compute, Dep, Error, State, StateRuntime, StateSyncStatus, Updater};

pub(crate) struct Slot<T: ?Sized> {
    pub(crate) value: Box<T>,
    pub(crate) status: StateSyncStatus,
}

impl<T: ?Sized> Slot<T> {
    fn new(value: Box<T>) -> Self {
        Self {
            value,
            status: StateSyncStatus::BeforeInit,
        }
    }
}

/// Owner of every registered state, compute and command.
///
/// Typical frame:
/// 1. `sync_computes()` applies values published through [`Updater`]s
/// 2. the UI reads `state::<T>()` / `cached::<T>()` and dispatches commands
/// 3. `run_computed()` refreshes computes whose dependencies changed
#[derive(Default)]
pub struct StateCtx {
    runtime: StateRuntime,
    states: BTreeMap<TypeId, Slot<dyn State>>,
    computes: BTreeMap<TypeId, Slot<dyn Compute>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    tasks: TaskRegistry,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("runtime", &self.runtime)
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("tasks", &self.tasks)
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        if self
            .states
            .insert(TypeId::of::<T>(), Slot::new(Box::new(state)))
            .is_some()
        {
            warn!("add_state: {} registered twice, replaced", type_name::<T>());
        }
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        if self
            .computes
            .insert(TypeId::of::<T>(), Slot::new(Box::new(compute)))
            .is_some()
        {
            warn!("record_compute: {} registered twice, replaced", type_name::<T>());
        }
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    pub fn updater(&self) -> Updater {
        self.runtime.updater()
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "StateCtx::state"))
    }

    /// Read a registered state.
    ///
    /// # Panics
    /// Panics if the state type is not registered.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutable access to a registered state. The state is marked dirty.
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
                    Error::state_not_found(type_name::<T>(), "StateCtx::state_mut")
                )
            });
        slot.status = StateSyncStatus::Dirty;
        slot.value
            .as_any_mut()
            .downcast_mut::<T>()
            .unwrap_or_else(|| panic!("state slot does not hold a {}", type_name::<T>()))
    }

    /// Mutate a state in place, then refresh dependent computes.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
        self.run_computed();
    }

    pub fn try_cached<T: Compute>(&self) -> Result<&T, Error> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.value.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::compute_not_found(type_name::<T>(), "StateCtx::cached"))
    }

    /// Read the cached value of a compute, `None` if it is not registered.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.try_cached::<T>().ok()
    }

    /// Run a command now, then refresh dependent computes.
    ///
    /// A previous run of the same command type is cancelled first.
    pub fn dispatch<T: Command>(&mut self) {
        if let Err(err) = self.try_dispatch::<T>() {
            error!("dispatch: {err}");
        }
    }

    pub fn try_dispatch<T: Command>(&mut self) -> Result<(), Error> {
        let type_id = TypeId::of::<T>();
        let command = self
            .commands
            .get(&type_id)
            .ok_or_else(|| Error::command_not_found(type_name::<T>(), "StateCtx::dispatch"))?;

        debug!("dispatch: {}", type_name::<T>());
        let handle = self.tasks.start(type_id);
        let dep = Dep::new(&mut self.states, &self.computes);
        command.run(dep, self.runtime.updater(), handle.cancellation_token());

        self.run_computed();
        Ok(())
    }

    /// Cancel the latest run of command `T`; its async work must not publish anymore.
    pub fn cancel<T: Command>(&mut self) {
        self.tasks.cancel(TypeId::of::<T>());
    }

    /// Cancel every tracked command run.
    pub fn cancel_all(&mut self) {
        self.tasks.cancel_all();
    }

    /// Handle of the latest run of command `T`, if it has not been cancelled via `cancel`.
    #[cfg(test)]
    pub(crate) fn task<T: Command>(&self) -> Option<&crate::TaskHandle> {
        self.tasks.get(TypeId::of::<T>())
    }

    /// Apply every value published through an [`Updater`] since the last call.
    pub fn sync_computes(&mut self) {
        for update in self.runtime.drain() {
            self.apply(update);
        }
    }

    /// Recompute every compute with a dirty dependency, then settle the results.
    pub fn run_computed(&mut self) {
        self.sync_computes();

        // Each round settles one level of compute -> compute dependencies.
        for _ in 0..=self.computes.len() {
            let dirty_states: BTreeSet<TypeId> = self
                .states
                .iter()
                .filter(|(_, slot)| slot.status != StateSyncStatus::Clean)
                .map(|(id, _)| *id)
                .collect();

            let stale: Vec<TypeId> = self
                .computes
                .iter()
                .filter(|(_, slot)| {
                    slot.status != StateSyncStatus::Clean
                        || slot.value.deps().0.iter().any(|id| dirty_states.contains(id))
                })
                .map(|(id, _)| *id)
                .collect();

            for slot in self.states.values_mut() {
                slot.status = StateSyncStatus::Clean;
            }

            if stale.is_empty() {
                return;
            }

            for id in &stale {
                let Some(mut slot) = self.computes.remove(id) else {
                    continue;
                };
                let dep = Dep::new(&mut self.states, &self.computes);
                slot.value.compute(dep, self.runtime.updater());
                slot.status = StateSyncStatus::Clean;
                self.computes.insert(*id, slot);
            }

            self.sync_computes();
        }

        warn!("run_computed: computes did not settle, dependency cycle?");
    }

    fn apply(&mut self, update: Update) {
        let target = update.target();
        if let Some(slot) = self.states.get_mut(&target) {
            match update {
                Update::Set(_, value) => slot.value.assign_box(value),
                Update::Modify(_, modify) => modify(slot.value.as_any_mut()),
            }
            slot.status = StateSyncStatus::Dirty;
            return;
        }

        let Some(slot) = self.computes.get_mut(&target) else {
            warn!("sync_computes: update for unregistered type {target:?} dropped");
            return;
        };
        match update {
            Update::Set(_, value) => slot.value.assign_box(value),
            Update::Modify(..) => {
                warn!("sync_computes: in-place update of a compute is not supported");
                return;
            }
        }
        // A fresh value for a compute makes its dependents stale.
        self.mark_dependents_dirty(target);
    }

    fn mark_dependents_dirty(&mut self, compute: TypeId) {
        for slot in self.computes.values_mut() {
            if slot.value.deps().1.contains(&compute) {
                slot.status = StateSyncStatus::Dirty;
            }
        }
    }

    pub fn is_clean<T: Compute>(&self) -> bool {
        self.computes
            .get(&TypeId::of::<T>())
            .is_some_and(|slot| slot.status == StateSyncStatus::Clean)
    }
}
