//! Commands over the user list store.
//!
//! UI code follows the usual pattern:
//! - set the target row or requested search via `ctx.update::<UserTableInput>(...)`
//! - dispatch the command via `ctx.dispatch::<Cmd>()`
//! - read the table back through `ctx.cached::<FilteredUsersCompute>()` and
//!   `ctx.state::<UserListState>()`

use std::any::Any;

use log::{error, info, warn};
use roster_states::{
    CancellationToken, Command, Dep, State, Time, Updater, spawn_task, state_assign_impl,
};

use super::record::UserId;
use super::remote::fetch_users;
use super::state::UserListState;
use crate::BusinessConfig;

/// Input read by the user table commands.
#[derive(Debug, Clone, Default)]
pub struct UserTableInput {
    /// Row targeted by `EditUserCommand` / `DeleteUserCommand`.
    pub target: Option<UserId>,
    /// Term for `SearchUsersCommand` to apply. Taken by the command; the applied term
    /// lives on [`UserListState::search_term`].
    pub search: Option<String>,
}

impl State for UserTableInput {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[derive(Debug, Default)]
pub struct AddUserCommand;

impl Command for AddUserCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater, _cancel: CancellationToken) {
        match deps.state_mut::<UserListState>().add() {
            Ok(id) => info!("AddUserCommand: added user {id}"),
            Err(err) => info!("AddUserCommand: rejected: {err}"),
        }
    }
}

/// Copies the `UserTableInput.target` row into the edit draft.
#[derive(Debug, Default)]
pub struct EditUserCommand;

impl Command for EditUserCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater, _cancel: CancellationToken) {
        let Some(id) = deps.state::<UserTableInput>().target else {
            return;
        };
        if !deps.state_mut::<UserListState>().edit(id) {
            warn!("EditUserCommand: no user with id {id}");
        }
    }
}

#[derive(Debug, Default)]
pub struct SaveUserCommand;

impl Command for SaveUserCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater, _cancel: CancellationToken) {
        match deps.state_mut::<UserListState>().save() {
            Ok(Some(id)) => info!("SaveUserCommand: saved user {id}"),
            Ok(None) => {}
            Err(err) => info!("SaveUserCommand: rejected: {err}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct CancelEditCommand;

impl Command for CancelEditCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater, _cancel: CancellationToken) {
        deps.state_mut::<UserListState>().cancel_edit();
    }
}

/// Removes the `UserTableInput.target` row.
#[derive(Debug, Default)]
pub struct DeleteUserCommand;

impl Command for DeleteUserCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater, _cancel: CancellationToken) {
        let Some(id) = deps.state::<UserTableInput>().target else {
            return;
        };
        if deps.state_mut::<UserListState>().delete(id).is_some() {
            info!("DeleteUserCommand: deleted user {id}");
        }
    }
}

/// Moves `UserTableInput.search` into the store.
#[derive(Debug, Default)]
pub struct SearchUsersCommand;

impl Command for SearchUsersCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater, _cancel: CancellationToken) {
        let Some(term) = deps.state_mut::<UserTableInput>().search.take() else {
            return;
        };
        deps.state_mut::<UserListState>().search(term);
    }
}

/// Resets the store and fetches the remote users.
///
/// Dispatched when the user data page mounts. Cancelling it (unmount, logout, or a newer
/// dispatch) guarantees the response is never written to the store.
#[derive(Debug, Default)]
pub struct LoadUsersCommand;

impl Command for LoadUsersCommand {
    fn run(&self, mut deps: Dep<'_>, updater: Updater, cancel: CancellationToken) {
        let url = deps.state::<BusinessConfig>().users_url();
        let now = deps.state::<Time>().now();

        deps.state_mut::<UserTableInput>().search = None;
        let store = deps.state_mut::<UserListState>();
        let generation = store.reset();
        store.start_loading();

        info!("LoadUsersCommand: fetching users from {url}");
        spawn_task(async move {
            let result = fetch_users(url.as_str()).await;
            if cancel.is_cancelled() {
                info!("LoadUsersCommand: cancelled, discarding response");
                return;
            }

            match result {
                Ok(users) => {
                    info!("LoadUsersCommand: loaded {} users", users.len());
                    updater.update::<UserListState>(move |store| {
                        store.apply_loaded(generation, users, now);
                    });
                }
                Err(err) => {
                    error!("LoadUsersCommand: {err}");
                    updater.update::<UserListState>(move |store| {
                        store.apply_failed(generation, err.to_string());
                    });
                }
            }
        });
    }
}
