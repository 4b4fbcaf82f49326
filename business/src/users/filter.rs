use std::any::{Any, TypeId};

use roster_states::{Compute, ComputeDeps, Dep, Updater, assign_impl};

use super::record::UserRecord;
use super::state::UserListState;

/// Records whose "first last" name or email contains `term`, ignoring case.
///
/// The empty term matches everything. List order is preserved.
pub fn filter_users<'a>(
    users: &'a [UserRecord],
    term: &str,
) -> impl Iterator<Item = &'a UserRecord> + use<'a> {
    let needle = term.to_lowercase();
    users.iter().filter(move |user| user.matches(&needle))
}

/// Cached filtered view of [`UserListState`], refreshed whenever the store changes.
#[derive(Debug, Default, Clone)]
pub struct FilteredUsersCompute {
    pub users: Vec<UserRecord>,
    pub total: usize,
}

impl FilteredUsersCompute {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Compute for FilteredUsersCompute {
    fn deps(&self) -> ComputeDeps {
        const STATE_IDS: [TypeId; 1] = [TypeId::of::<UserListState>()];
        (&STATE_IDS, &[])
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let state = deps.state::<UserListState>();
        updater.set(Self {
            users: filter_users(state.users(), state.search_term())
                .cloned()
                .collect(),
            total: state.users().len(),
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
