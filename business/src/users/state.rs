//! In-memory user list store.
//!
//! `UserListState` owns the canonical list together with everything the user table edits:
//! the search term, the add-form draft, the single edit draft and the last validation error.
//! The filtered view is never stored here; see [`super::filter`].

use std::any::Any;

use chrono::{DateTime, Utc};
use roster_states::{State, state_assign_impl};

use super::filter::filter_users;
use super::record::{UserDraft, UserField, UserId, UserRecord, UserValidationError};

/// Progress of the remote users load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UsersLoad {
    #[default]
    Idle,
    Loading,
    Loaded {
        at: DateTime<Utc>,
    },
    Failed(String),
}

impl UsersLoad {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserListState {
    users: Vec<UserRecord>,
    search_term: String,
    new_user: UserDraft,
    editing: Option<UserRecord>,
    error: Option<UserValidationError>,
    load: UsersLoad,
    /// Bumped by every reset; load results carrying an older value are dropped.
    load_generation: u64,
    next_id: UserId,
}

impl Default for UserListState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            search_term: String::new(),
            new_user: UserDraft::default(),
            editing: None,
            error: None,
            load: UsersLoad::Idle,
            load_generation: 0,
            next_id: 1,
        }
    }
}

impl State for UserListState {
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

impl UserListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the list directly, as a completed load would.
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let mut state = Self::default();
        state.replace_users(users);
        state
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn new_user(&self) -> &UserDraft {
        &self.new_user
    }

    pub fn editing(&self) -> Option<&UserRecord> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: UserId) -> bool {
        self.editing.as_ref().is_some_and(|draft| draft.id == id)
    }

    pub fn error(&self) -> Option<UserValidationError> {
        self.error
    }

    pub fn load(&self) -> &UsersLoad {
        &self.load
    }

    pub fn next_id(&self) -> UserId {
        self.next_id
    }

    pub fn load_generation(&self) -> u64 {
        self.load_generation
    }

    /// Records matching the current search term, in list order.
    pub fn filtered(&self) -> Vec<&UserRecord> {
        filter_users(&self.users, &self.search_term).collect()
    }

    pub fn set_new_user_field(&mut self, field: UserField, value: String) {
        *self.new_user.field_mut(field) = value;
    }

    /// No-op when nothing is being edited.
    pub fn set_editing_field(&mut self, field: UserField, value: String) {
        if let Some(draft) = self.editing.as_mut() {
            *draft.field_mut(field) = value;
        }
    }

    /// Back to an empty store ahead of a fresh load. Returns the new load generation.
    ///
    /// The id counter survives so ids handed out earlier are never issued again.
    pub fn reset(&mut self) -> u64 {
        let next_id = self.next_id;
        let load_generation = self.load_generation + 1;
        *self = Self {
            load_generation,
            next_id,
            ..Self::default()
        };
        load_generation
    }

    pub fn start_loading(&mut self) {
        self.load = UsersLoad::Loading;
    }

    /// Apply a completed load. Returns `false` if `generation` is stale.
    pub fn apply_loaded(
        &mut self,
        generation: u64,
        users: Vec<UserRecord>,
        now: DateTime<Utc>,
    ) -> bool {
        if generation != self.load_generation {
            return false;
        }
        self.replace_users(users);
        self.load = UsersLoad::Loaded { at: now };
        true
    }

    /// Record a failed load. Returns `false` if `generation` is stale.
    pub fn apply_failed(&mut self, generation: u64, message: String) -> bool {
        if generation != self.load_generation {
            return false;
        }
        self.load = UsersLoad::Failed(message);
        true
    }

    fn replace_users(&mut self, users: Vec<UserRecord>) {
        let after_max = users.iter().map(|user| user.id + 1).max().unwrap_or(1);
        self.next_id = self.next_id.max(after_max);
        self.users = users;
    }

    /// Append the add-form draft as a new record.
    pub fn add(&mut self) -> Result<UserId, UserValidationError> {
        if let Err(err) = self.new_user.validate() {
            self.error = Some(err);
            return Err(err);
        }

        let id = self.next_id;
        self.next_id += 1;
        let draft = std::mem::take(&mut self.new_user);
        self.users.push(UserRecord::from_draft(id, draft));
        self.error = None;
        Ok(id)
    }

    /// Start editing `id`, replacing any other edit draft. Returns `false` for unknown ids.
    pub fn edit(&mut self, id: UserId) -> bool {
        let Some(record) = self.users.iter().find(|user| user.id == id) else {
            return false;
        };
        self.editing = Some(record.clone());
        self.error = None;
        true
    }

    /// Write the edit draft back over its record.
    ///
    /// Returns the saved id, or `Ok(None)` when there was nothing to save.
    pub fn save(&mut self) -> Result<Option<UserId>, UserValidationError> {
        let Some(draft) = self.editing.as_ref() else {
            return Ok(None);
        };
        if let Err(err) = draft.validate() {
            self.error = Some(err);
            return Err(err);
        }

        let Some(draft) = self.editing.take() else {
            return Ok(None);
        };
        let id = draft.id;
        if let Some(slot) = self.users.iter_mut().find(|user| user.id == id) {
            *slot = draft;
        }
        self.error = None;
        Ok(Some(id))
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Remove `id` from the list, dropping its edit draft if there is one.
    pub fn delete(&mut self, id: UserId) -> Option<UserRecord> {
        let index = self.users.iter().position(|user| user.id == id)?;
        if self.is_editing(id) {
            self.editing = None;
        }
        Some(self.users.remove(index))
    }

    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }
}
