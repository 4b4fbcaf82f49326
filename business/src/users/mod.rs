//! User table domain.
//!
//! - [`UserListState`]: canonical list plus drafts, search term and load status
//! - [`FilteredUsersCompute`]: the list as the table shows it, derived from the store
//! - commands: every mutation the table can trigger, including the remote load
//! - [`fetch_users`]: GET against the configured users endpoint
//!
//! Widgets under `ui/src/widgets/users` only read these and dispatch commands.

pub mod commands;
pub mod filter;
pub mod record;
pub mod remote;
pub mod state;

pub use commands::{
    AddUserCommand, CancelEditCommand, DeleteUserCommand, EditUserCommand, LoadUsersCommand,
    SaveUserCommand, SearchUsersCommand, UserTableInput,
};
pub use filter::{FilteredUsersCompute, filter_users};
pub use record::{UserDraft, UserField, UserId, UserRecord, UserValidationError};
pub use remote::{FetchUsersError, RemoteCompany, RemoteUser, fetch_users};
pub use state::{UserListState, UsersLoad};
