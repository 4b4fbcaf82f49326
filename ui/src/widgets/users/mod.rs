//! User data widgets: search bar, users table and the add-user form.
//!
//! Widgets only read `UserListState` / `FilteredUsersCompute` and dispatch commands;
//! all mutations live in `roster_business::users`.

mod add_form;
mod search;
pub mod table;

pub use add_form::add_user_form;
pub use search::{SEARCH_HINT, search_bar};
pub use table::{RowAction, apply_row_action, users_table};
