//! Domain layer of the roster app.
//!
//! Everything here is a `State`, `Compute` or `Command` living in a
//! [`roster_states::StateCtx`]; the UI crate only renders them and dispatches commands.

pub mod config;
pub mod http;
pub mod route;
pub mod session;
pub mod users;

pub use config::{BusinessConfig, DEFAULT_USERS_URL};
pub use route::{Route, navigate};
pub use session::{LoginCommand, LoginError, LoginInput, LogoutCommand, Session, logout};
pub use users::{
    AddUserCommand, CancelEditCommand, DeleteUserCommand, EditUserCommand, FetchUsersError,
    FilteredUsersCompute, LoadUsersCommand, SaveUserCommand, SearchUsersCommand, UserDraft,
    UserField, UserId, UserListState, UserRecord, UserTableInput, UserValidationError, UsersLoad,
    fetch_users, filter_users,
};

use roster_states::{StateCtx, Time};

/// Register every state, compute and command the app uses.
pub fn register(ctx: &mut StateCtx, config: BusinessConfig) {
    ctx.add_state(Time::default());
    ctx.add_state(config);
    ctx.add_state(Session::default());
    ctx.add_state(LoginInput::default());
    ctx.add_state(Route::default());
    ctx.add_state(UserListState::default());
    ctx.add_state(UserTableInput::default());

    ctx.record_compute(FilteredUsersCompute::default());

    ctx.record_command(LoginCommand);
    ctx.record_command(LogoutCommand);
    ctx.record_command(LoadUsersCommand);
    ctx.record_command(AddUserCommand);
    ctx.record_command(EditUserCommand);
    ctx.record_command(SaveUserCommand);
    ctx.record_command(CancelEditCommand);
    ctx.record_command(DeleteUserCommand);
    ctx.record_command(SearchUsersCommand);
}

/// A fully registered context with computes settled.
pub fn new_ctx(config: BusinessConfig) -> StateCtx {
    let mut ctx = StateCtx::new();
    register(&mut ctx, config);
    ctx.run_computed();
    ctx
}
