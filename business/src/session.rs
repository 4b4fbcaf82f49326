//! Who is signed in.
//!
//! There is no credential check: any non-blank username signs in. The session lives only
//! in memory and starts out anonymous.

use std::any::Any;

use log::info;
use roster_states::{
    CancellationToken, Command, Dep, State, StateCtx, Updater, state_assign_impl,
};
use thiserror::Error;
use ustr::Ustr;

use crate::route::{Route, navigate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        username: Ustr,
    },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Authenticated { username } => Some(username.as_str()),
            Self::Anonymous => None,
        }
    }
}

impl State for Session {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Username is required")]
    EmptyUsername,
}

/// Login form contents.
#[derive(Debug, Clone, Default)]
pub struct LoginInput {
    pub username: String,
    /// Set by `LoginCommand` when the username is rejected.
    pub error: Option<LoginError>,
}

impl LoginInput {
    /// The login button stays disabled until this holds.
    pub fn can_submit(&self) -> bool {
        !self.username.trim().is_empty()
    }
}

impl State for LoginInput {
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

/// Signs in with the trimmed `LoginInput.username`.
///
/// Dispatch explicitly via `ctx.dispatch::<LoginCommand>()`.
#[derive(Debug, Default)]
pub struct LoginCommand;

impl Command for LoginCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater, _cancel: CancellationToken) {
        let username = deps.state::<LoginInput>().username.trim().to_owned();

        if username.is_empty() {
            info!("LoginCommand: rejected empty username");
            deps.state_mut::<LoginInput>().error = Some(LoginError::EmptyUsername);
            return;
        }

        info!("LoginCommand: signed in as '{username}'");
        *deps.state_mut::<Session>() = Session::Authenticated {
            username: Ustr::from(&username),
        };
        *deps.state_mut::<LoginInput>() = LoginInput::default();
    }
}

/// Clears the session. Prefer [`logout`], which also leaves the current page.
#[derive(Debug, Default)]
pub struct LogoutCommand;

impl Command for LogoutCommand {
    fn run(&self, mut deps: Dep<'_>, _updater: Updater, _cancel: CancellationToken) {
        info!("LogoutCommand: user logged out");
        *deps.state_mut::<Session>() = Session::Anonymous;
    }
}

/// Sign out, drop all in-flight work (the users fetch included) and go back to the login page.
pub fn logout(ctx: &mut StateCtx) {
    ctx.cancel_all();
    ctx.dispatch::<LogoutCommand>();
    navigate(ctx, Route::Login);
}
