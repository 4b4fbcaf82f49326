//! Route state for page navigation.
//!
//! The route stored in `StateCtx` is always a resolved one: [`navigate`] runs the guard
//! before storing, and the app re-resolves every frame so login and logout redirect on
//! their own.

use std::any::Any;

use log::info;
use roster_states::{State, StateCtx, state_assign_impl};
use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::users::LoadUsersCommand;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// `/`, the only page reachable while anonymous.
    #[default]
    Login,
    /// `/home`
    Home,
    /// `/user-data`
    UserData,
    /// `/settings`
    Settings,
    /// Any other path.
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Login,
            "/home" => Self::Home,
            "/user-data" => Self::UserData,
            "/settings" => Self::Settings,
            _ => Self::NotFound(path.to_owned()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Login => "/",
            Self::Home => "/home",
            Self::UserData => "/user-data",
            Self::Settings => "/settings",
            Self::NotFound(path) => path,
        }
    }

    /// Pages that need a signed-in user.
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Home | Self::UserData | Self::Settings)
    }

    /// The route actually shown when `self` is requested under `session`.
    pub fn resolve(&self, session: &Session) -> Self {
        match self {
            _ if !session.is_authenticated() => Self::Login,
            Self::Login | Self::NotFound(_) => Self::Home,
            route => route.clone(),
        }
    }
}

impl State for Route {
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

/// Resolve `requested` against the session and make it the current route.
///
/// Entering the user data page loads the users; leaving it cancels that load.
/// Returns the route that was stored.
pub fn navigate(ctx: &mut StateCtx, requested: Route) -> Route {
    let next = requested.resolve(ctx.state::<Session>());
    let current = ctx.state::<Route>().clone();
    if next == current {
        return next;
    }

    info!("navigate: {} -> {}", current.path(), next.path());
    if current == Route::UserData {
        ctx.cancel::<LoadUsersCommand>();
    }

    let stored = next.clone();
    ctx.update::<Route>(move |route| *route = stored);

    if next == Route::UserData {
        ctx.dispatch::<LoadUsersCommand>();
    }
    next
}

#[cfg(test)]
mod tests {
    use ustr::Ustr;

    use super::*;

    fn signed_in() -> Session {
        Session::Authenticated {
            username: Ustr::from("alice"),
        }
    }

    #[test]
    fn test_route_default_is_login() {
        assert_eq!(Route::default(), Route::Login);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [Route::Login, Route::Home, Route::UserData, Route::Settings] {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert_eq!(Route::from_path("/home/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Login);
        assert_eq!(
            Route::from_path("/nowhere"),
            Route::NotFound("/nowhere".to_owned())
        );
    }

    #[test]
    fn test_protected_routes_redirect_to_login_when_anonymous() {
        let anonymous = Session::Anonymous;
        for route in [Route::Home, Route::UserData, Route::Settings] {
            assert!(route.is_protected());
            assert_eq!(route.resolve(&anonymous), Route::Login);
        }
        assert_eq!(Route::Login.resolve(&anonymous), Route::Login);
    }

    #[test]
    fn test_login_redirects_home_when_signed_in() {
        assert_eq!(Route::Login.resolve(&signed_in()), Route::Home);
        assert_eq!(Route::UserData.resolve(&signed_in()), Route::UserData);
        assert_eq!(Route::Settings.resolve(&signed_in()), Route::Settings);
    }

    #[test]
    fn test_unknown_path_falls_back() {
        let unknown = Route::from_path("/missing");
        assert_eq!(unknown.resolve(&Session::Anonymous), Route::Login);
        assert_eq!(unknown.resolve(&signed_in()), Route::Home);
    }

    #[test]
    fn test_navigate_applies_guard() {
        let mut ctx = StateCtx::new();
        ctx.add_state(Session::default());
        ctx.add_state(Route::default());

        assert_eq!(navigate(&mut ctx, Route::Settings), Route::Login);
        assert_eq!(ctx.state::<Route>(), &Route::Login);

        ctx.update::<Session>(|session| *session = signed_in());
        assert_eq!(navigate(&mut ctx, Route::Settings), Route::Settings);
        assert_eq!(ctx.state::<Route>(), &Route::Settings);
    }
}
