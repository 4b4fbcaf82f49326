//! Login, logout and the route guard working together on a registered context.

use roster_business::{
    BusinessConfig, LoginCommand, LoginInput, Route, Session, logout, navigate, new_ctx,
};
use roster_states::StateCtx;

fn ctx() -> StateCtx {
    // Nothing here reaches the network.
    new_ctx(BusinessConfig::new("http://127.0.0.1:9/users"))
}

fn login(ctx: &mut StateCtx, name: &str) {
    let name = name.to_owned();
    ctx.update::<LoginInput>(move |input| input.username = name);
    ctx.dispatch::<LoginCommand>();
}

#[test]
fn test_anonymous_user_is_kept_on_login() {
    let mut ctx = ctx();

    for requested in [Route::Home, Route::UserData, Route::Settings] {
        assert_eq!(navigate(&mut ctx, requested), Route::Login);
    }
    assert_eq!(ctx.state::<Route>(), &Route::Login);
}

#[test]
fn test_login_then_current_route_resolves_home() {
    let mut ctx = ctx();
    login(&mut ctx, "  alice  ");

    let current = ctx.state::<Route>().clone();
    assert_eq!(navigate(&mut ctx, current), Route::Home);
    assert_eq!(ctx.state::<Session>().username(), Some("alice"));
}

#[test]
fn test_blank_login_keeps_session_anonymous() {
    let mut ctx = ctx();
    login(&mut ctx, "   ");

    assert!(!ctx.state::<Session>().is_authenticated());
    assert!(ctx.state::<LoginInput>().error.is_some());
    assert_eq!(navigate(&mut ctx, Route::Home), Route::Login);
}

#[test]
fn test_logout_returns_to_login() {
    let mut ctx = ctx();
    login(&mut ctx, "bob");
    navigate(&mut ctx, Route::Settings);

    logout(&mut ctx);

    assert_eq!(ctx.state::<Session>(), &Session::Anonymous);
    assert_eq!(ctx.state::<Route>(), &Route::Login);
    assert_eq!(navigate(&mut ctx, Route::Settings), Route::Login);
}

#[test]
fn test_unknown_path_after_login_goes_home() {
    let mut ctx = ctx();
    login(&mut ctx, "carol");

    assert_eq!(
        navigate(&mut ctx, Route::from_path("/does-not-exist")),
        Route::Home
    );
}
