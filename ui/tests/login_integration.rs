//! Sign-in, navigation and sign-out through the full app.

mod common;

use kittest::Queryable;
use roster_business::{LoginInput, Route, Session};
use wiremock::ResponseTemplate;

use crate::common::{TestCtx, UI_PROPAGATION_FRAMES};

#[tokio::test]
async fn test_app_starts_on_login_page() {
    let mut ctx = TestCtx::new_app(ResponseTemplate::new(200)).await;
    let harness = ctx.harness_mut();
    harness.step();

    assert!(harness.query_by_label("Sign in to manage users").is_some());
    assert!(harness.query_by_label("Login").is_some());
    assert!(
        harness.query_by_label_contains("Signed in as").is_none(),
        "nav bar is hidden before login"
    );
}

#[tokio::test]
async fn test_login_button_opens_home() {
    let mut ctx = TestCtx::new_app(ResponseTemplate::new(200)).await;
    let harness = ctx.harness_mut();
    harness.step();

    harness
        .state_mut()
        .state_mut()
        .ctx
        .update::<LoginInput>(|input| input.username = "alice".to_owned());
    harness.step();

    harness.get_by_label("Login").click();
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }

    assert_eq!(
        harness.state().state().ctx.state::<Route>(),
        &Route::Home
    );
    assert!(harness.query_by_label("Welcome, alice!").is_some());
    assert!(harness.query_by_label("Signed in as alice").is_some());
}

#[tokio::test]
async fn test_logout_returns_to_login() {
    let mut ctx = TestCtx::new_app(ResponseTemplate::new(200)).await;
    ctx.login("alice");

    let harness = ctx.harness_mut();
    harness.get_by_label("Go to Settings").click();
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }
    assert_eq!(
        harness.state().state().ctx.state::<Route>(),
        &Route::Settings
    );

    harness.get_by_label("Logout").click();
    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }

    let app_ctx = &harness.state().state().ctx;
    assert_eq!(app_ctx.state::<Route>(), &Route::Login);
    assert!(!app_ctx.state::<Session>().is_authenticated());
    assert!(harness.query_by_label("Sign in to manage users").is_some());
}

#[tokio::test]
async fn test_protected_route_redirects_to_login() {
    let mut ctx = TestCtx::new_app(ResponseTemplate::new(200)).await;
    let harness = ctx.harness_mut();
    harness
        .state_mut()
        .state_mut()
        .ctx
        .update::<Route>(|route| *route = Route::Settings);

    for _ in 0..UI_PROPAGATION_FRAMES {
        harness.step();
    }

    assert_eq!(harness.state().state().ctx.state::<Route>(), &Route::Login);
    assert!(harness.query_by_label("Logout").is_none());
}
