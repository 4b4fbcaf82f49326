//! Login form.
//!
//! A single username field; the Login button stays disabled until the trimmed name is
//! non-empty, and Enter in the field submits as well.

use egui::{Align, Button, Key, Layout, Response, TextEdit, Ui};
use roster_business::{LoginCommand, LoginInput};
use roster_states::StateCtx;

use crate::utils::colors::COLOR_RED;

pub fn login_widget(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let input = state_ctx.state::<LoginInput>();
    let mut username = input.username.clone();
    let error = input.error;
    let mut should_login = false;

    let response = ui
        .with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(20.0);
            ui.heading("Roster");
            ui.label("Sign in to manage users");
            ui.add_space(24.0);

            if let Some(err) = error {
                ui.colored_label(COLOR_RED, err.to_string());
                ui.add_space(8.0);
            }

            ui.horizontal(|ui| {
                ui.label("Username:");
                let field =
                    ui.add(TextEdit::singleline(&mut username).hint_text("Enter your username"));

                if field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    should_login = true;
                }
            });

            ui.add_space(16.0);

            let can_login = !username.trim().is_empty();
            if ui.add_enabled(can_login, Button::new("Login")).clicked() {
                should_login = true;
            }
        })
        .response;

    if state_ctx.state::<LoginInput>().username != username {
        state_ctx.update::<LoginInput>(|input| input.username = username);
    }

    if should_login {
        state_ctx.dispatch::<LoginCommand>();
    }

    response
}

#[cfg(test)]
mod login_widget_tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use roster_business::{BusinessConfig, LoginError, Session, new_ctx};

    use super::*;

    fn harness<'a>() -> Harness<'a, StateCtx> {
        let ctx = new_ctx(BusinessConfig::new("http://127.0.0.1:9/users"));
        Harness::new_ui_state(
            |ui, state_ctx| {
                login_widget(state_ctx, ui);
            },
            ctx,
        )
    }

    #[test]
    fn test_login_form_displayed() {
        let mut harness = harness();
        harness.step();

        assert!(harness.query_by_label_contains("Username").is_some());
        assert!(harness.query_by_label("Login").is_some());
    }

    #[test]
    fn test_login_button_signs_in() {
        let mut harness = harness();
        harness
            .state_mut()
            .update::<LoginInput>(|input| input.username = " dana ".to_owned());
        harness.step();

        harness.get_by_label("Login").click();
        harness.step();

        assert_eq!(harness.state().state::<Session>().username(), Some("dana"));
    }

    #[test]
    fn test_error_message_is_shown() {
        let mut harness = harness();
        harness
            .state_mut()
            .update::<LoginInput>(|input| input.error = Some(LoginError::EmptyUsername));
        harness.step();

        assert!(
            harness
                .query_by_label_contains("Username is required")
                .is_some()
        );
    }
}
