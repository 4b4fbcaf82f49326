//! Home page for signed-in users.

use egui::{Response, Ui};
use roster_business::{Route, Session, navigate};

use crate::state::State;

pub fn home_page(state: &mut State, ui: &mut Ui) -> Response {
    let username = state
        .ctx
        .state::<Session>()
        .username()
        .unwrap_or_default()
        .to_owned();
    let mut requested = None;

    let response = ui
        .vertical(|ui| {
            ui.heading(format!("Welcome, {username}!"));
            ui.add_space(12.0);
            ui.label("Manage the user directory or change your settings.");
            ui.add_space(8.0);

            if ui.link("Go to User Data").clicked() {
                requested = Some(Route::UserData);
            }
            if ui.link("Go to Settings").clicked() {
                requested = Some(Route::Settings);
            }
        })
        .response;

    if let Some(route) = requested {
        navigate(&mut state.ctx, route);
    }

    response
}
