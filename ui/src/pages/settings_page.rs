//! Settings page.

use egui::{Response, Ui};
use roster_business::logout;

use crate::state::State;

pub fn settings_page(state: &mut State, ui: &mut Ui) -> Response {
    let mut should_logout = false;

    let response = ui
        .vertical(|ui| {
            ui.heading("Settings");
            ui.add_space(12.0);
            if ui.button("Logout").clicked() {
                should_logout = true;
            }
        })
        .response;

    if should_logout {
        logout(&mut state.ctx);
    }

    response
}
