//! Top navigation bar, only rendered while signed in.

use egui::{RichText, Ui};
use roster_business::{Route, Session, navigate};
use roster_states::StateCtx;

use crate::utils::colors::COLOR_GREEN;

const LINKS: [(&str, Route); 3] = [
    ("Home", Route::Home),
    ("User Data", Route::UserData),
    ("Settings", Route::Settings),
];

pub fn nav_bar(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(username) = state_ctx
        .state::<Session>()
        .username()
        .map(str::to_owned)
    else {
        return;
    };
    let current = state_ctx.state::<Route>().clone();
    let mut requested = None;

    ui.horizontal(|ui| {
        ui.strong("Roster");
        ui.separator();
        for (label, route) in LINKS {
            if ui.selectable_label(current == route, label).clicked() {
                requested = Some(route);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(format!("Signed in as {username}")).color(COLOR_GREEN));
        });
    });

    if let Some(route) = requested {
        navigate(state_ctx, route);
    }
}
