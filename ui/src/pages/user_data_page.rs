//! User data page: load status, search, table and the add-user form.

use egui::{Response, ScrollArea, Ui};
use roster_business::{UserListState, UsersLoad};

use crate::{state::State, utils::colors::COLOR_RED, widgets};

pub fn user_data_page(state: &mut State, ui: &mut Ui) -> Response {
    let (load, error) = {
        let store = state.ctx.state::<UserListState>();
        (store.load().clone(), store.error())
    };

    ui.vertical(|ui| {
        ui.heading("User Data");

        match &load {
            UsersLoad::Loading => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading users...");
                });
            }
            UsersLoad::Failed(message) => {
                ui.colored_label(COLOR_RED, format!("Failed to load users: {message}"));
            }
            UsersLoad::Idle | UsersLoad::Loaded { .. } => {}
        }

        if let Some(error) = error {
            ui.colored_label(COLOR_RED, error.to_string());
        }

        ui.add_space(8.0);
        widgets::search_bar(&mut state.ctx, ui);
        ui.add_space(8.0);

        ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                widgets::users_table(&mut state.ctx, ui);
                ui.add_space(16.0);
                widgets::add_user_form(&mut state.ctx, ui);
            });
    })
    .response
}
