//! Login page for unauthenticated users.

use egui::{Response, Ui};

use crate::{state::State, widgets};

pub fn login_page(state: &mut State, ui: &mut Ui) -> Response {
    widgets::login_widget(&mut state.ctx, ui)
}
