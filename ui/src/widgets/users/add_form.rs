//! "Add New User" form bound to the store's add draft.

use egui::{Response, TextEdit, Ui};
use roster_business::{AddUserCommand, UserDraft, UserField, UserListState};
use roster_states::StateCtx;

/// Fields laid out two per line, like the first/last name pair.
const FORM_ROWS: [&[UserField]; 4] = [
    &[UserField::FirstName, UserField::LastName],
    &[UserField::Email],
    &[UserField::Phone, UserField::Company],
    &[UserField::Website],
];

pub fn add_user_form(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let mut draft: UserDraft = state_ctx.state::<UserListState>().new_user().clone();
    let mut changed = Vec::new();
    let mut submit = false;

    let response = ui
        .vertical(|ui| {
            ui.heading("Add New User");
            ui.add_space(4.0);

            for row in FORM_ROWS {
                ui.horizontal(|ui| {
                    for &field in row {
                        let edit = ui.add(
                            TextEdit::singleline(draft.field_mut(field)).hint_text(field.label()),
                        );
                        if edit.changed() {
                            changed.push(field);
                        }
                    }
                });
            }

            ui.add_space(8.0);
            if ui.button("Add User").clicked() {
                submit = true;
            }
        })
        .response;

    if !changed.is_empty() {
        state_ctx.update::<UserListState>(|state| {
            for field in changed {
                state.set_new_user_field(field, draft.field(field).to_owned());
            }
        });
    }

    if submit {
        state_ctx.dispatch::<AddUserCommand>();
    }

    response
}
