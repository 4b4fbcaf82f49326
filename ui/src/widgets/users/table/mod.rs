//! Users table.
//!
//! - `columns`: column definitions and widths
//! - `header`: header row
//! - `row`: read-only and edit rows
//! - `cells`: per-cell rendering and the actions a row can request
//!
//! The table renders from owned copies of the filtered view and the edit draft, then
//! applies whatever the rows asked for once drawing is done.

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Frame, Margin, Response, Stroke, Ui};
use egui_extras::TableBuilder;
use roster_business::{
    CancelEditCommand, DeleteUserCommand, EditUserCommand, FilteredUsersCompute,
    SaveUserCommand, UserListState, UserTableInput,
};
use roster_states::StateCtx;

pub use cells::RowAction;
use columns::{EDIT_ROW_HEIGHT, HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::{render_edit_row, render_user_row};

use crate::utils::colors::TABLE_BORDER_COLOR;

pub fn users_table(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let users = match state_ctx.try_cached::<FilteredUsersCompute>() {
        Ok(filtered) => filtered.users.clone(),
        Err(err) => {
            log::warn!("users_table: {err}");
            Vec::new()
        }
    };
    let mut draft = state_ctx.state::<UserListState>().editing().cloned();

    let mut action = None;
    let mut changed = Vec::new();

    let response = Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::same(4))
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .id_salt("users_table")
                .striped(true)
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
            for column in table_columns() {
                builder = builder.column(column);
            }

            builder
                .header(HEADER_HEIGHT, |mut header| render_table_header(&mut header))
                .body(|mut body| {
                    for user in &users {
                        match draft.as_mut().filter(|draft| draft.id == user.id) {
                            Some(draft) => body.row(EDIT_ROW_HEIGHT, |mut row| {
                                let result = render_edit_row(&mut row, draft);
                                action = action.or(result.action);
                                changed.extend(result.changed);
                            }),
                            None => body.row(ROW_HEIGHT, |mut row| {
                                let result = render_user_row(&mut row, user);
                                action = action.or(result.action);
                            }),
                        }
                    }
                });

            if users.is_empty() {
                ui.label("No users to show.");
            }
        })
        .response;

    if let Some(draft) = draft.filter(|_| !changed.is_empty()) {
        state_ctx.update::<UserListState>(|state| {
            for field in changed {
                state.set_editing_field(field, draft.field(field).to_owned());
            }
        });
    }

    if let Some(action) = action {
        apply_row_action(state_ctx, action);
    }

    response
}

/// Turn a row click into the matching command.
pub fn apply_row_action(state_ctx: &mut StateCtx, action: RowAction) {
    match action {
        RowAction::Edit(id) => {
            state_ctx.update::<UserTableInput>(|input| input.target = Some(id));
            state_ctx.dispatch::<EditUserCommand>();
        }
        RowAction::Delete(id) => {
            state_ctx.update::<UserTableInput>(|input| input.target = Some(id));
            state_ctx.dispatch::<DeleteUserCommand>();
        }
        RowAction::Save => state_ctx.dispatch::<SaveUserCommand>(),
        RowAction::Cancel => state_ctx.dispatch::<CancelEditCommand>(),
    }
}
