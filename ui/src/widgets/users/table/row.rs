//! Row rendering for the users table.

use egui_extras::TableRow;
use roster_business::{UserField, UserRecord};

use super::cells::{
    RowAction, render_edit_actions, render_edit_cell, render_text_cell, render_view_actions,
};

/// Data cells after the name column, in column order.
const DETAIL_FIELDS: [UserField; 4] = [
    UserField::Email,
    UserField::Phone,
    UserField::Company,
    UserField::Website,
];

/// What happened in a row this frame.
#[derive(Debug, Default)]
pub struct UserRowResult {
    pub action: Option<RowAction>,
    pub changed: Vec<UserField>,
}

#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, user: &UserRecord) -> UserRowResult {
    let mut result = UserRowResult::default();

    row.col(|ui| render_text_cell(ui, &user.full_name()));
    for field in DETAIL_FIELDS {
        row.col(|ui| render_text_cell(ui, user.field(field)));
    }
    row.col(|ui| result.action = render_view_actions(ui, user.id));

    result
}

/// The row under edit: text fields bound to `draft`, then Save / Cancel.
#[inline]
pub fn render_edit_row(row: &mut TableRow<'_, '_>, draft: &mut UserRecord) -> UserRowResult {
    let mut result = UserRowResult::default();

    row.col(|ui| {
        result.changed.extend(render_edit_cell(
            ui,
            draft,
            &[UserField::FirstName, UserField::LastName],
        ));
    });
    for field in DETAIL_FIELDS {
        row.col(|ui| result.changed.extend(render_edit_cell(ui, draft, &[field])));
    }
    row.col(|ui| result.action = render_edit_actions(ui));

    result
}
