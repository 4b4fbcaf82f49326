//! Cell rendering for the users table.
//!
//! Read-only cells are plain labels; edit cells write into a local copy of the edit draft
//! and report which field changed.

use egui::{TextEdit, Ui};
use roster_business::{UserField, UserRecord};

/// What a click inside a row asks for. Applied after the table is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(u64),
    Delete(u64),
    Save,
    Cancel,
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// One text field per `fields`, stacked; returns the fields that changed this frame.
pub fn render_edit_cell(
    ui: &mut Ui,
    draft: &mut UserRecord,
    fields: &[UserField],
) -> Vec<UserField> {
    let mut changed = Vec::new();
    ui.vertical(|ui| {
        for &field in fields {
            let response =
                ui.add(TextEdit::singleline(draft.field_mut(field)).hint_text(field.label()));
            if response.changed() {
                changed.push(field);
            }
        }
    });
    changed
}

pub fn render_view_actions(ui: &mut Ui, id: u64) -> Option<RowAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("Edit").clicked() {
            action = Some(RowAction::Edit(id));
        }
        if ui.button("Delete").clicked() {
            action = Some(RowAction::Delete(id));
        }
    });
    action
}

pub fn render_edit_actions(ui: &mut Ui) -> Option<RowAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            action = Some(RowAction::Save);
        }
        if ui.button("Cancel").clicked() {
            action = Some(RowAction::Cancel);
        }
    });
    action
}
