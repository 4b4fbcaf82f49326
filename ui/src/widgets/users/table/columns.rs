//! Column definitions for the users table.

use egui_extras::Column;

pub const ACTIONS_WIDTH: f32 = 130.0;
pub const ROW_HEIGHT: f32 = 30.0;
/// Rows under edit stack the first and last name fields.
pub const EDIT_ROW_HEIGHT: f32 = 56.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// In order: Name, Email, Phone, Company, Website, Actions.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::auto().at_least(140.0).resizable(true), // Name
        Column::auto().at_least(160.0).resizable(true), // Email
        Column::auto().at_least(120.0).resizable(true), // Phone
        Column::auto().at_least(120.0).resizable(true), // Company
        Column::remainder().at_least(100.0),            // Website
        Column::exact(ACTIONS_WIDTH),                   // Actions
    ]
}
