//! Shared color constants for the UI.

use egui::Color32;

/// Forest green for the signed-in indicator.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for validation and load errors.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Subtle gray for table borders.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
