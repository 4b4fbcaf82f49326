mod login;
mod nav_bar;
pub mod users;

pub use login::login_widget;
pub use nav_bar::nav_bar;
pub use users::{add_user_form, search_bar, users_table};
