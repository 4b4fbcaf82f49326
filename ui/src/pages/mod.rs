//! Pages, one per route:
//! - `login_page`: the only page shown while anonymous
//! - `home_page`: greeting and links
//! - `user_data_page`: the users table
//! - `settings_page`: logout

mod home_page;
mod login_page;
mod settings_page;
mod user_data_page;

pub use home_page::home_page;
pub use login_page::login_page;
pub use settings_page::settings_page;
pub use user_data_page::user_data_page;
