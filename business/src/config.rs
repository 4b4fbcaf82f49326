use std::any::Any;

use log::warn;
use roster_states::{State, state_assign_impl};
use serde::Deserialize;
use ustr::Ustr;

pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Prefix of the environment variables read by [`BusinessConfig::from_env`].
pub const ENV_PREFIX: &str = "ROSTER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Endpoint returning the JSON array of remote users.
    pub users_url: String,
}

/// Environment shape, every field optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    users_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(users_url: impl Into<String>) -> Self {
        Self {
            users_url: users_url.into(),
        }
    }

    pub fn users_url(&self) -> Ustr {
        Ustr::from(&self.users_url)
    }

    /// Read `ROSTER_*` variables from the process environment, falling back to the defaults.
    ///
    /// On wasm there is no process environment and the defaults are used.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Same as [`Self::from_env`] but over an explicit set of variables.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let prefix = format!("{ENV_PREFIX}_");
        let vars: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(&prefix)
                    .map(|key| (key.to_owned(), value.as_ref().to_owned()))
            })
            .collect();

        let raw: Result<RawConfig, _> = serde_env::from_iter(vars);
        match raw {
            Ok(raw) => Self::from_raw(raw),
            Err(err) => {
                warn!("BusinessConfig: invalid environment, using defaults: {err}");
                Self::default()
            }
        }
    }

    fn from_raw(raw: RawConfig) -> Self {
        match raw.users_url {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USERS_URL)
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_placeholder_api() {
        let config = BusinessConfig::default();
        assert_eq!(config.users_url, DEFAULT_USERS_URL);
        assert_eq!(config.users_url(), Ustr::from(DEFAULT_USERS_URL));
    }

    #[test]
    fn test_from_vars_reads_prefixed_url() {
        let config =
            BusinessConfig::from_vars([("ROSTER_USERS_URL", "http://localhost:9000/users")]);
        assert_eq!(config.users_url, "http://localhost:9000/users");
    }

    #[test]
    fn test_from_vars_ignores_other_prefixes() {
        let config =
            BusinessConfig::from_vars([("OTHER_USERS_URL", "http://localhost:9000/users")]);
        assert_eq!(config, BusinessConfig::default());
    }

    #[test]
    fn test_blank_url_falls_back_to_default() {
        let config = BusinessConfig::from_vars([("ROSTER_USERS_URL", "   ")]);
        assert_eq!(config, BusinessConfig::default());
    }
}
