use roster_business::{BusinessConfig, Route, navigate, new_ctx};
use roster_states::StateCtx;

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::from_env())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            ctx: new_ctx(config),
        }
    }

    /// State pointed at a mock server serving `GET {base_url}/users`.
    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(format!("{base_url}/users")))
    }

    /// Start on the page at `path`, subject to the route guard.
    pub fn with_initial_path(mut self, path: &str) -> Self {
        navigate(&mut self.ctx, Route::from_path(path));
        self
    }
}
