use std::time::Duration;

use egui_kittest::Harness;
use roster_business::{LoginCommand, LoginInput};
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Frames to run after an input so the resulting commands settle.
#[allow(unused)]
pub const UI_PROPAGATION_FRAMES: usize = 5;

pub struct TestCtx<'a> {
    /// Mock server must be retained to keep HTTP endpoints alive during tests.
    mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// App backed by a mock users endpoint answering with `response`.
    pub async fn new_app(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    #[allow(unused)]
    pub async fn with_users(users: serde_json::Value) -> Self {
        Self::new_app(ResponseTemplate::new(200).set_body_json(users)).await
    }

    /// Sign in as `username` the way the login form does.
    #[allow(unused)]
    pub fn login(&mut self, username: &str) {
        let username = username.to_owned();
        let harness = self.harness_mut();
        let ctx = &mut harness.state_mut().state_mut().ctx;
        ctx.update::<LoginInput>(move |input| input.username = username);
        ctx.dispatch::<LoginCommand>();
        for _ in 0..UI_PROPAGATION_FRAMES {
            harness.step();
        }
    }

    /// Step frames while giving background fetches time to land.
    #[allow(unused)]
    pub async fn wait_for_network(&mut self) {
        for _ in 0..10 {
            tokio::time::sleep(Duration::from_millis(20)).await;
            self.harness.step();
        }
    }
}

#[allow(unused)]
pub fn placeholder_users() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "email": "Sincere@april.biz",
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": { "name": "Romaguera-Crona" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "email": "Shanna@melissa.tv",
            "phone": "010-692-6593 x09125",
            "website": "anastasia.net",
            "company": { "name": "Deckow-Crist" }
        }
    ])
}
