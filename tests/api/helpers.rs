use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use signup_api::{
    app::{self, App},
    model::ModelManager,
    web::CorsHeaders,
    AppState,
};
use tokio::net::TcpListener;

/// Trying to bind port 0 will trigger an OS scan for an available port
/// which will then be bound to the application.
const TEST_SOCK_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 0);

pub struct TestApp {
    pub addr: SocketAddr,
    pub mm: ModelManager,
    pub http_client: reqwest::Client,
}

impl TestApp {
    /// Spawns the app on an OS-assigned port, backed by its own freshly
    /// migrated database, and returns the handles the tests need.
    pub async fn spawn() -> Result<TestApp> {
        let mm = ModelManager::test_init().await?;
        let app_state = AppState::new(mm.clone(), CorsHeaders::new());

        let listener = TcpListener::bind(&TEST_SOCK_ADDR).await?;
        let addr = listener.local_addr()?;

        tokio::spawn(app::serve(App::new(app_state, listener)));

        Ok(TestApp {
            addr,
            mm,
            http_client: reqwest::Client::new(),
        })
    }

    pub async fn post_signup(&self, json_request: &serde_json::Value) -> Result<reqwest::Response> {
        let res = self
            .http_client
            .post(format!("http://{}/", self.addr))
            .json(json_request)
            .send()
            .await?;
        Ok(res)
    }
}
