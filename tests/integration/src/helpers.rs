//! Test helpers for integration tests
//!
//! Spawns a server on an ephemeral port and wraps the HTTP client.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use conduit_api::{create_app, create_app_state};
use conduit_common::AppConfig;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", format!("Token {token}"))
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::authorized(self.client.get(self.url(path)), token)
            .send()
            .await?)
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    pub async fn put_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(Self::authorized(self.client.put(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::authorized(self.client.delete(self.url(path)), token)
            .send()
            .await?)
    }
}

/// Configuration from the environment, `.env` included
///
/// Migrations are resolved from the workspace root regardless of the
/// directory the test binary runs in.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    let mut config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
    config.database.migrations_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations").to_string();
    Ok(config)
}

/// Whether the database-backed environment is available
pub async fn check_test_env() -> bool {
    for var in ["DATABASE_URL", "JWT_SECRET", "API_PORT"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
