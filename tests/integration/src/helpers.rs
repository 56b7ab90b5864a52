//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests
//! with the api-key header the endpoints authenticate on.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use chirp_api::{create_app, create_app_state};
use chirp_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, ServerConfig, StorageConfig,
};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Check whether the test environment (a reachable database) is available.
///
/// Tests call this first and silently skip when DATABASE_URL is not set,
/// so the suite stays green on machines without PostgreSQL.
pub async fn check_test_env() -> bool {
    let _ = dotenvy::dotenv();
    std::env::var("DATABASE_URL").is_ok()
}

/// Build an AppConfig for tests from DATABASE_URL
pub fn test_config() -> Result<AppConfig> {
    let _ = dotenvy::dotenv();
    let url = std::env::var("DATABASE_URL")?;

    Ok(AppConfig {
        app: AppSettings {
            name: "chirp-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
        },
        cors: CorsConfig {
            allowed_origins: vec![],
        },
        storage: StorageConfig {
            static_dir: std::env::temp_dir()
                .join("chirp-test-static")
                .to_string_lossy()
                .into_owned(),
            max_file_size_mb: 5,
        },
    })
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request without authentication
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with an api-key header
    pub async fn get_auth(&self, path: &str, api_key: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).header("api-key", api_key).send().await?)
    }

    /// Make a POST request with an api-key header and JSON body
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        api_key: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("api-key", api_key)
            .json(body)
            .send()
            .await?)
    }

    /// Make a body-less POST request with an api-key header
    pub async fn post_auth_empty(&self, path: &str, api_key: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).header("api-key", api_key).send().await?)
    }

    /// Make a DELETE request with an api-key header
    pub async fn delete_auth(&self, path: &str, api_key: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .delete(&url)
            .header("api-key", api_key)
            .send()
            .await?)
    }

    /// Upload a file through the multipart media endpoint
    pub async fn upload_auth(
        &self,
        path: &str,
        api_key: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        Ok(self
            .client
            .post(&url)
            .header("api-key", api_key)
            .multipart(form)
            .send()
            .await?)
    }
}

/// Assert a response status, consuming the response
pub async fn assert_status(response: Response, expected: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Expected status {expected}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert a response status and deserialize its JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected {
        anyhow::bail!("Expected status {expected}, got {status}. Body: {body}");
    }
    Ok(serde_json::from_str(&body)?)
}
