//! Test helpers for dijitle-api integration tests.

#![allow(dead_code)]

use dijitle_api::config::{DijitleConfig, Environment};
use dijitle_api::startup::Application;
use service_core::config::Config as CoreConfig;

/// Configuration bound to loopback on a random port, independent of the
/// process environment.
pub fn test_config() -> DijitleConfig {
    DijitleConfig {
        common: CoreConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        environment: Environment::Dev,
        log_level: "debug".to_string(),
        otlp_endpoint: None,
        swagger_enabled: true,
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config()).await
    }

    pub async fn spawn_with(config: DijitleConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
