#![allow(dead_code)]

use axum::{body::Body, http::Response, Router};
use http_body_util::BodyExt;
use secrecy::Secret;
use storefront::config::{PaymentSettings, ServerSettings, Settings, SiteSettings, TelemetrySettings};
use storefront::i18n::Locale;
use storefront::startup::{build_router, Application};
use storefront::AppState;

pub const TEST_API_KEY: &str = "test-api-key";

pub fn test_settings(api_base_url: &str, api_key: Option<&str>) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
        },
        site: SiteSettings {
            default_locale: Locale::En,
            public_base_url: Some("http://localhost:8080".to_string()),
        },
        payments: PaymentSettings {
            api_base_url: api_base_url.to_string(),
            api_key: api_key.map(|k| Secret::new(k.to_string())),
            order_prefix: "test".to_string(),
            timeout_seconds: 5,
        },
        telemetry: TelemetrySettings::default(),
    }
}

/// Router for `oneshot` tests. The payment API is unreachable unless a mock
/// server URL is passed in.
pub fn test_router(api_base_url: &str, api_key: Option<&str>) -> Router {
    let state = AppState::new(test_settings(api_base_url, api_key)).expect("Failed to build state");
    build_router(state)
}

pub fn offline_router() -> Router {
    test_router("http://127.0.0.1:9", Some(TEST_API_KEY))
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let app = Application::build(test_settings("http://127.0.0.1:9", None))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}
