use crate::i18n::Locale;
use secrecy::Secret;
use serde::Deserialize;
use service_core::error::AppError;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub server: ServerSettings,
    pub site: SiteSettings,
    pub payments: PaymentSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SiteSettings {
    #[serde(default)]
    pub default_locale: Locale,
    /// Fallback origin for redirect URLs when a request has no host headers.
    pub public_base_url: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct PaymentSettings {
    pub api_base_url: String,
    /// Absent key is not a startup failure; invoice creation answers 500 instead.
    pub api_key: Option<Secret<String>>,
    #[serde(default = "default_order_prefix")]
    pub order_prefix: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_order_prefix() -> String {
    "proxy".to_string()
}

fn default_timeout_seconds() -> u64 {
    15
}

#[derive(Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn get_configuration() -> Result<Settings, AppError> {
    let base_path = std::env::current_dir()?;

    // Works from the workspace root as well as from inside the crate
    let configuration_directory = if base_path.ends_with("storefront") {
        base_path.join("config")
    } else {
        base_path.join("storefront").join("config")
    };

    service_core::config::load_layered(&configuration_directory, "APP")
}
