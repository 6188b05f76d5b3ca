//! Crypto payment invoice client.
//!
//! Creates hosted invoices through the provider's `/invoice` endpoint. The
//! visitor is redirected to the returned invoice URL and comes back to the
//! success or cancel URL we pass along.

use super::metrics::record_invoice;
use crate::config::PaymentSettings;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use std::time::Duration;
use thiserror::Error;

pub const INVOICE_CURRENCY: &str = "usd";

#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error("Payment API key is not configured")]
    MissingApiKey,

    #[error("Payment provider returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Payment provider response did not include an invoice URL")]
    MissingInvoiceUrl,

    #[error("Payment provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Payment provider response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<InvoiceError> for AppError {
    fn from(err: InvoiceError) -> Self {
        match err {
            InvoiceError::MissingApiKey => AppError::ConfigError(anyhow::anyhow!(err.to_string())),
            other => AppError::Upstream(other.to_string()),
        }
    }
}

/// What the storefront wants to charge for.
#[derive(Debug, Clone)]
pub struct InvoiceOrder {
    pub amount_usd: f64,
    pub description: String,
    pub success_url: String,
    pub cancel_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedInvoice {
    pub invoice_url: String,
    pub invoice_id: Option<String>,
}

/// Request body for invoice creation.
#[derive(Debug, Serialize)]
struct CreateInvoiceRequest<'a> {
    price_amount: f64,
    price_currency: &'a str,
    order_id: String,
    order_description: &'a str,
    success_url: &'a str,
    cancel_url: &'a str,
    is_fee_paid_by_user: bool,
    is_fixed_rate: bool,
}

/// The provider has answered with either `invoice_url` or `url`, and with
/// numeric as well as string ids.
#[derive(Debug, Deserialize)]
struct InvoiceResponse {
    invoice_url: Option<String>,
    url: Option<String>,
    id: Option<InvoiceId>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InvoiceId {
    Text(String),
    Number(serde_json::Number),
}

impl InvoiceId {
    fn into_string(self) -> String {
        match self {
            InvoiceId::Text(text) => text,
            InvoiceId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct InvoiceClient {
    client: Client,
    api_base_url: String,
    api_key: Option<Secret<String>>,
    order_prefix: String,
}

impl InvoiceClient {
    pub fn new(settings: &PaymentSettings) -> Result<Self, InvoiceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            order_prefix: settings.order_prefix.clone(),
        })
    }

    /// Check if an API key is set.
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    fn next_order_id(&self) -> String {
        format!(
            "{}-{}",
            self.order_prefix,
            chrono::Utc::now().timestamp_millis()
        )
    }

    pub async fn create_invoice(&self, order: &InvoiceOrder) -> Result<CreatedInvoice, InvoiceError> {
        let result = self.send(order).await;
        record_invoice(match &result {
            Ok(_) => "created",
            Err(InvoiceError::MissingApiKey) => "unconfigured",
            Err(InvoiceError::Upstream { .. }) => "rejected",
            Err(_) => "failed",
        });
        result
    }

    async fn send(&self, order: &InvoiceOrder) -> Result<CreatedInvoice, InvoiceError> {
        let api_key = self
            .api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(InvoiceError::MissingApiKey)?;

        let request = CreateInvoiceRequest {
            price_amount: order.amount_usd,
            price_currency: INVOICE_CURRENCY,
            order_id: self.next_order_id(),
            order_description: &order.description,
            success_url: &order.success_url,
            cancel_url: &order.cancel_url,
            is_fee_paid_by_user: true,
            is_fixed_rate: true,
        };

        tracing::info!(
            order_id = %request.order_id,
            amount = request.price_amount,
            description = %request.order_description,
            "Creating payment invoice"
        );

        let url = format!("{}/invoice", self.api_base_url);
        let response = self
            .client
            .post(&url)
            .header("x-api-key", api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, body = %body, "Invoice provider response");

        if !status.is_success() {
            tracing::error!(status = %status, body = %body, "Invoice creation failed");
            return Err(InvoiceError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: InvoiceResponse = serde_json::from_str(&body)?;
        let invoice_url = parsed
            .invoice_url
            .or(parsed.url)
            .filter(|u| !u.is_empty())
            .ok_or(InvoiceError::MissingInvoiceUrl)?;
        let invoice_id = parsed.id.map(InvoiceId::into_string);

        tracing::info!(
            order_id = %request.order_id,
            invoice_id = ?invoice_id,
            "Payment invoice created"
        );

        Ok(CreatedInvoice {
            invoice_url,
            invoice_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(base: &str, key: Option<&str>) -> PaymentSettings {
        PaymentSettings {
            api_base_url: base.to_string(),
            api_key: key.map(|k| Secret::new(k.to_string())),
            order_prefix: "proxy".to_string(),
            timeout_seconds: 5,
        }
    }

    fn order() -> InvoiceOrder {
        InvoiceOrder {
            amount_usd: 49.99,
            description: "rotating-residential / rotating-10, 1 month".to_string(),
            success_url: "https://shop.test/en/order/success".to_string(),
            cancel_url: "https://shop.test/en/order".to_string(),
        }
    }

    #[tokio::test]
    async fn posts_invoice_and_reads_invoice_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/invoice"))
            .and(header("x-api-key", "secret-key"))
            .and(body_partial_json(serde_json::json!({
                "price_amount": 49.99,
                "price_currency": "usd",
                "is_fee_paid_by_user": true,
                "is_fixed_rate": true,
                "cancel_url": "https://shop.test/en/order"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 5077125051u64,
                "invoice_url": "https://pay.test/invoice/5077125051"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = InvoiceClient::new(&settings(&server.uri(), Some("secret-key"))).unwrap();
        let created = client.create_invoice(&order()).await.unwrap();

        assert_eq!(created.invoice_url, "https://pay.test/invoice/5077125051");
        assert_eq!(created.invoice_id.as_deref(), Some("5077125051"));
    }

    #[tokio::test]
    async fn accepts_plain_url_field_and_string_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/invoice"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "inv_42",
                "url": "https://pay.test/i/42"
            })))
            .mount(&server)
            .await;

        let client = InvoiceClient::new(&settings(&server.uri(), Some("k"))).unwrap();
        let created = client.create_invoice(&order()).await.unwrap();
        assert_eq!(created.invoice_url, "https://pay.test/i/42");
        assert_eq!(created.invoice_id.as_deref(), Some("inv_42"));
    }

    #[tokio::test]
    async fn order_id_carries_prefix() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "url": "https://pay.test/i/1"
            })))
            .mount(&server)
            .await;

        let client = InvoiceClient::new(&settings(&server.uri(), Some("k"))).unwrap();
        client.create_invoice(&order()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        let order_id = body["order_id"].as_str().unwrap();
        let millis = order_id.strip_prefix("proxy-").unwrap();
        assert!(millis.parse::<i64>().is_ok());
    }

    #[tokio::test]
    async fn non_success_status_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("{\"message\":\"price too low\"}"))
            .mount(&server)
            .await;

        let client = InvoiceClient::new(&settings(&server.uri(), Some("k"))).unwrap();
        let err = client.create_invoice(&order()).await.unwrap_err();
        match &err {
            InvoiceError::Upstream { status, body } => {
                assert_eq!(*status, 400);
                assert!(body.contains("price too low"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let (status, message) = AppError::from(err).status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.contains("price too low"));
    }

    #[tokio::test]
    async fn missing_url_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 7})))
            .mount(&server)
            .await;

        let client = InvoiceClient::new(&settings(&server.uri(), Some("k"))).unwrap();
        let err = client.create_invoice(&order()).await.unwrap_err();
        assert!(matches!(err, InvoiceError::MissingInvoiceUrl));
    }

    #[tokio::test]
    async fn missing_key_fails_without_calling_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        for key in [None, Some("   ")] {
            let client = InvoiceClient::new(&settings(&server.uri(), key)).unwrap();
            assert!(!client.is_configured());
            let err = client.create_invoice(&order()).await.unwrap_err();
            assert!(matches!(err, InvoiceError::MissingApiKey));
            let (status, _) = AppError::from(err).status_and_message();
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
