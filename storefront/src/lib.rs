pub mod config;
pub mod content;
pub mod dtos;
pub mod handlers;
pub mod i18n;
pub mod order;
pub mod pricing;
pub mod services;
pub mod startup;
pub mod utils;

use config::Settings;
use order::CatalogSet;
use services::InvoiceClient;
use std::sync::Arc;

/// Shared, immutable application state
#[derive(Clone)]
pub struct AppState {
    pub catalogs: Arc<CatalogSet>,
    pub invoices: Arc<InvoiceClient>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Build every locale's catalog and the payment client. Catalog errors
    /// are fatal.
    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let catalogs = CatalogSet::build()?;
        let invoices = InvoiceClient::new(&settings.payments)?;

        if invoices.is_configured() {
            tracing::info!(api_base_url = %settings.payments.api_base_url, "Payment client initialized");
        } else {
            tracing::warn!("Payment API key not configured - checkout will fail");
        }

        Ok(Self {
            catalogs: Arc::new(catalogs),
            invoices: Arc::new(invoices),
            settings: Arc::new(settings),
        })
    }
}
