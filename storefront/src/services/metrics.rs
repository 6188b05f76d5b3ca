use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

const INVOICES_TOTAL: &str = "storefront_invoices_total";

/// Install the global Prometheus recorder. Calling it twice is an error.
pub fn init_metrics() -> anyhow::Result<()> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    METRICS_HANDLE
        .set(handle)
        .map_err(|_| anyhow::anyhow!("metrics recorder already initialized"))?;

    describe_counter!(
        INVOICES_TOTAL,
        "Payment invoices requested from the provider, by outcome"
    );

    Ok(())
}

pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

/// `outcome` is one of `created`, `rejected`, `failed` or `unconfigured`.
pub fn record_invoice(outcome: &'static str) {
    counter!(INVOICES_TOTAL, "outcome" => outcome).increment(1);
}
