use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/payments/invoice`.
#[derive(Debug, Deserialize, Validate)]
pub struct InvoiceRequest {
    #[serde(rename = "amountUSD")]
    #[validate(
        required(message = "amountUSD is required"),
        range(exclusive_min = 0.0, message = "amountUSD must be a positive number")
    )]
    pub amount_usd: Option<f64>,
    #[validate(nested)]
    pub order: Option<OrderSummary>,
}

/// Client-side summary of the order being paid for. Only used to describe
/// the invoice; the amount comes from `amountUSD`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[validate(length(max = 64))]
    pub service: Option<String>,
    #[validate(length(max = 64))]
    pub plan: Option<String>,
    #[validate(length(max = 64))]
    pub tier_id: Option<String>,
    #[validate(length(max = 64))]
    pub duration: Option<String>,
    pub quantity: Option<u32>,
    pub months: Option<u32>,
    #[validate(length(max = 64))]
    pub location: Option<String>,
    #[validate(length(max = 240, message = "description is too long"))]
    pub description: Option<String>,
}

impl OrderSummary {
    /// An explicit description wins; otherwise the known fields are joined.
    pub fn describe(&self) -> String {
        if let Some(text) = self.description.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            return text.to_string();
        }

        let mut parts: Vec<String> = [&self.service, &self.tier_id, &self.plan]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .cloned()
            .collect();
        if let Some(quantity) = self.quantity {
            parts.push(format!("x{}", quantity));
        }
        if let Some(location) = &self.location {
            parts.push(format!("location {}", location));
        }
        if let Some(months) = self.months {
            parts.push(format!(
                "{} {}",
                months,
                crate::order::calculator::months_label_en(months)
            ));
        } else if let Some(duration) = &self.duration {
            parts.push(duration.clone());
        }

        if parts.is_empty() {
            "Proxy order".to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    pub invoice_url: String,
    pub invoice_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> InvoiceRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn positive_amount_is_valid() {
        assert!(parse(r#"{"amountUSD": 49.99}"#).validate().is_ok());
    }

    #[test]
    fn zero_negative_or_missing_amount_is_rejected() {
        for body in [r#"{"amountUSD": 0}"#, r#"{"amountUSD": -5}"#, r#"{}"#] {
            assert!(parse(body).validate().is_err(), "{body} should be rejected");
        }
    }

    #[test]
    fn summary_describes_itself() {
        let summary = OrderSummary {
            service: Some("static-isp".into()),
            tier_id: Some("isp-basic".into()),
            quantity: Some(3),
            months: Some(1),
            ..Default::default()
        };
        assert_eq!(summary.describe(), "static-isp, isp-basic, x3, 1 month");

        let explicit = OrderSummary {
            description: Some("  10 GB rotating  ".into()),
            ..summary
        };
        assert_eq!(explicit.describe(), "10 GB rotating");
        assert_eq!(OrderSummary::default().describe(), "Proxy order");
    }
}
