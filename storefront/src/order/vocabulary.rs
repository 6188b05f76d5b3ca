//! The public vocabulary used in links and stored preferences, and its
//! mapping onto internal catalog ids.
//!
//! Marketing links say `?service=static-isp&plan=basic`; the catalog knows
//! `isp-static` and `isp-basic`. Both directions go through the tables here.

use serde::{Deserialize, Serialize};

pub const ISP_SERVICE_ID: &str = "isp-static";
pub const IPV6_SERVICE_ID: &str = "ipv6-static";
pub const ROTATING_SERVICE_ID: &str = "rotating-residential";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExternalService {
    StaticIsp,
    StaticIpv6,
    Rotating,
}

impl ExternalService {
    pub const ALL: [ExternalService; 3] = [
        ExternalService::StaticIsp,
        ExternalService::StaticIpv6,
        ExternalService::Rotating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExternalService::StaticIsp => "static-isp",
            ExternalService::StaticIpv6 => "static-ipv6",
            ExternalService::Rotating => "rotating",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value.trim())
    }

    pub fn internal_id(&self) -> &'static str {
        match self {
            ExternalService::StaticIsp => ISP_SERVICE_ID,
            ExternalService::StaticIpv6 => IPV6_SERVICE_ID,
            ExternalService::Rotating => ROTATING_SERVICE_ID,
        }
    }

    pub fn from_internal(service_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.internal_id() == service_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingDuration {
    Monthly,
    Yearly,
}

impl BillingDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingDuration::Monthly => "monthly",
            BillingDuration::Yearly => "yearly",
        }
    }

    /// Only the two literal values are recognised; anything else is unset.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "monthly" => Some(BillingDuration::Monthly),
            "yearly" => Some(BillingDuration::Yearly),
            _ => None,
        }
    }

    pub fn months(&self) -> u32 {
        match self {
            BillingDuration::Monthly => 1,
            BillingDuration::Yearly => 12,
        }
    }
}

/// `(service, public plan id, internal tier id)`.
const PLAN_TIERS: &[(ExternalService, &str, &str)] = &[
    (ExternalService::StaticIsp, "basic", "isp-basic"),
    (ExternalService::StaticIsp, "trial", "isp-trial"),
    (ExternalService::StaticIsp, "premium", "isp-premium"),
    (ExternalService::StaticIsp, "dedicated", "isp-dedicated"),
    (ExternalService::StaticIpv6, "basic", "ipv6-basic"),
    (ExternalService::StaticIpv6, "premium", "ipv6-premium"),
    (ExternalService::StaticIpv6, "enterprise", "ipv6-enterprise"),
    (ExternalService::Rotating, "1gb", "rotating-1"),
    (ExternalService::Rotating, "10gb", "rotating-10"),
    (ExternalService::Rotating, "50gb", "rotating-50"),
    (ExternalService::Rotating, "100gb", "rotating-100"),
    (ExternalService::Rotating, "1tb", "rotating-1000"),
    (ExternalService::Rotating, "ports", "rotating-ports-10"),
    (ExternalService::Rotating, "ports-50", "rotating-ports-50"),
];

/// Translate a public plan id. With a service the pair must match; without
/// one the first row carrying that plan id wins.
pub fn plan_to_tier(service: Option<ExternalService>, plan: &str) -> Option<&'static str> {
    let plan = plan.trim();
    PLAN_TIERS
        .iter()
        .find(|(s, p, _)| *p == plan && service.map_or(true, |wanted| *s == wanted))
        .map(|(_, _, tier)| *tier)
}

pub fn tier_to_plan(tier_id: &str) -> Option<(ExternalService, &'static str)> {
    PLAN_TIERS
        .iter()
        .find(|(_, _, t)| *t == tier_id)
        .map(|(s, p, _)| (*s, *p))
}
