//! Order total computation.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How a tier's price turns into an order total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingScheme {
    /// Unit price × number of proxies (or ports) × months.
    PerProxyPerMonth,
    /// Fixed bundle total × months.
    TrafficTierPerMonth,
    #[serde(other)]
    Unknown,
}

impl PricingScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingScheme::PerProxyPerMonth => "per_proxy_per_month",
            PricingScheme::TrafficTierPerMonth => "traffic_tier_per_month",
            PricingScheme::Unknown => "unknown",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "per_proxy_per_month" => PricingScheme::PerProxyPerMonth,
            "traffic_tier_per_month" => PricingScheme::TrafficTierPerMonth,
            _ => PricingScheme::Unknown,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TotalInput {
    pub scheme: PricingScheme,
    pub unit_price_usd: Option<Decimal>,
    pub proxies: Option<i64>,
    pub tier_total_usd: Option<Decimal>,
    pub months: f64,
}

/// Round half-up at the cent.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Longest term a single order can bill for.
pub const MAX_BILLABLE_MONTHS: u32 = 120;

/// Months are at least one and at most [`MAX_BILLABLE_MONTHS`]. NaN and
/// negative infinity count as one, positive infinity as the maximum.
pub fn clamp_months(months: f64) -> Decimal {
    if months.is_nan() || months < 1.0 {
        return Decimal::ONE;
    }
    let max = f64::from(MAX_BILLABLE_MONTHS);
    if months >= max {
        return Decimal::from(MAX_BILLABLE_MONTHS);
    }
    Decimal::from_f64(months).unwrap_or(Decimal::ONE)
}

/// Order total rounded to the cent. A product too large for `Decimal`
/// saturates at `Decimal::MAX` rather than wrapping or panicking.
pub fn calc_total(input: &TotalInput) -> Decimal {
    let months = clamp_months(input.months);

    let total = match input.scheme {
        PricingScheme::PerProxyPerMonth => {
            let unit = input.unit_price_usd.unwrap_or(Decimal::ZERO);
            let proxies = Decimal::from(input.proxies.unwrap_or(0).max(0));
            unit
                .checked_mul(proxies)
                .and_then(|subtotal| subtotal.checked_mul(months))
                .unwrap_or(Decimal::MAX)
        }
        PricingScheme::TrafficTierPerMonth => input
            .tier_total_usd
            .unwrap_or(Decimal::ZERO)
            .checked_mul(months)
            .unwrap_or(Decimal::MAX),
        PricingScheme::Unknown => Decimal::ZERO,
    };

    round2(total)
}

/// "месяц" / "месяца" / "месяцев" for a month count.
pub fn months_label_ru(months: u32) -> &'static str {
    let last_two = months % 100;
    let last = months % 10;

    if (11..=14).contains(&last_two) {
        "месяцев"
    } else if last == 1 {
        "месяц"
    } else if (2..=4).contains(&last) {
        "месяца"
    } else {
        "месяцев"
    }
}

pub fn months_label_en(months: u32) -> &'static str {
    if months == 1 { "month" } else { "months" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn per_proxy(unit: &str, proxies: i64, months: f64) -> TotalInput {
        TotalInput {
            scheme: PricingScheme::PerProxyPerMonth,
            unit_price_usd: Some(dec(unit)),
            proxies: Some(proxies),
            tier_total_usd: None,
            months,
        }
    }

    #[test]
    fn per_proxy_multiplies_unit_count_and_months() {
        assert_eq!(calc_total(&per_proxy("3.00", 5, 3.0)), dec("45.00"));
    }

    #[test]
    fn negative_proxy_count_is_zero() {
        assert_eq!(calc_total(&per_proxy("3.00", -4, 2.0)), Decimal::ZERO);
    }

    #[test]
    fn traffic_tier_scales_by_months() {
        let input = TotalInput {
            scheme: PricingScheme::TrafficTierPerMonth,
            unit_price_usd: None,
            proxies: None,
            tier_total_usd: Some(dec("49.99")),
            months: 12.0,
        };
        assert_eq!(calc_total(&input), dec("599.88"));
    }

    #[test]
    fn months_below_one_or_non_finite_clamp_to_one() {
        let one = calc_total(&per_proxy("2.50", 2, 1.0));
        assert_eq!(calc_total(&per_proxy("2.50", 2, 0.0)), one);
        assert_eq!(calc_total(&per_proxy("2.50", 2, -6.0)), one);
        assert_eq!(calc_total(&per_proxy("2.50", 2, f64::NAN)), one);
        assert_eq!(calc_total(&per_proxy("2.50", 2, f64::NEG_INFINITY)), one);
    }

    #[test]
    fn months_above_the_maximum_bill_the_maximum() {
        let cap = calc_total(&per_proxy("2.50", 2, 120.0));
        assert_eq!(cap, dec("600.00"));
        assert_eq!(calc_total(&per_proxy("2.50", 2, 1e12)), cap);
        assert_eq!(calc_total(&per_proxy("2.50", 2, f64::INFINITY)), cap);

        let bundle = TotalInput {
            scheme: PricingScheme::TrafficTierPerMonth,
            unit_price_usd: None,
            proxies: None,
            tier_total_usd: Some(dec("1")),
            months: 1e30,
        };
        assert_eq!(calc_total(&bundle), dec("120.00"));
    }

    #[test]
    fn huge_proxy_counts_do_not_panic() {
        let total = calc_total(&per_proxy("10", i64::MAX, 1e12));
        let expected = dec("10") * Decimal::from(i64::MAX) * Decimal::from(MAX_BILLABLE_MONTHS);
        assert_eq!(total, expected);
    }

    #[test]
    fn overflowing_totals_saturate() {
        let input = TotalInput {
            scheme: PricingScheme::PerProxyPerMonth,
            unit_price_usd: Some(Decimal::MAX),
            proxies: Some(i64::MAX),
            tier_total_usd: None,
            months: 12.0,
        };
        assert_eq!(calc_total(&input), Decimal::MAX);

        let bundle = TotalInput {
            scheme: PricingScheme::TrafficTierPerMonth,
            unit_price_usd: None,
            proxies: None,
            tier_total_usd: Some(Decimal::MAX),
            months: 2.0,
        };
        assert_eq!(calc_total(&bundle), Decimal::MAX);
    }

    #[test]
    fn unknown_scheme_totals_zero() {
        let input = TotalInput {
            scheme: PricingScheme::from_string("per_moon_phase"),
            unit_price_usd: Some(dec("10")),
            proxies: Some(3),
            tier_total_usd: Some(dec("10")),
            months: 3.0,
        };
        assert_eq!(calc_total(&input), Decimal::ZERO);
    }

    #[test]
    fn rounds_half_up_at_the_cent() {
        assert_eq!(calc_total(&per_proxy("1.005", 1, 1.0)), dec("1.01"));
        assert_eq!(round2(dec("2.675")), dec("2.68"));
        assert_eq!(round2(dec("2.674")), dec("2.67"));
    }

    #[test]
    fn scheme_names_round_trip_through_serde() {
        let parsed: PricingScheme = serde_json::from_str("\"traffic_tier_per_month\"").unwrap();
        assert_eq!(parsed, PricingScheme::TrafficTierPerMonth);
        let unknown: PricingScheme = serde_json::from_str("\"flat\"").unwrap();
        assert_eq!(unknown, PricingScheme::Unknown);
        assert_eq!(PricingScheme::PerProxyPerMonth.as_str(), "per_proxy_per_month");
    }

    #[test]
    fn russian_month_forms() {
        assert_eq!(months_label_ru(1), "месяц");
        assert_eq!(months_label_ru(21), "месяц");
        assert_eq!(months_label_ru(2), "месяца");
        assert_eq!(months_label_ru(3), "месяца");
        assert_eq!(months_label_ru(24), "месяца");
        assert_eq!(months_label_ru(5), "месяцев");
        assert_eq!(months_label_ru(11), "месяцев");
        assert_eq!(months_label_ru(12), "месяцев");
        assert_eq!(months_label_ru(14), "месяцев");
        assert_eq!(months_label_ru(0), "месяцев");
        assert_eq!(months_label_ru(112), "месяцев");
    }
}
