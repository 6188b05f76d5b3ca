//! Order configurator state: a resolved selection plus the visitor's edits
//! (category switch, quantity, location, months), and the quote derived from
//! them.

use super::calculator::{calc_total, PricingScheme, TotalInput};
use super::catalog::{Catalog, CatalogCategory, CatalogService, CatalogTier, TierPrice};
use super::resolver::Selection;
use crate::i18n::Locale;
use rust_decimal::Decimal;

pub const MONTH_OPTIONS: [u32; 4] = [1, 3, 6, 12];
pub const MAX_QUANTITY: i64 = 1000;

/// `(code, English, Russian)`. The first entry is the default.
pub const LOCATIONS: &[(&str, &str, &str)] = &[
    ("us", "United States", "США"),
    ("de", "Germany", "Германия"),
    ("nl", "Netherlands", "Нидерланды"),
    ("gb", "United Kingdom", "Великобритания"),
    ("fr", "France", "Франция"),
    ("jp", "Japan", "Япония"),
];

pub fn location_name(locale: Locale, code: &str) -> Option<&'static str> {
    LOCATIONS
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, en, ru)| locale.pick(*en, *ru))
}

/// Edits carried in the query string on top of the resolver inputs.
#[derive(Debug, Clone, Default)]
pub struct OrderEdits {
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub location: Option<String>,
    pub months: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderState {
    pub selection: Selection,
    pub quantity: i64,
    pub location: &'static str,
    pub months: u32,
}

impl OrderState {
    pub fn service<'a>(&self, catalog: &'a Catalog) -> Option<&'a CatalogService> {
        catalog.service(&self.selection.service_id)
    }

    pub fn category<'a>(&self, catalog: &'a Catalog) -> Option<&'a CatalogCategory> {
        self.service(catalog)?.category(&self.selection.category_id)
    }

    pub fn tier<'a>(&self, catalog: &'a Catalog) -> Option<&'a CatalogTier> {
        self.category(catalog)?.tier(&self.selection.tier_id)
    }
}

/// Apply edits to a resolved selection.
///
/// A category switch only applies when the visitor did not also name a tier
/// (`tier_pinned`), and only to categories of the selected service; it moves
/// to that category's first tier. Quantity is clamped to `1..=MAX_QUANTITY`,
/// unknown locations fall back to the first one, and months must be one of
/// [`MONTH_OPTIONS`] (the billing duration supplies the default). Tiers with
/// a multiplier are single-period and always bill one month.
pub fn build_state(
    catalog: &Catalog,
    mut selection: Selection,
    edits: &OrderEdits,
    tier_pinned: bool,
) -> OrderState {
    if let (Some(category_id), false) = (edits.category.as_deref(), tier_pinned) {
        let switched = catalog
            .service(&selection.service_id)
            .and_then(|service| service.category(category_id))
            .and_then(|category| category.tiers.first().map(|tier| (category, tier)));
        if let Some((category, tier)) = switched {
            selection.category_id = category.id.clone();
            selection.tier_id = tier.id.clone();
        }
    }

    let quantity = edits.quantity.unwrap_or(1).clamp(1, MAX_QUANTITY);

    let location = edits
        .location
        .as_deref()
        .and_then(|code| LOCATIONS.iter().find(|(c, _, _)| *c == code))
        .unwrap_or(&LOCATIONS[0])
        .0;

    let default_months = selection.duration.map(|d| d.months()).unwrap_or(1);
    let mut months = edits
        .months
        .filter(|m| MONTH_OPTIONS.contains(m))
        .unwrap_or(default_months);

    let single_period = catalog
        .service(&selection.service_id)
        .and_then(|s| s.category(&selection.category_id))
        .and_then(|c| c.tier(&selection.tier_id))
        .is_some_and(|t| t.multiplier.is_some());
    if single_period {
        months = 1;
    }

    OrderState {
        selection,
        quantity,
        location,
        months,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub scheme: PricingScheme,
    /// Per-unit (or per-bundle) price after any multiplier.
    pub unit_price_usd: Option<Decimal>,
    pub quantity: i64,
    pub months: u32,
    pub total_usd: Decimal,
}

impl Quote {
    /// Only positive, known-scheme totals can be paid online.
    pub fn is_payable(&self) -> bool {
        self.scheme != PricingScheme::Unknown && self.total_usd > Decimal::ZERO
    }
}

pub fn quote(tier: &CatalogTier, state: &OrderState) -> Quote {
    let multiplier = tier.multiplier.unwrap_or(Decimal::ONE);

    let (unit_price, input) = match &tier.price {
        TierPrice::PerUnit { amount_usd } => {
            let unit = *amount_usd * multiplier;
            (
                Some(unit),
                TotalInput {
                    scheme: PricingScheme::PerProxyPerMonth,
                    unit_price_usd: Some(unit),
                    proxies: Some(state.quantity),
                    tier_total_usd: None,
                    months: f64::from(state.months),
                },
            )
        }
        TierPrice::Bundle(bundle) => {
            let total = bundle.total_usd * multiplier;
            (
                Some(total),
                TotalInput {
                    scheme: PricingScheme::TrafficTierPerMonth,
                    unit_price_usd: None,
                    proxies: None,
                    tier_total_usd: Some(total),
                    months: f64::from(state.months),
                },
            )
        }
        TierPrice::Formatted(_) => (
            None,
            TotalInput {
                scheme: PricingScheme::Unknown,
                unit_price_usd: None,
                proxies: None,
                tier_total_usd: None,
                months: f64::from(state.months),
            },
        ),
    };

    Quote {
        scheme: input.scheme,
        unit_price_usd: unit_price,
        quantity: match input.scheme {
            PricingScheme::PerProxyPerMonth => state.quantity,
            _ => 1,
        },
        months: state.months,
        total_usd: calc_total(&input),
    }
}

/// One-line order description for the invoice, in English regardless of the
/// page locale so support sees a consistent format.
pub fn describe(service: &CatalogService, tier: &CatalogTier, state: &OrderState, quote: &Quote) -> String {
    let mut parts = vec![format!("{} / {}", service.id, tier.id)];
    if quote.scheme == PricingScheme::PerProxyPerMonth {
        parts.push(format!("x{}", quote.quantity));
        parts.push(format!("location {}", state.location));
    }
    parts.push(format!(
        "{} {}",
        quote.months,
        super::calculator::months_label_en(quote.months)
    ));
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::catalog::CatalogSet;
    use crate::order::resolver::{resolve, ResolutionInput};
    use crate::order::vocabulary::BillingDuration;
    use std::str::FromStr;

    fn catalog() -> Catalog {
        CatalogSet::build().unwrap().get(Locale::En).catalog.clone()
    }

    fn select(catalog: &Catalog, tier: &str, duration: Option<&str>) -> Selection {
        resolve(
            catalog,
            &ResolutionInput {
                tier_id: Some(tier.to_string()),
                duration: duration.map(str::to_string),
                ..Default::default()
            },
        )
        .unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn per_proxy_quote_scales_with_quantity_and_months() {
        let c = catalog();
        let edits = OrderEdits {
            quantity: Some(5),
            months: Some(3),
            location: Some("de".into()),
            ..Default::default()
        };
        let state = build_state(&c, select(&c, "isp-premium", None), &edits, true);
        assert_eq!(state.location, "de");
        let q = quote(state.tier(&c).unwrap(), &state);
        assert_eq!(q.total_usd, dec("82.50"));
        assert!(q.is_payable());
    }

    #[test]
    fn bundle_quote_ignores_quantity() {
        let c = catalog();
        let edits = OrderEdits {
            quantity: Some(40),
            ..Default::default()
        };
        let state = build_state(&c, select(&c, "rotating-10", Some("yearly")), &edits, true);
        assert_eq!(state.months, 12);
        let q = quote(state.tier(&c).unwrap(), &state);
        assert_eq!(q.quantity, 1);
        assert_eq!(q.total_usd, dec("599.88"));
    }

    #[test]
    fn trial_is_billed_for_a_fraction_of_one_month() {
        let c = catalog();
        let edits = OrderEdits {
            quantity: Some(2),
            months: Some(6),
            ..Default::default()
        };
        let state = build_state(&c, select(&c, "isp-trial", None), &edits, true);
        assert_eq!(state.months, 1);
        let q = quote(state.tier(&c).unwrap(), &state);
        // 3.00 * 7/30 * 2
        assert_eq!(q.total_usd, dec("1.40"));
    }

    #[test]
    fn quoted_tiers_are_not_payable() {
        let c = catalog();
        let state = build_state(&c, select(&c, "ipv6-enterprise", None), &OrderEdits::default(), true);
        let q = quote(state.tier(&c).unwrap(), &state);
        assert_eq!(q.scheme, PricingScheme::Unknown);
        assert_eq!(q.total_usd, Decimal::ZERO);
        assert!(!q.is_payable());
    }

    #[test]
    fn category_switch_moves_to_its_first_tier() {
        let c = catalog();
        let edits = OrderEdits {
            category: Some("ports".into()),
            ..Default::default()
        };
        let state = build_state(&c, select(&c, "rotating-10", None), &edits, false);
        assert_eq!(state.selection.category_id, "ports");
        assert_eq!(state.selection.tier_id, "rotating-ports-10");

        // A pinned tier wins over the category edit
        let state = build_state(&c, select(&c, "rotating-10", None), &edits, true);
        assert_eq!(state.selection.tier_id, "rotating-10");

        // Categories of other services are ignored
        let edits = OrderEdits {
            category: Some("premium".into()),
            ..Default::default()
        };
        let state = build_state(&c, select(&c, "rotating-10", None), &edits, false);
        assert_eq!(state.selection.tier_id, "rotating-10");
    }

    #[test]
    fn edits_are_clamped_to_known_values() {
        let c = catalog();
        let edits = OrderEdits {
            quantity: Some(-3),
            months: Some(5),
            location: Some("mars".into()),
            ..Default::default()
        };
        let mut selection = select(&c, "isp-basic", None);
        selection.duration = Some(BillingDuration::Monthly);
        let state = build_state(&c, selection, &edits, true);
        assert_eq!(state.quantity, 1);
        assert_eq!(state.months, 1);
        assert_eq!(state.location, "us");

        let edits = OrderEdits {
            quantity: Some(1_000_000),
            ..Default::default()
        };
        let state = build_state(&c, select(&c, "isp-basic", None), &edits, true);
        assert_eq!(state.quantity, MAX_QUANTITY);
    }

    #[test]
    fn description_names_the_order() {
        let c = catalog();
        let edits = OrderEdits {
            quantity: Some(3),
            months: Some(6),
            ..Default::default()
        };
        let state = build_state(&c, select(&c, "isp-basic", None), &edits, true);
        let tier = state.tier(&c).unwrap();
        let q = quote(tier, &state);
        let text = describe(state.service(&c).unwrap(), tier, &state, &q);
        assert_eq!(text, "isp-static / isp-basic, x3, location us, 6 months");
    }

    #[test]
    fn location_names_are_localized() {
        assert_eq!(location_name(Locale::Ru, "de"), Some("Германия"));
        assert_eq!(location_name(Locale::En, "xx"), None);
    }
}
