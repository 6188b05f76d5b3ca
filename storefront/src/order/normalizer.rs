//! Bandwidth tier normalization.
//!
//! Rotating tiers are written down with either a per-GB rate or a bundle
//! total. Everything downstream wants both, plus a display string for the
//! per-GB rate that never collapses to `$0.00` for sub-dollar rates.

use super::calculator::round2;
use super::catalog::CatalogError;
use rust_decimal::{Decimal, RoundingStrategy};

/// A bandwidth tier as written in the pricing tables.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRotatingTier {
    pub id: String,
    pub gb: u32,
    pub price_per_gb_usd: Option<Decimal>,
    pub total_usd: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRotatingTier {
    pub id: String,
    pub gb: u32,
    /// Full precision; `price_per_gb_usd * gb` rounds to `total_usd`.
    pub price_per_gb_usd: Decimal,
    /// Rounded half-up to the cent.
    pub total_usd: Decimal,
    pub price_per_gb_display: String,
}

pub fn normalize(raw: &RawRotatingTier) -> Result<NormalizedRotatingTier, CatalogError> {
    if raw.gb == 0 {
        return Err(CatalogError::ZeroBandwidth(raw.id.clone()));
    }
    let gb = Decimal::from(raw.gb);

    let (price_per_gb, total) = match (raw.price_per_gb_usd, raw.total_usd) {
        (Some(per_gb), Some(total)) => (per_gb, total),
        (None, Some(total)) => (total / gb, total),
        (Some(per_gb), None) => (per_gb, per_gb * gb),
        (None, None) => return Err(CatalogError::MissingRotatingPrice(raw.id.clone())),
    };

    Ok(NormalizedRotatingTier {
        id: raw.id.clone(),
        gb: raw.gb,
        price_per_gb_usd: price_per_gb,
        total_usd: round2(total),
        price_per_gb_display: format_per_gb(price_per_gb),
    })
}

/// Four decimals below a dollar, two for whole-cent rates of a dollar or
/// more. Any rate that is not a whole number of cents also gets four, even
/// above a dollar: `4.999` reads `4.9990` instead of `5.00`, and `3.33333`
/// reads `3.3333` instead of `3.33`.
pub fn format_per_gb(price_per_gb: Decimal) -> String {
    let whole_cents = price_per_gb.round_dp(2) == price_per_gb;
    let places = if price_per_gb < Decimal::ONE || !whole_cents { 4 } else { 2 };
    let mut shown = price_per_gb.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    shown.rescale(places);
    shown.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn raw(gb: u32, per_gb: Option<&str>, total: Option<&str>) -> RawRotatingTier {
        RawRotatingTier {
            id: format!("rotating-{}", gb),
            gb,
            price_per_gb_usd: per_gb.map(dec),
            total_usd: total.map(dec),
        }
    }

    #[test]
    fn per_gb_is_derived_from_total() {
        let tier = normalize(&raw(10, None, Some("49.99"))).unwrap();
        assert_eq!(tier.price_per_gb_usd, dec("4.999"));
        assert_eq!(tier.total_usd, dec("49.99"));
        assert_eq!(tier.price_per_gb_display, "4.9990");
    }

    #[test]
    fn total_is_derived_from_per_gb_and_rounded() {
        let tier = normalize(&raw(3, Some("1.335"), None)).unwrap();
        assert_eq!(tier.total_usd, dec("4.01"));
        assert_eq!(tier.total_usd, round2(dec("1.335") * Decimal::from(3)));
    }

    #[test]
    fn derived_per_gb_times_gb_matches_total_within_a_cent() {
        let totals = ["5.99", "49.99", "990.00", "0.07", "1234.56", "100.00"];
        let sizes = [1u32, 3, 7, 10, 50, 1000];
        for total in totals {
            for gb in sizes {
                let tier = normalize(&raw(gb, None, Some(total))).unwrap();
                let recomputed = round2(tier.price_per_gb_usd * Decimal::from(gb));
                let diff = (recomputed - dec(total)).abs();
                assert!(diff <= dec("0.01"), "{} over {} GB drifted by {}", total, gb, diff);
            }
        }
    }

    #[test]
    fn sub_dollar_rates_show_four_places() {
        assert_eq!(format_per_gb(dec("0.99")), "0.9900");
        assert_eq!(format_per_gb(dec("0.00315")), "0.0032");
        assert_eq!(format_per_gb(dec("4.2")), "4.20");
        assert_eq!(format_per_gb(dec("12.5")), "12.50");
        assert_eq!(format_per_gb(dec("3.33333")), "3.3333");
        assert_eq!(format_per_gb(dec("1")), "1.00");
    }

    #[test]
    fn missing_both_prices_is_rejected() {
        let err = normalize(&raw(10, None, None)).unwrap_err();
        assert!(matches!(err, CatalogError::MissingRotatingPrice(id) if id == "rotating-10"));
    }

    #[test]
    fn zero_gb_is_rejected() {
        let err = normalize(&raw(0, Some("1.00"), None)).unwrap_err();
        assert!(matches!(err, CatalogError::ZeroBandwidth(_)));
    }
}
