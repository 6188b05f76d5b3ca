//! Localized pricing tables: the single source for what is sold and at what
//! price. Pages render these directly; the order flow reads them through
//! [`crate::order::catalog`].

mod tables;

pub use tables::pricing_tables;

use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct PricingTable {
    pub service_id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub categories: Vec<PricingCategory>,
}

#[derive(Debug, Clone)]
pub struct PricingCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub plans: Vec<PricingPlan>,
}

#[derive(Debug, Clone)]
pub struct PricingPlan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: PlanPrice,
    /// "per proxy / month", "per month", ...
    pub period: &'static str,
    pub features: Vec<&'static str>,
    pub ribbon: Option<&'static str>,
    /// Fraction of a month billed, e.g. `(7, 30)` for a week-long trial.
    pub multiplier: Option<(u32, u32)>,
}

#[derive(Debug, Clone)]
pub enum PlanPrice {
    /// Per proxy (or per port) per month.
    PerUnit(Decimal),
    /// Bandwidth bundle; at least one of the two amounts is given.
    Traffic {
        gb: u32,
        price_per_gb_usd: Option<Decimal>,
        total_usd: Option<Decimal>,
    },
    /// Not sold online; the text is shown instead of a price.
    Quote(&'static str),
}

/// Dollars from a cent count.
pub(crate) fn usd(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}
