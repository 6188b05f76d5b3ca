//! Order-page view of the pricing tables.
//!
//! The adapter copies the localized tables into owned catalog records,
//! normalizes bandwidth tiers and checks the invariants the resolver relies
//! on: every category has a tier, and tier ids are unique across the whole
//! catalog.

use super::calculator::PricingScheme;
use super::normalizer::{normalize, NormalizedRotatingTier, RawRotatingTier};
use crate::i18n::Locale;
use crate::pricing::{pricing_tables, PlanPrice, PricingTable};
use rust_decimal::Decimal;
use std::collections::HashSet;
use thiserror::Error;

pub const CATALOG_CURRENCY: &str = "USD";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("rotating tier '{0}' has neither a per-GB price nor a total")]
    MissingRotatingPrice(String),

    #[error("rotating tier '{0}' has zero GB")]
    ZeroBandwidth(String),

    #[error("category '{category}' of service '{service}' has no tiers")]
    EmptyCategory { service: String, category: String },

    #[error("tier id '{0}' appears more than once")]
    DuplicateTier(String),

    #[error("tier '{0}' has a zero multiplier denominator")]
    InvalidMultiplier(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TierPrice {
    PerUnit { amount_usd: Decimal },
    Bundle(NormalizedRotatingTier),
    Formatted(String),
}

impl TierPrice {
    pub fn scheme(&self) -> PricingScheme {
        match self {
            TierPrice::PerUnit { .. } => PricingScheme::PerProxyPerMonth,
            TierPrice::Bundle(_) => PricingScheme::TrafficTierPerMonth,
            TierPrice::Formatted(_) => PricingScheme::Unknown,
        }
    }

    /// Headline price as shown on cards: `$3.00`, `$49.99`, or the quote text.
    pub fn headline(&self) -> String {
        match self {
            TierPrice::PerUnit { amount_usd } => format_usd(*amount_usd),
            TierPrice::Bundle(tier) => format_usd(tier.total_usd),
            TierPrice::Formatted(text) => text.clone(),
        }
    }
}

pub fn format_usd(amount: Decimal) -> String {
    let mut shown = super::calculator::round2(amount);
    shown.rescale(2);
    format!("${}", shown)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTier {
    pub id: String,
    pub name: String,
    pub price: TierPrice,
    pub period: String,
    pub features: Vec<String>,
    pub ribbon: Option<String>,
    pub multiplier: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogCategory {
    pub id: String,
    pub name: String,
    pub tiers: Vec<CatalogTier>,
}

impl CatalogCategory {
    pub fn tier(&self, tier_id: &str) -> Option<&CatalogTier> {
        self.tiers.iter().find(|t| t.id == tier_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogService {
    pub id: String,
    pub name: String,
    pub currency: String,
    pub categories: Vec<CatalogCategory>,
}

impl CatalogService {
    pub fn category(&self, category_id: &str) -> Option<&CatalogCategory> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    /// The category holding `tier_id`, if this service sells it.
    pub fn locate_tier(&self, tier_id: &str) -> Option<(&CatalogCategory, &CatalogTier)> {
        self.categories
            .iter()
            .find_map(|c| c.tier(tier_id).map(|t| (c, t)))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    services: Vec<CatalogService>,
}

impl Catalog {
    /// Build from already-shaped services, enforcing the catalog invariants.
    pub fn new(services: Vec<CatalogService>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for service in &services {
            for category in &service.categories {
                if category.tiers.is_empty() {
                    return Err(CatalogError::EmptyCategory {
                        service: service.id.clone(),
                        category: category.id.clone(),
                    });
                }
                for tier in &category.tiers {
                    if !seen.insert(tier.id.as_str()) {
                        return Err(CatalogError::DuplicateTier(tier.id.clone()));
                    }
                }
            }
        }
        Ok(Self { services })
    }

    pub fn from_tables(tables: &[PricingTable]) -> Result<Self, CatalogError> {
        let services = tables
            .iter()
            .map(adapt_table)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(services)
    }

    pub fn services(&self) -> &[CatalogService] {
        &self.services
    }

    pub fn service(&self, service_id: &str) -> Option<&CatalogService> {
        self.services.iter().find(|s| s.id == service_id)
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Service, category and tier for a tier id, scanning in catalog order.
    pub fn locate_tier(
        &self,
        tier_id: &str,
    ) -> Option<(&CatalogService, &CatalogCategory, &CatalogTier)> {
        self.services
            .iter()
            .find_map(|s| s.locate_tier(tier_id).map(|(c, t)| (s, c, t)))
    }
}

fn adapt_table(table: &PricingTable) -> Result<CatalogService, CatalogError> {
    let categories = table
        .categories
        .iter()
        .map(|category| {
            let tiers = category
                .plans
                .iter()
                .map(|plan| {
                    let price = match &plan.price {
                        PlanPrice::PerUnit(amount) => TierPrice::PerUnit {
                            amount_usd: *amount,
                        },
                        PlanPrice::Traffic {
                            gb,
                            price_per_gb_usd,
                            total_usd,
                        } => TierPrice::Bundle(normalize(&RawRotatingTier {
                            id: plan.id.to_string(),
                            gb: *gb,
                            price_per_gb_usd: *price_per_gb_usd,
                            total_usd: *total_usd,
                        })?),
                        PlanPrice::Quote(text) => TierPrice::Formatted(text.to_string()),
                    };

                    let multiplier = match plan.multiplier {
                        Some((_, 0)) => return Err(CatalogError::InvalidMultiplier(plan.id.to_string())),
                        Some((num, den)) => Some(Decimal::from(num) / Decimal::from(den)),
                        None => None,
                    };

                    Ok(CatalogTier {
                        id: plan.id.to_string(),
                        name: plan.name.to_string(),
                        price,
                        period: plan.period.to_string(),
                        features: plan.features.iter().map(|f| f.to_string()).collect(),
                        ribbon: plan.ribbon.map(str::to_string),
                        multiplier,
                    })
                })
                .collect::<Result<Vec<_>, CatalogError>>()?;

            Ok(CatalogCategory {
                id: category.id.to_string(),
                name: category.label.to_string(),
                tiers,
            })
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;

    Ok(CatalogService {
        id: table.service_id.to_string(),
        name: table.name.to_string(),
        currency: CATALOG_CURRENCY.to_string(),
        categories,
    })
}

/// Pricing tables and the derived catalog for one locale.
#[derive(Debug, Clone)]
pub struct LocalizedCatalog {
    pub tables: Vec<PricingTable>,
    pub catalog: Catalog,
}

/// Every locale's catalog, built once at startup.
#[derive(Debug, Clone)]
pub struct CatalogSet {
    en: LocalizedCatalog,
    ru: LocalizedCatalog,
}

impl CatalogSet {
    pub fn build() -> Result<Self, CatalogError> {
        let build = |locale: Locale| -> Result<LocalizedCatalog, CatalogError> {
            let tables = pricing_tables(locale);
            let catalog = Catalog::from_tables(&tables)?;
            Ok(LocalizedCatalog { tables, catalog })
        };

        Ok(Self {
            en: build(Locale::En)?,
            ru: build(Locale::Ru)?,
        })
    }

    pub fn get(&self, locale: Locale) -> &LocalizedCatalog {
        match locale {
            Locale::En => &self.en,
            Locale::Ru => &self.ru,
        }
    }
}
