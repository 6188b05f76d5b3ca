use super::{parse_locale, remember_locale, PageChrome};
use crate::order::catalog::{CatalogTier, TierPrice};
use crate::AppState;
use askama::Template;
use axum::{
    extract::{Path, State},
    http::Uri,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use service_core::error::AppError;

pub struct PlanCard {
    pub id: String,
    pub name: String,
    pub headline: String,
    pub period: String,
    /// `4.9990` for bandwidth bundles; the template adds the unit.
    pub per_gb: Option<String>,
    pub features: Vec<String>,
    pub ribbon: Option<String>,
    pub href: String,
    pub active: bool,
}

impl PlanCard {
    pub fn new(tier: &CatalogTier, href: String, active: bool) -> Self {
        Self {
            id: tier.id.clone(),
            name: tier.name.clone(),
            headline: tier.price.headline(),
            period: tier.period.clone(),
            per_gb: match &tier.price {
                TierPrice::Bundle(bundle) => Some(bundle.price_per_gb_display.clone()),
                _ => None,
            },
            features: tier.features.clone(),
            ribbon: tier.ribbon.clone(),
            href,
            active,
        }
    }
}

pub struct PricingGroup {
    pub name: String,
    pub cards: Vec<PlanCard>,
}

pub struct PricingSection {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub groups: Vec<PricingGroup>,
}

#[derive(Template)]
#[template(path = "pricing.html")]
pub struct PricingTemplate {
    pub chrome: PageChrome,
    pub sections: Vec<PricingSection>,
}

pub async fn pricing_page(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    jar: CookieJar,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let locale = parse_locale(&locale)?;
    let localized = state.catalogs.get(locale);

    let sections = localized
        .tables
        .iter()
        .zip(localized.catalog.services())
        .map(|(table, service)| PricingSection {
            id: service.id.clone(),
            name: service.name.clone(),
            tagline: table.tagline.to_string(),
            groups: service
                .categories
                .iter()
                .map(|category| PricingGroup {
                    name: category.name.clone(),
                    cards: category
                        .tiers
                        .iter()
                        .map(|tier| {
                            let href = format!("/{}/order?tier={}", locale.code(), tier.id);
                            PlanCard::new(tier, href, false)
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    Ok((
        remember_locale(jar, locale),
        PricingTemplate {
            chrome: PageChrome::new(locale, &uri, "pricing"),
            sections,
        },
    ))
}
