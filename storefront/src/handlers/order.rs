//! Order configurator page.
//!
//! Every interaction is a GET with updated query parameters: service tabs and
//! tier cards are links, quantity/location/months are a small form. The
//! resolver picks the selection, the configurator applies the edits and the
//! page shows the recomputed total.

use super::pricing::PlanCard;
use super::{parse_locale, remember_locale, PageChrome};
use crate::i18n::{months_label, Locale};
use crate::order::calculator::PricingScheme;
use crate::order::catalog::{format_usd, Catalog, CatalogService};
use crate::order::configurator::{
    build_state, location_name, quote, OrderEdits, OrderState, Quote, LOCATIONS, MONTH_OPTIONS,
};
use crate::order::preferences::{load, save, CookieSlot, StoredPreferences};
use crate::order::resolver::{resolve, ResolutionInput};
use crate::order::vocabulary::ExternalService;
use crate::AppState;
use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::Uri,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use service_core::error::AppError;

/// Order parameters, from the query string or the checkout form. All values
/// are taken as untrusted text; unparseable numbers are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderParams {
    pub service: Option<String>,
    pub plan: Option<String>,
    pub tier: Option<String>,
    pub duration: Option<String>,
    pub category: Option<String>,
    pub qty: Option<String>,
    pub location: Option<String>,
    pub months: Option<String>,
}

impl OrderParams {
    pub fn resolution_input(&self) -> ResolutionInput {
        let present = |v: &Option<String>| v.as_ref().filter(|s| !s.trim().is_empty()).cloned();
        ResolutionInput {
            service: present(&self.service),
            plan: present(&self.plan),
            tier_id: present(&self.tier),
            duration: present(&self.duration),
        }
    }

    pub fn edits(&self) -> OrderEdits {
        OrderEdits {
            category: self.category.clone().filter(|c| !c.is_empty()),
            quantity: self.qty.as_deref().and_then(|q| q.trim().parse().ok()),
            location: self.location.clone(),
            months: self.months.as_deref().and_then(|m| m.trim().parse().ok()),
        }
    }
}

/// Selection plus edits, priced.
pub struct PricedOrder {
    pub state: OrderState,
    pub quote: Option<Quote>,
}

pub fn price_order(
    catalog: &Catalog,
    input: &ResolutionInput,
    edits: &OrderEdits,
) -> Result<PricedOrder, AppError> {
    let selection = resolve(catalog, input)
        .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("Catalog has no services")))?;
    let state = build_state(catalog, selection, edits, input.tier_id.is_some());
    let quote = state.tier(catalog).map(|tier| quote(tier, &state));
    Ok(PricedOrder { state, quote })
}

pub struct Tab {
    pub name: String,
    pub href: String,
    pub active: bool,
}

pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

pub struct OrderSummaryView {
    pub service_name: String,
    pub tier_name: String,
    pub detail: String,
    pub unit_price: Option<String>,
    pub total: String,
    pub payable: bool,
}

#[derive(Template)]
#[template(path = "order.html")]
pub struct OrderTemplate {
    pub chrome: PageChrome,
    pub services: Vec<Tab>,
    pub categories: Vec<Tab>,
    pub tiers: Vec<PlanCard>,
    /// Value submitted as `service` by the form.
    pub service_param: String,
    pub tier_id: String,
    pub show_quantity: bool,
    pub quantity: i64,
    pub show_months: bool,
    pub month_options: Vec<SelectOption>,
    pub locations: Vec<SelectOption>,
    pub is_trial: bool,
    pub summary: Option<OrderSummaryView>,
    pub error: Option<String>,
}

/// Public service name for URLs, internal id otherwise.
pub(crate) fn service_param(service: &CatalogService) -> String {
    ExternalService::from_internal(&service.id)
        .map(|s| s.as_str().to_string())
        .unwrap_or_else(|| service.id.clone())
}

pub fn order_template(
    locale: Locale,
    uri: &Uri,
    catalog: &Catalog,
    priced: &PricedOrder,
    error: Option<String>,
) -> OrderTemplate {
    let state = &priced.state;
    let selection = &state.selection;
    let base = format!("/{}/order", locale.code());
    let carried = format!(
        "qty={}&location={}&months={}",
        state.quantity, state.location, state.months
    );

    let services = catalog
        .services()
        .iter()
        .map(|service| Tab {
            name: service.name.clone(),
            href: format!("{}?service={}", base, service_param(service)),
            active: service.id == selection.service_id,
        })
        .collect();

    let current_service = state.service(catalog);
    let current_param = current_service.map(service_param).unwrap_or_default();

    let categories = current_service
        .map(|service| {
            service
                .categories
                .iter()
                .map(|category| Tab {
                    name: category.name.clone(),
                    href: format!(
                        "{}?service={}&category={}&{}",
                        base, current_param, category.id, carried
                    ),
                    active: category.id == selection.category_id,
                })
                .collect()
        })
        .unwrap_or_default();

    let tiers = state
        .category(catalog)
        .map(|category| {
            category
                .tiers
                .iter()
                .map(|tier| {
                    let href = format!(
                        "{}?service={}&tier={}&{}",
                        base, current_param, tier.id, carried
                    );
                    PlanCard::new(tier, href, tier.id == selection.tier_id)
                })
                .collect()
        })
        .unwrap_or_default();

    let tier = state.tier(catalog);
    let is_trial = tier.is_some_and(|t| t.multiplier.is_some());
    let quote = priced.quote.as_ref();
    let per_unit = quote.is_some_and(|q| q.scheme == PricingScheme::PerProxyPerMonth);

    let month_options = MONTH_OPTIONS
        .iter()
        .map(|m| SelectOption {
            value: m.to_string(),
            label: format!("{} {}", m, months_label(locale, *m)),
            selected: *m == state.months,
        })
        .collect();

    let locations = LOCATIONS
        .iter()
        .map(|&(code, _, _)| SelectOption {
            value: code.to_string(),
            label: location_name(locale, code).unwrap_or(code).to_string(),
            selected: code == state.location,
        })
        .collect();

    let summary = match (current_service, tier, quote) {
        (Some(service), Some(tier), Some(quote)) => {
            let mut detail = Vec::new();
            if per_unit {
                detail.push(format!("× {}", quote.quantity));
                if let Some(name) = location_name(locale, state.location) {
                    detail.push(name.to_string());
                }
            }
            detail.push(format!("{} {}", quote.months, months_label(locale, quote.months)));

            Some(OrderSummaryView {
                service_name: service.name.clone(),
                tier_name: tier.name.clone(),
                detail: detail.join(" · "),
                unit_price: quote.unit_price_usd.map(format_usd),
                total: format_usd(quote.total_usd),
                payable: quote.is_payable(),
            })
        }
        _ => None,
    };

    OrderTemplate {
        chrome: PageChrome::new(locale, uri, "order"),
        services,
        categories,
        tiers,
        service_param: current_param,
        tier_id: selection.tier_id.clone(),
        show_quantity: per_unit,
        quantity: state.quantity,
        show_months: !is_trial,
        month_options,
        locations,
        is_trial,
        summary,
        error,
    }
}

/// `GET /{locale}/order`.
///
/// URL parameters win; with none, the stored preference seeds the page. The
/// preference cookie is rewritten whenever the active service or tier
/// changes.
pub async fn order_page(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    Query(params): Query<OrderParams>,
    jar: CookieJar,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let locale = parse_locale(&locale)?;
    let catalog = &state.catalogs.get(locale).catalog;

    let mut slot = CookieSlot::new(jar);
    let stored = load(&slot);

    let from_url = params.resolution_input();
    let input = if from_url.is_empty() {
        stored
            .as_ref()
            .map(StoredPreferences::to_resolution_input)
            .unwrap_or_default()
    } else {
        from_url
    };

    let priced = price_order(catalog, &input, &params.edits())?;

    tracing::debug!(
        service = %priced.state.selection.service_id,
        tier = %priced.state.selection.tier_id,
        total = ?priced.quote.as_ref().map(|q| q.total_usd),
        "Order page resolved"
    );

    if let Some(next) = StoredPreferences::from_selection(&priced.state.selection) {
        if stored.as_ref().map_or(true, |prev| prev.differs_from(&next)) {
            save(&mut slot, &next);
        }
    }

    let template = order_template(locale, &uri, catalog, &priced, None);
    Ok((remember_locale(slot.into_jar(), locale), template))
}
