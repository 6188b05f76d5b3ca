//! Selection resolution.
//!
//! Turns loosely-trusted inputs (query parameters, a stored preference) into
//! one concrete `(service, category, tier, duration)` that is guaranteed to
//! exist in the catalog. Resolution is pure: it neither reads nor writes
//! preferences, so the precedence rules can be tested on their own.

use super::catalog::{Catalog, CatalogService};
use super::vocabulary::{plan_to_tier, BillingDuration, ExternalService};
use serde::{Deserialize, Serialize};

/// Raw resolver inputs, exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionInput {
    pub service: Option<String>,
    pub plan: Option<String>,
    pub tier_id: Option<String>,
    pub duration: Option<String>,
}

impl ResolutionInput {
    pub fn is_empty(&self) -> bool {
        self.service.is_none()
            && self.plan.is_none()
            && self.tier_id.is_none()
            && self.duration.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub service_id: String,
    /// Empty only in the degenerate last-resort selection.
    pub category_id: String,
    /// Empty only in the degenerate last-resort selection.
    pub tier_id: String,
    pub duration: Option<BillingDuration>,
}

impl Selection {
    pub fn is_degenerate(&self) -> bool {
        self.category_id.is_empty() || self.tier_id.is_empty()
    }
}

struct Context<'a> {
    catalog: &'a Catalog,
    input: &'a ResolutionInput,
    /// Only set when `input.service` named a service in the catalog.
    identified: Option<&'a CatalogService>,
}

type Strategy = for<'a> fn(&Context<'a>) -> Option<Selection>;

/// Tried in order; the first to produce a selection wins.
const STRATEGIES: &[Strategy] = &[by_tier_id, by_plan, by_service_default];

pub fn resolve(catalog: &Catalog, input: &ResolutionInput) -> Option<Selection> {
    let first = catalog.services().first()?;

    let ctx = Context {
        catalog,
        input,
        identified: input
            .service
            .as_deref()
            .and_then(|raw| identify_service(catalog, raw)),
    };
    let duration = input.duration.as_deref().and_then(BillingDuration::parse);

    let selection = STRATEGIES
        .iter()
        .find_map(|strategy| strategy(&ctx))
        .unwrap_or_else(|| Selection {
            service_id: first.id.clone(),
            category_id: String::new(),
            tier_id: String::new(),
            duration: None,
        });

    Some(Selection {
        duration,
        ..selection
    })
}

/// Public vocabulary first, then the raw value as an internal id.
pub fn identify_service<'a>(catalog: &'a Catalog, raw: &str) -> Option<&'a CatalogService> {
    ExternalService::parse(raw)
        .and_then(|external| catalog.service(external.internal_id()))
        .or_else(|| catalog.service(raw.trim()))
}

fn by_tier_id(ctx: &Context<'_>) -> Option<Selection> {
    let tier_id = ctx.input.tier_id.as_deref()?.trim();
    select_tier(ctx, tier_id)
}

fn by_plan(ctx: &Context<'_>) -> Option<Selection> {
    let plan = ctx.input.plan.as_deref()?;
    let external = ctx
        .identified
        .and_then(|service| ExternalService::from_internal(&service.id));
    let tier_id = plan_to_tier(external, plan)?;
    select_tier(ctx, tier_id)
}

fn by_service_default(ctx: &Context<'_>) -> Option<Selection> {
    let service = ctx
        .identified
        .or_else(|| ctx.catalog.services().first())?;
    let category = service.categories.first()?;
    let tier = category.tiers.first()?;

    Some(Selection {
        service_id: service.id.clone(),
        category_id: category.id.clone(),
        tier_id: tier.id.clone(),
        duration: None,
    })
}

/// Identified service first, then every service in catalog order.
fn select_tier(ctx: &Context<'_>, tier_id: &str) -> Option<Selection> {
    let in_identified = ctx.identified.and_then(|service| {
        service
            .locate_tier(tier_id)
            .map(|(category, tier)| (service, category, tier))
    });

    let (service, category, tier) = in_identified.or_else(|| ctx.catalog.locate_tier(tier_id))?;

    Some(Selection {
        service_id: service.id.clone(),
        category_id: category.id.clone(),
        tier_id: tier.id.clone(),
        duration: None,
    })
}
