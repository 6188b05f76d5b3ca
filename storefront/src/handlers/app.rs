use super::{parse_locale, remember_locale, PageChrome};
use crate::i18n::{Locale, LOCALE_COOKIE};
use crate::AppState;
use askama::Template;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Redirect},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use service_core::error::AppError;

pub struct ProductCard {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub from_price: String,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub chrome: PageChrome,
    pub products: Vec<ProductCard>,
}

/// `/`: send the visitor to their language.
pub async fn root(State(state): State<AppState>, jar: CookieJar, headers: HeaderMap) -> Redirect {
    let locale = Locale::negotiate(
        jar.get(LOCALE_COOKIE).map(|c| c.value()),
        headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok()),
        state.settings.site.default_locale,
    );
    Redirect::to(&format!("/{}", locale.code()))
}

pub async fn home(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    jar: CookieJar,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let locale = parse_locale(&locale)?;
    let localized = state.catalogs.get(locale);

    let products = localized
        .tables
        .iter()
        .zip(localized.catalog.services())
        .map(|(table, service)| ProductCard {
            id: table.service_id,
            name: table.name,
            tagline: table.tagline,
            from_price: service
                .categories
                .iter()
                .flat_map(|c| c.tiers.iter())
                .next()
                .map(|tier| tier.price.headline())
                .unwrap_or_default(),
        })
        .collect();

    Ok((
        remember_locale(jar, locale),
        HomeTemplate {
            chrome: PageChrome::new(locale, &uri, "home"),
            products,
        },
    ))
}

/// Health check endpoint for liveness probes.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "storefront",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// Readiness: the catalog is built at startup, so a running process is ready
/// once it can serve at least one service.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.catalogs.get(state.settings.site.default_locale).catalog.is_empty() {
        return (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "status": "not ready" })));
    }
    (StatusCode::OK, Json(json!({ "status": "ready" })))
}
