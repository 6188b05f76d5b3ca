//! Checkout: order form posts, the JSON invoice endpoint and the page the
//! payment provider sends the visitor back to.

use super::order::{order_template, price_order, service_param, OrderParams};
use super::{parse_locale, remember_locale, PageChrome};
use crate::dtos::{InvoiceRequest, InvoiceResponse};
use crate::i18n::{Locale, LOCALE_COOKIE};
use crate::order::configurator::describe;
use crate::services::InvoiceOrder;
use crate::utils::request_origin;
use crate::AppState;
use askama::Template;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use rust_decimal::prelude::ToPrimitive;
use service_core::error::AppError;
use validator::Validate;

struct ReturnUrls {
    success: String,
    cancel: String,
}

fn return_urls(state: &AppState, headers: &HeaderMap, locale: Locale) -> Result<ReturnUrls, AppError> {
    let origin = request_origin(headers, state.settings.site.public_base_url.as_deref())
        .ok_or_else(|| {
            AppError::ConfigError(anyhow::anyhow!(
                "Request has no host and site.public_base_url is not set"
            ))
        })?;

    Ok(ReturnUrls {
        success: format!("{}/{}/order/success", origin, locale.code()),
        cancel: format!("{}/{}/order", origin, locale.code()),
    })
}

/// `POST /{locale}/checkout`.
///
/// The price is recomputed from the submitted selection; nothing the browser
/// claims about the amount is trusted. Success is a 303 to the invoice,
/// failure re-renders the order page with the error next to the pay button.
pub async fn checkout(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    headers: HeaderMap,
    Form(params): Form<OrderParams>,
) -> Result<Response, AppError> {
    let locale = parse_locale(&locale)?;
    let t = locale.messages();
    let catalog = &state.catalogs.get(locale).catalog;
    let priced = price_order(catalog, &params.resolution_input(), &params.edits())?;

    let order_state = &priced.state;
    let page_uri: Uri = format!(
        "/{}/order?service={}&tier={}&qty={}&location={}&months={}",
        locale.code(),
        order_state.service(catalog).map(service_param).unwrap_or_default(),
        order_state.selection.tier_id,
        order_state.quantity,
        order_state.location,
        order_state.months,
    )
    .parse()
    .map_err(|e| AppError::InternalError(anyhow::anyhow!("Invalid order URI: {}", e)))?;

    let render_error = |status: StatusCode, message: &str| -> Response {
        let page = order_template(locale, &page_uri, catalog, &priced, Some(message.to_string()));
        (status, page).into_response()
    };

    let payable = match (order_state.service(catalog), order_state.tier(catalog), &priced.quote) {
        (Some(service), Some(tier), Some(quote)) if quote.is_payable() => Some((service, tier, quote)),
        _ => None,
    };
    let Some((service, tier, quote)) = payable else {
        tracing::info!(tier = %order_state.selection.tier_id, "Checkout for a tier that is not sold online");
        return Ok(render_error(StatusCode::UNPROCESSABLE_ENTITY, t.checkout_unavailable));
    };

    let urls = return_urls(&state, &headers, locale)?;
    let amount_usd = quote
        .total_usd
        .to_f64()
        .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("Total out of range")))?;

    let order = InvoiceOrder {
        amount_usd,
        description: describe(service, tier, order_state, quote),
        success_url: urls.success,
        cancel_url: urls.cancel,
    };

    match state.invoices.create_invoice(&order).await {
        Ok(created) => Ok(Redirect::to(&created.invoice_url).into_response()),
        Err(e) => {
            tracing::error!(error = %e, tier = %tier.id, "Checkout failed");
            let (status, _) = AppError::from(e).status_and_message();
            Ok(render_error(status, t.checkout_failed))
        }
    }
}

/// `POST /api/payments/invoice`: `{amountUSD, order}` to `{invoiceUrl, invoiceId}`.
pub async fn create_invoice(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    payload: Result<Json<InvoiceRequest>, JsonRejection>,
) -> Result<Json<InvoiceResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected invoice request body");
        AppError::BadRequest(anyhow::anyhow!("Invalid request body: {}", rejection.body_text()))
    })?;

    payload.validate()?;
    let amount_usd = payload
        .amount_usd
        .filter(|amount| amount.is_finite() && *amount > 0.0)
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("amountUSD must be a positive number")))?;

    let locale = jar
        .get(LOCALE_COOKIE)
        .and_then(|c| Locale::from_code(c.value()))
        .unwrap_or(state.settings.site.default_locale);
    let urls = return_urls(&state, &headers, locale)?;

    let order = InvoiceOrder {
        amount_usd,
        description: payload.order.unwrap_or_default().describe(),
        success_url: urls.success,
        cancel_url: urls.cancel,
    };

    let created = state.invoices.create_invoice(&order).await?;

    Ok(Json(InvoiceResponse {
        invoice_url: created.invoice_url,
        invoice_id: created.invoice_id,
    }))
}

#[derive(Template)]
#[template(path = "success.html")]
pub struct SuccessTemplate {
    pub chrome: PageChrome,
}

/// `GET /{locale}/order/success`
pub async fn order_success(
    Path(locale): Path<String>,
    jar: CookieJar,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let locale = parse_locale(&locale)?;
    Ok((
        remember_locale(jar, locale),
        SuccessTemplate {
            chrome: PageChrome::new(locale, &uri, "order"),
        },
    ))
}
