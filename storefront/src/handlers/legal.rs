use super::{parse_locale, remember_locale, PageChrome};
use crate::content::{LegalDocument, LegalPage};
use askama::Template;
use axum::{extract::Path, http::Uri, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use service_core::error::AppError;

#[derive(Template)]
#[template(path = "legal.html")]
pub struct LegalTemplate {
    pub chrome: PageChrome,
    pub document: &'static LegalDocument,
}

pub async fn legal_page(
    Path((locale, page)): Path<(String, String)>,
    jar: CookieJar,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let locale = parse_locale(&locale)?;
    let page = LegalPage::from_slug(&page)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Unknown page '{}'", page)))?;

    Ok((
        remember_locale(jar, locale),
        LegalTemplate {
            chrome: PageChrome::new(locale, &uri, page.slug()),
            document: page.document(locale),
        },
    ))
}
