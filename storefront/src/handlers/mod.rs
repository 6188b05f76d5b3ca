pub mod app;
pub mod checkout;
pub mod legal;
pub mod metrics;
pub mod order;
pub mod pricing;

use crate::i18n::{locale_switch_href, Locale, Messages, LOCALE_COOKIE};
use axum::http::Uri;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use service_core::error::AppError;

/// Locale from the first path segment; anything unsupported is a 404.
pub fn parse_locale(raw: &str) -> Result<Locale, AppError> {
    Locale::from_code(raw)
        .filter(|locale| locale.code() == raw)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Unknown locale '{}'", raw)))
}

/// Remember the locale the visitor is browsing in.
pub fn remember_locale(jar: CookieJar, locale: Locale) -> CookieJar {
    jar.add(
        Cookie::build((LOCALE_COOKIE, locale.code()))
            .path("/")
            .same_site(SameSite::Lax)
            .max_age(time::Duration::days(365))
            .build(),
    )
}

pub struct LocaleLink {
    pub code: &'static str,
    pub name: &'static str,
    pub href: String,
    pub current: bool,
}

/// Everything the shared layout needs: language, messages, navigation and
/// language switch links for the current URL.
pub struct PageChrome {
    pub lang: &'static str,
    pub t: &'static Messages,
    /// `/en`, `/ru`: prefix for every in-site link.
    pub prefix: String,
    pub current_page: &'static str,
    pub switches: Vec<LocaleLink>,
}

impl PageChrome {
    pub fn new(locale: Locale, uri: &Uri, current_page: &'static str) -> Self {
        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());

        let switches = Locale::ALL
            .into_iter()
            .map(|target| LocaleLink {
                code: target.code(),
                name: target.native_name(),
                href: locale_switch_href(path_and_query, target),
                current: target == locale,
            })
            .collect();

        Self {
            lang: locale.code(),
            t: locale.messages(),
            prefix: format!("/{}", locale.code()),
            current_page,
            switches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_segment_must_match_exactly() {
        assert_eq!(parse_locale("ru").unwrap(), Locale::Ru);
        assert!(parse_locale("RU").is_err());
        assert!(parse_locale("de").is_err());
        assert!(parse_locale("favicon.ico").is_err());
    }

    #[test]
    fn chrome_links_keep_the_query() {
        let uri: Uri = "/en/order?tier=rotating-10&qty=2".parse().unwrap();
        let chrome = PageChrome::new(Locale::En, &uri, "order");
        assert_eq!(chrome.prefix, "/en");
        let ru = chrome.switches.iter().find(|s| s.code == "ru").unwrap();
        assert_eq!(ru.href, "/ru/order?tier=rotating-10&qty=2");
        assert!(!ru.current);
    }
}
