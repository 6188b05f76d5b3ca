//! Locale routing: which language a request is served in, and how to move
//! between languages without losing the order state carried in the URL.

mod messages;

pub use messages::Messages;

use serde::{Deserialize, Serialize};

/// Cookie remembering the last locale a visitor browsed in.
pub const LOCALE_COOKIE: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ru];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    /// Native name shown in the language switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ru => "Русский",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &messages::EN,
            Locale::Ru => &messages::RU,
        }
    }

    /// Choose between the two translations of a literal.
    pub fn pick<T>(self, en: T, ru: T) -> T {
        match self {
            Locale::En => en,
            Locale::Ru => ru,
        }
    }

    /// Cookie first, then the highest-weighted supported `Accept-Language`
    /// entry, then the site default.
    pub fn negotiate(cookie: Option<&str>, accept_language: Option<&str>, default: Locale) -> Locale {
        if let Some(locale) = cookie.and_then(Locale::from_code) {
            return locale;
        }

        let Some(header) = accept_language else {
            return default;
        };

        let mut candidates: Vec<(f32, usize, Locale)> = header
            .split(',')
            .enumerate()
            .filter_map(|(position, entry)| {
                let mut parts = entry.split(';');
                let tag = parts.next()?.trim();
                let primary = tag.split('-').next()?;
                let locale = Locale::from_code(primary)?;
                let weight = parts
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                (weight > 0.0).then_some((weight, position, locale))
            })
            .collect();

        candidates.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
        candidates.first().map(|c| c.2).unwrap_or(default)
    }
}

/// Swap the locale segment of `path_and_query` for `target`, keeping the rest
/// of the path and the query string intact.
///
/// `/en/order?tier=rotating-10` becomes `/ru/order?tier=rotating-10`. Paths
/// without a locale segment get one prepended.
pub fn locale_switch_href(path_and_query: &str, target: Locale) -> String {
    let (path, query) = match path_and_query.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path_and_query, None),
    };

    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.split_once('/') {
        Some((first, rest)) => (first, Some(rest)),
        None => (trimmed, None),
    };

    let mut href = format!("/{}", target.code());
    if Locale::from_code(first).is_some() {
        if let Some(rest) = rest.filter(|r| !r.is_empty()) {
            href.push('/');
            href.push_str(rest);
        }
    } else if !trimmed.is_empty() {
        href.push('/');
        href.push_str(trimmed);
    }

    if let Some(query) = query.filter(|q| !q.is_empty()) {
        href.push('?');
        href.push_str(query);
    }

    href
}

/// Month count with the grammatically correct noun for the locale.
pub fn months_label(locale: Locale, months: u32) -> String {
    match locale {
        Locale::En => crate::order::calculator::months_label_en(months).to_string(),
        Locale::Ru => crate::order::calculator::months_label_ru(months).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_wins_over_header() {
        let locale = Locale::negotiate(Some("ru"), Some("en-US,en;q=0.9"), Locale::En);
        assert_eq!(locale, Locale::Ru);
    }

    #[test]
    fn header_weights_are_respected() {
        let locale = Locale::negotiate(None, Some("de-DE, en;q=0.5, ru;q=0.8"), Locale::En);
        assert_eq!(locale, Locale::Ru);

        let locale = Locale::negotiate(None, Some("ru-RU"), Locale::En);
        assert_eq!(locale, Locale::Ru);
    }

    #[test]
    fn unknown_values_fall_back_to_default() {
        assert_eq!(
            Locale::negotiate(Some("fr"), Some("fr-FR,de;q=0.7"), Locale::Ru),
            Locale::Ru
        );
        assert_eq!(Locale::negotiate(None, None, Locale::En), Locale::En);
        assert_eq!(
            Locale::negotiate(None, Some("ru;q=0"), Locale::En),
            Locale::En
        );
    }

    #[test]
    fn switch_keeps_path_and_query() {
        assert_eq!(
            locale_switch_href("/en/order?tier=rotating-10&qty=3", Locale::Ru),
            "/ru/order?tier=rotating-10&qty=3"
        );
        assert_eq!(locale_switch_href("/ru", Locale::En), "/en");
        assert_eq!(locale_switch_href("/ru/", Locale::En), "/en");
        assert_eq!(locale_switch_href("/", Locale::Ru), "/ru");
        assert_eq!(locale_switch_href("/pricing", Locale::Ru), "/ru/pricing");
        assert_eq!(
            locale_switch_href("/en/legal/terms?", Locale::Ru),
            "/ru/legal/terms"
        );
    }

    #[test]
    fn messages_follow_locale() {
        assert_eq!(Locale::En.messages().nav_pricing, "Pricing");
        assert_eq!(Locale::Ru.messages().nav_pricing, "Цены");
        assert_eq!(months_label(Locale::Ru, 3), "месяца");
        assert_eq!(months_label(Locale::En, 1), "month");
    }
}
