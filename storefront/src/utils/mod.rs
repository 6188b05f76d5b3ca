use axum::http::HeaderMap;

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        // Proxies may append: "a, b". The first hop is the client-facing one.
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Public origin (`scheme://host`) of the current request, for building
/// absolute return URLs.
///
/// Honors `x-forwarded-proto` / `x-forwarded-host`, then `Host` with
/// `https`; with no host header at all the configured base URL is used.
pub fn request_origin(headers: &HeaderMap, fallback: Option<&str>) -> Option<String> {
    let host = header_str(headers, "x-forwarded-host").or_else(|| header_str(headers, "host"));

    match host {
        Some(host) => {
            let scheme = header_str(headers, "x-forwarded-proto").unwrap_or("https");
            Some(format!("{}://{}", scheme, host))
        }
        None => fallback.map(|base| base.trim_end_matches('/').to_string()),
    }
}
