//! Best-effort memory of the visitor's last order choice.
//!
//! Preferences live client-side in a single slot under [`PREFERENCES_KEY`].
//! Nothing here ever fails loudly: an unwritable slot means the choice is not
//! remembered, an unreadable or corrupted one means there is no preference.

use super::resolver::{ResolutionInput, Selection};
use super::vocabulary::{tier_to_plan, BillingDuration, ExternalService};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};

pub const PREFERENCES_KEY: &str = "proxy_order_prefs";

/// Stored in the public vocabulary; `tier_id` is the internal id verbatim so
/// an exact tier survives a round trip even when it has no public plan name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPreferences {
    pub service: ExternalService,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<BillingDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_id: Option<String>,
}

impl StoredPreferences {
    /// `None` for selections outside the public vocabulary (or degenerate ones).
    pub fn from_selection(selection: &Selection) -> Option<Self> {
        if selection.is_degenerate() {
            return None;
        }
        let service = ExternalService::from_internal(&selection.service_id)?;
        let plan = tier_to_plan(&selection.tier_id)
            .filter(|(plan_service, _)| *plan_service == service)
            .map(|(_, plan)| plan.to_string());

        Some(Self {
            service,
            plan,
            duration: selection.duration,
            tier_id: Some(selection.tier_id.clone()),
        })
    }

    pub fn to_resolution_input(&self) -> ResolutionInput {
        ResolutionInput {
            service: Some(self.service.as_str().to_string()),
            plan: self.plan.clone(),
            tier_id: self.tier_id.clone(),
            duration: self.duration.map(|d| d.as_str().to_string()),
        }
    }

    /// Whether a new selection changes what is remembered.
    pub fn differs_from(&self, other: &StoredPreferences) -> bool {
        self.service != other.service
            || self.tier_id != other.tier_id
            || self.duration != other.duration
    }
}

/// A durable client-side key-value slot.
pub trait PreferenceSlot {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn write(&mut self, key: &str, value: String) -> anyhow::Result<()>;
}

pub fn save<S: PreferenceSlot>(slot: &mut S, prefs: &StoredPreferences) {
    let result = serde_json::to_string(prefs)
        .map_err(anyhow::Error::from)
        .and_then(|json| slot.write(PREFERENCES_KEY, json));

    if let Err(e) = result {
        tracing::debug!(error = %e, "Could not persist order preferences");
    }
}

pub fn load<S: PreferenceSlot>(slot: &S) -> Option<StoredPreferences> {
    let raw = match slot.read(PREFERENCES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::debug!(error = %e, "Order preferences unavailable");
            return None;
        }
    };

    serde_json::from_str(&raw)
        .map_err(|e| tracing::debug!(error = %e, "Ignoring malformed order preferences"))
        .ok()
}

/// Cookie-backed slot. Values are base64url-encoded so arbitrary JSON fits in
/// a cookie value.
#[derive(Debug, Clone)]
pub struct CookieSlot {
    jar: CookieJar,
}

const COOKIE_MAX_AGE_DAYS: i64 = 365;

impl CookieSlot {
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl Default for CookieSlot {
    fn default() -> Self {
        Self::new(CookieJar::new())
    }
}

impl PreferenceSlot for CookieSlot {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let Some(cookie) = self.jar.get(key) else {
            return Ok(None);
        };
        let bytes = URL_SAFE_NO_PAD.decode(cookie.value())?;
        Ok(Some(String::from_utf8(bytes)?))
    }

    fn write(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        let cookie = Cookie::build((key.to_string(), URL_SAFE_NO_PAD.encode(value)))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::days(COOKIE_MAX_AGE_DAYS))
            .build();
        self.jar = self.jar.clone().add(cookie);
        Ok(())
    }
}
