//! Remote Content Gateway
//!
//! HTTP bindings to the portfolio backend REST API. Fetches resolve to
//! `Result<T, String>`; mutating calls resolve to plain `bool` so callers
//! never see an exception cross the async boundary.

use gloo_net::http::{Request, RequestBuilder};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::models::{ContactForm, ContentSection, PersonalInfo, StageRecord};

const DEFAULT_BASE_URL: &str = "http://localhost:8001";
const TOKEN_STORAGE_KEY: &str = "portfolio.admin.token";

/// Backend base URL, from the build environment with a local fallback
pub fn base_url() -> String {
    option_env!("PORTFOLIO_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

// ========================
// Save Routing
// ========================

/// Where a save goes. An explicit tagged key, so a section named
/// "stageXYZ" can never be misrouted by a name-prefix convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKey {
    /// The personal-info singleton
    Personal,
    /// A stage record, keyed by stage type ("stage1" / "stage2")
    Stage(String),
    /// A free-text content section, keyed by section id
    Content(String),
}

impl SectionKey {
    /// Admin endpoint path for this key
    pub fn save_path(&self) -> String {
        match self {
            SectionKey::Personal => "/api/admin/personal-info".to_string(),
            SectionKey::Stage(_) => "/api/admin/stages".to_string(),
            SectionKey::Content(id) => format!("/api/admin/content/{}", id),
        }
    }

    /// Stage payloads are wrapped under their stage-type key; everything
    /// else is a full-record upsert and passes through unchanged.
    pub fn wrap_payload(&self, data: Value) -> Value {
        match self {
            SectionKey::Stage(stage_type) => {
                let mut wrapper = serde_json::Map::new();
                wrapper.insert(stage_type.clone(), data);
                Value::Object(wrapper)
            }
            _ => data,
        }
    }
}

// ========================
// Content Fetches
// ========================

pub async fn fetch_personal_info() -> Result<PersonalInfo, String> {
    get_json(&format!("{}/api/personal-info", base_url())).await
}

pub async fn fetch_stage(stage_type: &str) -> Result<StageRecord, String> {
    get_json(&format!("{}/api/stages/{}", base_url(), stage_type)).await
}

pub async fn fetch_section(section_id: &str) -> Result<ContentSection, String> {
    get_json(&format!("{}/api/content/{}", base_url(), section_id)).await
}

async fn get_json<T: for<'de> Deserialize<'de>>(url: &str) -> Result<T, String> {
    let response = Request::get(url).send().await.map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

// ========================
// Saves
// ========================

/// Upsert one record. Returns false on any network or HTTP failure.
pub async fn save(key: &SectionKey, data: Value) -> bool {
    let url = format!("{}{}", base_url(), key.save_path());
    let payload = key.wrap_payload(data);
    let request = match authorized(Request::post(&url)).json(&payload) {
        Ok(request) => request,
        Err(_) => return false,
    };
    match request.send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}

/// Post a visitor contact message
pub async fn submit_contact(form: &ContactForm) -> bool {
    let url = format!("{}/api/contact", base_url());
    let request = match Request::post(&url).json(form) {
        Ok(request) => request,
        Err(_) => return false,
    };
    match request.send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}

// ========================
// Admin Session
// ========================

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    token: Option<String>,
}

impl LoginResponse {
    /// Deployments answer with either an explicit success flag or a bare
    /// token; either one means the password was accepted.
    fn granted(&self) -> bool {
        self.success || self.token.is_some()
    }
}

/// Check the password. A wrong password and a dead network look the same
/// to the caller: not logged in.
pub async fn login(password: &str) -> bool {
    let url = format!("{}/api/admin/login", base_url());
    let request = match Request::post(&url).json(&json!({ "password": password })) {
        Ok(request) => request,
        Err(_) => return false,
    };
    let response = match request.send().await {
        Ok(response) => response,
        Err(_) => return false,
    };
    if !response.ok() {
        return false;
    }
    match response.json::<LoginResponse>().await {
        Ok(out) if out.granted() => {
            if let Some(token) = out.token {
                store_token(&token);
            }
            true
        }
        _ => false,
    }
}

/// Ask the backend whether the stored session is still valid
pub async fn verify() -> bool {
    let url = format!("{}/api/admin/verify", base_url());
    match authorized(Request::get(&url)).send().await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}

/// Best-effort server-side logout; the local token is dropped regardless
pub async fn logout() {
    let url = format!("{}/api/admin/logout", base_url());
    if authorized(Request::post(&url)).send().await.is_err() {
        web_sys::console::log_1(&"[API] logout request failed, clearing local session anyway".into());
    }
    clear_token();
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

// ========================
// Token Storage
// ========================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn stored_token() -> Option<String> {
    local_storage().and_then(|s| s.get_item(TOKEN_STORAGE_KEY).ok().flatten())
}

fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
    }
}

fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_paths() {
        assert_eq!(SectionKey::Personal.save_path(), "/api/admin/personal-info");
        assert_eq!(
            SectionKey::Stage("stage1".to_string()).save_path(),
            "/api/admin/stages"
        );
        assert_eq!(
            SectionKey::Content("conclusion".to_string()).save_path(),
            "/api/admin/content/conclusion"
        );
    }

    #[test]
    fn test_stage_payload_wrapped_under_stage_type() {
        let key = SectionKey::Stage("stage1".to_string());
        let wrapped = key.wrap_payload(json!({ "company": "Acme Corp", "period": "2024" }));
        assert_eq!(
            wrapped,
            json!({ "stage1": { "company": "Acme Corp", "period": "2024" } })
        );
    }

    #[test]
    fn test_non_stage_payloads_pass_through() {
        let data = json!({ "name": "Votre Nom" });
        assert_eq!(SectionKey::Personal.wrap_payload(data.clone()), data);
        assert_eq!(
            SectionKey::Content("conclusion".to_string()).wrap_payload(data.clone()),
            data
        );
    }

    #[test]
    fn test_login_granted_by_success_flag() {
        let out: LoginResponse = serde_json::from_value(json!({ "success": true })).unwrap();
        assert!(out.granted());
        assert_eq!(out.token, None);
    }

    #[test]
    fn test_login_granted_by_bare_token() {
        // Some deployments omit the flag and answer with the token alone
        let out: LoginResponse = serde_json::from_value(json!({ "token": "abc123" })).unwrap();
        assert!(out.granted());
        assert_eq!(out.token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_login_rejected_when_neither_present() {
        let out: LoginResponse = serde_json::from_value(json!({ "success": false })).unwrap();
        assert!(!out.granted());
        let out: LoginResponse = serde_json::from_value(json!({})).unwrap();
        assert!(!out.granted());
    }

    #[test]
    fn test_section_named_like_a_stage_routes_to_content() {
        // The old prefix convention would have sent this to the stages endpoint
        let key = SectionKey::Content("stage-retrospective".to_string());
        assert_eq!(key.save_path(), "/api/admin/content/stage-retrospective");
        let data = json!({ "title": "t" });
        assert_eq!(key.wrap_payload(data.clone()), data);
    }
}
