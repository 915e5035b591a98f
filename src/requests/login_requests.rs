use anyhow::Error;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

const AUTH_STORAGE_KEY: &str = "userAuthState";

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub created_at: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
pub struct AuthDetails {
    pub server_name: String,
    pub api_key: Option<String>,
}

impl AuthDetails {
    pub fn from_storage(serialized: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(serialized)
    }
}

pub async fn call_get_current_user(
    server_name: &str,
    api_key: &Option<String>,
) -> Result<UserDetails, Error> {
    let url = format!("{}/api/auth/me", server_name.trim_end_matches('/'));
    let api_key_ref = api_key
        .as_deref()
        .ok_or_else(|| Error::msg("API key is missing"))?;

    let response = Request::get(&url)
        .header("Api-Key", api_key_ref)
        .header("Content-Type", "application/json")
        .send()
        .await?;
    if !response.ok() {
        return Err(Error::msg(format!(
            "Failed to get user details: {}",
            response.status_text()
        )));
    }
    Ok(response.json::<UserDetails>().await?)
}

/// Reads the persisted session from local storage. `server_name` falls back to
/// the page origin when the stored value is blank.
pub fn load_auth_details() -> Option<AuthDetails> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let stored = storage.get_item(AUTH_STORAGE_KEY).ok()??;
    match AuthDetails::from_storage(&stored) {
        Ok(mut details) => {
            if details.server_name.trim().is_empty() {
                details.server_name = window.location().origin().unwrap_or_default();
            }
            Some(details)
        }
        Err(e) => {
            log::warn!("Ignoring unreadable {}: {}", AUTH_STORAGE_KEY, e);
            None
        }
    }
}

pub fn clear_auth_details() {
    if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
        if let Err(e) = storage.remove_item(AUTH_STORAGE_KEY) {
            log::error!("Failed to clear stored session: {:?}", e);
        }
    }
}
