//! HTTP API Client
//!
//! Functions for communicating with the guestbook REST API.

use gloo_net::http::{Request, Response};

use crate::state::global::{Entry, EntryPayload};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/guestbook";

const STORAGE_KEY: &str = "guestbook_api_url";

/// Get the API base URL
///
/// Order: local storage, then `GUESTBOOK_API_URL` at build time, then the
/// local default.
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

    resolve_base(stored, option_env!("GUESTBOOK_API_URL"))
}

/// Pick the first non-blank candidate, falling back to the default
fn resolve_base(stored: Option<String>, built: Option<&str>) -> String {
    let url = stored
        .filter(|url| !url.trim().is_empty())
        .or_else(|| {
            built
                .filter(|url| !url.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    normalize_base(&url)
}

/// Remove trailing slashes
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// URL of a single entry, id encoded as one path segment
fn entry_url(id: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(id).into();
    format!("{}/{}", get_api_base(), encoded)
}

async fn check(response: Response) -> Result<Response, String> {
    if response.ok() {
        Ok(response)
    } else {
        let text = response.text().await.unwrap_or_default();
        Err(format!("API error {}: {}", response.status(), text))
    }
}

/// Fetch all entries
pub async fn fetch_entries() -> Result<Vec<Entry>, String> {
    let response = Request::get(&get_api_base())
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    check(response)
        .await?
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a new entry
pub async fn create_entry(payload: &EntryPayload) -> Result<(), String> {
    let response = Request::post(&get_api_base())
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    check(response).await.map(|_| ())
}

/// Update an existing entry
pub async fn update_entry(id: &str, payload: &EntryPayload) -> Result<(), String> {
    let response = Request::put(&entry_url(id))
        .json(payload)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    check(response).await.map(|_| ())
}

/// Delete an entry
pub async fn delete_entry(id: &str) -> Result<(), String> {
    let response = Request::delete(&entry_url(id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    check(response).await.map(|_| ())
}
