//! Session Store
//!
//! Persists the bearer token in browser local storage.

/// Fixed local storage key for the bearer token
pub const TOKEN_KEY: &str = "quill_token";

fn local_storage() -> Option<web_sys::Storage> {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            return Some(storage);
        }
    }
    None
}

/// Get the stored token, if any; no side effects
pub fn get_token() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
}

/// Persist the token, overwriting any prior value
pub fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Remove the stored token
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Return the stored token, or redirect to the login route when absent
pub fn require_auth() -> Option<String> {
    let token = get_token();
    if token.is_none() {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
    token
}
