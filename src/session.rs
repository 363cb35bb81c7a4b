//! Credential store backed by browser `localStorage`.
//!
//! Holds exactly one value: the opaque bearer token issued at sign-in or
//! sign-up. The token survives page reloads and is scoped to the origin.
//! No expiry is tracked locally; a stale token is detected lazily when the
//! backend answers 401.

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "bloodbank_access_token";

/// Read the stored credential, if any.
pub fn get() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist the credential for subsequent requests.
pub fn set(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// Remove the credential. Safe to call when nothing is stored.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
