//! Browser adapters for the login flow
//!
//! `localStorage` behind [`KeyValueStore`] and `fetch` behind [`AuthClient`].

use gloo_net::http::Request;
use web_sys::UrlSearchParams;

use crate::core::{
    AccessToken, AuthClient, Credentials, KeyValueStore, LoginError, StorageError,
    parse_token_response,
};

/// `window.localStorage` for the current origin
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{}: {:?}", key, e)))
    }
}

/// Posts URL-encoded credentials with `fetch`
#[derive(Debug, Clone, Copy)]
pub struct FetchAuthClient {
    endpoint: &'static str,
}

impl FetchAuthClient {
    pub fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }
}

impl AuthClient for FetchAuthClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AccessToken, LoginError> {
        let params = UrlSearchParams::new().map_err(|e| LoginError::Network(format!("{:?}", e)))?;
        for (name, value) in credentials.form_fields() {
            params.append(name, value);
        }

        // A URLSearchParams body makes fetch send application/x-www-form-urlencoded
        let response = Request::post(self.endpoint)
            .body(params)
            .map_err(|e| LoginError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| LoginError::Network(e.to_string()))?;

        let status = response.status();
        // An unreadable body on a 2xx still fails as malformed
        let body = response.text().await.unwrap_or_default();

        parse_token_response(status, &body)
    }
}
