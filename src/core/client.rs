//! Authentication client seam and the submit pipeline

use super::error::LoginError;
use super::login::{Credentials, LoginSettings};
use super::storage::{KeyValueStore, persist_token};
use super::token::AccessToken;

/// Exchanges credentials for an access token
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AccessToken, LoginError>;
}

/// Send one login request and store the token on success.
///
/// The store is untouched on failure.
pub async fn submit_login<C, S>(
    client: &C,
    store: &S,
    settings: &LoginSettings,
    credentials: &Credentials,
) -> Result<AccessToken, LoginError>
where
    C: AuthClient,
    S: KeyValueStore + ?Sized,
{
    let token = client.authenticate(credentials).await?;
    persist_token(store, settings.token_key, &token);
    Ok(token)
}
