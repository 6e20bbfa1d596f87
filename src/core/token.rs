//! Access token returned by the authentication endpoint

use serde::Deserialize;

use super::error::LoginError;

/// Opaque credential issued on a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Success body of `POST /login`; any other fields are ignored
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Turn an HTTP status and raw body into a token or a login error
pub fn parse_token_response(status: u16, body: &str) -> Result<AccessToken, LoginError> {
    if !(200..300).contains(&status) {
        return Err(LoginError::Rejected { status });
    }

    let response: TokenResponse =
        serde_json::from_str(body).map_err(|e| LoginError::MalformedBody(e.to_string()))?;

    Ok(AccessToken(response.access_token))
}
