//! Auth Commands
//!
//! Login and session endpoints.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::{Token, User};

/// Exchange credentials for a bearer token. The endpoint takes the OAuth2
/// password form fields, sent URL-encoded.
pub async fn login(email: &str, password: &str) -> Result<Token, String> {
    let body = format!(
        "username={}&password={}",
        utf8_percent_encode(email, NON_ALPHANUMERIC),
        utf8_percent_encode(password, NON_ALPHANUMERIC),
    );

    let response = Request::post(&super::url("/auth/login"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("{}: login failed", response.status()));
    }
    response.json::<Token>().await.map_err(|e| e.to_string())
}

/// Fetch the user for the stored token
pub async fn current_user() -> Result<User, String> {
    super::get_json("/auth/me").await
}
