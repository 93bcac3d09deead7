//! REST Service Wrappers
//!
//! Thin bindings to the backend HTTP API, organized by resource.

mod admin;
mod audit;
mod auth;
mod groups;
mod inventory;
mod meetings;
mod research;
mod users;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

// Re-export all public items
pub use admin::*;
pub use audit::*;
pub use auth::*;
pub use groups::*;
pub use inventory::*;
pub use meetings::*;
pub use research::*;
pub use users::*;

const API_BASE: &str = "/api/v2";
const TOKEN_KEY: &str = "token";

// ========================
// Token Storage
// ========================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Bearer token from local storage, if logged in
pub fn stored_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok()?
}

pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

// ========================
// Request Helpers
// ========================

fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.is_empty() => format!("{}: {}", status, body),
        _ => format!("{}: request failed", status),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

async fn read_empty(response: Response) -> Result<(), String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_auth(Request::get(&url(path)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = with_auth(Request::post(&url(path)))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub(crate) async fn post_json_empty<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = with_auth(Request::post(&url(path)))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_empty(response).await
}

/// POST with an empty body (action endpoints)
pub(crate) async fn post_empty(path: &str) -> Result<(), String> {
    let response = with_auth(Request::post(&url(path)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_empty(response).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = with_auth(Request::put(&url(path)))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub(crate) async fn put_json_empty<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = with_auth(Request::put(&url(path)))
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_empty(response).await
}

pub(crate) async fn delete(path: &str) -> Result<(), String> {
    let response = with_auth(Request::delete(&url(path)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_empty(response).await
}
