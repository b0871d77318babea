//! REST helpers for talking to the lab services.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Native/SSR
//! builds get stubs, since these endpoints are only meaningful in the
//! browser.
//!
//! Credential verification happens entirely on the auth service; this
//! module only ships credentials out and hands the verified result
//! (token + profile) back to the caller, which records it in the
//! session store.

#![allow(clippy::unused_async)]

use serde::Deserialize;
use thiserror::Error;

use crate::session::state::UserProfile;

/// Successful login payload from `POST /api/login`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LoginSuccess {
    pub user: UserProfile,
    pub token: String,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("invalid email or password")]
    BadCredentials,
    #[error("auth service unavailable: {0}")]
    Unavailable(String),
    #[error("login is only available in the browser")]
    Unsupported,
}

/// A bucket visible to the signed-in user.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct BucketSummary {
    pub name: String,
}

/// Verify credentials against the auth service.
///
/// # Errors
///
/// [`LoginError::BadCredentials`] on a 401, [`LoginError::Unavailable`]
/// for transport or server faults.
pub async fn login(email: &str, password: &str) -> Result<LoginSuccess, LoginError> {
    #[cfg(feature = "hydrate")]
    {
        let body = format!(
            "email={}&password={}",
            js_sys::encode_uri_component(email),
            js_sys::encode_uri_component(password),
        );
        let resp = gloo_net::http::Request::post("/api/login")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| LoginError::Unavailable(e.to_string()))?
            .send()
            .await
            .map_err(|e| LoginError::Unavailable(e.to_string()))?;
        if resp.status() == 401 {
            return Err(LoginError::BadCredentials);
        }
        if !resp.ok() {
            return Err(LoginError::Unavailable(format!(
                "login failed: {}",
                resp.status()
            )));
        }
        resp.json::<LoginSuccess>()
            .await
            .map_err(|e| LoginError::Unavailable(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(LoginError::Unsupported)
    }
}

/// Fetch the buckets the current session may browse.
/// Returns `None` if unauthorized or on the server.
pub async fn fetch_buckets(token: &str) -> Option<Vec<BucketSummary>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/buckets")
            .header("X-Session-Token", token)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<BucketSummary>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// List the files inside one bucket.
/// Returns `None` if unauthorized or on the server.
pub async fn fetch_bucket_files(token: &str, bucket: &str) -> Option<Vec<String>> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/buckets/{bucket}/files");
        let resp = gloo_net::http::Request::get(&url)
            .header("X-Session-Token", token)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<String>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, bucket);
        None
    }
}
