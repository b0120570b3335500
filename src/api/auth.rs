//! Auth Calls
//!
//! Registration and login; neither carries the auth header.

use serde::{Deserialize, Serialize};

use super::{json_body, send, ApiError};

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

/// Create an account; the caller still has to log in afterwards
pub async fn register(username: &str, password: &str) -> Result<(), ApiError> {
    let body =
        serde_json::to_string(&Credentials { username, password }).map_err(|_| ApiError::Network)?;
    send("POST", "/register/", Some(body), false).await?;
    Ok(())
}

/// Exchange credentials for a session token
pub async fn login(username: &str, password: &str) -> Result<String, ApiError> {
    let body =
        serde_json::to_string(&Credentials { username, password }).map_err(|_| ApiError::Network)?;
    let response = send("POST", "/login/", Some(body), false).await?;
    let parsed: TokenResponse = json_body(&response).await?;
    Ok(parsed.token)
}
