//! Habit Calls
//!
//! Authenticated CRUD against the habits resource.

use serde::Deserialize;

use super::{json_body, send, ApiError};
use crate::models::{Habit, HabitPayload};

/// Server-confirmed completion state after a toggle
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleResponse {
    pub is_completed: bool,
}

pub async fn list_habits() -> Result<Vec<Habit>, ApiError> {
    let response = send("GET", "/habits/", None, true).await?;
    json_body(&response).await
}

pub async fn create_habit(payload: &HabitPayload) -> Result<Habit, ApiError> {
    let body = serde_json::to_string(payload).map_err(|_| ApiError::Network)?;
    let response = send("POST", "/habits/", Some(body), true).await?;
    json_body(&response).await
}

pub async fn get_habit(id: u32) -> Result<Habit, ApiError> {
    let response = send("GET", &format!("/habits/{}/", id), None, true).await?;
    json_body(&response).await
}

/// Full-record update; the payload carries every client-editable field
pub async fn update_habit(id: u32, payload: &HabitPayload) -> Result<Habit, ApiError> {
    let body = serde_json::to_string(payload).map_err(|_| ApiError::Network)?;
    let response = send("PUT", &format!("/habits/{}/", id), Some(body), true).await?;
    json_body(&response).await
}

/// Flip completion server-side; the response value is authoritative
pub async fn toggle_complete(id: u32) -> Result<ToggleResponse, ApiError> {
    let response = send(
        "PATCH",
        &format!("/habits/{}/toggle_complete/", id),
        Some("{}".to_string()),
        true,
    )
    .await?;
    json_body(&response).await
}

pub async fn delete_habit(id: u32) -> Result<(), ApiError> {
    send("DELETE", &format!("/habits/{}/", id), None, true).await?;
    Ok(())
}
