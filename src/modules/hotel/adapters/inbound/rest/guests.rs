use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::modules::hotel::adapters::inbound::rest::error::{ApiError, require_name};
use crate::modules::hotel::core::guest::Guest;
use crate::modules::hotel::core::ports::HotelRepository;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct GuestBody {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub register_date: DateTime<Utc>,
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let guests = state.repository.list_guests().await?;
    Ok(Json(guests))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    match state.repository.get_guest(id).await? {
        Some(guest) => Ok(Json(guest)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<GuestBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::Malformed(rejection.body_text()))?;
    require_name(&body.name)?;

    let created = state
        .repository
        .create_guest(Guest::new(body.name, body.register_date))
        .await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/guests/{}", created.id))],
        Json(created),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<GuestBody>, JsonRejection>,
) -> Result<Json<Guest>, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::Malformed(rejection.body_text()))?;
    if body.id != id {
        return Err(ApiError::IdMismatch);
    }
    require_name(&body.name)?;
    if state.repository.get_guest(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    let mut guest = Guest::new(body.name, body.register_date);
    guest.id = id;
    match state.repository.update_guest(guest).await? {
        Some(updated) => Ok(Json(updated)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.repository.delete_guest(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
