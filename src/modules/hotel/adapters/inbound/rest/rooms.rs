use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::modules::hotel::adapters::inbound::rest::error::{ApiError, require_name};
use crate::modules::hotel::core::ports::HotelRepository;
use crate::modules::hotel::core::room::{Room, RoomStatus};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RoomBody {
    #[serde(default)]
    pub id: i64,
    pub number: i64,
    pub name: String,
    pub status: RoomStatus,
    #[serde(default)]
    pub allowed_smoking: bool,
}

impl RoomBody {
    fn into_room(self) -> Room {
        let mut room = Room::new(self.number, self.name, self.status, self.allowed_smoking);
        room.id = self.id;
        room
    }
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rooms = state.repository.list_rooms().await?;
    Ok(Json(rooms))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    match state.repository.get_room(id).await? {
        Some(room) => Ok(Json(room)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<RoomBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::Malformed(rejection.body_text()))?;
    require_name(&body.name)?;

    let mut room = body.into_room();
    room.id = 0;
    let created = state.repository.create_room(room).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/rooms/{}", created.id))],
        Json(created),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<RoomBody>, JsonRejection>,
) -> Result<Json<Room>, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::Malformed(rejection.body_text()))?;
    if body.id != id {
        return Err(ApiError::IdMismatch);
    }
    require_name(&body.name)?;
    if state.repository.get_room(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    match state.repository.update_room(body.into_room()).await? {
        Some(updated) => Ok(Json(updated)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.repository.delete_room(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
