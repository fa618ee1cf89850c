use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::hotel::adapters::inbound::rest::error::ApiError;
use crate::modules::hotel::core::ports::HotelRepository;
use crate::modules::hotel::core::projections::ReservationShape;
use crate::modules::hotel::core::reservation::{Reservation, ReservationRecord};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ReservationBody {
    #[serde(default)]
    pub id: i64,
    pub room_id: i64,
    pub guest_id: i64,
    pub checkin_date: DateTime<Utc>,
    pub checkout_date: DateTime<Utc>,
}

impl ReservationBody {
    fn into_reservation(self) -> Reservation {
        let mut reservation =
            Reservation::new(self.checkin_date, self.checkout_date, self.room_id, self.guest_id);
        reservation.id = self.id;
        reservation
    }
}

/// The list shape: one flat row per reservation with the room and
/// guest names pulled up alongside the references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationSummary {
    pub id: i64,
    pub room_id: i64,
    pub room_number: i64,
    pub room_name: String,
    pub guest_id: i64,
    pub guest_name: String,
    pub checkin_date: DateTime<Utc>,
    pub checkout_date: DateTime<Utc>,
}

impl ReservationShape for ReservationSummary {
    const SHAPE: &'static str = "reservation_summary";

    fn project(record: &ReservationRecord) -> Self {
        Self {
            id: record.reservation.id,
            room_id: record.reservation.room_id,
            room_number: record.room.number,
            room_name: record.room.name.clone(),
            guest_id: record.reservation.guest_id,
            guest_name: record.guest.name.clone(),
            checkin_date: record.reservation.checkin_date,
            checkout_date: record.reservation.checkout_date,
        }
    }
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let summaries = state
        .repository
        .list_reservations_projected::<ReservationSummary>()
        .await?;
    Ok(Json(summaries))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    match state.repository.get_reservation(id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ReservationBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::Malformed(rejection.body_text()))?;

    let mut reservation = body.into_reservation();
    reservation.id = 0;
    let created = state.repository.create_reservation(reservation).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/reservations/{}", created.id))],
        Json(created),
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<ReservationBody>, JsonRejection>,
) -> Result<Json<Reservation>, ApiError> {
    let Json(body) = body.map_err(|rejection| ApiError::Malformed(rejection.body_text()))?;
    if body.id != id {
        return Err(ApiError::IdMismatch);
    }
    if state.repository.get_reservation(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    match state.repository.update_reservation(body.into_reservation()).await? {
        Some(updated) => Ok(Json(updated)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if state.repository.delete_reservation(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
