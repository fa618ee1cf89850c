use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::hotel::core::guest::Guest;
use crate::modules::hotel::core::room::Room;

/// A stay: one room, one guest, a check-in and a check-out timestamp.
///
/// The interval is stored as supplied; check-in is not required to
/// precede check-out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reservation {
    pub id: i64,
    pub room_id: i64,
    pub guest_id: i64,
    pub checkin_date: DateTime<Utc>,
    pub checkout_date: DateTime<Utc>,
}

impl Reservation {
    pub fn new(
        checkin_date: DateTime<Utc>,
        checkout_date: DateTime<Utc>,
        room_id: i64,
        guest_id: i64,
    ) -> Self {
        Self {
            id: 0,
            room_id,
            guest_id,
            checkin_date,
            checkout_date,
        }
    }
}

/// A reservation loaded for read, with both parents resolved in the
/// same query. Read-only materialization; the row itself stays the
/// single source of truth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationRecord {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub room: Room,
    pub guest: Guest,
}
