use serde::{Deserialize, Serialize};

/// Occupancy status of a room.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    sqlx::Type,
    async_graphql::Enum,
)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Available,
    Unavailable,
    Occupied,
    Maintenance,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Room {
    pub id: i64,
    pub number: i64,
    pub name: String,
    pub status: RoomStatus,
    pub allowed_smoking: bool,
}

impl Room {
    pub fn new(
        number: i64,
        name: impl Into<String>,
        status: RoomStatus,
        allowed_smoking: bool,
    ) -> Self {
        Self {
            id: 0,
            number,
            name: name.into(),
            status,
            allowed_smoking,
        }
    }
}
