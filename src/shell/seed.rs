use chrono::{Duration, Utc};

use crate::modules::hotel::core::guest::Guest;
use crate::modules::hotel::core::ports::{HotelRepository, RepositoryError};
use crate::modules::hotel::core::reservation::Reservation;
use crate::modules::hotel::core::room::{Room, RoomStatus};

/// Inserts the demo data set into an empty store: three guests, four
/// rooms and two reservations. A non-empty store is left untouched.
pub async fn seed_demo_data<R: HotelRepository>(repository: &R) -> Result<(), RepositoryError> {
    if !repository.list_guests().await?.is_empty() {
        tracing::info!("store already populated, skipping demo seed");
        return Ok(());
    }

    let now = Utc::now();
    let alper = repository
        .create_guest(Guest::new("Alper Ebicoglu", now - Duration::days(10)))
        .await?;
    let george = repository
        .create_guest(Guest::new("George Michael", now - Duration::days(5)))
        .await?;
    repository
        .create_guest(Guest::new("Daft Punk", now - Duration::days(1)))
        .await?;

    repository
        .create_room(Room::new(101, "yellow-room", RoomStatus::Available, false))
        .await?;
    repository
        .create_room(Room::new(102, "blue-room", RoomStatus::Available, false))
        .await?;
    let white = repository
        .create_room(Room::new(103, "white-room", RoomStatus::Unavailable, false))
        .await?;
    let black = repository
        .create_room(Room::new(104, "black-room", RoomStatus::Unavailable, false))
        .await?;

    repository
        .create_reservation(Reservation::new(
            now - Duration::days(2),
            now + Duration::days(3),
            white.id,
            alper.id,
        ))
        .await?;
    repository
        .create_reservation(Reservation::new(
            now - Duration::days(1),
            now + Duration::days(4),
            black.id,
            george.id,
        ))
        .await?;

    tracing::info!("seeded demo data");
    Ok(())
}
