// Ports define what the core needs from the outside world, without
// implementing it.
//
// Responsibilities
// - Describe the persistence capability as a trait so the core and both
//   inbound adapters stay independent of any concrete database.
//
// Boundaries
// - No SQL here. The store adapter implements this trait in the
//   adapters layer; nothing else may touch the store.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::hotel::core::guest::Guest;
use crate::modules::hotel::core::projections::ReservationShape;
use crate::modules::hotel::core::reservation::{Reservation, ReservationRecord};
use crate::modules::hotel::core::room::Room;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store rejected a write, e.g. a reservation naming a
    /// nonexistent room. The store's own message is carried through.
    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error("store backend: {0}")]
    Backend(String),
}

/// Sole owner of persistence operations. Every operation borrows a
/// connection for its own duration and releases it on every exit path.
///
/// Contract shared by all per-entity operations:
/// - `list_*` returns every row; reservations come back with their
///   room and guest resolved in the same query.
/// - `get_*` returns `None` for a missing identity, never an error.
/// - `create_*` inserts, the store assigns the identity, and the entity
///   is returned with it populated.
/// - `update_*` replaces the whole row matching the entity's identity
///   with the supplied values; `None` when no row matched. There is no
///   concurrency token, so the last writer wins.
/// - `delete_*` reports whether a row was removed; deleting a guest or
///   room cascades to its reservations inside the store's transaction.
#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn list_guests(&self) -> Result<Vec<Guest>, RepositoryError>;
    async fn get_guest(&self, id: i64) -> Result<Option<Guest>, RepositoryError>;
    async fn create_guest(&self, guest: Guest) -> Result<Guest, RepositoryError>;
    async fn update_guest(&self, guest: Guest) -> Result<Option<Guest>, RepositoryError>;
    async fn delete_guest(&self, id: i64) -> Result<bool, RepositoryError>;

    async fn list_rooms(&self) -> Result<Vec<Room>, RepositoryError>;
    async fn get_room(&self, id: i64) -> Result<Option<Room>, RepositoryError>;
    async fn create_room(&self, room: Room) -> Result<Room, RepositoryError>;
    async fn update_room(&self, room: Room) -> Result<Option<Room>, RepositoryError>;
    async fn delete_room(&self, id: i64) -> Result<bool, RepositoryError>;

    async fn list_reservations(&self) -> Result<Vec<ReservationRecord>, RepositoryError>;
    async fn get_reservation(
        &self,
        id: i64,
    ) -> Result<Option<ReservationRecord>, RepositoryError>;
    async fn create_reservation(
        &self,
        reservation: Reservation,
    ) -> Result<Reservation, RepositoryError>;
    async fn update_reservation(
        &self,
        reservation: Reservation,
    ) -> Result<Option<Reservation>, RepositoryError>;
    async fn delete_reservation(&self, id: i64) -> Result<bool, RepositoryError>;

    /// Loads every reservation once (the same join as
    /// [`list_reservations`](Self::list_reservations)) and maps each
    /// record into the requested output shape. Both protocol surfaces
    /// call this with their own shape, so the join logic exists exactly
    /// once.
    async fn list_reservations_projected<P>(&self) -> Result<Vec<P>, RepositoryError>
    where
        P: ReservationShape + Send + 'static,
    {
        let records = self.list_reservations().await?;
        tracing::debug!(shape = P::SHAPE, rows = records.len(), "projecting reservations");
        Ok(records.iter().map(P::project).collect())
    }
}
