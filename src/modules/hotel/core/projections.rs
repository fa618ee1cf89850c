use crate::modules::hotel::core::reservation::ReservationRecord;

/// A named output shape for reservation queries.
///
/// Each implementor registers one mapping from the loaded record (row
/// plus resolved room and guest) into a transport-specific type. The
/// store is queried once; every shape reuses that same join via
/// [`HotelRepository::list_reservations_projected`].
///
/// [`HotelRepository::list_reservations_projected`]:
///     crate::modules::hotel::core::ports::HotelRepository::list_reservations_projected
pub trait ReservationShape: Sized {
    /// Identifier of the shape, used in trace output.
    const SHAPE: &'static str;

    fn project(record: &ReservationRecord) -> Self;
}
