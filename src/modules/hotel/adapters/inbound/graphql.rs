use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::hotel::core::guest::Guest;
use crate::modules::hotel::core::ports::HotelRepository;
use crate::modules::hotel::core::projections::ReservationShape;
use crate::modules::hotel::core::reservation::{Reservation, ReservationRecord};
use crate::modules::hotel::core::room::{Room, RoomStatus};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlGuest {
    pub id: i64,
    pub name: String,
    pub register_date: DateTime<Utc>,
}

impl From<Guest> for GqlGuest {
    fn from(guest: Guest) -> Self {
        Self {
            id: guest.id,
            name: guest.name,
            register_date: guest.register_date,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlRoom {
    pub id: i64,
    pub number: i64,
    pub name: String,
    pub status: RoomStatus,
    pub allowed_smoking: bool,
}

impl From<Room> for GqlRoom {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            number: room.number,
            name: room.name,
            status: room.status,
            allowed_smoking: room.allowed_smoking,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlReservation {
    pub id: i64,
    pub room_id: i64,
    pub room: GqlRoom,
    pub guest_id: i64,
    pub guest: GqlGuest,
    pub checkin_date: DateTime<Utc>,
    pub checkout_date: DateTime<Utc>,
}

impl ReservationShape for GqlReservation {
    const SHAPE: &'static str = "graphql_reservation";

    fn project(record: &ReservationRecord) -> Self {
        Self {
            id: record.reservation.id,
            room_id: record.reservation.room_id,
            room: record.room.clone().into(),
            guest_id: record.reservation.guest_id,
            guest: record.guest.clone().into(),
            checkin_date: record.reservation.checkin_date,
            checkout_date: record.reservation.checkout_date,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn guests(&self, context: &Context<'_>) -> GqlResult<Vec<GqlGuest>> {
        let state = context.data_unchecked::<AppState>();
        let guests = state.repository.list_guests().await?;
        Ok(guests.into_iter().map(Into::into).collect())
    }

    async fn guest(&self, context: &Context<'_>, id: i64) -> GqlResult<Option<GqlGuest>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.repository.get_guest(id).await?.map(Into::into))
    }

    async fn rooms(&self, context: &Context<'_>) -> GqlResult<Vec<GqlRoom>> {
        let state = context.data_unchecked::<AppState>();
        let rooms = state.repository.list_rooms().await?;
        Ok(rooms.into_iter().map(Into::into).collect())
    }

    async fn room(&self, context: &Context<'_>, id: i64) -> GqlResult<Option<GqlRoom>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.repository.get_room(id).await?.map(Into::into))
    }

    async fn reservations(&self, context: &Context<'_>) -> GqlResult<Vec<GqlReservation>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state
            .repository
            .list_reservations_projected::<GqlReservation>()
            .await?)
    }

    async fn reservation(
        &self,
        context: &Context<'_>,
        id: i64,
    ) -> GqlResult<Option<GqlReservation>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state
            .repository
            .get_reservation(id)
            .await?
            .map(|record| GqlReservation::project(&record)))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_guest(
        &self,
        context: &Context<'_>,
        name: String,
        register_date: DateTime<Utc>,
    ) -> GqlResult<GqlGuest> {
        let state = context.data_unchecked::<AppState>();
        let created = state
            .repository
            .create_guest(Guest::new(name, register_date))
            .await?;
        Ok(created.into())
    }

    async fn update_guest(
        &self,
        context: &Context<'_>,
        id: i64,
        name: String,
        register_date: DateTime<Utc>,
    ) -> GqlResult<GqlGuest> {
        let state = context.data_unchecked::<AppState>();
        let mut guest = Guest::new(name, register_date);
        guest.id = id;
        match state.repository.update_guest(guest).await? {
            Some(updated) => Ok(updated.into()),
            None => Err(async_graphql::Error::new(format!("guest {id} not found"))),
        }
    }

    async fn delete_guest(&self, context: &Context<'_>, id: i64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.repository.delete_guest(id).await?)
    }

    async fn create_room(
        &self,
        context: &Context<'_>,
        number: i64,
        name: String,
        status: RoomStatus,
        allowed_smoking: bool,
    ) -> GqlResult<GqlRoom> {
        let state = context.data_unchecked::<AppState>();
        let created = state
            .repository
            .create_room(Room::new(number, name, status, allowed_smoking))
            .await?;
        Ok(created.into())
    }

    async fn update_room(
        &self,
        context: &Context<'_>,
        id: i64,
        number: i64,
        name: String,
        status: RoomStatus,
        allowed_smoking: bool,
    ) -> GqlResult<GqlRoom> {
        let state = context.data_unchecked::<AppState>();
        let mut room = Room::new(number, name, status, allowed_smoking);
        room.id = id;
        match state.repository.update_room(room).await? {
            Some(updated) => Ok(updated.into()),
            None => Err(async_graphql::Error::new(format!("room {id} not found"))),
        }
    }

    async fn delete_room(&self, context: &Context<'_>, id: i64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.repository.delete_room(id).await?)
    }

    async fn create_reservation(
        &self,
        context: &Context<'_>,
        checkin_date: DateTime<Utc>,
        checkout_date: DateTime<Utc>,
        room_id: i64,
        guest_id: i64,
    ) -> GqlResult<GqlReservation> {
        let state = context.data_unchecked::<AppState>();
        let created = state
            .repository
            .create_reservation(Reservation::new(checkin_date, checkout_date, room_id, guest_id))
            .await?;
        let record = state
            .repository
            .get_reservation(created.id)
            .await?
            .ok_or_else(|| {
                async_graphql::Error::new(format!("reservation {} vanished after insert", created.id))
            })?;
        Ok(GqlReservation::project(&record))
    }

    async fn update_reservation(
        &self,
        context: &Context<'_>,
        id: i64,
        checkin_date: DateTime<Utc>,
        checkout_date: DateTime<Utc>,
        room_id: i64,
        guest_id: i64,
    ) -> GqlResult<GqlReservation> {
        let state = context.data_unchecked::<AppState>();
        let mut reservation = Reservation::new(checkin_date, checkout_date, room_id, guest_id);
        reservation.id = id;
        let updated = match state.repository.update_reservation(reservation).await? {
            Some(updated) => updated,
            None => {
                return Err(async_graphql::Error::new(format!("reservation {id} not found")));
            }
        };
        let record = state
            .repository
            .get_reservation(updated.id)
            .await?
            .ok_or_else(|| {
                async_graphql::Error::new(format!("reservation {} vanished after update", updated.id))
            })?;
        Ok(GqlReservation::project(&record))
    }

    async fn delete_reservation(&self, context: &Context<'_>, id: i64) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.repository.delete_reservation(id).await?)
    }
}

#[cfg(test)]
mod hotel_graphql_inbound_tests {
    use crate::modules::hotel::adapters::outbound::sqlite::SqliteHotelRepository;
    use crate::shell::graphql::{AppSchema, build_schema};
    use crate::shell::state::AppState;

    async fn make_test_schema() -> AppSchema {
        let repository = SqliteHotelRepository::connect_in_memory()
            .await
            .expect("open in-memory store");
        repository.run_migrations().await.expect("run migrations");
        build_schema(AppState::new(repository))
    }

    #[tokio::test]
    async fn it_should_create_and_list_guests() {
        let schema = make_test_schema().await;

        let response = schema
            .execute(
                r#"mutation {
                    createGuest(name: "Daft Punk", registerDate: "2024-05-01T12:00:00Z") { id name }
                }"#,
            )
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let response = schema.execute("{ guests { id name } }").await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["guests"][0]["name"], "Daft Punk");
    }

    #[tokio::test]
    async fn it_should_accept_room_status_as_a_named_enumeration_value() {
        let schema = make_test_schema().await;

        let response = schema
            .execute(
                r#"mutation {
                    createRoom(number: 104, name: "black-room", status: MAINTENANCE, allowedSmoking: false) {
                        id status
                    }
                }"#,
            )
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["createRoom"]["status"], "MAINTENANCE");
    }

    #[tokio::test]
    async fn it_should_nest_room_and_guest_on_reservation_queries() {
        let schema = make_test_schema().await;

        schema
            .execute(r#"mutation { createGuest(name: "Alper Ebicoglu", registerDate: "2024-04-20T09:00:00Z") { id } }"#)
            .await;
        schema
            .execute(r#"mutation { createRoom(number: 101, name: "yellow-room", status: AVAILABLE, allowedSmoking: false) { id } }"#)
            .await;
        let response = schema
            .execute(
                r#"mutation {
                    createReservation(
                        checkinDate: "2024-05-01T14:00:00Z",
                        checkoutDate: "2024-05-04T10:00:00Z",
                        roomId: 1,
                        guestId: 1
                    ) { id room { number } guest { name } }
                }"#,
            )
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);

        let response = schema
            .execute("{ reservations { id room { number name } guest { name } } }")
            .await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["reservations"][0]["room"]["number"], 101);
        assert_eq!(data["reservations"][0]["guest"]["name"], "Alper Ebicoglu");
    }

    #[tokio::test]
    async fn it_should_return_null_for_a_missing_guest_without_erroring() {
        let schema = make_test_schema().await;

        let response = schema.execute("{ guest(id: 42) { id name } }").await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert!(data["guest"].is_null());
    }

    #[tokio::test]
    async fn it_should_put_update_of_a_missing_guest_into_the_errors_list() {
        let schema = make_test_schema().await;

        let response = schema
            .execute(
                r#"mutation {
                    updateGuest(id: 42, name: "Nobody", registerDate: "2024-05-01T12:00:00Z") { id }
                }"#,
            )
            .await;
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("guest 42 not found"));
    }

    #[tokio::test]
    async fn it_should_put_dangling_references_into_the_errors_list() {
        let schema = make_test_schema().await;

        let response = schema
            .execute(
                r#"mutation {
                    createReservation(
                        checkinDate: "2024-05-01T14:00:00Z",
                        checkoutDate: "2024-05-04T10:00:00Z",
                        roomId: 999,
                        guestId: 999
                    ) { id }
                }"#,
            )
            .await;
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("constraint violation"));
    }

    #[tokio::test]
    async fn it_should_report_delete_of_a_missing_room_as_false() {
        let schema = make_test_schema().await;

        let response = schema.execute("mutation { deleteRoom(id: 42) }").await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let data = response.data.into_json().unwrap();
        assert_eq!(data["deleteRoom"], false);
    }
}
