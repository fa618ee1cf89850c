use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};

use crate::modules::hotel::core::guest::Guest;
use crate::modules::hotel::core::ports::{HotelRepository, RepositoryError};
use crate::modules::hotel::core::reservation::{Reservation, ReservationRecord};
use crate::modules::hotel::core::room::Room;

/// SQLite-backed repository. The only component that touches the store.
///
/// Each operation checks a connection out of the pool for the duration
/// of one statement and returns it on every exit path. Cascade deletes
/// run inside SQLite's own transaction for the statement.
#[derive(Clone)]
pub struct SqliteHotelRepository {
    pool: SqlitePool,
}

impl SqliteHotelRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `url`, creating the database file when
    /// missing. Foreign keys are enabled on every connection so the
    /// declared reservation cascades fire.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self::new(pool))
    }

    /// In-memory database on a single pooled connection. Every pooled
    /// connection would otherwise get its own empty `:memory:` store.
    /// Intended for tests and local experiments.
    pub async fn connect_in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    fn row_to_record(row: &SqliteRow) -> Result<ReservationRecord, sqlx::Error> {
        Ok(ReservationRecord {
            reservation: Reservation {
                id: row.try_get("id")?,
                room_id: row.try_get("room_id")?,
                guest_id: row.try_get("guest_id")?,
                checkin_date: row.try_get("checkin_date")?,
                checkout_date: row.try_get("checkout_date")?,
            },
            room: Room {
                id: row.try_get("room_id")?,
                number: row.try_get("room_number")?,
                name: row.try_get("room_name")?,
                status: row.try_get("room_status")?,
                allowed_smoking: row.try_get("allowed_smoking")?,
            },
            guest: Guest {
                id: row.try_get("guest_id")?,
                name: row.try_get("guest_name")?,
                register_date: row.try_get("register_date")?,
            },
        })
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err.as_database_error() {
            Some(db) if db.is_foreign_key_violation() => {
                RepositoryError::Constraint(db.message().to_string())
            }
            _ => RepositoryError::Backend(err.to_string()),
        }
    }
}

#[async_trait]
impl HotelRepository for SqliteHotelRepository {
    async fn list_guests(&self) -> Result<Vec<Guest>, RepositoryError> {
        let guests =
            sqlx::query_as::<_, Guest>("SELECT id, name, register_date FROM guests ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(guests)
    }

    async fn get_guest(&self, id: i64) -> Result<Option<Guest>, RepositoryError> {
        let guest =
            sqlx::query_as::<_, Guest>("SELECT id, name, register_date FROM guests WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(guest)
    }

    async fn create_guest(&self, guest: Guest) -> Result<Guest, RepositoryError> {
        let result = sqlx::query("INSERT INTO guests (name, register_date) VALUES (?, ?)")
            .bind(&guest.name)
            .bind(guest.register_date)
            .execute(&self.pool)
            .await?;
        Ok(Guest {
            id: result.last_insert_rowid(),
            ..guest
        })
    }

    async fn update_guest(&self, guest: Guest) -> Result<Option<Guest>, RepositoryError> {
        let result = sqlx::query("UPDATE guests SET name = ?, register_date = ? WHERE id = ?")
            .bind(&guest.name)
            .bind(guest.register_date)
            .bind(guest.id)
            .execute(&self.pool)
            .await?;
        Ok((result.rows_affected() > 0).then_some(guest))
    }

    async fn delete_guest(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM guests WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_rooms(&self) -> Result<Vec<Room>, RepositoryError> {
        let rooms = sqlx::query_as::<_, Room>(
            "SELECT id, number, name, status, allowed_smoking FROM rooms ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rooms)
    }

    async fn get_room(&self, id: i64) -> Result<Option<Room>, RepositoryError> {
        let room = sqlx::query_as::<_, Room>(
            "SELECT id, number, name, status, allowed_smoking FROM rooms WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(room)
    }

    async fn create_room(&self, room: Room) -> Result<Room, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO rooms (number, name, status, allowed_smoking) VALUES (?, ?, ?, ?)",
        )
        .bind(room.number)
        .bind(&room.name)
        .bind(room.status)
        .bind(room.allowed_smoking)
        .execute(&self.pool)
        .await?;
        Ok(Room {
            id: result.last_insert_rowid(),
            ..room
        })
    }

    async fn update_room(&self, room: Room) -> Result<Option<Room>, RepositoryError> {
        let result = sqlx::query(
            "UPDATE rooms SET number = ?, name = ?, status = ?, allowed_smoking = ? WHERE id = ?",
        )
        .bind(room.number)
        .bind(&room.name)
        .bind(room.status)
        .bind(room.allowed_smoking)
        .bind(room.id)
        .execute(&self.pool)
        .await?;
        Ok((result.rows_affected() > 0).then_some(room))
    }

    async fn delete_room(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_reservations(&self) -> Result<Vec<ReservationRecord>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT r.id, r.room_id, r.guest_id, r.checkin_date, r.checkout_date,
                   ro.number AS room_number, ro.name AS room_name,
                   ro.status AS room_status, ro.allowed_smoking,
                   g.name AS guest_name, g.register_date
              FROM reservations r
              JOIN rooms ro ON ro.id = r.room_id
              JOIN guests g ON g.id = r.guest_id
             ORDER BY r.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        rows.iter()
            .map(|row| Self::row_to_record(row).map_err(RepositoryError::from))
            .collect()
    }

    async fn get_reservation(
        &self,
        id: i64,
    ) -> Result<Option<ReservationRecord>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT r.id, r.room_id, r.guest_id, r.checkin_date, r.checkout_date,
                   ro.number AS room_number, ro.name AS room_name,
                   ro.status AS room_status, ro.allowed_smoking,
                   g.name AS guest_name, g.register_date
              FROM reservations r
              JOIN rooms ro ON ro.id = r.room_id
              JOIN guests g ON g.id = r.guest_id
             WHERE r.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(Self::row_to_record).transpose().map_err(RepositoryError::from)
    }

    async fn create_reservation(
        &self,
        reservation: Reservation,
    ) -> Result<Reservation, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO reservations (room_id, guest_id, checkin_date, checkout_date)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(reservation.room_id)
        .bind(reservation.guest_id)
        .bind(reservation.checkin_date)
        .bind(reservation.checkout_date)
        .execute(&self.pool)
        .await?;
        Ok(Reservation {
            id: result.last_insert_rowid(),
            ..reservation
        })
    }

    async fn update_reservation(
        &self,
        reservation: Reservation,
    ) -> Result<Option<Reservation>, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE reservations
               SET room_id = ?, guest_id = ?, checkin_date = ?, checkout_date = ?
             WHERE id = ?
            "#,
        )
        .bind(reservation.room_id)
        .bind(reservation.guest_id)
        .bind(reservation.checkin_date)
        .bind(reservation.checkout_date)
        .bind(reservation.id)
        .execute(&self.pool)
        .await?;
        Ok((result.rows_affected() > 0).then_some(reservation))
    }

    async fn delete_reservation(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
