//! Reservation entity and repository.
//!
//! Every operation is scoped by the owning user: callers can only ever see
//! or remove rows whose `user_id` matches the identity they supply.

use super::DbPool;
use crate::Result;

/// Stored reservation record.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Reservation {
    /// Unique reservation ID.
    pub id: i64,
    /// Owning user ID.
    pub user_id: i64,
    /// Reservation date (`YYYY-MM-DD`).
    pub date: String,
    /// Reservation time (`HH:MM`).
    pub time: String,
    /// Requested service description.
    pub service: String,
    /// Record creation timestamp.
    pub created_at: String,
}

/// Data for creating a new reservation.
#[derive(Debug, Clone)]
pub struct NewReservation {
    /// Owning user ID.
    pub user_id: i64,
    /// Reservation date.
    pub date: String,
    /// Reservation time.
    pub time: String,
    /// Requested service description.
    pub service: String,
}

/// Repository for reservation operations.
pub struct ReservationRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ReservationRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Persist a reservation and return the stored row.
    pub async fn create(&self, new: &NewReservation) -> Result<Reservation> {
        let reservation = sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations (user_id, date, time, service)
             VALUES ($1, $2, $3, $4)
             RETURNING id, user_id, date, time, service, created_at",
        )
        .bind(new.user_id)
        .bind(&new.date)
        .bind(&new.time)
        .bind(&new.service)
        .fetch_one(self.pool)
        .await?;

        Ok(reservation)
    }

    /// List all reservations owned by a user, in insertion order.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>(
            "SELECT id, user_id, date, time, service, created_at
             FROM reservations WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(reservations)
    }

    /// Delete a reservation iff it is owned by `user_id`.
    ///
    /// Returns the deleted row, or `None` when no matching owned record
    /// exists (absent and unowned are indistinguishable).
    pub async fn delete_owned(&self, id: i64, user_id: i64) -> Result<Option<Reservation>> {
        let deleted = sqlx::query_as::<_, Reservation>(
            "DELETE FROM reservations WHERE id = $1 AND user_id = $2
             RETURNING id, user_id, date, time, service, created_at",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{NewUser, UserRepository};
    use crate::Database;

    async fn setup() -> (Database, i64, i64) {
        let db = Database::open_in_memory().await.unwrap();
        let users = UserRepository::new(db.pool());
        let a = users
            .create(&NewUser::new("a@example.com", "hash"))
            .await
            .unwrap()
            .id;
        let b = users
            .create(&NewUser::new("b@example.com", "hash"))
            .await
            .unwrap()
            .id;
        (db, a, b)
    }

    fn booking(user_id: i64, time: &str) -> NewReservation {
        NewReservation {
            user_id,
            date: "2099-03-15".to_string(),
            time: time.to_string(),
            service: "Consulta general".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_stored_row() {
        let (db, a, _) = setup().await;
        let repo = ReservationRepository::new(db.pool());

        let r = repo.create(&booking(a, "10:00")).await.unwrap();
        assert!(r.id > 0);
        assert_eq!(r.user_id, a);
        assert_eq!(r.date, "2099-03-15");
        assert_eq!(r.time, "10:00");
        assert_eq!(r.service, "Consulta general");
        assert!(!r.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_list_is_owner_scoped() {
        let (db, a, b) = setup().await;
        let repo = ReservationRepository::new(db.pool());

        repo.create(&booking(a, "09:00")).await.unwrap();
        repo.create(&booking(a, "10:00")).await.unwrap();
        repo.create(&booking(b, "11:00")).await.unwrap();

        let a_list = repo.list_for_user(a).await.unwrap();
        assert_eq!(a_list.len(), 2);
        assert!(a_list.iter().all(|r| r.user_id == a));

        let b_list = repo.list_for_user(b).await.unwrap();
        assert_eq!(b_list.len(), 1);
        assert_eq!(b_list[0].time, "11:00");
    }

    #[tokio::test]
    async fn test_list_insertion_order() {
        let (db, a, _) = setup().await;
        let repo = ReservationRepository::new(db.pool());

        repo.create(&booking(a, "15:00")).await.unwrap();
        repo.create(&booking(a, "08:00")).await.unwrap();
        repo.create(&booking(a, "12:00")).await.unwrap();

        let times: Vec<String> = repo
            .list_for_user(a)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.time)
            .collect();
        assert_eq!(times, vec!["15:00", "08:00", "12:00"]);
    }

    #[tokio::test]
    async fn test_delete_owned() {
        let (db, a, _) = setup().await;
        let repo = ReservationRepository::new(db.pool());

        let r = repo.create(&booking(a, "10:00")).await.unwrap();
        let deleted = repo.delete_owned(r.id, a).await.unwrap();
        assert_eq!(deleted.unwrap().id, r.id);

        assert!(repo.list_for_user(a).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unowned_returns_none() {
        let (db, a, b) = setup().await;
        let repo = ReservationRepository::new(db.pool());

        let r = repo.create(&booking(a, "10:00")).await.unwrap();

        // Other user cannot delete it
        assert!(repo.delete_owned(r.id, b).await.unwrap().is_none());
        // Record still there for its owner
        assert_eq!(repo.list_for_user(a).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_returns_none() {
        let (db, a, _) = setup().await;
        let repo = ReservationRepository::new(db.pool());

        assert!(repo.delete_owned(12345, a).await.unwrap().is_none());
    }
}
