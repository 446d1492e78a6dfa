use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Error;

use super::db::DBClient;
use crate::models::bookingmodel::{Booking, BookingStatus};

#[async_trait]
pub trait BookingExt {
    /// Latest booking time first.
    async fn get_bookings(
        &self,
        business_id: i64,
    ) -> Result<Vec<Booking>, Error>;

    /// Scheduled bookings after `now`, soonest first.
    async fn get_upcoming_bookings(
        &self,
        business_id: i64,
        now: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Booking>, Error>;
}

#[async_trait]
impl BookingExt for DBClient {
    async fn get_bookings(
        &self,
        business_id: i64,
    ) -> Result<Vec<Booking>, Error> {
        sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, business_id, customer_id, service, booking_time,
                   duration, status, notes, created_at
            FROM bookings
            WHERE business_id = $1
            ORDER BY booking_time DESC
            "#,
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_upcoming_bookings(
        &self,
        business_id: i64,
        now: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Booking>, Error> {
        sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, business_id, customer_id, service, booking_time,
                   duration, status, notes, created_at
            FROM bookings
            WHERE business_id = $1
              AND booking_time > $2
              AND status = $3
            ORDER BY booking_time ASC
            LIMIT $4
            "#,
        )
        .bind(business_id)
        .bind(now)
        .bind(BookingStatus::Scheduled)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }
}
