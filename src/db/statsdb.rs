// db/statsdb.rs
//
// Read primitives behind the dashboard statistics. Each call is an
// independent query; callers get no snapshot consistency across calls.
use std::ops::{Bound, RangeBounds};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Error, Postgres, QueryBuilder};

use super::db::DBClient;
use crate::models::{
    bookingmodel::{Booking, BookingStatus},
    interactionmodel::{Interaction, InteractionType},
};

/// A window over timestamps with explicit inclusive/exclusive ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: Bound<DateTime<Utc>>,
    pub end: Bound<DateTime<Utc>>,
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::unbounded()
    }
}

impl TimeRange {
    pub const fn unbounded() -> Self {
        TimeRange {
            start: Bound::Unbounded,
            end: Bound::Unbounded,
        }
    }

    /// `t >= start`
    pub fn since(start: DateTime<Utc>) -> Self {
        TimeRange {
            start: Bound::Included(start),
            end: Bound::Unbounded,
        }
    }

    /// `t > start`
    pub fn after(start: DateTime<Utc>) -> Self {
        TimeRange {
            start: Bound::Excluded(start),
            end: Bound::Unbounded,
        }
    }

    /// `start <= t < end`
    pub fn half_open(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        TimeRange {
            start: Bound::Included(start),
            end: Bound::Excluded(end),
        }
    }

    /// `start <= t <= end`
    pub fn closed(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        TimeRange {
            start: Bound::Included(start),
            end: Bound::Included(end),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        (self.start, self.end).contains(&instant)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionFilter {
    pub started: TimeRange,
    pub interaction_type: Option<InteractionType>,
}

impl InteractionFilter {
    pub fn all() -> Self {
        InteractionFilter::default()
    }

    pub fn started(range: TimeRange) -> Self {
        InteractionFilter {
            started: range,
            interaction_type: None,
        }
    }

    pub fn of_type(interaction_type: InteractionType) -> Self {
        InteractionFilter {
            started: TimeRange::unbounded(),
            interaction_type: Some(interaction_type),
        }
    }

    pub fn matches(&self, interaction: &Interaction) -> bool {
        self.started.contains(interaction.start_time)
            && self
                .interaction_type
                .map_or(true, |t| t == interaction.interaction_type)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingFilter {
    pub booked: TimeRange,
    pub status: Option<BookingStatus>,
}

impl BookingFilter {
    pub fn booked(range: TimeRange) -> Self {
        BookingFilter {
            booked: range,
            status: None,
        }
    }

    pub fn with_status(status: BookingStatus) -> Self {
        BookingFilter {
            booked: TimeRange::unbounded(),
            status: Some(status),
        }
    }

    pub fn matches(&self, booking: &Booking) -> bool {
        self.booked.contains(booking.booking_time)
            && self.status.map_or(true, |s| s == booking.status)
    }
}

#[async_trait]
pub trait StatsExt: Send + Sync {
    async fn count_interactions(
        &self,
        business_id: i64,
        filter: InteractionFilter,
    ) -> Result<i64, Error>;

    async fn count_bookings(
        &self,
        business_id: i64,
        filter: BookingFilter,
    ) -> Result<i64, Error>;

    /// Distinct customers with at least one interaction with the business.
    async fn interaction_customer_ids(
        &self,
        business_id: i64,
    ) -> Result<Vec<i64>, Error>;

    /// Distinct customers with at least one booking with the business.
    async fn booking_customer_ids(
        &self,
        business_id: i64,
    ) -> Result<Vec<i64>, Error>;

    /// How many of `customer_ids` carry the global "new" flag.
    async fn count_new_customers(
        &self,
        customer_ids: &[i64],
    ) -> Result<i64, Error>;
}

fn push_time_range(builder: &mut QueryBuilder<'_, Postgres>, column: &str, range: &TimeRange) {
    match range.start {
        Bound::Included(t) => {
            builder.push(format!(" AND {} >= ", column)).push_bind(t);
        }
        Bound::Excluded(t) => {
            builder.push(format!(" AND {} > ", column)).push_bind(t);
        }
        Bound::Unbounded => {}
    }

    match range.end {
        Bound::Included(t) => {
            builder.push(format!(" AND {} <= ", column)).push_bind(t);
        }
        Bound::Excluded(t) => {
            builder.push(format!(" AND {} < ", column)).push_bind(t);
        }
        Bound::Unbounded => {}
    }
}

#[async_trait]
impl StatsExt for DBClient {
    async fn count_interactions(
        &self,
        business_id: i64,
        filter: InteractionFilter,
    ) -> Result<i64, Error> {
        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM interactions WHERE business_id = ");
        builder.push_bind(business_id);
        push_time_range(&mut builder, "start_time", &filter.started);

        if let Some(interaction_type) = filter.interaction_type {
            builder
                .push(" AND interaction_type = ")
                .push_bind(interaction_type);
        }

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
    }

    async fn count_bookings(
        &self,
        business_id: i64,
        filter: BookingFilter,
    ) -> Result<i64, Error> {
        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM bookings WHERE business_id = ");
        builder.push_bind(business_id);
        push_time_range(&mut builder, "booking_time", &filter.booked);

        if let Some(status) = filter.status {
            builder.push(" AND status = ").push_bind(status);
        }

        builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
    }

    async fn interaction_customer_ids(
        &self,
        business_id: i64,
    ) -> Result<Vec<i64>, Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT DISTINCT customer_id FROM interactions WHERE business_id = $1",
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn booking_customer_ids(
        &self,
        business_id: i64,
    ) -> Result<Vec<i64>, Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT DISTINCT customer_id FROM bookings WHERE business_id = $1",
        )
        .bind(business_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn count_new_customers(
        &self,
        customer_ids: &[i64],
    ) -> Result<i64, Error> {
        if customer_ids.is_empty() {
            return Ok(0);
        }

        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM customers WHERE id = ANY($1) AND is_new = TRUE",
        )
        .bind(customer_ids)
        .fetch_one(&self.pool)
        .await
    }
}
