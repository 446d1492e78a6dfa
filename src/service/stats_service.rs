use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::{
    db::{
        db::DBClient,
        statsdb::{BookingFilter, InteractionFilter, StatsExt, TimeRange},
    },
    models::{
        bookingmodel::BookingStatus,
        interactionmodel::InteractionType,
        statsmodel::{BookingStats, CustomerStats, DailyCount, InteractionStats, StatusCount, TypeCount},
    },
    service::error::ServiceError,
    utils::calendar::{end_of_day, start_of_day, start_of_month, start_of_week, weekday_abbrev},
};

const DAYS_IN_CHART: i64 = 7;

/// Dashboard statistics for one business.
///
/// Every figure is its own query against the store, recomputed on each call.
/// A business with no data gets zero counts with fully shaped chart series,
/// never an error; only a failing store surfaces as `StoreUnavailable`.
#[derive(Debug)]
pub struct StatsService<S = DBClient> {
    store: Arc<S>,
}

impl<S: StatsExt> StatsService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn get_interaction_stats(
        &self,
        business_id: i64,
        now: DateTime<Utc>,
    ) -> Result<InteractionStats, ServiceError> {
        let today_start = start_of_day(now);
        let week_start = start_of_week(now);
        let month_start = start_of_month(now);

        let today = self.count_interactions_since(business_id, today_start).await?;
        let week = self.count_interactions_since(business_id, week_start).await?;
        let month = self.count_interactions_since(business_id, month_start).await?;
        let total = self
            .store
            .count_interactions(business_id, InteractionFilter::all())
            .await?;

        // Trailing week, oldest first, ending today
        let mut daily_data = Vec::with_capacity(DAYS_IN_CHART as usize);
        for offset in (0..DAYS_IN_CHART).rev() {
            let day_start = today_start - Duration::days(offset);
            let count = self
                .store
                .count_interactions(
                    business_id,
                    InteractionFilter::started(TimeRange::closed(day_start, end_of_day(day_start))),
                )
                .await?;

            daily_data.push(DailyCount {
                day: weekday_abbrev(day_start),
                count,
            });
        }

        let mut types_data = Vec::with_capacity(InteractionType::ALL.len());
        for interaction_type in InteractionType::ALL {
            let count = self
                .store
                .count_interactions(business_id, InteractionFilter::of_type(interaction_type))
                .await?;

            types_data.push(TypeCount {
                kind: interaction_type.label().to_string(),
                count,
            });
        }

        tracing::debug!(
            "Interaction stats for business {}: today={} week={} month={} total={}",
            business_id, today, week, month, total
        );

        Ok(InteractionStats {
            today,
            week,
            month,
            total,
            daily_data,
            types_data,
        })
    }

    pub async fn get_booking_stats(
        &self,
        business_id: i64,
        now: DateTime<Utc>,
    ) -> Result<BookingStats, ServiceError> {
        let today_start = start_of_day(now);
        let week_start = start_of_week(now);

        let upcoming = self
            .store
            .count_bookings(
                business_id,
                BookingFilter {
                    booked: TimeRange::after(now),
                    status: Some(BookingStatus::Scheduled),
                },
            )
            .await?;

        let today = self
            .store
            .count_bookings(
                business_id,
                BookingFilter::booked(TimeRange::half_open(
                    today_start,
                    today_start + Duration::days(1),
                )),
            )
            .await?;

        let week = self
            .store
            .count_bookings(
                business_id,
                BookingFilter::booked(TimeRange::half_open(
                    week_start,
                    week_start + Duration::days(7),
                )),
            )
            .await?;

        // Today and the six days after it
        let mut daily_data = Vec::with_capacity(DAYS_IN_CHART as usize);
        for offset in 0..DAYS_IN_CHART {
            let day_start = today_start + Duration::days(offset);
            let count = self
                .store
                .count_bookings(
                    business_id,
                    BookingFilter::booked(TimeRange::closed(day_start, end_of_day(day_start))),
                )
                .await?;

            daily_data.push(DailyCount {
                day: weekday_abbrev(day_start),
                count,
            });
        }

        let mut status_data = Vec::with_capacity(BookingStatus::ALL.len());
        for status in BookingStatus::ALL {
            let count = self
                .store
                .count_bookings(business_id, BookingFilter::with_status(status))
                .await?;

            status_data.push(StatusCount {
                status: status.label().to_string(),
                count,
            });
        }

        tracing::debug!(
            "Booking stats for business {}: upcoming={} today={} week={}",
            business_id, upcoming, today, week
        );

        Ok(BookingStats {
            upcoming,
            today,
            week,
            daily_data,
            status_data,
        })
    }

    /// New vs returning split over every customer who interacted with or
    /// booked the business. "New" is the customer's global flag, so a
    /// customer flagged new counts as new for every business they visit.
    pub async fn get_customer_stats(
        &self,
        business_id: i64,
    ) -> Result<CustomerStats, ServiceError> {
        let mut customer_ids: BTreeSet<i64> = self
            .store
            .interaction_customer_ids(business_id)
            .await?
            .into_iter()
            .collect();
        customer_ids.extend(self.store.booking_customer_ids(business_id).await?);

        let total = customer_ids.len() as i64;
        let customer_ids: Vec<i64> = customer_ids.into_iter().collect();
        let new = self.store.count_new_customers(&customer_ids).await?;
        let returning = total - new;

        tracing::debug!(
            "Customer stats for business {}: total={} new={} returning={}",
            business_id, total, new, returning
        );

        Ok(CustomerStats {
            total,
            new,
            returning,
            type_data: vec![
                TypeCount {
                    kind: "New".to_string(),
                    count: new,
                },
                TypeCount {
                    kind: "Returning".to_string(),
                    count: returning,
                },
            ],
        })
    }

    async fn count_interactions_since(
        &self,
        business_id: i64,
        start: DateTime<Utc>,
    ) -> Result<i64, ServiceError> {
        Ok(self
            .store
            .count_interactions(business_id, InteractionFilter::started(TimeRange::since(start)))
            .await?)
    }
}
