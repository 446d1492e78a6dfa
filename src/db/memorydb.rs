// In-memory stand-in for the statistics queries, used by service tests.
use std::collections::BTreeSet;
use std::sync::{
    atomic::{AtomicBool, AtomicI64, Ordering},
    RwLock,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Error;

use super::{
    customerdb::CustomerExt,
    interactiondb::InteractionExt,
    statsdb::{BookingFilter, InteractionFilter, StatsExt},
};
use crate::models::{
    bookingmodel::{Booking, BookingStatus},
    customermodel::Customer,
    interactionmodel::{Interaction, InteractionType, Message, SenderType},
};

#[derive(Debug, Default)]
pub struct MemoryStore {
    next_id: AtomicI64,
    customers: RwLock<Vec<Customer>>,
    interactions: RwLock<Vec<Interaction>>,
    bookings: RwLock<Vec<Booking>>,
    messages: RwLock<Vec<Message>>,
    /// Flag every customer as new right after the booking id lookup, to
    /// simulate a concurrent write landing between two reads.
    mark_all_new_mid_query: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn add_customer(&self, name: &str, is_new: bool) -> i64 {
        let id = self.next_id();
        self.customers.write().unwrap().push(Customer {
            id,
            name: name.to_string(),
            email: None,
            phone: None,
            is_new,
            created_at: Utc::now(),
        });
        id
    }

    pub fn add_interaction(
        &self,
        business_id: i64,
        customer_id: i64,
        interaction_type: InteractionType,
        start_time: DateTime<Utc>,
    ) -> i64 {
        let id = self.next_id();
        self.interactions.write().unwrap().push(Interaction {
            id,
            business_id,
            customer_id,
            interaction_type,
            start_time,
            end_time: None,
            duration: None,
            summary: None,
            created_at: start_time,
        });
        id
    }

    pub fn add_booking(
        &self,
        business_id: i64,
        customer_id: i64,
        booking_time: DateTime<Utc>,
        status: BookingStatus,
    ) -> i64 {
        let id = self.next_id();
        self.bookings.write().unwrap().push(Booking {
            id,
            business_id,
            customer_id,
            service: "Consultation".to_string(),
            booking_time,
            duration: Some(30),
            status,
            notes: None,
            created_at: booking_time,
        });
        id
    }

    pub fn add_message(
        &self,
        interaction_id: i64,
        sender_type: SenderType,
        content: &str,
        timestamp: DateTime<Utc>,
    ) -> i64 {
        let id = self.next_id();
        self.messages.write().unwrap().push(Message {
            id,
            interaction_id,
            sender_type,
            content: content.to_string(),
            timestamp,
        });
        id
    }

    pub fn set_customer_new(&self, customer_id: i64, is_new: bool) {
        for customer in self.customers.write().unwrap().iter_mut() {
            if customer.id == customer_id {
                customer.is_new = is_new;
            }
        }
    }

    pub fn mark_all_new_mid_query(&self) {
        self.mark_all_new_mid_query.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl StatsExt for MemoryStore {
    async fn count_interactions(
        &self,
        business_id: i64,
        filter: InteractionFilter,
    ) -> Result<i64, Error> {
        let interactions = self.interactions.read().unwrap();
        Ok(interactions
            .iter()
            .filter(|i| i.business_id == business_id && filter.matches(i))
            .count() as i64)
    }

    async fn count_bookings(
        &self,
        business_id: i64,
        filter: BookingFilter,
    ) -> Result<i64, Error> {
        let bookings = self.bookings.read().unwrap();
        Ok(bookings
            .iter()
            .filter(|b| b.business_id == business_id && filter.matches(b))
            .count() as i64)
    }

    async fn interaction_customer_ids(
        &self,
        business_id: i64,
    ) -> Result<Vec<i64>, Error> {
        let interactions = self.interactions.read().unwrap();
        let ids: BTreeSet<i64> = interactions
            .iter()
            .filter(|i| i.business_id == business_id)
            .map(|i| i.customer_id)
            .collect();
        Ok(ids.into_iter().collect())
    }

    async fn booking_customer_ids(
        &self,
        business_id: i64,
    ) -> Result<Vec<i64>, Error> {
        let ids: BTreeSet<i64> = {
            let bookings = self.bookings.read().unwrap();
            bookings
                .iter()
                .filter(|b| b.business_id == business_id)
                .map(|b| b.customer_id)
                .collect()
        };

        if self.mark_all_new_mid_query.load(Ordering::SeqCst) {
            for customer in self.customers.write().unwrap().iter_mut() {
                customer.is_new = true;
            }
        }

        Ok(ids.into_iter().collect())
    }

    async fn count_new_customers(
        &self,
        customer_ids: &[i64],
    ) -> Result<i64, Error> {
        let customers = self.customers.read().unwrap();
        Ok(customers
            .iter()
            .filter(|c| c.is_new && customer_ids.contains(&c.id))
            .count() as i64)
    }
}

#[async_trait]
impl InteractionExt for MemoryStore {
    async fn get_interactions(
        &self,
        business_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<Interaction>, Error> {
        let mut interactions: Vec<Interaction> = self
            .interactions
            .read()
            .unwrap()
            .iter()
            .filter(|i| i.business_id == business_id)
            .cloned()
            .collect();
        interactions.sort_by(|a, b| b.start_time.cmp(&a.start_time));

        if let Some(limit) = limit {
            interactions.truncate(limit.max(0) as usize);
        }
        Ok(interactions)
    }

    async fn get_interaction(
        &self,
        interaction_id: i64,
    ) -> Result<Option<Interaction>, Error> {
        let interactions = self.interactions.read().unwrap();
        Ok(interactions.iter().find(|i| i.id == interaction_id).cloned())
    }

    async fn get_interaction_messages(
        &self,
        interaction_id: i64,
    ) -> Result<Vec<Message>, Error> {
        let mut messages: Vec<Message> = self
            .messages
            .read()
            .unwrap()
            .iter()
            .filter(|m| m.interaction_id == interaction_id)
            .cloned()
            .collect();
        messages.sort_by_key(|m| m.timestamp);
        Ok(messages)
    }
}

#[async_trait]
impl CustomerExt for MemoryStore {
    async fn get_customer(&self, customer_id: i64) -> Result<Option<Customer>, Error> {
        let customers = self.customers.read().unwrap();
        Ok(customers.iter().find(|c| c.id == customer_id).cloned())
    }
}
