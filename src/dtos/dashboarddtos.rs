use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    models::{
        bookingmodel::Booking,
        customermodel::Customer,
        interactionmodel::{Interaction, InteractionType, Message},
        statsmodel::{BookingStats, CustomerStats, InteractionStats},
    },
    utils::duration::format_duration,
};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InteractionDto {
    pub id: i64,
    pub customer_id: i64,
    pub interaction_type: InteractionType,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration: Option<i32>,
    pub duration_display: String,
    pub summary: Option<String>,
}

impl InteractionDto {
    pub fn from_interaction(interaction: &Interaction) -> Self {
        InteractionDto {
            id: interaction.id,
            customer_id: interaction.customer_id,
            interaction_type: interaction.interaction_type,
            start_time: interaction.start_time,
            end_time: interaction.end_time,
            duration: interaction.duration,
            duration_display: format_duration(interaction.duration.map(i64::from)),
            summary: interaction.summary.clone(),
        }
    }

    pub fn from_interactions(interactions: &[Interaction]) -> Vec<InteractionDto> {
        interactions.iter().map(InteractionDto::from_interaction).collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardData {
    pub interaction_stats: InteractionStats,
    pub booking_stats: BookingStats,
    pub customer_stats: CustomerStats,
    pub recent_interactions: Vec<InteractionDto>,
    pub upcoming_bookings: Vec<Booking>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponseDto {
    pub status: String,
    pub data: DashboardData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InteractionListResponseDto {
    pub status: String,
    pub interactions: Vec<InteractionDto>,
    pub results: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InteractionDetailData {
    pub interaction: InteractionDto,
    pub customer: Option<Customer>,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InteractionDetailResponseDto {
    pub status: String,
    pub data: InteractionDetailData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookingListResponseDto {
    pub status: String,
    pub bookings: Vec<Booking>,
    pub results: usize,
}
