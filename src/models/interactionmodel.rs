use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "interaction_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    Chat,
    Call,
    Message,
}

impl InteractionType {
    pub const ALL: [InteractionType; 3] = [
        InteractionType::Chat,
        InteractionType::Call,
        InteractionType::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InteractionType::Chat => "Chat",
            InteractionType::Call => "Call",
            InteractionType::Message => "Message",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "sender_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SenderType {
    Bot,
    Customer,
    Business,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Interaction {
    pub id: i64,
    pub business_id: i64,
    pub customer_id: i64,
    pub interaction_type: InteractionType,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Seconds, filled in once the interaction is closed.
    pub duration: Option<i32>,
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct Message {
    pub id: i64,
    pub interaction_id: i64,
    pub sender_type: SenderType,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}
