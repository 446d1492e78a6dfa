use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `is_new` is shared by every business the customer deals with.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_new: bool,
    pub created_at: DateTime<Utc>,
}
