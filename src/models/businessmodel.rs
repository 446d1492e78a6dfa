use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "business_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    Clinic,
    Retail,
    Salon,
    Restaurant,
    Office,
    Other,
}

impl BusinessType {
    pub fn to_str(&self) -> &str {
        match self {
            BusinessType::Clinic => "clinic",
            BusinessType::Retail => "retail",
            BusinessType::Salon => "salon",
            BusinessType::Restaurant => "restaurant",
            BusinessType::Office => "office",
            BusinessType::Other => "other",
        }
    }

    /// Human readable label shown in the registration and profile forms.
    pub fn label(&self) -> &str {
        match self {
            BusinessType::Clinic => "Medical Clinic",
            BusinessType::Retail => "Retail Store",
            BusinessType::Salon => "Beauty Salon",
            BusinessType::Restaurant => "Restaurant",
            BusinessType::Office => "Office",
            BusinessType::Other => "Other",
        }
    }
}

/// A tenant account. Doubles as the authenticated principal.
#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone)]
pub struct Business {
    pub id: i64,
    pub business_name: String,
    pub email: String,
    pub password_hash: String,
    pub business_type: Option<BusinessType>,
    pub phone: Option<String>,
    pub address: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
