// Shapes returned by the statistics service and consumed by the dashboard charts.
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DailyCount {
    pub day: String,
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct InteractionStats {
    pub today: i64,
    pub week: i64,
    pub month: i64,
    pub total: i64,
    pub daily_data: Vec<DailyCount>,
    pub types_data: Vec<TypeCount>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BookingStats {
    pub upcoming: i64,
    pub today: i64,
    pub week: i64,
    pub daily_data: Vec<DailyCount>,
    pub status_data: Vec<StatusCount>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CustomerStats {
    pub total: i64,
    pub new: i64,
    pub returning: i64,
    pub type_data: Vec<TypeCount>,
}
