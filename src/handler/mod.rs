pub mod auth;
pub mod charts;
pub mod dashboard;
pub mod profile;
