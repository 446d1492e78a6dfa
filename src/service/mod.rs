pub mod error;
pub mod interaction_service;
pub mod stats_service;
