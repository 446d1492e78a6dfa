pub mod calendar;
pub mod duration;
pub mod password;
pub mod token;
