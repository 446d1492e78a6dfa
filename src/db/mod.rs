pub mod bookingdb;
pub mod businessdb;
pub mod customerdb;
pub mod db;
pub mod interactiondb;
pub mod statsdb;

#[cfg(test)]
pub mod memorydb;
