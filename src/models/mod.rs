pub mod bookingmodel;
pub mod businessmodel;
pub mod customermodel;
pub mod interactionmodel;
pub mod statsmodel;
