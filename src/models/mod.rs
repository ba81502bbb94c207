pub mod availability;
pub mod location;
pub mod state;
