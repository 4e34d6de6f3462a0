pub mod delivery_modes;
pub mod orders;
pub mod quotes;
pub mod session;
