pub mod api;
pub mod config;
pub mod delivery;
pub mod engine;
pub mod entities;
pub mod error;
pub mod external;
pub mod pricing;
pub mod server;
pub mod session;
