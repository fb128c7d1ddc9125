pub mod application;
pub mod clients;
pub mod error;
pub mod server;
