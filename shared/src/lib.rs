pub mod adapters;
pub mod auth;
pub mod core;
pub mod utils;
