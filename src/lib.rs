pub mod advisory;
pub mod config;
pub mod errors;
pub mod logging;
pub mod manager_feed;
pub mod models;
pub mod snapshot;
