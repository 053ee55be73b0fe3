pub mod config;
pub mod export;
pub mod record;
pub mod user;
