pub mod config;
pub mod dnd;
pub mod error;
pub mod models;
