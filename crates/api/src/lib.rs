pub mod client;
pub mod config;

pub use client::{log_failure, DishClient};
