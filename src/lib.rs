pub mod config;
pub mod error;
pub mod handlers;
pub mod local_storage;
pub mod models;
pub mod services;
