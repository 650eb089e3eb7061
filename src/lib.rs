pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod report;
pub mod screen;
pub mod store;


pub use client::HttpStore;
pub use config::Config;
pub use db::SqliteStore;
pub use error::{AppError, Result};
pub use screen::MaintenanceScreen;
pub use store::MaintenanceStore;
