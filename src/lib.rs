pub mod api;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod repository;
pub mod state;

pub use api::router;
