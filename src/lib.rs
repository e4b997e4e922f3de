pub mod auth;
pub mod config;
pub mod content;
pub mod db;
pub mod handlers;
pub mod models;
pub mod settings;
pub mod store;

pub use db::create_pool;
