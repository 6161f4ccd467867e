//! trivia-store — Persistent question storage and configuration.
//!
//! Implements the `QuestionStore` trait on SQLite and loads the service
//! configuration that decides which store backs the API.

pub mod config;
pub mod sqlite;

pub use config::{create_store, load_config_from, StoreConfig, TriviaConfig};
pub use sqlite::SqliteStore;
