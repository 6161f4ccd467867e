//! trivia-core — Question bank model, pagination, and quiz selection.
//!
//! This crate defines the data model, the `QuestionStore` trait, and the
//! request-level operations that the HTTP API and CLI build on.

pub mod catalog;
pub mod error;
pub mod memory;
pub mod model;
pub mod paginate;
pub mod quiz;
pub mod seed;
pub mod traits;

pub use error::{StoreError, TriviaError};
pub use memory::MemoryStore;
pub use traits::QuestionStore;
