//! ContestHub - Contest Discovery Service
//!
//! This library provides the server side of contest discovery for the
//! ContestHub platform: browsing the contest catalog with free-text search,
//! category and prize-range filtering, stable multi-key sorting and windowed
//! pagination.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Discovery**: The pure filter/sort/paginate engine
//! - **Store**: In-memory catalog loaded from the dataset file
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
