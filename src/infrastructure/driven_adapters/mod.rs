//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Identity provider key set
//! - Configuration

pub mod config;
pub mod database;
pub mod identity;
pub mod todo_repository;

pub use config::AppConfig;
pub use identity::JwksIdentityVerifier;
pub use todo_repository::PostgresTodoRepository;
