//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{IdentityVerifier, TodoRepository};
pub use models::todo::{NewTodo, SubjectId, Todo, TodoChanges, TodoId};
