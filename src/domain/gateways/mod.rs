//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod identity_verifier;
pub mod todo_repository;

pub use identity_verifier::IdentityVerifier;
pub use todo_repository::TodoRepository;
