//! Todo API
//!
//! Per-user todo lists over HTTP. Callers authenticate with bearer tokens
//! issued by an external identity provider; todos are stored in PostgreSQL.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
