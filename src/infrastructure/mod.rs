//! Infrastructure Layer
//!
//! Driving adapters (HTTP handlers) and driven adapters (PostgreSQL,
//! identity provider key set, configuration).

pub mod driven_adapters;
pub mod driving_adapters;
