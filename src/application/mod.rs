//! Application Layer
//!
//! Use cases orchestrating the todo operations. They depend on domain
//! gateways, not on concrete adapters.

pub mod use_cases;
