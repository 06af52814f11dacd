//! HTTP Handlers

pub mod system;
pub mod todos;
