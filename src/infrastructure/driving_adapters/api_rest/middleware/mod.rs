//! API Middleware
//!
//! Authentication and request correlation for the REST API.

pub mod auth;
pub mod request_id;

pub use auth::{AuthenticatedUser, JwtAuth};
pub use request_id::request_id_middleware;
