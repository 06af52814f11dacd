//! Driving Adapters
//!
//! The HTTP surface: router, todo and system handlers, request/response
//! DTOs, bearer-token extraction and request-id tagging.

pub mod api_rest;
