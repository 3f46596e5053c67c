//! Middleware module
//!
//! Contains the API key guard, cross-origin policy and request logging

pub mod api_key;
pub mod cors;
pub mod logging;

pub use api_key::require_api_key;
pub use cors::{cors_layer, method_guard_middleware, origin_guard_middleware};
pub use logging::request_logging_middleware;
