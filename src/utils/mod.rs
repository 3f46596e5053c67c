//! Utility module
//!
//! Contains error handling and logging utilities

pub mod error;
pub mod logging;
