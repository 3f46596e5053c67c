//! Logging utilities
//!
//! Shared logging configuration and helper functions

use tracing::info;

/// Initialize the global tracing subscriber
///
/// `format` selects between human-readable (`text`) and JSON output;
/// `filter` is an env-filter directive such as `info` or `weatherproxy=debug`.
pub fn init_logging(filter: &str, format: &str) {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if format == "json" {
        // JSON format logs (production environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format (development environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Tracing subscriber already installed");
        return;
    }

    info!("Logging system initialized");
}

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        Some((cut, _)) => format!(
            "{}... ({} chars truncated)",
            &s[..cut],
            s.chars().count() - max_len
        ),
        None => s.to_string(),
    }
}
