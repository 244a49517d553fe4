//! Server error type.
//!
//! ERROR HANDLING
//! ==============
//! Everything that can stop the server before or while it serves surfaces as a
//! [`ServerError`]; `main` logs it and exits non-zero.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid {key}: {value:?} ({reason})")]
    Config { key: &'static str, value: String, reason: String },

    /// The Leptos site configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
