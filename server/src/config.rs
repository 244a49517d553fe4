//! Runtime configuration from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads an optional `.env` file with `dotenvy`, then calls
//! [`ServerConfig::from_env`]. Leptos site settings (site root, reload port)
//! come separately from the workspace `Cargo.toml` metadata.
//!
//! | Variable     | Default              |
//! |--------------|----------------------|
//! | `BIND_ADDR`  | `0.0.0.0`            |
//! | `PORT`       | `3000`               |
//! | `PUBLIC_DIR` | `<server>/../public` |

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Directory of public files (resume, images) served as the fallback.
    pub public_dir: PathBuf,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when a variable is set but malformed.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when a present value is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let get = |key: &str| lookup(key).filter(|raw| !raw.trim().is_empty());

        Ok(Self {
            bind_addr: parse_or("BIND_ADDR", get("BIND_ADDR"), DEFAULT_BIND_ADDR)?,
            port: parse_or("PORT", get("PORT"), DEFAULT_PORT)?,
            public_dir: get("PUBLIC_DIR").map_or_else(default_public_dir, PathBuf::from),
        })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ServerError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ServerError::Config { key, value, reason: e.to_string() }),
    }
}
