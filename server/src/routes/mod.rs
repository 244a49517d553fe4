//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered Leptos page at `/`, the compiled
//! WASM/JS/CSS bundle under `/pkg`, a liveness probe at `/healthz`, and falls
//! back to the public directory for static files such as the resume and
//! profile image.

pub mod health;

use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Full application router.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root_path.display(), public_dir = %config.public_dir.display(), "static roots");

    Ok(Router::new()
        .route("/healthz", get(health::healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
