//! Axum router for the SSR server
//!
//! Leptos renders the named pages. Every other path, `/` included, gets a real
//! HTTP redirect chosen by the route table, so a full page load of an unknown
//! URL lands on the default dashboard without waiting for hydration.

use axum::{
    http::Uri,
    response::{IntoResponse, Redirect},
    Router,
};
use leptos::config::LeptosOptions;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::app::shell;
use crate::routes::redirect_target;

/// Redirect for any path Leptos does not render
async fn redirect_unmatched(uri: Uri) -> impl IntoResponse {
    let target = redirect_target(uri.path());
    tracing::debug!(from = %uri, to = target, "redirecting unmatched path");
    Redirect::temporary(target)
}

/// Build the application router: Leptos pages, static files, redirect fallback.
pub fn build_router(leptos_options: LeptosOptions) -> Router {
    let opts_for_route_gen = leptos_options.clone();
    let opts_for_ssr = leptos_options.clone();

    // Generate route list for SSR
    let routes = generate_route_list(move || shell(opts_for_route_gen.clone()));

    // Serve the WASM pkg and static assets next to the rendered pages
    let site_root = leptos_options.site_root.to_string();
    let pkg_dir = format!("{site_root}/{}", leptos_options.site_pkg_dir);
    let assets_dir = format!("{site_root}/assets");
    tracing::info!("Serving WASM package from {}", pkg_dir);

    Router::new()
        .leptos_routes(&leptos_options, routes, move || shell(opts_for_ssr.clone()))
        .nest_service("/pkg", ServeDir::new(&pkg_dir))
        .nest_service("/assets", ServeDir::new(&assets_dir))
        .fallback(redirect_unmatched)
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}
