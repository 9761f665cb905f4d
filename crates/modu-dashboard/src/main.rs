//! MODU Dashboard Server Entry Point
//!
//! This is the main entry point for the MODU dashboard web server.
//! It starts the Leptos SSR server with Axum.

#![recursion_limit = "512"]
#![allow(clippy::doc_markdown)]

#[cfg(feature = "ssr")]
mod cli;

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use clap::Parser;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use cli::Args;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modu_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let args = Args::parse();

    tracing::info!("Starting MODU Dashboard Server on port {}", args.port);
    tracing::info!("Backend API at {}", args.api_config().base_url());

    if let Err(e) = start_server(&args).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Start the Leptos SSR server with the given arguments.
#[cfg(feature = "ssr")]
async fn start_server(args: &cli::Args) -> Result<(), Box<dyn std::error::Error>> {
    use leptos::config::{Env, LeptosOptions};
    use modu_dashboard::server::build_router;
    use std::net::SocketAddr;

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let site_root = args.site_root().to_string_lossy().into_owned();

    // Leptos configuration for SSR + Hydration
    let leptos_options = LeptosOptions::builder()
        .output_name("modu-dashboard")
        .site_root(site_root.as_str())
        .site_pkg_dir("pkg")
        .site_addr(addr)
        .env(if cfg!(debug_assertions) {
            Env::DEV
        } else {
            Env::PROD
        })
        .build();

    let app = build_router(leptos_options);

    tracing::info!("Binding TCP listener to {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("MODU Dashboard listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // This main function is only used when building without SSR.
    // The WASM entry point is hydrate() in lib.rs
    panic!("This binary requires the 'ssr' feature to be enabled");
}
