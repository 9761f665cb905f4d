//! API status page
//!
//! Runs one health check against the backend when mounted in the browser and
//! shows loading, online, or unreachable.

use leptos::prelude::*;

use crate::api_client::{self, ModuClient};
use crate::config::ApiConfig;
use crate::credentials::default_provider;
use crate::status::HealthStatus;

/// Run a single health check with the browser credentials
async fn check_backend() -> api_client::Result<serde_json::Value> {
    let client = ModuClient::new(ApiConfig::from_env(), default_provider())?;
    let result = client.get_health().await;
    if let Err(e) = &result {
        tracing::warn!(base_url = client.base_url(), error = %e, "backend health check failed");
    }
    result
}

/// Status page component
#[component]
pub fn ApiStatus() -> impl IntoView {
    // Local resources only run on the client; SSR renders the loading state.
    let health = LocalResource::new(|| async { HealthStatus::from_result(&check_backend().await) });
    let status = move || health.get().unwrap_or(HealthStatus::Loading);

    view! {
        <section class="card">
            <p class="eyebrow">"API Status"</p>
            <h1>"Backend health"</h1>
            <p class="lede">
                "This checks the health endpoint at `/api/health/`. Ensure your backend and database are running."
            </p>

            <div class="status">
                <span
                    class="dot"
                    aria-hidden="true"
                    data-loading=move || status().is_loading().to_string()
                ></span>
                <span class="status-message">{move || status().message()}</span>
            </div>
        </section>
    }
}
