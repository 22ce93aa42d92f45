//! Server function handing the access configuration to the browser.

use case_portal_access::AccessConfig;
use leptos::prelude::*;

/// Server function returning the backend endpoints, storage keys, and
/// redirect paths the browser shell needs to build its session holder.
#[server]
pub async fn get_access_config() -> Result<AccessConfig, ServerFnError> {
    use crate::error::SettingsError;
    use axum::Extension;

    let Extension(config): Extension<AccessConfig> =
        leptos_axum::extract().await.map_err(|e| {
            tracing::error!(error = %e, "Access configuration missing from request");
            SettingsError::NotProvided {
                details: e.to_string(),
            }
            .into_server_error()
        })?;

    Ok(config)
}
