//! Case detail shared by clients and lawyers.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::session::use_session;

/// Case status, documents, and comment thread.
#[component]
pub fn CaseDetailPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let case = move || params.with(|p| p.get("id")).unwrap_or_default();
    let viewer = move || {
        session
            .snapshot()
            .role()
            .map(|role| role.label())
            .unwrap_or_default()
    };

    view! {
        <div class="case-detail">
            <h1>{move || format!("Caso {}", case())}</h1>
            <p class="viewer-role">{viewer}</p>
        </div>
    }
}
