//! Admin views.

use leptos::prelude::*;

/// Creation of lawyer accounts.
#[component]
pub fn AdminCreateLawyerPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <h1>"Crear abogado"</h1>
            <p>"Registra un nuevo abogado de la firma."</p>
        </div>
    }
}
