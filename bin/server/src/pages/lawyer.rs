//! Lawyer views.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Cases assigned to the signed-in lawyer.
#[component]
pub fn LawyerCasesPage() -> impl IntoView {
    view! {
        <div class="lawyer-cases">
            <h1>"Casos"</h1>
            <p>"Casos asignados y su estado."</p>
        </div>
    }
}

#[component]
pub fn LawyerCreateCasePage() -> impl IntoView {
    view! {
        <div class="lawyer-create-case">
            <h1>"Crear caso"</h1>
        </div>
    }
}

/// Detail of one case: documents, comments, and status updates.
#[component]
pub fn LawyerCaseDetailPage() -> impl IntoView {
    let params = use_params_map();
    let case = move || params.with(|p| p.get("id")).unwrap_or_default();

    view! {
        <div class="lawyer-case-detail">
            <h1>{move || format!("Caso {}", case())}</h1>
        </div>
    }
}

#[component]
pub fn LawyerCreateInvoicePage() -> impl IntoView {
    view! {
        <div class="lawyer-create-invoice">
            <h1>"Crear factura"</h1>
        </div>
    }
}

#[component]
pub fn LawyerInvoicePage() -> impl IntoView {
    let params = use_params_map();
    let invoice = move || params.with(|p| p.get("id")).unwrap_or_default();

    view! {
        <div class="lawyer-invoice">
            <h1>{move || format!("Factura {}", invoice())}</h1>
        </div>
    }
}
